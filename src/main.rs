use mc_devserver::{config::ServerConfig, logger, server};

fn main() {
    let config = match ServerConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            logger::log_error(&format!("Failed to read working directory: {e}"));
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            logger::log_error(&format!("Failed to start runtime: {e}"));
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(server::run(config)) {
        logger::log_fatal(&e);
        std::process::exit(1);
    }
}
