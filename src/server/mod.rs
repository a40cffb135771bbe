//! Server lifecycle: bind, accept loop, shutdown.

pub mod listener;

pub use listener::bind_listener;

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::browser;
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::handler;
use crate::logger;

/// Bind the listener, print the startup banner, schedule the browser
/// launch, then serve until interrupted.
///
/// Returns `Ok(())` on operator-initiated shutdown (Ctrl+C). The listener
/// and any file handles opened while serving are dropped on every exit
/// path.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let listener = listener::bind_listener(config.port)?;

    logger::log_server_start(&config);
    browser::launch_after_delay(config.root_url());

    let config = Arc::new(config);
    let mut shutdown = std::pin::pin!(tokio::signal::ctrl_c());

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, peer)) => serve_connection(stream, peer, &config).await,
                    Err(e) => logger::log_accept_error(&e),
                }
            }

            _ = &mut shutdown => {
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}

/// Serve a single connection inline: one request, no keep-alive, and the
/// next accept waits until the response is finished. Sequential handling
/// is acceptable for a local development tool.
async fn serve_connection(stream: TcpStream, peer: SocketAddr, config: &Arc<ServerConfig>) {
    let io = TokioIo::new(stream);

    let service = service_fn({
        let config = Arc::clone(config);
        move |req| {
            let config = Arc::clone(&config);
            async move { handler::handle_request(req, &config, peer).await }
        }
    });

    // One request per connection: no keep-alive, so the stock
    // request-per-connection model holds.
    let mut builder = http1::Builder::new();
    builder.keep_alive(false);

    if let Err(e) = builder.serve_connection(io, service).await {
        logger::log_connection_error(&e);
    }
}
