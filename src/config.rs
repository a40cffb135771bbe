//! Listener configuration.
//!
//! Built once at startup and passed by reference into the listener and
//! request handler; never read back from ambient global state. The
//! serving root is the process working directory at startup and stays
//! fixed for the lifetime of the process.

use std::path::PathBuf;

use crate::logger;

/// Port used when none is given on the command line, or when the given
/// one does not parse.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to bind on all interfaces.
    pub port: u16,
    /// Serving root directory. Request paths can never resolve outside it.
    pub root: PathBuf,
}

impl ServerConfig {
    pub fn new(port: u16, root: PathBuf) -> Self {
        Self { port, root }
    }

    /// Build the configuration from the command-line arguments (without
    /// the program name).
    ///
    /// The first positional argument is the port. A missing argument means
    /// [`DEFAULT_PORT`]; an unparsable one prints a warning and falls back
    /// to the default instead of failing. This leniency is deliberate
    /// operator-facing behavior.
    pub fn from_args<I>(mut args: I) -> std::io::Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let port = match args.next() {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                logger::log_invalid_port(&raw);
                DEFAULT_PORT
            }),
        };

        Ok(Self::new(port, std::env::current_dir()?))
    }

    /// User-facing URL of the server root.
    pub fn root_url(&self) -> String {
        format!("http://localhost:{}/", self.port)
    }

    /// Conventional location of the test panel under the serving root.
    pub fn test_panel_url(&self) -> String {
        format!("http://localhost:{}/test-panel.html", self.port)
    }
}
