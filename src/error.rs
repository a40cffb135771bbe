//! Server error taxonomy.
//!
//! Every fatal condition surfaces to the operator as a human-readable
//! one-liner, optionally followed by a hint. Per-request failures never
//! reach this type; they become HTTP status codes in the handler.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Another process already holds the requested port.
    #[error("Port {port} is already in use")]
    PortInUse { port: u16 },

    /// Any other operating-system failure while binding the listener.
    #[error("Failed to start server: {source}")]
    Bind {
        #[source]
        source: std::io::Error,
    },

    /// Unhandled I/O error while serving.
    #[error("Unexpected server error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Actionable follow-up for the operator, shown on a `💡` line.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::PortInUse { port } => Some(format!(
                "Try a different port: mc-devserver {}",
                port.saturating_add(1)
            )),
            Self::Bind { .. } | Self::Io(_) => None,
        }
    }
}
