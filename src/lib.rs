//! Local development HTTP server for the Match Colors game.
//!
//! Serves the process working directory over HTTP with CORS and
//! cache-busting headers injected into every response, logs each request
//! to the console, and opens the default browser at the server root
//! shortly after startup.

pub mod browser;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use config::ServerConfig;
pub use error::ServerError;
