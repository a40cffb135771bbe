//! Operator console output.
//!
//! Status lines and access logging with the marker glyphs the game
//! tooling expects. This is a human-facing console stream, not a
//! structured log format; nothing here has a machine-parsing contract.

use std::net::SocketAddr;

use chrono::Local;
use hyper::{Method, Version};

use crate::config::{ServerConfig, DEFAULT_PORT};
use crate::error::ServerError;

const SEPARATOR: &str = "==================================================";

/// Print the startup banner after a successful bind.
pub fn log_server_start(config: &ServerConfig) {
    println!("🚀 Server started on port {}", config.port);
    println!("📁 Serving files from: {}", config.root.display());
    println!("🎮 Game running at: {}", config.root_url());
    println!("🔧 Test panel: {}", config.test_panel_url());
    println!("{SEPARATOR}");
    println!("Press Ctrl+C to stop the server");
    println!("{SEPARATOR}");
}

/// One line per handled request: marker glyph, client address, timestamp,
/// request line, status, body bytes.
pub fn log_request(
    peer: &SocketAddr,
    method: &Method,
    path: &str,
    version: Version,
    status: u16,
    body_bytes: u64,
) {
    println!(
        "🌐 {} - [{}] \"{} {} {}\" {} {}",
        peer.ip(),
        Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
        method,
        path,
        version_label(version),
        status,
        body_bytes,
    );
}

pub fn log_shutdown() {
    println!("\n🛑 Server stopped by user");
}

/// Report a fatal error with its hint, if any.
pub fn log_fatal(err: &ServerError) {
    eprintln!("❌ {err}");
    if let Some(hint) = err.hint() {
        eprintln!("💡 {hint}");
    }
}

pub fn log_error(message: &str) {
    eprintln!("❌ {message}");
}

pub fn log_invalid_port(raw: &str) {
    eprintln!("❌ Invalid port '{raw}'. Using default port {DEFAULT_PORT}");
}

pub fn log_accept_error(err: &std::io::Error) {
    eprintln!("❌ Failed to accept connection: {err}");
}

pub fn log_connection_error(err: &impl std::fmt::Display) {
    eprintln!("❌ Failed to serve connection: {err}");
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/1.1",
    }
}
