//! Logger module
//!
//! Provides logging utilities for the HTTP server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging
//!
//! Everything except the startup announcement goes through `tracing` to
//! stderr; stdout carries the single "Server running at" line.

mod format;

pub use format::{AccessLogEntry, LogFormat};

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins over the configured level. Calling this twice is harmless.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}

/// The one line on stdout confirming the bound address
pub fn announce_listening(addr: &SocketAddr) {
    println!("Server running at http://{addr}/");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    tracing::info!(
        address = %addr,
        workers = ?config.server.workers,
        keep_alive = config.performance.keep_alive,
        header_read_timeout_secs = config.performance.header_read_timeout,
        max_connections = ?config.performance.max_connections,
        access_log = config.logging.access_log,
        "Server started"
    );
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    tracing::debug!(peer = %peer_addr, "Connection accepted");
}

pub fn log_connection_rejected(active: usize, max: usize) {
    tracing::warn!("Max connections reached: {active}/{max}. Connection rejected.");
}

pub fn log_connection_error(err: &impl std::fmt::Display) {
    tracing::warn!("Failed to serve connection: {err}");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &LogFormat) {
    tracing::info!(target: "greeter::access", "{}", entry.format(format));
}

pub fn log_shutdown_requested(signal: &str) {
    tracing::info!("{signal} received, shutting down");
}

pub fn log_draining(active: usize) {
    tracing::info!("Listener closed, waiting for {active} active connection(s)");
}

pub fn log_shutdown_complete() {
    tracing::info!("Shutdown complete");
}
