// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_ACCESS_LOG_FORMAT: &str = "common";
pub const DEFAULT_HEADER_READ_TIMEOUT: u64 = 30;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Must be a loopback IP literal
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; unset means one per CPU core
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub level: String,
    pub access_log: bool,
    /// `combined`, `common`, `json`, or a custom `$variable` pattern
    pub access_log_format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            access_log: false,
            access_log_format: DEFAULT_ACCESS_LOG_FORMAT.to_string(),
        }
    }
}

/// Connection handling configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Seconds allowed for reading a request's headers; 0 disables the
    /// limit. Never cuts off a request that has already been read.
    pub header_read_timeout: u64,
    pub max_connections: Option<usize>,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            keep_alive: true,
            header_read_timeout: DEFAULT_HEADER_READ_TIMEOUT,
            max_connections: None,
        }
    }
}
