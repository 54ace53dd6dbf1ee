// Configuration module entry point
// Loads configuration and builds the shared application state

mod state;
mod types;

use std::net::{IpAddr, SocketAddr};

use crate::error::{Result, ServerError};

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, LoggingConfig, PerformanceConfig, ServerConfig, DEFAULT_HEADER_READ_TIMEOUT,
    DEFAULT_HOST, DEFAULT_PORT,
};

/// Config file looked up when no path is given (extension optional)
pub const DEFAULT_CONFIG_PATH: &str = "greeter";

/// Environment variable prefix, e.g. `GREETER_SERVER__PORT=3001`
pub const ENV_PREFIX: &str = "GREETER";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// A missing file is not an error: defaults reproduce the fixed
    /// `127.0.0.1:3000` contract.
    pub fn load_from(config_path: &str) -> std::result::Result<Self, ::config::ConfigError> {
        let defaults = Self::default();
        let settings = ::config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.access_log", defaults.logging.access_log)?
            .set_default("logging.access_log_format", defaults.logging.access_log_format)?
            .set_default("performance.keep_alive", defaults.performance.keep_alive)?
            .set_default(
                "performance.header_read_timeout",
                i64::try_from(defaults.performance.header_read_timeout).unwrap_or(i64::MAX),
            )?
            .add_source(::config::File::with_name(config_path).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Resolve the listen address, refusing anything off the loopback interface
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|source| ServerError::InvalidAddress {
                addr: format!("{}:{}", self.server.host, self.server.port),
                source,
            })?;

        if !ip.is_loopback() {
            return Err(ServerError::NonLoopback(ip));
        }

        Ok(SocketAddr::new(ip, self.server.port))
    }
}
