//! Startup error types
//!
//! Everything here is fatal: the binary reports it and exits non-zero.
//! Per-request failures never surface as `ServerError`.

use std::io;
use std::net::{AddrParseError, IpAddr, SocketAddr};

use thiserror::Error;

use crate::routing::RouteError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error("refusing to listen on non-loopback address {0}")]
    NonLoopback(IpAddr),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("invalid route table: {0}")]
    Routes(#[from] RouteError),

    #[error("failed to start runtime: {0}")]
    Runtime(#[source] io::Error),
}

impl ServerError {
    /// Whether the failure came from the port being taken
    pub fn is_addr_in_use(&self) -> bool {
        matches!(self, Self::Bind { source, .. } if source.kind() == io::ErrorKind::AddrInUse)
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
