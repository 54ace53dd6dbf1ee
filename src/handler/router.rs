//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: converts the hyper request into
//! the router's input, shields the connection from handler panics, and writes
//! the access log.

use std::net::SocketAddr;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::USER_AGENT;
use hyper::{Request, Response, Version};

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry, LogFormat};
use crate::routing::{Incoming, RouteTable};

/// Main entry point for HTTP request handling
///
/// Never fails: unmatched routes become 404 and panics become 500.
pub fn handle_request<B>(
    req: &Request<B>,
    state: &AppState,
    peer_addr: SocketAddr,
) -> Response<Full<Bytes>> {
    let started = Instant::now();
    let response = guarded(|| dispatch(req, &state.routes));

    if let Some(format) = &state.access_log {
        log_access(req, &response, peer_addr, started, format);
    }

    response
}

/// Route the request through the table
fn dispatch<B>(req: &Request<B>, routes: &RouteTable) -> Response<Full<Bytes>> {
    let incoming = Incoming::new(req.method().as_str(), req.uri().path());
    http::build_outcome_response(&routes.dispatch(&incoming))
}

/// Run a handler, converting a panic into a 500 response
fn guarded<F>(handler: F) -> Response<Full<Bytes>>
where
    F: FnOnce() -> Response<Full<Bytes>>,
{
    panic::catch_unwind(AssertUnwindSafe(handler)).unwrap_or_else(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        logger::log_error(&format!("Request handler panicked: {reason}"));
        http::build_500_response()
    })
}

fn log_access<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
    format: &LogFormat,
) {
    let mut entry = AccessLogEntry::new(
        peer_addr.to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
    entry.user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

    logger::log_access(&entry, format);
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
