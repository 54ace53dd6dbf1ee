// Connection handling module
// Accepts a single TCP connection and serves it over HTTP/1.1

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::{TokioIo, TokioTimer};
use hyper_util::server::graceful::GracefulShutdown;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Decrements the active connection counter when the connection ends,
/// however it ends
struct ConnectionGuard(Arc<AtomicUsize>);

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Accept and process a connection, enforcing the connection limit.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter
/// * `graceful` - Shutdown watcher the connection registers with
pub fn accept_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
    graceful: &GracefulShutdown,
) {
    // Increment first, then check the limit
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);
    let guard = ConnectionGuard(Arc::clone(conn_counter));

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= max_conn {
            logger::log_connection_rejected(prev_count, max_conn);
            drop(stream);
            return;
        }
    }

    logger::log_connection_accepted(&peer_addr);
    handle_connection(stream, peer_addr, Arc::clone(state), guard, graceful);
}

/// Serve one connection in a spawned task.
///
/// Keep-alive follows HTTP/1.1 rules unless disabled in config; hyper
/// answers unparsable requests with a 4xx and closes the connection.
/// The header read timeout only bounds the wait for a request's headers,
/// so a request that has been read is always answered.
fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    guard: ConnectionGuard,
    graceful: &GracefulShutdown,
) {
    let io = TokioIo::new(stream);
    let timeout_secs = state.config.performance.header_read_timeout;

    let mut builder = http1::Builder::new();
    builder.keep_alive(state.config.performance.keep_alive);
    if timeout_secs > 0 {
        builder
            .timer(TokioTimer::new())
            .header_read_timeout(Duration::from_secs(timeout_secs));
    }

    let service = service_fn(move |req: Request<Incoming>| {
        let response = handler::handle_request(&req, &state, peer_addr);
        std::future::ready(Ok::<_, Infallible>(response))
    });

    let conn = graceful.watch(builder.serve_connection(io, service));

    tokio::spawn(async move {
        let _guard = guard;

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
