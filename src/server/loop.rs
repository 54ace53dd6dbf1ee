// Server loop module
// Accepts connections until shutdown, then drains in-flight ones

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hyper_util::server::graceful::GracefulShutdown;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Upper bound on waiting for in-flight connections after shutdown
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Run the accept loop until `shutdown` resolves.
///
/// Accept errors are logged and the loop continues. On shutdown the
/// listener is dropped first, so new connections are refused while
/// existing ones finish.
#[allow(clippy::ignored_unit_patterns)]
pub async fn run<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F)
where
    F: Future<Output = ()>,
{
    let active_connections = Arc::new(AtomicUsize::new(0));
    let graceful = GracefulShutdown::new();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                            &graceful,
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = &mut shutdown => break,
        }
    }

    drop(listener);
    logger::log_draining(active_connections.load(Ordering::SeqCst));

    tokio::select! {
        _ = graceful.shutdown() => logger::log_shutdown_complete(),
        _ = tokio::time::sleep(DRAIN_TIMEOUT) => {
            logger::log_warning(&format!(
                "Gave up waiting for connections after {}s",
                DRAIN_TIMEOUT.as_secs()
            ));
        }
    }
}
