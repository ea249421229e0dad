// Server loop module
// Accepts connections until shutdown, then drains active connections

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Interval between active-connection checks while draining
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Accept loop.
///
/// Runs until `shutdown` is notified, then stops accepting and waits for the
/// active connections to finish, for at most the connection timeout.
/// Must run inside a `LocalSet`.
pub async fn run_server(
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = shutdown.notified() => break,
        }
    }

    drop(listener);
    logger::log_shutdown_started(active_connections.load(Ordering::SeqCst));

    let deadline = tokio::time::Instant::now() + state.config.performance.connection_timeout();
    while active_connections.load(Ordering::SeqCst) > 0 && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }

    logger::log_shutdown_complete(active_connections.load(Ordering::SeqCst));
}
