// Server loop module
// Accepts connections until a shutdown signal arrives

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config;
use crate::logger;

/// Accept loop for the command server
///
/// Runs on a `LocalSet`; each connection is served by its own local task.
/// Returns once `shutdown` is notified. Accept errors are logged and skipped.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
    active_connections: Arc<AtomicUsize>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                let in_flight = active_connections.load(Ordering::SeqCst);
                if in_flight > 0 {
                    logger::log_warning(&format!(
                        "Shutting down with {in_flight} connection(s) still open"
                    ));
                }
                return Ok(());
            }
        }
    }
}
