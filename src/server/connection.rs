// Connection handling module
// Accepts a single TCP connection and serves HTTP/1.1 on it

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config;
use crate::handler;
use crate::logger;

/// Accept and process a connection, checking limits and logging.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<config::AppState>,
    conn_counter: &Arc<AtomicUsize>,
) {
    // Increment counter first, then check limit (prevents race condition)
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            conn_counter.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection from {peer_addr} rejected."
            ));
            drop(stream);
            return;
        }
    }

    if state.access_log_enabled() {
        logger::log_connection_accepted(&peer_addr);
    }

    handle_connection(stream, peer_addr, Arc::clone(state), Arc::clone(conn_counter));
}

/// Serve one connection in a task on the current `LocalSet`.
///
/// The whole connection, keep-alive included, is bounded by
/// `max(read_timeout, write_timeout)`. The counter is decremented when it ends.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<config::AppState>,
    conn_counter: Arc<AtomicUsize>,
) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let performance = &state.config.performance;
        let timeout_duration = Duration::from_secs(std::cmp::max(
            performance.read_timeout,
            performance.write_timeout,
        ));

        let mut builder = http1::Builder::new();
        builder.keep_alive(performance.keep_alive_timeout > 0);

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, peer_addr, Arc::clone(&service_state))),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::{AppState, Config};
    use crate::ir::IrSend;
    use crate::server::create_reusable_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn test_state(max_connections: Option<u64>) -> Arc<AppState> {
        let mut config = Config::load_from("does-not-exist").expect("defaults load");
        config.logging.access_log = false;
        config.performance.max_connections = max_connections;
        // `true` accepts any arguments and exits 0
        config.ir.program = "true".to_string();
        Arc::new(AppState::new(&config, Arc::new(IrSend)))
    }

    /// Serve exactly one accepted connection and return the raw response bytes
    async fn round_trip(state: Arc<AppState>, request: &[u8]) -> Vec<u8> {
        let listener =
            create_reusable_listener("127.0.0.1:0".parse().expect("addr")).expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let counter = Arc::new(AtomicUsize::new(0));

        tokio::task::spawn_local(async move {
            if let Ok((stream, peer)) = listener.accept().await {
                accept_connection(stream, peer, &state, &counter);
            }
        });

        let mut client = TcpStream::connect(addr).await.expect("connect");
        let _ = client.write_all(request).await;
        let mut buf = Vec::new();
        let _ = client.read_to_end(&mut buf).await;
        buf
    }

    #[tokio::test]
    async fn test_command_over_tcp() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let raw = round_trip(
                    test_state(None),
                    b"GET /ON_COOL_F1_70_CLEAN HTTP/1.1\r\nHost: aircon\r\nConnection: close\r\n\r\n",
                )
                .await;
                let text = String::from_utf8_lossy(&raw);
                assert!(text.starts_with("HTTP/1.1 200 OK\r\n"), "got: {text}");
                assert!(text.contains("cache-control: no-cache\r\n"));
                assert!(text.ends_with("\r\n\r\nOK"));
            })
            .await;
    }

    #[tokio::test]
    async fn test_connection_limit_rejects() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let raw = round_trip(
                    test_state(Some(0)),
                    b"GET / HTTP/1.1\r\nHost: aircon\r\nConnection: close\r\n\r\n",
                )
                .await;
                assert!(raw.is_empty());
            })
            .await;
    }
}
