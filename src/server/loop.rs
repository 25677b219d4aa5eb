// Server loop module
// Accept loop with graceful shutdown

use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// How long to wait for in-flight connections after the accept loop stops
const DRAIN_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Run the accept loop until a shutdown signal arrives.
///
/// Each accepted connection is served on its own task; the loop itself only
/// accepts and dispatches. On shutdown the listener is dropped first so no
/// new connections are accepted, then in-flight connections get a bounded
/// drain period.
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                break;
            }
        }
    }

    // Stop accepting before draining
    drop(listener);
    drain_connections(&state).await;
    Ok(())
}

/// Wait for in-flight connections to finish, up to `DRAIN_TIMEOUT`.
async fn drain_connections(state: &AppState) {
    let deadline = tokio::time::Instant::now() + DRAIN_TIMEOUT;

    loop {
        let active = state.active_connections.load(Ordering::SeqCst);
        if active == 0 {
            return;
        }
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown drain timed out with {active} connection(s) still active"
            ));
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
}
