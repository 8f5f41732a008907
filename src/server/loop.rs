// Server accept loop.
// Accepts connections until the shutdown signal fires, then prints the
// farewell line and drops the listener. Accept errors are logged and the
// loop continues; the listener is released on every exit path.

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop until shutdown is requested.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::serve(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => break,
        }
    }

    logger::log_shutdown();
    drop(listener);
    Ok(())
}
