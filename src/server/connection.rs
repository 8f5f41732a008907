// Connection handling.
// Each accepted connection becomes one local task serving HTTP/1.1; the
// scheduling stays on the single runtime thread.

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Serve one connection in a spawned local task.
///
/// The serve future is bounded by the larger of the configured read and
/// write timeouts so a stalled client cannot hold its task forever.
pub fn serve(stream: tokio::net::TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    let timeout_duration = std::time::Duration::from_secs(std::cmp::max(
        state.config.performance.read_timeout,
        state.config.performance.write_timeout,
    ));
    let keep_alive = keep_alive_enabled(state.config.performance.keep_alive_timeout);

    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        // hyper defaults keep-alive to on, so a zero timeout must turn
        // it off explicitly
        let mut builder = http1::Builder::new();
        builder.keep_alive(keep_alive);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handler::handle_request(req, state, peer_addr).await }
            }),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => logger::log_warning(&format!(
                "Connection from {peer_addr} timed out after {} seconds",
                timeout_duration.as_secs()
            )),
        }
    });
}

/// A zero keep-alive timeout disables connection reuse.
const fn keep_alive_enabled(keep_alive_timeout: u64) -> bool {
    keep_alive_timeout > 0
}
