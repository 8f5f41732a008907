// Signal handling.
//
// SIGINT (Ctrl+C) and SIGTERM both trigger graceful shutdown: the accept
// loop is notified, prints the farewell line, and releases the listener.
// There is no reload path; configuration is fixed for the process lifetime.

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Register shutdown signal handlers and return early.
///
/// The returned work runs in a background task; the accept loop waits on
/// `shutdown` to learn that an interrupt arrived.
#[cfg(unix)]
pub fn install(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");

        tokio::select! {
            _ = sigint.recv() => logger::log_signal("SIGINT"),
            _ = sigterm.recv() => logger::log_signal("SIGTERM"),
        }

        shutdown.notify_waiters();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn install(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            logger::log_signal("Ctrl+C");
            shutdown.notify_waiters();
        }
    });
}
