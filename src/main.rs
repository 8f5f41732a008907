use std::sync::Arc;
use tokio::sync::Notify;

use ubs_fallback_server::config::{AppState, Config};
use ubs_fallback_server::{logger, server};

fn main() {
    if let Err(e) = run() {
        // Serve-loop and startup failures land here; the listener has
        // already been released by drop when this runs.
        logger::log_error(&format!("{e}"));
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    // Single-threaded scheduling: one runtime thread, one local task per
    // connection.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(cfg)?);

    // Relative lookups behave predictably once cwd is the root
    std::env::set_current_dir(&state.root_dir)?;

    let addr = state.config.socket_addr()?;
    let listener = server::bind_listener(addr)?;
    logger::log_server_start(&addr, &state.root_dir, &state.config.routes.login_page);

    let shutdown = Arc::new(Notify::new());
    server::signal::install(Arc::clone(&shutdown));

    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(listener, state, shutdown))
        .await
}
