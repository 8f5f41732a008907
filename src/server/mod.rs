// Server module entry point.
// Listener setup, the accept loop, per-connection serving, and shutdown
// signal handling.

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is named server_loop
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::bind_listener;
pub use server_loop::start_server_loop;
