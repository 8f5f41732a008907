//! Console logging.
//!
//! Everything goes to stdout/stderr; both are line buffered, so log lines
//! appear promptly even when the process is killed mid-serve. There is no
//! file logging and no log levels beyond info/error.

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;
use std::path::Path;

/// Print the startup banner: port, convenience URLs, root directory.
pub fn log_server_start(addr: &SocketAddr, root_dir: &Path, login_page: &str) {
    let port = addr.port();
    println!("==================================================");
    println!("UBS fallback server running on port {port}");
    println!("Open: http://localhost:{port}");
    println!("Login page: http://localhost:{port}{login_page}");
    println!("Root directory: {}", root_dir.display());
    println!("==================================================");
}

/// Print the one-line farewell on operator shutdown.
pub fn log_shutdown() {
    println!("\nServer stopped by operator");
}

pub fn log_signal(name: &str) {
    println!("\n[SIGNAL] {name} received, shutting down...");
}

/// Write one access log line for a handled request.
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}
