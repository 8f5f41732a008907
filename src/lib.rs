//! Fallback static-asset server for the Sistema UBS web application.
//!
//! Serves the application's files from a fixed root directory when the
//! primary server is unavailable: a 302 from `/` to the login page, a
//! fixed JSON diagnostic at `/api/status`, and plain static file serving
//! for everything else.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
