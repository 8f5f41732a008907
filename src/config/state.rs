// Application state.
// Everything request handling can see is fixed at startup and shared
// immutably behind an Arc, so no synchronization is needed.

use std::io;
use std::path::PathBuf;

use super::types::Config;
use crate::handler::router::RouteTable;

/// Immutable application state
pub struct AppState {
    pub config: Config,
    /// Canonical root directory all file lookups are contained to
    pub root_dir: PathBuf,
    /// Ordered route table built from the routes configuration
    pub routes: RouteTable,
}

impl AppState {
    /// Build the state: resolve the root directory (the executable's
    /// directory when not configured), canonicalize it, and construct
    /// the route table.
    pub fn new(config: Config) -> io::Result<Self> {
        let root = match &config.server.root_dir {
            Some(path) => PathBuf::from(path),
            None => {
                let exe = std::env::current_exe()?;
                exe.parent()
                    .map(PathBuf::from)
                    .ok_or_else(|| {
                        io::Error::new(
                            io::ErrorKind::NotFound,
                            "Executable has no parent directory",
                        )
                    })?
            }
        };
        let root_dir = root.canonicalize()?;
        let routes = RouteTable::new(&config.routes);

        Ok(Self {
            config,
            root_dir,
            routes,
        })
    }
}
