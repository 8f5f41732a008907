// Configuration module entry point.
// Layers an optional config.toml and UBS_SERVER-prefixed environment
// variables over defaults that match the original deployment constants,
// so running with nothing configured behaves like the hard-coded server
// this replaces.

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{
    Config, LoggingConfig, PerformanceConfig, RoutesConfig, ServerConfig, DEFAULT_HOST,
    DEFAULT_LOGIN_PAGE, DEFAULT_PORT, DEFAULT_STATUS_PATH,
};

impl Config {
    /// Load configuration from "config.toml" in the working directory,
    /// if present.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("UBS_SERVER"))
            .set_default("server.host", types::DEFAULT_HOST)?
            .set_default("server.port", i64::from(types::DEFAULT_PORT))?
            .set_default("logging.access_log", true)?
            .set_default(
                "logging.access_log_format",
                types::DEFAULT_ACCESS_LOG_FORMAT,
            )?
            .set_default("routes.status_path", types::DEFAULT_STATUS_PATH)?
            .set_default("routes.login_page", types::DEFAULT_LOGIN_PAGE)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
