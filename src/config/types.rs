// Configuration types.
// Defaults reproduce the original deployment constants: port 5555, all
// interfaces, root = the directory containing the executable.

use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5555;
pub const DEFAULT_STATUS_PATH: &str = "/api/status";
pub const DEFAULT_LOGIN_PAGE: &str = "/login-central-regulacao.html";
pub const DEFAULT_ACCESS_LOG_FORMAT: &str = "common";

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub routes: RoutesConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory to serve. When unset, the directory containing the
    /// running executable is used.
    #[serde(default)]
    pub root_dir: Option<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format ("common" or "json")
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

fn default_access_log_format() -> String {
    DEFAULT_ACCESS_LOG_FORMAT.to_string()
}

/// Special-route configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RoutesConfig {
    /// Diagnostic endpoint path
    pub status_path: String,
    /// Redirect target for the root path
    pub login_page: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            status_path: DEFAULT_STATUS_PATH.to_string(),
            login_page: DEFAULT_LOGIN_PAGE.to_string(),
        }
    }
}

/// Connection timing configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            keep_alive_timeout: 75,
            read_timeout: 30,
            write_timeout: 30,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            root_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            access_log: true,
            access_log_format: default_access_log_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            routes: RoutesConfig::default(),
            performance: PerformanceConfig::default(),
        }
    }
}
