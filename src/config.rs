//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Origin the dashboard is served from (e.g., "http://localhost:8000")
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Path prefix shared by every data endpoint
    #[serde(default = "default_base_path")]
    pub base_path: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_base_path() -> String {
    "/api".to_string()
}

fn default_request_timeout() -> u64 {
    60
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            base_path: default_base_path(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Application shell configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Selector of the host anchor the application mounts onto
    #[serde(default = "default_mount_selector")]
    pub mount_selector: String,

    /// Indicator selected on the analysis page when none is given
    #[serde(default = "default_indicator")]
    pub default_indicator: String,
}

fn default_mount_selector() -> String {
    "#app".to_string()
}

fn default_indicator() -> String {
    crate::api::DEFAULT_INDICATOR.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_selector: default_mount_selector(),
            default_indicator: default_indicator(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("ibge-dashboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("IBGE_DASHBOARD_API_URL") {
            self.api.url = url;
        }
        if let Ok(timeout) = std::env::var("IBGE_DASHBOARD_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = secs;
            }
        }

        if let Ok(selector) = std::env::var("IBGE_DASHBOARD_MOUNT") {
            self.app.mount_selector = selector;
        }

        if let Ok(level) = std::env::var("IBGE_DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("IBGE_DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# IBGE Dashboard Configuration
#
# Environment variables override these settings:
# - IBGE_DASHBOARD_API_URL
# - IBGE_DASHBOARD_TIMEOUT_SECS
# - IBGE_DASHBOARD_MOUNT
# - IBGE_DASHBOARD_LOG_LEVEL
# - IBGE_DASHBOARD_LOG_FORMAT

[api]
# Origin serving the dashboard backend
url = "http://localhost:8000"

# Path prefix of the data endpoints
base_path = "/api"

# Request timeout in seconds
request_timeout_secs = 60

[app]
# Host anchor the application mounts onto
mount_selector = "#app"

# Indicator shown on the analysis page by default
default_indicator = "unemployment"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"##
    .to_string()
}
