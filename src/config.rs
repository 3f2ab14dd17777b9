//! Configuration module for KARTEI.

use serde::Deserialize;
use std::path::Path;

use crate::{KarteiError, Result};

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/kartei.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Session token configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Signing secret for session tokens. Must be overridden in production.
    #[serde(default = "default_session_secret")]
    pub secret: String,
    /// Session validity window in hours.
    #[serde(default = "default_session_ttl_hours")]
    pub ttl_hours: u64,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

fn default_session_secret() -> String {
    "change-this-secret".to_string()
}

fn default_session_ttl_hours() -> u64 {
    24
}

fn default_cookie_name() -> String {
    "kartei_session".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: default_session_secret(),
            ttl_hours: default_session_ttl_hours(),
            cookie_name: default_cookie_name(),
        }
    }
}

/// Bootstrap administrator configuration.
///
/// Used the first time the store is initialized to guarantee at least one
/// administrator exists.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    /// Display name for the bootstrap administrator.
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
    /// Email address for the bootstrap administrator.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Initial password for the bootstrap administrator.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

fn default_admin_name() -> String {
    "Administrator".to_string()
}

fn default_admin_email() -> String {
    "admin@example.com".to_string()
}

fn default_admin_password() -> String {
    "changeme123".to_string()
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            admin_name: default_admin_name(),
            admin_email: default_admin_email(),
            admin_password: default_admin_password(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/kartei.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Session settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Bootstrap administrator settings.
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(KarteiError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| KarteiError::Config(format!("config parse error: {e}")))
    }
}
