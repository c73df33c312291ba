//! Configuration module for eduboard.

use serde::Deserialize;
use std::path::Path;

use crate::{EduboardError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/eduboard.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
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
    "logs/eduboard.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// The form field used to identify a member at login.
///
/// Both variants have been deployed: older installations log in with the
/// display name, newer ones with the email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityField {
    /// Look the member up by email address.
    #[default]
    Email,
    /// Look the member up by display name.
    Username,
}

impl IdentityField {
    /// Name of the credential form field for this variant.
    pub fn form_field(&self) -> &'static str {
        match self {
            IdentityField::Email => "email",
            IdentityField::Username => "username",
        }
    }
}

/// Authentication and session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Which form field identifies the member at login.
    #[serde(default)]
    pub identity_field: IdentityField,
    /// Session lifetime in seconds.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,
    /// Redirect target after a failed login.
    #[serde(default = "default_failure_url")]
    pub failure_url: String,
}

fn default_session_ttl() -> u64 {
    24 * 60 * 60
}

fn default_failure_url() -> String {
    "/member/login/error".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            identity_field: IdentityField::default(),
            session_ttl_secs: default_session_ttl(),
            failure_url: default_failure_url(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| EduboardError::Config(e.to_string()))
    }
}
