//! Configuration settings structures for tidyhub
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::LogFormat;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "tidyhub".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_request_timeout() -> u64 {
    30
}

fn default_keep_alive_timeout() -> u64 {
    75
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}

fn default_auth_secret() -> String {
    String::new()
}

fn default_token_expiration() -> i64 {
    24 // hours
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive_timeout")]
    pub keep_alive_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the server configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "server.host".to_string(),
                message: "Server host cannot be empty".to_string(),
            });
        }

        if self.port == 0 {
            return Err(ConfigError::ValidationError {
                field: "server.port".to_string(),
                message: "Server port must be between 1 and 65535".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            keep_alive_timeout: default_keep_alive_timeout(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// Diesel database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[serde(default)]
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Whether to automatically run pending migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,
}

impl DatabaseConfig {
    /// Validates the database configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "database.url".to_string(),
                message: "Database URL cannot be empty".to_string(),
            });
        }

        if self.max_connections == 0 {
            return Err(ConfigError::ValidationError {
                field: "database.max_connections".to_string(),
                message: "Connection pool must allow at least one connection".to_string(),
            });
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::ValidationError {
                field: "database.min_connections".to_string(),
                message: format!(
                    "min_connections ({}) cannot exceed max_connections ({})",
                    self.min_connections, self.max_connections
                ),
            });
        }

        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
            auto_migrate: false,
        }
    }
}

// ============================================================================
// Auth Configuration
// ============================================================================

/// JWT bearer authentication configuration
///
/// Authentication is disabled by default; when enabled the resource routes
/// require a valid bearer token signed with `secret`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Whether bearer authentication is enforced on resource routes
    #[serde(default)]
    pub enabled: bool,

    /// Secret key for signing JWT tokens
    /// IMPORTANT: This should be a strong, random string in production
    /// and should be kept secret (use environment variables)
    #[serde(default = "default_auth_secret")]
    pub secret: String,

    /// Token expiration time in hours
    #[serde(default = "default_token_expiration")]
    pub token_expiration_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            secret: default_auth_secret(),
            token_expiration_hours: default_token_expiration(),
        }
    }
}

impl AuthConfig {
    /// Validates the auth configuration
    ///
    /// The secret is only checked when authentication is enabled, so a
    /// deployment that leaves auth off does not need to configure one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }

        if self.secret.is_empty() {
            return Err(ConfigError::ValidationError {
                field: "auth.secret".to_string(),
                message: "Auth secret cannot be empty when authentication is enabled".to_string(),
            });
        }

        if self.secret.len() < 32 {
            return Err(ConfigError::ValidationError {
                field: "auth.secret".to_string(),
                message: "Auth secret should be at least 32 characters for security".to_string(),
            });
        }

        if self.token_expiration_hours <= 0 {
            return Err(ConfigError::ValidationError {
                field: "auth.token_expiration_hours".to_string(),
                message: "Token expiration must be positive".to_string(),
            });
        }

        Ok(())
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: "pretty", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to use ANSI colors in console output
    #[serde(default = "default_true")]
    pub ansi: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            ansi: default_true(),
        }
    }
}

impl LoggerSettings {
    /// Validates the logger configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError {
                    field: "logger.level".to_string(),
                    message: format!(
                        "Invalid log level '{}'. Valid levels are: trace, debug, info, warn, error",
                        other
                    ),
                });
            }
        }

        self.format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: e,
            })?;

        Ok(())
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Auth configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Settings {
    /// Validates every section that must be correct regardless of the
    /// command being executed.
    ///
    /// Auth settings are validated separately at server startup because the
    /// secret is only required when authentication is enabled for serving.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/tidyhub_test".to_string();
        settings
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.application.name, "tidyhub");
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 5001);
        assert_eq!(settings.database.max_connections, 10);
        assert!(!settings.database.auto_migrate);
        assert!(!settings.auth.enabled);
        assert_eq!(settings.auth.token_expiration_hours, 24);
        assert_eq!(settings.logger.level, "info");
        assert_eq!(settings.logger.format, "pretty");
    }

    #[test]
    fn test_server_address() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            ..ServerConfig::default()
        };
        assert_eq!(server.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_validate_rejects_empty_database_url() {
        let settings = Settings::default();
        let result = settings.validate();

        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "database.url");
        } else {
            panic!("Expected ValidationError for database.url");
        }
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut settings = valid_settings();
        settings.server.port = 0;

        let result = settings.validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_pool_size_inversion() {
        let mut settings = valid_settings();
        settings.database.min_connections = 20;
        settings.database.max_connections = 5;

        let result = settings.validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut settings = valid_settings();
        settings.logger.level = "loud".to_string();

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_auth_disabled_skips_secret_checks() {
        let auth = AuthConfig::default();
        assert!(auth.validate().is_ok());
    }

    #[test]
    fn test_auth_enabled_requires_long_secret() {
        let auth = AuthConfig {
            enabled: true,
            secret: "short".to_string(),
            token_expiration_hours: 24,
        };
        assert!(auth.validate().is_err());

        let auth = AuthConfig {
            enabled: true,
            secret: "a".repeat(32),
            token_expiration_hours: 24,
        };
        assert!(auth.validate().is_ok());
    }

    #[test]
    fn test_auth_enabled_rejects_non_positive_expiration() {
        let auth = AuthConfig {
            enabled: true,
            secret: "a".repeat(32),
            token_expiration_hours: 0,
        };
        assert!(auth.validate().is_err());
    }

    #[test]
    fn test_settings_deserialize_from_toml() {
        let toml = r#"
            [application]
            name = "tidyhub"

            [server]
            port = 6001

            [database]
            url = "postgres://localhost/tidyhub"
            auto_migrate = true

            [auth]
            enabled = false

            [logger]
            level = "debug"
            format = "json"
        "#;

        let settings: Settings = toml_from_str(toml);
        assert_eq!(settings.server.port, 6001);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert!(settings.database.auto_migrate);
        assert_eq!(settings.logger.format, "json");
        assert!(settings.validate().is_ok());
    }

    /// Deserialize TOML through the config crate, the same path the loader uses.
    fn toml_from_str(content: &str) -> Settings {
        config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    // ========================================================================
    // Property-based checks
    // ========================================================================

    fn arb_server_config() -> impl Strategy<Value = ServerConfig> {
        (
            prop_oneof![
                Just("127.0.0.1".to_string()),
                Just("0.0.0.0".to_string()),
                Just("localhost".to_string()),
            ],
            1u16..=65535u16, // valid port range
            1u64..=300u64,   // request_timeout
            1u64..=300u64,   // keep_alive_timeout
        )
            .prop_map(
                |(host, port, request_timeout, keep_alive_timeout)| ServerConfig {
                    host,
                    port,
                    request_timeout,
                    keep_alive_timeout,
                },
            )
    }

    fn arb_logger_settings() -> impl Strategy<Value = LoggerSettings> {
        (
            prop_oneof![
                Just("trace".to_string()),
                Just("debug".to_string()),
                Just("info".to_string()),
                Just("warn".to_string()),
                Just("error".to_string()),
            ],
            prop_oneof![
                Just("pretty".to_string()),
                Just("compact".to_string()),
                Just("json".to_string()),
            ],
            any::<bool>(),
        )
            .prop_map(|(level, format, ansi)| LoggerSettings {
                level,
                format,
                ansi,
            })
    }

    proptest! {
        #[test]
        fn prop_valid_server_config_passes_validation(server in arb_server_config()) {
            prop_assert!(server.validate().is_ok());
            let port_suffix = format!(":{}", server.port);
            prop_assert!(server.address().ends_with(&port_suffix));
        }

        #[test]
        fn prop_valid_logger_settings_pass_validation(logger in arb_logger_settings()) {
            prop_assert!(logger.validate().is_ok());
        }
    }
}
