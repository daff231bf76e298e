//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup; missing variables fall back to
//! built-in defaults, and invalid values produce a typed [`ConfigError`].

use std::env;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be parsed.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// The offending environment variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Deployment environment, controlling error-detail exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Error responses include underlying error detail.
    Development,
    /// Error responses carry generic messages only.
    #[default]
    Production,
}

impl Environment {
    /// Returns `true` when error responses should carry detail.
    #[must_use]
    pub const fn exposes_error_detail(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Host address for the HTTP server.
    pub host: String,
    /// Port number for the HTTP server.
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_path: String,
    /// Deployment environment.
    pub environment: Environment,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3001,
            database_path: "todos.db".to_owned(),
            environment: Environment::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `TODO_HOST`, `TODO_PORT`,
    /// `TODO_DATABASE_PATH`, and `TODO_ENV`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `TODO_PORT` is not a valid
    /// port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Split out from [`Self::from_env`] so tests never have to mutate
    /// process-global environment state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the port value does not
    /// parse.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("TODO_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "TODO_PORT".to_owned(),
                message: format!("expected a port number, got '{raw}'"),
            })?,
            None => defaults.port,
        };

        let environment = match lookup("TODO_ENV").as_deref() {
            Some("development" | "dev") => Environment::Development,
            _ => Environment::Production,
        };

        Ok(Self {
            host: lookup("TODO_HOST").unwrap_or(defaults.host),
            port,
            database_path: lookup("TODO_DATABASE_PATH").unwrap_or(defaults.database_path),
            environment,
        })
    }

    /// Returns the `host:port` bind address.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "Test code uses expect for assertion clarity"
    )]

    use super::{AppConfig, ConfigError, Environment};

    #[test]
    fn defaults_are_loopback_on_port_3001() {
        let config = AppConfig::from_lookup(|_| None).expect("defaults should load");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_address(), "127.0.0.1:3001");
        assert!(!config.environment.exposes_error_detail());
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(|key| match key {
            "TODO_HOST" => Some("0.0.0.0".to_owned()),
            "TODO_PORT" => Some("8080".to_owned()),
            "TODO_DATABASE_PATH" => Some("/tmp/tasks.db".to_owned()),
            "TODO_ENV" => Some("development".to_owned()),
            _ => None,
        })
        .expect("overrides should load");

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.database_path, "/tmp/tasks.db");
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = AppConfig::from_lookup(|key| {
            (key == "TODO_PORT").then(|| "not-a-port".to_owned())
        });
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
