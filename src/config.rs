//! Runtime settings, loaded from environment variables.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://pizza_tracker.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_METRICS_PORT: u16 = 9090;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Failed to read env file: {0}")]
    EnvFile(String),
}

/// Connection pool settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    /// SQLite connection string, e.g. `sqlite://pizza_tracker.db`.
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: DatabaseSettings,
    /// Prometheus metrics port (0 = disabled).
    pub metrics_port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseSettings::default(),
            metrics_port: DEFAULT_METRICS_PORT,
        }
    }
}

impl Settings {
    /// Load `.env` (if present) into the process environment, then read it.
    ///
    /// Variables already set in the environment win over the file.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_env()
    }

    /// Read settings from a specific env file, with process variables taking
    /// precedence. The process environment is left untouched.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file: HashMap<String, String> = dotenvy::from_path_iter(path.as_ref())
            .map_err(|e| ConfigError::EnvFile(e.to_string()))?
            .collect::<Result<_, _>>()
            .map_err(|e| ConfigError::EnvFile(e.to_string()))?;

        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file.get(key).cloned()))
    }

    /// Create configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.database.url);

        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", defaults.database.max_connections)?;
        let metrics_port = parse_or(&lookup, "METRICS_PORT", defaults.metrics_port)?;

        Ok(Self {
            database: DatabaseSettings { url, max_connections },
            metrics_port,
        })
    }

    pub fn metrics_enabled(&self) -> bool {
        self.metrics_port != 0
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
    }
}
