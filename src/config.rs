//! Application configuration loaded from environment variables.

use crate::todo::{
    adapters::sqlite::{DatabaseLocation, SqlitePoolOptions},
    services::{DeletePolicy, ParseDeletePolicyError},
};
use std::time::Duration;
use thiserror::Error;

/// Database path, or `:memory:`.
pub const DATABASE_ENV: &str = "LISTKEEPER_DATABASE";
/// Maximum pooled connections.
pub const POOL_SIZE_ENV: &str = "LISTKEEPER_POOL_SIZE";
/// Milliseconds a connection waits on a locked database.
pub const BUSY_TIMEOUT_ENV: &str = "LISTKEEPER_BUSY_TIMEOUT_MS";
/// `atomic` or `sequential`.
pub const DELETE_POLICY_ENV: &str = "LISTKEEPER_DELETE_POLICY";
/// Default `tracing` filter directive when `RUST_LOG` is unset.
pub const LOG_ENV: &str = "LISTKEEPER_LOG";

const DEFAULT_DATABASE: &str = "tasks.db";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric setting could not be parsed.
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber {
        /// Environment variable name.
        key: &'static str,
        /// Rejected value.
        value: String,
    },

    /// The pool size was zero.
    #[error("LISTKEEPER_POOL_SIZE must be at least 1")]
    ZeroPoolSize,

    /// The delete policy was not recognised.
    #[error(transparent)]
    DeletePolicy(#[from] ParseDeletePolicyError),
}

/// Runtime settings for opening the database and wiring the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the embedded database lives.
    pub database: DatabaseLocation,
    /// Maximum pooled connections for file databases.
    pub pool_size: u32,
    /// How long a connection waits on a locked database.
    pub busy_timeout: Duration,
    /// How list deletes remove their tasks.
    pub delete_policy: DeletePolicy,
    /// Default log filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseLocation::parse(DEFAULT_DATABASE),
            pool_size: 1,
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
            delete_policy: DeletePolicy::default(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl AppConfig {
    /// Creates a configuration for a private in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            database: DatabaseLocation::InMemory,
            ..Self::default()
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, treating blank values as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let database = read(DATABASE_ENV)
            .map_or(defaults.database, |value| DatabaseLocation::parse(&value));

        let pool_size = match read(POOL_SIZE_ENV) {
            Some(value) => parse_number::<u32>(POOL_SIZE_ENV, &value)?,
            None => defaults.pool_size,
        };
        if pool_size == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }

        let busy_timeout = match read(BUSY_TIMEOUT_ENV) {
            Some(value) => Duration::from_millis(parse_number::<u64>(BUSY_TIMEOUT_ENV, &value)?),
            None => defaults.busy_timeout,
        };

        let delete_policy = match read(DELETE_POLICY_ENV) {
            Some(value) => value.parse::<DeletePolicy>()?,
            None => defaults.delete_policy,
        };

        let log_filter = read(LOG_ENV).unwrap_or(defaults.log_filter);

        Ok(Self {
            database,
            pool_size,
            busy_timeout,
            delete_policy,
            log_filter,
        })
    }

    /// Returns the pool settings derived from this configuration.
    #[must_use]
    pub fn pool_options(&self) -> SqlitePoolOptions {
        SqlitePoolOptions::new(self.database.clone())
            .with_max_size(self.pool_size)
            .with_busy_timeout(self.busy_timeout)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_owned(),
        })
}
