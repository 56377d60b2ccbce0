//! Structured logging setup.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The fallback filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("logging already initialised: {0}")]
    AlreadyInitialised(#[from] TryInitError),
}

/// Installs a formatting subscriber as the global default.
///
/// `RUST_LOG` takes precedence; `default_directive` applies when it is unset
/// or invalid.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `default_directive` is
/// needed but malformed, or [`TelemetryError::AlreadyInitialised`] when a
/// subscriber was installed earlier.
pub fn init(default_directive: &str) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => fallback_filter(default_directive)?,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()?;
    Ok(())
}

fn fallback_filter(directive: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directive)
}
