//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber has already been installed.
    #[error("tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Installs a JSON `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to `default_filter` when the variable is unset or unparsable.
///
/// # Errors
///
/// Returns `TelemetryError::AlreadyInitialized` if a global subscriber is
/// already set.
pub fn init_tracing(default_filter: &str) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .json()
        .try_init()
        .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}
