//! Error response configuration.

use thiserror::Error;

/// Environment variable controlling whether cause chains reach clients.
pub const EXPOSE_CAUSES_VAR: &str = "LRA_EXPOSE_ERROR_CAUSES";

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be interpreted.
    #[error("configuration error: {var} must be true or false, got {value:?}")]
    InvalidValue {
        /// The offending variable.
        var: &'static str,
        /// The value it was set to.
        value: String,
    },
}

/// How client errors are rendered into HTTP responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorResponseConfig {
    /// Include the `source()` chain in response bodies.
    pub expose_causes: bool,
}

impl ErrorResponseConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expose_causes = match lookup(EXPOSE_CAUSES_VAR) {
            Some(value) => parse_flag(EXPOSE_CAUSES_VAR, &value)?,
            None => false,
        };

        Ok(Self { expose_causes })
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
        }),
    }
}
