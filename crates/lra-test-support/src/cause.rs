//! Fake cause — an underlying error with an optional nested source.

use std::sync::Arc;

use lra_core::Cause;
use thiserror::Error;

/// An error to attach as the cause of a client error. Optionally wraps a
/// further `FakeCause` so tests can walk a multi-level `source()` chain.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FakeCause {
    message: String,
    #[source]
    inner: Option<Box<FakeCause>>,
}

impl FakeCause {
    /// A cause with no further source.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            inner: None,
        }
    }

    /// A cause whose `source()` is `inner`.
    #[must_use]
    pub fn wrapping(message: impl Into<String>, inner: FakeCause) -> Self {
        Self {
            message: message.into(),
            inner: Some(Box::new(inner)),
        }
    }

    /// Converts this fake into a shareable `Cause`.
    #[must_use]
    pub fn into_cause(self) -> Cause {
        Arc::new(self)
    }
}
