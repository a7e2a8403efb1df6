//! LRA locator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors produced while parsing an LRA locator.
#[derive(Debug, Error)]
pub enum LraIdError {
    /// The input is not an absolute URL.
    #[error("invalid LRA locator {input:?}: {source}")]
    Invalid {
        /// The rejected input.
        input: String,
        /// The underlying URL parse failure.
        #[source]
        source: url::ParseError,
    },
}

/// Opaque URL identifying a single LRA instance on its coordinator.
///
/// The locator renders in the normalized form produced by URL parsing, so
/// scheme and host are lowercased, default ports dropped and dot segments
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LraId(Url);

impl LraId {
    /// Parses an LRA locator from its URL form.
    ///
    /// # Errors
    ///
    /// Returns `LraIdError::Invalid` if `input` is not an absolute URL.
    pub fn parse(input: &str) -> Result<Self, LraIdError> {
        Url::parse(input)
            .map(Self)
            .map_err(|source| LraIdError::Invalid {
                input: input.to_string(),
                source,
            })
    }

    /// Returns the underlying URL.
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Consumes the locator, returning the underlying URL.
    #[must_use]
    pub fn into_url(self) -> Url {
        self.0
    }

    /// Returns the locator in its serialized URL form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for LraId {
    type Err = LraIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Url> for LraId {
    fn from(url: Url) -> Self {
        Self(url)
    }
}

impl AsRef<Url> for LraId {
    fn as_ref(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for LraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
