//! Canonical LRA locators used across tests.

use lra_core::LraId;

/// Locator of the LRA used in most scenarios.
pub const COORDINATOR_LRA: &str = "http://coord/lra/123";

/// Returns [`COORDINATOR_LRA`] as an `LraId`.
#[must_use]
pub fn coordinator_lra_id() -> LraId {
    lra_id(COORDINATOR_LRA)
}

/// Parses `locator` into an `LraId`.
///
/// # Panics
///
/// Panics if `locator` is not an absolute URL.
#[must_use]
pub fn lra_id(locator: &str) -> LraId {
    LraId::parse(locator).unwrap_or_else(|err| panic!("test locator must be valid: {err}"))
}
