//! Shared test fixtures for the LRA client error crates.

mod cause;
mod fixtures;

pub use cause::FakeCause;
pub use fixtures::{COORDINATOR_LRA, coordinator_lra_id, lra_id};
