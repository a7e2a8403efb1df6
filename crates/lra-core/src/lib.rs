//! LRA Core — client-side error types for long-running actions.
//!
//! This crate defines the error signal raised when a call against an LRA
//! coordinator or participant fails, and the locator type that names an LRA
//! instance. It contains no HTTP or infrastructure code.

pub mod error;
pub mod lra_id;

pub use error::{Cause, ClientError, GenericLraError, WebApplicationError};
pub use lra_id::{LraId, LraIdError};
