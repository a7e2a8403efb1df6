//! LRA API — the HTTP face of LRA client errors.
//!
//! Renders `ClientError` values as JSON error responses, reads the response
//! policy from the environment and installs the tracing subscriber.

pub mod config;
pub mod error;
pub mod telemetry;
