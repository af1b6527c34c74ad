//! solr-probe crate
//!
//! This crate is an implementation detail of the `solr-probe` tool. This crate's API is fluid and may change without warning
//! and in a semver-incompatible way.

/// Result type alias using `MonitorError` as the default error type.
pub type Result<T, E = crate::errors::MonitorError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod config;

#[doc(hidden)]
pub mod errors;

#[doc(hidden)]
pub mod metrics;

#[doc(hidden)]
pub mod poll;

#[doc(hidden)]
pub mod reports;

pub use crate::commands::{Host, run};
