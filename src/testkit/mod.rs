//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for countries, indicator records and rate points.
//! - [`config`] - Canonical engine settings for tests.

pub mod config;
pub mod domain;
