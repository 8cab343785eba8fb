//! Inbound (driving) ports consumed by inbound adapters.
//!
//! # Modules
//!
//! - [`risk`]: Risk scoring and batch recalculation entry points

pub mod risk;
