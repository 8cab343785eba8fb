//! Infrastructure configuration modules.

pub mod alerts;
pub mod engine;
pub mod logging;
pub mod settings;

pub use settings::{Config, DATABASE_ENV, DEFAULT_CONFIG_PATH};
