//! SQLite persistence adapter.
//!
//! Implements every outbound port over Diesel with an r2d2 pool and
//! embedded migrations.

pub mod database;
pub mod store;

pub use database::connection::{create_pool, open, run_migrations, DbPool};
pub use store::SqliteStore;
