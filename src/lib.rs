//! Riskpulse - country risk scoring and alerting.
//!
//! Scores countries from macroeconomic indicators and exchange-rate
//! history, stores one snapshot per country and day, and raises alerts
//! when a country crosses a threshold or deteriorates sharply.
//!
//! # Architecture
//!
//! - [`domain`] - Pure scoring: economic, exchange and stability sub-scores
//!   combined into a composite index and risk tier
//! - [`port`] - Inbound use cases and outbound repository traits
//! - [`application`] - Recalculation batch, alert rules, data sync and the
//!   demo seed, all driven through the ports
//! - [`adapter`] - The `riskpulse` CLI plus in-memory and SQLite stores
//! - [`infrastructure`] - Configuration and service wiring
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use riskpulse::adapter::outbound::memory::MemoryStore;
//! use riskpulse::application::EngineSettings;
//! use riskpulse::infrastructure::bootstrap::Services;
//! use riskpulse::port::inbound::risk::RiskEngine;
//!
//! # async fn demo() -> riskpulse::error::Result<()> {
//! let services = Services::wire(Arc::new(MemoryStore::new()), EngineSettings::default());
//! let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
//! services.seed().run(date).await?;
//! let summary = services.engine.recalculate_all(date).await?;
//! println!("{} snapshots", summary.snapshots_updated);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
