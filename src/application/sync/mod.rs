//! Write-side services that feed the repositories the engine reads.

pub mod exchange_rate;
pub mod indicator;

pub use exchange_rate::{ExchangeRateSync, RateQuote, SyncReport};
pub use indicator::IndicatorSync;
