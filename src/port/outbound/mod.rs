//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the repositories the engine reads from and
//! writes to. Each call is expected to complete or fail; the application
//! layer bounds every call with the configured timeout.

pub mod alert;
pub mod country;
pub mod exchange_rate;
pub mod indicator;
pub mod snapshot;

pub use alert::AlertStore;
pub use country::{CountryReader, CountryWriter};
pub use exchange_rate::{ExchangeRateReader, ExchangeRateWriter};
pub use indicator::{IndicatorReader, IndicatorWriter};
pub use snapshot::SnapshotStore;
