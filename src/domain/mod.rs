//! Exchange-agnostic domain logic: reference data, scoring and alert types.
//!
//! Nothing in here performs I/O. The application layer feeds these types
//! from the outbound ports.

pub mod alert;
pub mod country;
pub mod error;
pub mod exchange_rate;
pub mod id;
pub mod indicator;
pub mod missing;
pub mod score;
pub mod snapshot;

pub use alert::{Alert, AlertKind, NewAlert, Severity};
pub use country::Country;
pub use error::DomainError;
pub use exchange_rate::ExchangeRatePoint;
pub use id::{AlertId, CountryCode, CurrencyCode, SnapshotId};
pub use indicator::{IndicatorKind, IndicatorRecord, IndicatorSource, IndicatorUnit, IndicatorValue};
pub use missing::{MissingField, MissingFields};
pub use score::{RiskInputs, RiskTier, ScoreBundle};
pub use snapshot::RiskSnapshot;
