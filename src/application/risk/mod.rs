//! Risk scoring and alerting use cases.
//!
//! - [`lookup`] - indicator lookup with explicit absence
//! - [`calculator`] - gathers inputs and scores one country
//! - [`alerts`] - alert rules and de-duplicated emission
//! - [`recalculation`] - batch recalculate-persist-diff cycle

pub mod alerts;
pub mod calculator;
pub mod lookup;
pub mod recalculation;

pub use alerts::{AlertEmitter, EmittedAlerts};
pub use calculator::RiskCalculator;
pub use lookup::IndicatorLookup;
pub use recalculation::{CountryOutcome, RecalculationService};
