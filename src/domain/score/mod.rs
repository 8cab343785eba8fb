//! Deterministic country-risk scoring.
//!
//! Three independent sub-scores, each on a 0-100 scale where 100 means no
//! risk signal, are combined into a composite index:
//!
//! - [`economic`] - tiered deductions on GDP per capita, inflation,
//!   unemployment and debt
//! - [`exchange`] - volatility and compounded depreciation of recent FX moves
//! - [`stability`] - trade balance, GDP trend and a count of risk flags
//! - [`composite`] - weighted combination, rounding and tier classification
//!
//! Sub-scores keep full precision; rounding happens once, in the combiner.

pub mod composite;
pub mod economic;
pub mod exchange;
pub mod inputs;
pub mod stability;

pub use composite::{combine, score, CalculationDetail, RiskTier, ScoreBundle, Weights, WEIGHTS};
pub use economic::{economic_score, EconomicInputs, EconomicScore};
pub use exchange::{exchange_score, ExchangeScore};
pub use inputs::{IndicatorInputs, RiskInputs, MAX_SCORE};
pub use stability::{stability_score, StabilityInputs, StabilityScore};
