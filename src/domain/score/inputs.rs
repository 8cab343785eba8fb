//! Score inputs and the shared score bounds.

use serde::{Deserialize, Serialize};

use super::economic::EconomicInputs;
use super::stability::StabilityInputs;

/// Upper bound of every score.
pub const MAX_SCORE: f64 = 100.0;

/// Clamp a score into `[0, 100]`.
#[must_use]
pub(crate) fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, MAX_SCORE)
}

/// Indicator values feeding the calculators, as found by the lookup.
///
/// `None` means the repository had no usable record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorInputs {
    pub gdp_per_capita: Option<f64>,
    pub inflation: Option<f64>,
    pub unemployment: Option<f64>,
    pub debt_to_gdp: Option<f64>,
    pub trade_balance: Option<f64>,
    pub gdp_current: Option<f64>,
    pub gdp_prior: Option<f64>,
}

impl IndicatorInputs {
    #[must_use]
    pub const fn economic(&self) -> EconomicInputs {
        EconomicInputs {
            gdp_per_capita: self.gdp_per_capita,
            inflation: self.inflation,
            unemployment: self.unemployment,
            debt_to_gdp: self.debt_to_gdp,
        }
    }

    #[must_use]
    pub const fn stability(&self) -> StabilityInputs {
        StabilityInputs {
            trade_balance: self.trade_balance,
            gdp_current: self.gdp_current,
            gdp_prior: self.gdp_prior,
            inflation: self.inflation,
            unemployment: self.unemployment,
            debt_to_gdp: self.debt_to_gdp,
        }
    }
}

/// Everything needed to score one country.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskInputs {
    pub indicators: IndicatorInputs,
    /// Daily FX percentage variations, most recent first.
    pub fx_variations: Vec<f64>,
}
