//! Alert threshold configuration.

use serde::{Deserialize, Serialize};

use crate::application::AlertThresholds;

/// Alert thresholds (`[alerts]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Composite index below which a critical risk alert fires.
    #[serde(default = "default_critical_index")]
    pub critical_index: f64,
    /// Composite drop versus the prior snapshot that fires a warning.
    #[serde(default = "default_drop_points")]
    pub drop_points: f64,
    /// Inflation (percent) above which a critical indicator alert fires.
    #[serde(default = "default_extreme_inflation")]
    pub extreme_inflation: f64,
    /// Absolute daily FX variation (percent) that fires an exchange alert.
    #[serde(default = "default_fx_variation")]
    pub fx_variation: f64,
}

const fn default_critical_index() -> f64 {
    25.0
}

const fn default_drop_points() -> f64 {
    15.0
}

const fn default_extreme_inflation() -> f64 {
    50.0
}

const fn default_fx_variation() -> f64 {
    3.0
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            critical_index: default_critical_index(),
            drop_points: default_drop_points(),
            extreme_inflation: default_extreme_inflation(),
            fx_variation: default_fx_variation(),
        }
    }
}

impl From<AlertConfig> for AlertThresholds {
    fn from(config: AlertConfig) -> Self {
        Self {
            critical_index: config.critical_index,
            drop_points: config.drop_points,
            extreme_inflation: config.extreme_inflation,
            fx_variation: config.fx_variation,
        }
    }
}
