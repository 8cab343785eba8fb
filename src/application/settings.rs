//! Engine settings shared by the application services.

use std::time::Duration;

use crate::domain::CurrencyCode;

/// Default number of FX variations scored per country.
pub const DEFAULT_FX_WINDOW: usize = 30;

/// Thresholds that decide when alerts are raised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThresholds {
    /// Composite index below which a critical risk alert fires.
    pub critical_index: f64,
    /// Composite drop versus the prior snapshot that fires a warning.
    pub drop_points: f64,
    /// Inflation above which a critical indicator alert fires.
    pub extreme_inflation: f64,
    /// Absolute daily FX variation (percent) that fires an exchange alert.
    pub fx_variation: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            critical_index: 25.0,
            drop_points: 15.0,
            extreme_inflation: 50.0,
            fx_variation: 3.0,
        }
    }
}

/// Runtime settings of the scoring engine.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Currency every FX pair is quoted against.
    pub reference_currency: CurrencyCode,
    /// Most recent FX variations considered per country.
    pub fx_window: usize,
    /// Countries processed concurrently.
    pub max_concurrency: usize,
    /// Upper bound of every repository call.
    pub repository_timeout: Duration,
    pub alerts: AlertThresholds,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            reference_currency: CurrencyCode::new("USD"),
            fx_window: DEFAULT_FX_WINDOW,
            max_concurrency: num_cpus::get(),
            repository_timeout: Duration::from_secs(5),
            alerts: AlertThresholds::default(),
        }
    }
}
