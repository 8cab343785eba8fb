//! Engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::settings::DEFAULT_FX_WINDOW;
use crate::application::{AlertThresholds, EngineSettings};
use crate::domain::CurrencyCode;

/// Scoring engine configuration (`[engine]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Currency every FX pair is quoted against.
    #[serde(default = "default_reference_currency")]
    pub reference_currency: String,
    /// Most recent FX variations scored per country (1..=365).
    #[serde(default = "default_fx_window")]
    pub fx_window: usize,
    /// Countries processed concurrently.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Upper bound of every repository call, in milliseconds.
    #[serde(default = "default_repository_timeout_ms")]
    pub repository_timeout_ms: u64,
}

fn default_reference_currency() -> String {
    "USD".to_string()
}

const fn default_fx_window() -> usize {
    DEFAULT_FX_WINDOW
}

fn default_max_concurrency() -> usize {
    num_cpus::get()
}

const fn default_repository_timeout_ms() -> u64 {
    5000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_currency: default_reference_currency(),
            fx_window: default_fx_window(),
            max_concurrency: default_max_concurrency(),
            repository_timeout_ms: default_repository_timeout_ms(),
        }
    }
}

impl EngineConfig {
    /// Runtime settings for these values and `alerts`.
    #[must_use]
    pub fn settings(&self, alerts: AlertThresholds) -> EngineSettings {
        EngineSettings {
            reference_currency: CurrencyCode::new(&self.reference_currency),
            fx_window: self.fx_window,
            max_concurrency: self.max_concurrency,
            repository_timeout: Duration::from_millis(self.repository_timeout_ms),
            alerts,
        }
    }
}
