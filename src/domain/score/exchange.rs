//! Exchange-rate sub-score from recent daily variations.

use serde::{Deserialize, Serialize};

use super::inputs::{clamp_score, MAX_SCORE};
use crate::domain::missing::{MissingField, MissingFields};

/// Exchange sub-score and the statistics it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeScore {
    pub score: f64,
    /// Population standard deviation of the variations, in percentage points.
    pub volatility: Option<f64>,
    /// Compounded loss over the window, percent, floored at zero.
    pub depreciation: Option<f64>,
    /// Number of usable variations.
    pub sample_size: usize,
    pub missing: MissingFields,
}

/// Population standard deviation. `None` for an empty slice.
#[must_use]
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some(variance.sqrt())
}

/// Cumulative depreciation `1 - prod(1 + v/100)` as a percentage.
///
/// Appreciation over the window yields zero.
#[must_use]
pub fn cumulative_depreciation(variations: &[f64]) -> f64 {
    let growth: f64 = variations.iter().map(|v| 1.0 + v / 100.0).product();
    ((1.0 - growth) * 100.0).max(0.0)
}

fn volatility_penalty(volatility: f64) -> f64 {
    if volatility > 3.0 {
        40.0
    } else if volatility > 1.5 {
        25.0
    } else if volatility > 0.5 {
        10.0
    } else {
        0.0
    }
}

fn depreciation_penalty(depreciation: f64) -> f64 {
    if depreciation > 10.0 {
        30.0
    } else if depreciation > 5.0 {
        15.0
    } else if depreciation > 2.0 {
        5.0
    } else {
        0.0
    }
}

/// Score the currency from its recent daily percentage variations.
///
/// Non-finite values are ignored. With no usable data the score is 100 and
/// [`MissingField::ExchangeRate`] is reported.
#[must_use]
pub fn exchange_score(variations: &[f64]) -> ExchangeScore {
    let usable: Vec<f64> = variations.iter().copied().filter(|v| v.is_finite()).collect();

    let Some(volatility) = population_std_dev(&usable) else {
        return ExchangeScore {
            score: MAX_SCORE,
            volatility: None,
            depreciation: None,
            sample_size: 0,
            missing: [MissingField::ExchangeRate].into_iter().collect(),
        };
    };

    let depreciation = cumulative_depreciation(&usable);
    let deductions = volatility_penalty(volatility) + depreciation_penalty(depreciation);

    ExchangeScore {
        score: clamp_score(MAX_SCORE - deductions),
        volatility: Some(volatility),
        depreciation: Some(depreciation),
        sample_size: usable.len(),
        missing: MissingFields::new(),
    }
}
