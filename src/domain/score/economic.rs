//! Economic sub-score from four headline indicators.

use serde::{Deserialize, Serialize};

use super::inputs::{clamp_score, MAX_SCORE};
use crate::domain::missing::{MissingField, MissingFields};

/// Inputs of the economic sub-score. Any of them may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomicInputs {
    /// USD per inhabitant.
    pub gdp_per_capita: Option<f64>,
    /// Annual inflation, percent.
    pub inflation: Option<f64>,
    /// Unemployment rate, percent.
    pub unemployment: Option<f64>,
    /// Public debt, percent of GDP.
    pub debt_to_gdp: Option<f64>,
}

/// Economic sub-score with the indicators it had to do without.
#[derive(Debug, Clone, PartialEq)]
pub struct EconomicScore {
    pub score: f64,
    pub missing: MissingFields,
}

fn gdp_per_capita_penalty(value: f64) -> f64 {
    if value < 3_000.0 {
        30.0
    } else if value < 6_000.0 {
        15.0
    } else if value < 12_000.0 {
        5.0
    } else {
        0.0
    }
}

fn inflation_penalty(value: f64) -> f64 {
    if value > 50.0 {
        40.0
    } else if value > 10.0 {
        25.0
    } else if value > 5.0 {
        10.0
    } else {
        0.0
    }
}

fn unemployment_penalty(value: f64) -> f64 {
    if value > 15.0 {
        25.0
    } else if value > 10.0 {
        15.0
    } else if value > 7.0 {
        5.0
    } else {
        0.0
    }
}

fn debt_penalty(value: f64) -> f64 {
    if value > 80.0 {
        20.0
    } else if value > 50.0 {
        10.0
    } else {
        0.0
    }
}

/// Score the economy from 100 down, one tier per indicator.
///
/// A missing indicator costs nothing and is listed in the result.
#[must_use]
pub fn economic_score(inputs: &EconomicInputs) -> EconomicScore {
    let mut missing = MissingFields::new();
    let checks: [(MissingField, Option<f64>, fn(f64) -> f64); 4] = [
        (MissingField::GdpPerCapita, inputs.gdp_per_capita, gdp_per_capita_penalty),
        (MissingField::Inflation, inputs.inflation, inflation_penalty),
        (MissingField::Unemployment, inputs.unemployment, unemployment_penalty),
        (MissingField::DebtToGdp, inputs.debt_to_gdp, debt_penalty),
    ];

    let deductions: f64 = checks
        .into_iter()
        .filter_map(|(field, value, penalty)| missing.track(field, value).map(penalty))
        .sum();

    EconomicScore {
        score: clamp_score(MAX_SCORE - deductions),
        missing,
    }
}
