//! Stability sub-score: external balance, growth trend and risk flags.

use serde::{Deserialize, Serialize};

use super::inputs::{clamp_score, MAX_SCORE};
use crate::domain::missing::{MissingField, MissingFields};

/// Points deducted per raised risk flag.
pub const FLAG_PENALTY: f64 = 5.0;

/// Inputs of the stability sub-score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StabilityInputs {
    /// Trade balance, percent of GDP.
    pub trade_balance: Option<f64>,
    /// GDP level in the latest year on record.
    pub gdp_current: Option<f64>,
    /// GDP level in the year before.
    pub gdp_prior: Option<f64>,
    pub inflation: Option<f64>,
    pub unemployment: Option<f64>,
    pub debt_to_gdp: Option<f64>,
}

/// Stability sub-score with its intermediate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityScore {
    pub score: f64,
    /// Year-over-year GDP growth, percent.
    pub growth: Option<f64>,
    pub risk_flags: u32,
    pub missing: MissingFields,
}

/// Year-over-year growth in percent, when both levels are usable.
#[must_use]
pub fn gdp_growth(current: Option<f64>, prior: Option<f64>) -> Option<f64> {
    match (current, prior) {
        (Some(current), Some(prior)) if prior != 0.0 => Some((current - prior) / prior * 100.0),
        _ => None,
    }
}

fn trade_balance_penalty(balance: f64) -> f64 {
    if balance < -10.0 {
        25.0
    } else if balance < -5.0 {
        15.0
    } else if balance < 0.0 {
        5.0
    } else {
        0.0
    }
}

fn growth_penalty(growth: f64) -> f64 {
    if growth < -2.0 {
        30.0
    } else if growth < 0.0 {
        20.0
    } else if growth < 1.0 {
        10.0
    } else {
        0.0
    }
}

/// Count the raised risk flags. Unknown values raise nothing.
fn count_risk_flags(inputs: &StabilityInputs, growth: Option<f64>) -> u32 {
    let flags = [
        inputs.inflation.is_some_and(|v| v > 10.0),
        inputs.unemployment.is_some_and(|v| v > 10.0),
        inputs.debt_to_gdp.is_some_and(|v| v > 60.0),
        inputs.trade_balance.is_some_and(|v| v < 0.0),
        growth.is_some_and(|g| g < 1.0),
    ];
    flags.into_iter().filter(|raised| *raised).count() as u32
}

/// Score structural stability from 100 down.
#[must_use]
pub fn stability_score(inputs: &StabilityInputs) -> StabilityScore {
    let mut missing = MissingFields::new();

    let trade_deduction = missing
        .track(MissingField::TradeBalance, inputs.trade_balance)
        .map_or(0.0, trade_balance_penalty);

    let growth = missing.track(
        MissingField::GdpTrend,
        gdp_growth(inputs.gdp_current, inputs.gdp_prior),
    );
    let growth_deduction = growth.map_or(0.0, growth_penalty);

    let risk_flags = count_risk_flags(inputs, growth);
    let flag_deduction = f64::from(risk_flags) * FLAG_PENALTY;

    StabilityScore {
        score: clamp_score(MAX_SCORE - trade_deduction - growth_deduction - flag_deduction),
        growth,
        risk_flags,
        missing,
    }
}
