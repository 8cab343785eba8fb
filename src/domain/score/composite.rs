//! Weighted composite index and risk tier classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::economic::{economic_score, EconomicScore};
use super::exchange::{exchange_score, ExchangeScore};
use super::inputs::{clamp_score, IndicatorInputs, RiskInputs};
use super::stability::{stability_score, StabilityScore};
use crate::domain::missing::MissingFields;

/// Sub-score weights of the composite index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub economic: f64,
    pub exchange: f64,
    pub stability: f64,
}

/// The fixed weights. Not configurable at runtime.
pub const WEIGHTS: Weights = Weights {
    economic: 0.40,
    exchange: 0.30,
    stability: 0.30,
};

/// Human-readable formula recorded in every calculation detail.
pub const FORMULA: &str = "round(economic*0.40 + exchange*0.30 + stability*0.30, 2)";

/// Discrete risk classification of a composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskTier {
    /// Classify a composite index. Lower bounds are inclusive.
    #[must_use]
    pub fn from_composite(composite: f64) -> Self {
        if composite < 25.0 {
            Self::Critical
        } else if composite < 50.0 {
            Self::High
        } else if composite < 75.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "MODERATE" => Ok(Self::Moderate),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(format!("unknown risk tier '{other}'")),
        }
    }
}

/// Exchange part of the calculation detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeDetail {
    pub volatility: Option<f64>,
    pub depreciation: Option<f64>,
    pub sample_size: usize,
}

/// Stability part of the calculation detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityDetail {
    pub growth: Option<f64>,
    pub risk_flags: u32,
}

/// Structured record of how a bundle was computed. Stored with the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationDetail {
    pub formula: String,
    pub weights: Weights,
    pub inputs: IndicatorInputs,
    pub missing: MissingFields,
    pub exchange: ExchangeDetail,
    pub stability: StabilityDetail,
}

/// All three sub-scores, the composite index and its tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBundle {
    pub economic: f64,
    pub exchange: f64,
    pub stability: f64,
    pub composite: f64,
    pub tier: RiskTier,
    pub detail: CalculationDetail,
}

/// Round half away from zero to two decimals.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted, rounded composite of three sub-scores.
#[must_use]
pub fn composite_index(economic: f64, exchange: f64, stability: f64) -> f64 {
    let weighted = economic * WEIGHTS.economic
        + exchange * WEIGHTS.exchange
        + stability * WEIGHTS.stability;
    clamp_score(round2(weighted))
}

/// Combine computed sub-scores into a [`ScoreBundle`].
#[must_use]
pub fn combine(
    inputs: IndicatorInputs,
    economic: EconomicScore,
    exchange: ExchangeScore,
    stability: StabilityScore,
) -> ScoreBundle {
    let composite = composite_index(economic.score, exchange.score, stability.score);
    let missing = economic
        .missing
        .merged(&exchange.missing)
        .merged(&stability.missing);

    ScoreBundle {
        economic: economic.score,
        exchange: exchange.score,
        stability: stability.score,
        composite,
        tier: RiskTier::from_composite(composite),
        detail: CalculationDetail {
            formula: FORMULA.to_string(),
            weights: WEIGHTS,
            inputs,
            missing,
            exchange: ExchangeDetail {
                volatility: exchange.volatility,
                depreciation: exchange.depreciation,
                sample_size: exchange.sample_size,
            },
            stability: StabilityDetail {
                growth: stability.growth,
                risk_flags: stability.risk_flags,
            },
        },
    }
}

/// Run all three calculators over `inputs` and combine them.
#[must_use]
pub fn score(inputs: &RiskInputs) -> ScoreBundle {
    let economic = economic_score(&inputs.indicators.economic());
    let exchange = exchange_score(&inputs.fx_variations);
    let stability = stability_score(&inputs.indicators.stability());
    combine(inputs.indicators, economic, exchange, stability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::missing::MissingField;

    #[test]
    fn tier_boundaries_are_lower_inclusive() {
        let cases = [
            (0.0, RiskTier::Critical),
            (24.99, RiskTier::Critical),
            (25.00, RiskTier::High),
            (49.99, RiskTier::High),
            (50.00, RiskTier::Moderate),
            (74.99, RiskTier::Moderate),
            (75.00, RiskTier::Low),
            (100.0, RiskTier::Low),
        ];
        for (composite, expected) in cases {
            assert_eq!(RiskTier::from_composite(composite), expected, "{composite}");
        }
    }

    #[test]
    fn composite_uses_fixed_weights_and_two_decimals() {
        assert_eq!(composite_index(55.0, 100.0, 95.0), 80.5);
        assert_eq!(composite_index(61.0, 47.5, 88.0), 65.05);
        assert_eq!(composite_index(100.0, 100.0, 100.0), 100.0);
        assert_eq!(composite_index(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn sub_scores_keep_full_precision() {
        let inputs = RiskInputs {
            fx_variations: vec![0.7, -0.9, 0.4],
            ..Default::default()
        };
        let bundle = score(&inputs);
        assert_eq!(bundle.composite, round2(bundle.composite));
        assert_eq!(
            bundle.composite,
            round2(bundle.economic * 0.40 + bundle.exchange * 0.30 + bundle.stability * 0.30)
        );
    }

    #[test]
    fn detail_merges_missing_fields_from_all_calculators() {
        let bundle = score(&RiskInputs::default());
        assert_eq!(bundle.composite, 100.0);
        assert_eq!(bundle.tier, RiskTier::Low);
        for field in [
            MissingField::GdpPerCapita,
            MissingField::Inflation,
            MissingField::Unemployment,
            MissingField::DebtToGdp,
            MissingField::TradeBalance,
            MissingField::GdpTrend,
            MissingField::ExchangeRate,
        ] {
            assert!(bundle.detail.missing.contains(field), "{field}");
        }
        assert_eq!(bundle.detail.formula, FORMULA);
    }

    #[test]
    fn detail_round_trips_through_json() {
        let inputs = RiskInputs {
            indicators: IndicatorInputs {
                inflation: Some(7.25),
                gdp_current: Some(101.0),
                gdp_prior: Some(100.0),
                ..Default::default()
            },
            fx_variations: vec![0.3, -0.1],
        };
        let bundle = score(&inputs);
        let json = serde_json::to_string(&bundle.detail).unwrap();
        let back: CalculationDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bundle.detail);
    }

    #[test]
    fn tier_names_parse_back() {
        for tier in [RiskTier::Low, RiskTier::Moderate, RiskTier::High, RiskTier::Critical] {
            assert_eq!(tier.as_str().parse::<RiskTier>(), Ok(tier));
        }
    }
}
