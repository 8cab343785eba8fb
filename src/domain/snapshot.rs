//! Persisted per-day risk snapshots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::id::{CountryCode, SnapshotId};
use super::score::{CalculationDetail, RiskTier, ScoreBundle};

/// One computed risk record for a country on a calculation date.
///
/// At most one snapshot exists per (country, date). Once a later date has a
/// snapshot, earlier ones are frozen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSnapshot {
    pub id: SnapshotId,
    pub country: CountryCode,
    pub date: NaiveDate,
    pub economic: f64,
    pub exchange: f64,
    pub stability: f64,
    pub composite: f64,
    pub tier: RiskTier,
    pub detail: CalculationDetail,
}

impl RiskSnapshot {
    /// Build the stored form of `bundle`.
    #[must_use]
    pub fn from_bundle(
        id: SnapshotId,
        country: CountryCode,
        date: NaiveDate,
        bundle: &ScoreBundle,
    ) -> Self {
        Self {
            id,
            country,
            date,
            economic: bundle.economic,
            exchange: bundle.exchange,
            stability: bundle.stability,
            composite: bundle.composite,
            tier: bundle.tier,
            detail: bundle.detail.clone(),
        }
    }
}
