//! Risk engine entry points and their result types.
//!
//! The engine logic lives in `application::risk`; inbound adapters such as
//! the CLI drive it through [`RiskEngine`].

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Country, CountryCode, ScoreBundle};
use crate::error::Result;

/// Where in the per-country pipeline a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    /// The country record was malformed.
    Validate,
    /// Reading inputs or the prior snapshot failed.
    Compute,
    /// Writing the snapshot failed.
    Persist,
    /// Writing an alert failed. The snapshot was already stored.
    Alert,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Validate => "validate",
            Self::Compute => "compute",
            Self::Persist => "persist",
            Self::Alert => "alert",
        })
    }
}

/// One country that could not be fully processed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryFailure {
    pub country: CountryCode,
    pub stage: FailureStage,
    pub message: String,
}

/// Totals of one batch recalculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecalculationSummary {
    pub run_date: NaiveDate,
    pub snapshots_updated: usize,
    pub warnings_emitted: usize,
    pub criticals_emitted: usize,
    /// Countries that failed, with the stage and error.
    pub failed: Vec<CountryFailure>,
    /// Countries never started because the batch was cancelled.
    pub skipped: Vec<CountryCode>,
}

impl RecalculationSummary {
    #[must_use]
    pub const fn new(run_date: NaiveDate) -> Self {
        Self {
            run_date,
            snapshots_updated: 0,
            warnings_emitted: 0,
            criticals_emitted: 0,
            failed: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// True when every active country was processed without error.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

/// Use cases the engine exposes to drivers.
#[async_trait]
pub trait RiskEngine: Send + Sync {
    /// Score one country from current data without persisting anything.
    async fn calculate_risk(&self, country: &Country) -> Result<ScoreBundle>;

    /// Recalculate, persist and diff every active country for `date`.
    ///
    /// Per-country failures are reported in the summary; only failing to
    /// list the countries is an error.
    async fn recalculate_all(&self, date: NaiveDate) -> Result<RecalculationSummary>;
}
