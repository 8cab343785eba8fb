//! Risk snapshot persistence port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{CountryCode, RiskSnapshot, ScoreBundle, SnapshotId};
use crate::error::Result;

/// Storage of the per-country, per-day risk time series.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Create or overwrite the snapshot keyed by (country, date).
    ///
    /// Re-running on the same date keeps the same id. Writing a date earlier
    /// than the latest stored one fails with
    /// [`DomainError::SnapshotSuperseded`](crate::domain::DomainError::SnapshotSuperseded).
    async fn upsert_snapshot(
        &self,
        country: &CountryCode,
        date: NaiveDate,
        bundle: &ScoreBundle,
    ) -> Result<SnapshotId>;

    /// The most recent snapshot dated strictly before `exclude_date`.
    async fn prior_snapshot(
        &self,
        country: &CountryCode,
        exclude_date: NaiveDate,
    ) -> Result<Option<RiskSnapshot>>;

    /// The snapshot for exactly (country, date).
    async fn get_snapshot(
        &self,
        country: &CountryCode,
        date: NaiveDate,
    ) -> Result<Option<RiskSnapshot>>;

    /// Up to `limit` snapshots, most recent first.
    async fn history(&self, country: &CountryCode, limit: usize) -> Result<Vec<RiskSnapshot>>;
}
