//! Exchange-rate repository ports.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{CurrencyCode, ExchangeRatePoint};
use crate::error::Result;

/// Read access to daily exchange-rate points.
#[async_trait]
pub trait ExchangeRateReader: Send + Sync {
    /// Up to `max_count` day-over-day variations of `origin` against
    /// `destination`, most recent first, points without a variation skipped.
    async fn recent_variations(
        &self,
        origin: &CurrencyCode,
        destination: &CurrencyCode,
        max_count: usize,
    ) -> Result<Vec<f64>>;

    /// The latest point of the pair strictly before `date`.
    async fn point_before(
        &self,
        origin: &CurrencyCode,
        destination: &CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<ExchangeRatePoint>>;

    /// The earliest point of the pair strictly after `date`.
    async fn point_after(
        &self,
        origin: &CurrencyCode,
        destination: &CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<ExchangeRatePoint>>;
}

/// Write access used by the sync layer.
#[async_trait]
pub trait ExchangeRateWriter: Send + Sync {
    /// Insert or overwrite the point for (origin, destination, date).
    async fn upsert_rate(&self, point: &ExchangeRatePoint) -> Result<()>;
}
