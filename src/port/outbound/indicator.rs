//! Indicator repository ports.

use async_trait::async_trait;

use crate::domain::{CountryCode, IndicatorKind, IndicatorRecord, IndicatorValue};
use crate::error::Result;

/// Read access to indicator values.
#[async_trait]
pub trait IndicatorReader: Send + Sync {
    /// Fetch one indicator value for a country.
    ///
    /// With `year` set, returns that year's record or `None`. Without it,
    /// returns the highest year on record, ties broken by the most recent
    /// update. Absence is `Ok(None)`, never a zero value.
    async fn get_indicator(
        &self,
        country: &CountryCode,
        kind: IndicatorKind,
        year: Option<i32>,
    ) -> Result<Option<IndicatorValue>>;
}

/// Write access used by the sync layer.
#[async_trait]
pub trait IndicatorWriter: Send + Sync {
    /// Insert or overwrite the record for (country, kind, year).
    async fn upsert_indicator(&self, record: &IndicatorRecord) -> Result<()>;
}
