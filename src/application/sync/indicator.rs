//! Indicator ingestion.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::application::ports::bounded;
use crate::domain::{DomainError, IndicatorRecord};
use crate::error::Result;
use crate::port::outbound::IndicatorWriter;

/// Stores indicator records, latest write per (country, kind, year) wins.
#[derive(Clone)]
pub struct IndicatorSync {
    writer: Arc<dyn IndicatorWriter>,
    timeout: Duration,
}

impl IndicatorSync {
    pub fn new(writer: Arc<dyn IndicatorWriter>, timeout: Duration) -> Self {
        Self { writer, timeout }
    }

    /// Validate and store one record.
    ///
    /// # Errors
    /// Rejects non-finite values and invalid country codes before writing.
    pub async fn upsert(&self, record: &IndicatorRecord) -> Result<()> {
        if !record.country.is_valid() {
            return Err(DomainError::InvalidCountryCode {
                code: record.country.to_string(),
            }
            .into());
        }
        if !record.value.is_finite() {
            return Err(DomainError::NonFiniteIndicator {
                country: record.country.to_string(),
                kind: record.kind.to_string(),
            }
            .into());
        }

        bounded(
            "upsert_indicator",
            self.timeout,
            self.writer.upsert_indicator(record),
        )
        .await?;
        debug!(
            country = %record.country,
            kind = %record.kind,
            year = record.year,
            value = record.value,
            "Indicator stored"
        );
        Ok(())
    }
}
