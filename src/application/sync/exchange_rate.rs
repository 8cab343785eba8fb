//! Exchange-rate ingestion with swing alerts.
//!
//! Each recorded point gets its day-over-day variation against the latest
//! earlier point of the same pair. A back-dated point also refreshes the
//! variation of the next later point, which now follows it. A variation
//! beyond the configured threshold raises an exchange warning for every
//! active country trading in the origin currency, dated to the point.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::application::ports::bounded;
use crate::application::risk::alerts::{AlertEmitter, FX_SWING_TITLE};
use crate::domain::exchange_rate::percent_change;
use crate::domain::{
    AlertKind, CurrencyCode, DomainError, ExchangeRatePoint, NewAlert, Severity,
};
use crate::error::Result;
use crate::port::outbound::{CountryReader, ExchangeRateReader, ExchangeRateWriter};

/// One observed rate to record.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub origin: CurrencyCode,
    pub destination: CurrencyCode,
    pub date: NaiveDate,
    pub rate: f64,
    pub source: String,
}

/// Totals of a sync run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyncReport {
    pub updated: usize,
    pub alerts: usize,
    pub errors: Vec<String>,
}

/// Records exchange-rate points and raises swing alerts.
#[derive(Clone)]
pub struct ExchangeRateSync {
    reader: Arc<dyn ExchangeRateReader>,
    writer: Arc<dyn ExchangeRateWriter>,
    countries: Arc<dyn CountryReader>,
    emitter: AlertEmitter,
    threshold: f64,
    timeout: Duration,
}

impl ExchangeRateSync {
    pub fn new(
        reader: Arc<dyn ExchangeRateReader>,
        writer: Arc<dyn ExchangeRateWriter>,
        countries: Arc<dyn CountryReader>,
        emitter: AlertEmitter,
        threshold: f64,
        timeout: Duration,
    ) -> Self {
        Self {
            reader,
            writer,
            countries,
            emitter,
            threshold,
            timeout,
        }
    }

    /// Record one quote.
    ///
    /// # Errors
    /// Rejects non-finite or non-positive rates; propagates store errors.
    pub async fn record(&self, quote: &RateQuote) -> Result<SyncReport> {
        let pair = format!("{}/{}", quote.origin, quote.destination);
        if !quote.rate.is_finite() || quote.rate <= 0.0 {
            return Err(DomainError::InvalidRate {
                pair,
                rate: quote.rate,
            }
            .into());
        }

        let previous = bounded(
            "point_before",
            self.timeout,
            self.reader
                .point_before(&quote.origin, &quote.destination, quote.date),
        )
        .await?;
        let variation = previous.and_then(|p| percent_change(p.rate, quote.rate));

        let point = ExchangeRatePoint {
            origin: quote.origin.clone(),
            destination: quote.destination.clone(),
            date: quote.date,
            rate: quote.rate,
            variation,
            source: quote.source.clone(),
        };
        let mut report = self.store_point(&point).await?;

        let next = bounded(
            "point_after",
            self.timeout,
            self.reader
                .point_after(&quote.origin, &quote.destination, quote.date),
        )
        .await?;
        if let Some(mut next) = next {
            let refreshed = percent_change(quote.rate, next.rate);
            if refreshed != next.variation {
                debug!(%pair, date = %next.date, ?refreshed, "Refreshing later variation");
                next.variation = refreshed;
                let later = self.store_point(&next).await?;
                report.updated += later.updated;
                report.alerts += later.alerts;
            }
        }
        Ok(report)
    }

    async fn store_point(&self, point: &ExchangeRatePoint) -> Result<SyncReport> {
        bounded("upsert_rate", self.timeout, self.writer.upsert_rate(point)).await?;
        debug!(
            pair = %point.pair(),
            date = %point.date,
            rate = point.rate,
            variation = ?point.variation,
            "Rate stored"
        );

        let mut report = SyncReport {
            updated: 1,
            ..SyncReport::default()
        };
        if let Some(change) = point.variation.filter(|v| v.abs() > self.threshold) {
            report.alerts = self.raise_swing_alerts(point, change).await?;
        }
        Ok(report)
    }

    async fn raise_swing_alerts(&self, point: &ExchangeRatePoint, change: f64) -> Result<usize> {
        let countries = bounded("list_active", self.timeout, self.countries.list_active()).await?;
        let mut raised = 0;
        for country in countries.iter().filter(|c| c.currency == point.origin) {
            let alert = NewAlert {
                country: Some(country.code.clone()),
                kind: AlertKind::Exchange,
                severity: Severity::Warning,
                title: FX_SWING_TITLE.to_string(),
                message: format!(
                    "{} moved {:+.2}% on {} (rate {:.4})",
                    point.pair(),
                    change,
                    point.date,
                    point.rate
                ),
                event_date: point.date,
            };
            if self.emitter.emit_one(&alert).await? {
                raised += 1;
            }
        }
        Ok(raised)
    }

    /// Record quotes in order, collecting per-quote failures.
    pub async fn record_all(&self, quotes: &[RateQuote]) -> SyncReport {
        let mut total = SyncReport::default();
        for quote in quotes {
            match self.record(quote).await {
                Ok(report) => {
                    total.updated += report.updated;
                    total.alerts += report.alerts;
                }
                Err(e) => {
                    warn!(
                        origin = %quote.origin,
                        destination = %quote.destination,
                        date = %quote.date,
                        error = %e,
                        "Rate sync failed"
                    );
                    total
                        .errors
                        .push(format!("{}/{} {}: {e}", quote.origin, quote.destination, quote.date));
                }
            }
        }
        total
    }
}
