//! Daily exchange-rate points.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::id::CurrencyCode;

/// One rate for a currency pair on a date, unique per (pair, date).
///
/// `variation` is the day-over-day percentage change against the previous
/// point of the same pair; the first point of a pair has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRatePoint {
    pub origin: CurrencyCode,
    pub destination: CurrencyCode,
    pub date: NaiveDate,
    pub rate: f64,
    pub variation: Option<f64>,
    pub source: String,
}

impl ExchangeRatePoint {
    /// `ORIGIN/DESTINATION` label used in logs and alert text.
    #[must_use]
    pub fn pair(&self) -> String {
        format!("{}/{}", self.origin, self.destination)
    }
}

/// Percentage change from `previous` to `current`.
///
/// Returns `None` when the previous rate is not a usable divisor.
#[must_use]
pub fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if !previous.is_finite() || !current.is_finite() || previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}
