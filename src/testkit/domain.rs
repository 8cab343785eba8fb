//! Builders for domain primitives used across tests.
//!
//! Concise factories for [`Country`], [`IndicatorRecord`] and
//! [`ExchangeRatePoint`] so tests focus on assertions rather than
//! construction boilerplate.

use chrono::NaiveDate;

use crate::domain::{
    Country, CurrencyCode, ExchangeRatePoint, IndicatorKind, IndicatorRecord, IndicatorUnit,
};

/// An active country named after its code.
pub fn country(code: &str, currency: &str) -> Country {
    Country::new(code, format!("Country {code}"), currency)
}

/// A manual indicator record with the unit matching `kind`.
pub fn indicator(code: &str, kind: IndicatorKind, year: i32, value: f64) -> IndicatorRecord {
    let unit = match kind {
        IndicatorKind::Gdp | IndicatorKind::GdpPerCapita => IndicatorUnit::Usd,
        _ => IndicatorUnit::Percent,
    };
    IndicatorRecord::new(code, kind, year, value, unit)
}

/// A rate point with an explicit variation.
pub fn fx_point(
    origin: &str,
    destination: &str,
    date: NaiveDate,
    rate: f64,
    variation: Option<f64>,
) -> ExchangeRatePoint {
    ExchangeRatePoint {
        origin: CurrencyCode::new(origin),
        destination: CurrencyCode::new(destination),
        date,
        rate,
        variation,
        source: "TEST".to_string(),
    }
}

/// Every indicator of the high-inflation scenario for `code` in `year`:
/// GDP per capita 8000, inflation 60, unemployment 5, debt 20, trade
/// balance 2 and no GDP levels.
pub fn high_inflation_indicators(code: &str, year: i32) -> Vec<IndicatorRecord> {
    vec![
        indicator(code, IndicatorKind::GdpPerCapita, year, 8_000.0),
        indicator(code, IndicatorKind::Inflation, year, 60.0),
        indicator(code, IndicatorKind::Unemployment, year, 5.0),
        indicator(code, IndicatorKind::DebtToGdp, year, 20.0),
        indicator(code, IndicatorKind::TradeBalance, year, 2.0),
    ]
}
