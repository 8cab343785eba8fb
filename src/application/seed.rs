//! Deterministic demo data set.
//!
//! Ten Latin-American countries, three years of indicators each and thirty
//! days of rates against the reference currency. Running it twice overwrites
//! the same keys.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::info;

use crate::application::ports::bounded;
use crate::application::sync::{ExchangeRateSync, IndicatorSync, RateQuote};
use crate::domain::{Country, CurrencyCode, IndicatorKind, IndicatorRecord, IndicatorUnit};
use crate::error::Result;
use crate::port::outbound::CountryWriter;

/// Days of FX history written per currency.
pub const FX_DAYS: u64 = 30;

const SOURCE: &str = "SEED";

/// (code, name, currency)
pub const DEMO_COUNTRIES: [(&str, &str, &str); 10] = [
    ("CO", "Colombia", "COP"),
    ("BR", "Brasil", "BRL"),
    ("MX", "Mexico", "MXN"),
    ("AR", "Argentina", "ARS"),
    ("CL", "Chile", "CLP"),
    ("PE", "Peru", "PEN"),
    ("EC", "Ecuador", "USD"),
    ("UY", "Uruguay", "UYU"),
    ("PY", "Paraguay", "PYG"),
    ("PA", "Panama", "PAB"),
];

/// What a seed run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub countries: usize,
    pub indicators: usize,
    pub rates: usize,
    pub fx_alerts: usize,
}

/// Writes the demo data set through the sync services.
pub struct DemoSeed {
    countries: Arc<dyn CountryWriter>,
    indicators: IndicatorSync,
    rates: ExchangeRateSync,
    reference_currency: CurrencyCode,
    timeout: Duration,
}

/// Indicator values of the `n`-th demo country (1-based) for `year`.
fn demo_indicators(n: u32, year: i32) -> [(IndicatorKind, f64, IndicatorUnit); 6] {
    let n_f = f64::from(n);
    [
        (
            IndicatorKind::Gdp,
            50_000_000_000.0 + n_f * 1_000_000.0 + f64::from(year) * 1_000.0,
            IndicatorUnit::Usd,
        ),
        (IndicatorKind::GdpPerCapita, 2_500.0 + n_f * 350.0, IndicatorUnit::Usd),
        (IndicatorKind::Inflation, 3.0 + f64::from(n % 12), IndicatorUnit::Percent),
        (IndicatorKind::Unemployment, 4.0 + f64::from(n % 10), IndicatorUnit::Percent),
        (IndicatorKind::TradeBalance, -2.0 + f64::from(n % 5), IndicatorUnit::Percent),
        (IndicatorKind::DebtToGdp, 30.0 + f64::from(n % 25), IndicatorUnit::Percent),
    ]
}

/// Day-over-day move, in percent, `days_ago` days before the seed date.
fn demo_variation(days_ago: u64) -> f64 {
    // days_ago % 7 is below 7, so the cast is lossless.
    ((days_ago % 7) as f64 - 3.0) * 0.35
}

/// Oldest-first quotes for the `n`-th demo currency ending on `today`.
fn demo_quotes(
    n: u32,
    currency: &CurrencyCode,
    reference: &CurrencyCode,
    today: NaiveDate,
) -> Vec<RateQuote> {
    let mut rate = 1.0 / (10.0 + f64::from(n));
    let mut quotes = Vec::new();
    for days_ago in (0..FX_DAYS).rev() {
        let Some(date) = today.checked_sub_days(Days::new(days_ago)) else {
            continue;
        };
        if !quotes.is_empty() {
            rate *= 1.0 + demo_variation(days_ago) / 100.0;
        }
        quotes.push(RateQuote {
            origin: currency.clone(),
            destination: reference.clone(),
            date,
            rate,
            source: SOURCE.to_string(),
        });
    }
    quotes
}

impl DemoSeed {
    pub fn new(
        countries: Arc<dyn CountryWriter>,
        indicators: IndicatorSync,
        rates: ExchangeRateSync,
        reference_currency: CurrencyCode,
        timeout: Duration,
    ) -> Self {
        Self {
            countries,
            indicators,
            rates,
            reference_currency,
            timeout,
        }
    }

    /// Write the data set as of `today`.
    pub async fn run(&self, today: NaiveDate) -> Result<SeedReport> {
        let mut report = SeedReport::default();
        let years = [today.year() - 2, today.year() - 1, today.year()];

        for (n, (code, name, currency)) in (1u32..).zip(DEMO_COUNTRIES) {
            let country = Country::new(code, name, currency);
            bounded(
                "upsert_country",
                self.timeout,
                self.countries.upsert_country(&country),
            )
            .await?;
            report.countries += 1;

            for year in years {
                for (kind, value, unit) in demo_indicators(n, year) {
                    let record = IndicatorRecord::new(code, kind, year, value, unit);
                    self.indicators.upsert(&record).await?;
                    report.indicators += 1;
                }
            }

            if country.currency == self.reference_currency {
                continue;
            }
            for quote in demo_quotes(n, &country.currency, &self.reference_currency, today) {
                let written = self.rates.record(&quote).await?;
                report.rates += written.updated;
                report.fx_alerts += written.alerts;
            }
        }

        info!(
            countries = report.countries,
            indicators = report.indicators,
            rates = report.rates,
            "Demo data seeded"
        );
        Ok(report)
    }
}
