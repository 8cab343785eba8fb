//! Indicator lookup helper.
//!
//! Wraps the [`IndicatorReader`] port so that every read is time-bounded and
//! unusable values surface as absent instead of as zero.

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::bounded;
use crate::domain::score::IndicatorInputs;
use crate::domain::{CountryCode, IndicatorKind, IndicatorValue};
use crate::error::Result;
use crate::port::outbound::IndicatorReader;

/// Time-bounded indicator reads for one engine instance.
#[derive(Clone)]
pub struct IndicatorLookup {
    reader: Arc<dyn IndicatorReader>,
    timeout: Duration,
}

impl IndicatorLookup {
    pub fn new(reader: Arc<dyn IndicatorReader>, timeout: Duration) -> Self {
        Self { reader, timeout }
    }

    /// Value of `kind` for `country`, in `year` if given, else the latest.
    ///
    /// Non-finite stored values are reported as absent.
    pub async fn find(
        &self,
        country: &CountryCode,
        kind: IndicatorKind,
        year: Option<i32>,
    ) -> Result<Option<IndicatorValue>> {
        let found = bounded(
            "get_indicator",
            self.timeout,
            self.reader.get_indicator(country, kind, year),
        )
        .await?;
        Ok(found.filter(|v| v.value.is_finite()))
    }

    async fn latest(&self, country: &CountryCode, kind: IndicatorKind) -> Result<Option<f64>> {
        Ok(self.find(country, kind, None).await?.map(|v| v.value))
    }

    /// GDP in the latest year on record and in the year before it.
    async fn gdp_trend(&self, country: &CountryCode) -> Result<(Option<f64>, Option<f64>)> {
        let Some(current) = self.find(country, IndicatorKind::Gdp, None).await? else {
            return Ok((None, None));
        };
        let prior = self
            .find(country, IndicatorKind::Gdp, Some(current.year - 1))
            .await?;
        Ok((Some(current.value), prior.map(|v| v.value)))
    }

    /// Gather every indicator the calculators need.
    pub async fn inputs(&self, country: &CountryCode) -> Result<IndicatorInputs> {
        let (gdp_per_capita, inflation, unemployment, debt_to_gdp, trade_balance, gdp) = tokio::try_join!(
            self.latest(country, IndicatorKind::GdpPerCapita),
            self.latest(country, IndicatorKind::Inflation),
            self.latest(country, IndicatorKind::Unemployment),
            self.latest(country, IndicatorKind::DebtToGdp),
            self.latest(country, IndicatorKind::TradeBalance),
            self.gdp_trend(country),
        )?;

        Ok(IndicatorInputs {
            gdp_per_capita,
            inflation,
            unemployment,
            debt_to_gdp,
            trade_balance,
            gdp_current: gdp.0,
            gdp_prior: gdp.1,
        })
    }
}
