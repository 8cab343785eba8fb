//! Single-country risk calculation.

use std::sync::Arc;

use tracing::debug;

use crate::application::ports::bounded;
use crate::application::settings::EngineSettings;
use crate::domain::score::{self, RiskInputs};
use crate::domain::{Country, ScoreBundle};
use crate::error::Result;
use crate::port::outbound::{ExchangeRateReader, IndicatorReader};

use super::lookup::IndicatorLookup;

/// Gathers inputs from the repositories and scores one country.
///
/// Holds no state beyond its collaborators, so one instance can score any
/// number of countries concurrently.
#[derive(Clone)]
pub struct RiskCalculator {
    lookup: IndicatorLookup,
    exchange_rates: Arc<dyn ExchangeRateReader>,
    settings: Arc<EngineSettings>,
}

impl RiskCalculator {
    pub fn new(
        indicators: Arc<dyn IndicatorReader>,
        exchange_rates: Arc<dyn ExchangeRateReader>,
        settings: Arc<EngineSettings>,
    ) -> Self {
        Self {
            lookup: IndicatorLookup::new(indicators, settings.repository_timeout),
            exchange_rates,
            settings,
        }
    }

    /// Indicator and FX inputs for `country` as currently stored.
    pub async fn inputs(&self, country: &Country) -> Result<RiskInputs> {
        let indicators = self.lookup.inputs(&country.code).await?;
        let fx_variations = if country.currency == self.settings.reference_currency {
            Vec::new()
        } else {
            bounded(
                "recent_variations",
                self.settings.repository_timeout,
                self.exchange_rates.recent_variations(
                    &country.currency,
                    &self.settings.reference_currency,
                    self.settings.fx_window,
                ),
            )
            .await?
        };

        Ok(RiskInputs {
            indicators,
            fx_variations,
        })
    }

    /// Score `country` without persisting anything.
    ///
    /// # Errors
    /// Fails on a malformed country record or a repository error. Missing
    /// data is not an error; it is listed in the bundle detail.
    pub async fn calculate(&self, country: &Country) -> Result<ScoreBundle> {
        country.validate()?;
        let inputs = self.inputs(country).await?;
        let bundle = score::score(&inputs);
        debug!(
            country = %country.code,
            composite = bundle.composite,
            tier = %bundle.tier,
            missing = %bundle.detail.missing,
            "Risk calculated"
        );
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryStore;
    use crate::domain::{CurrencyCode, IndicatorKind, MissingField, RiskTier};
    use crate::error::Error;
    use crate::testkit::domain::{country, fx_point, indicator};
    use chrono::NaiveDate;

    fn calculator(store: &Arc<MemoryStore>) -> RiskCalculator {
        RiskCalculator::new(
            store.clone(),
            store.clone(),
            Arc::new(EngineSettings::default()),
        )
    }

    #[tokio::test]
    async fn empty_store_scores_full_marks_with_everything_missing() {
        let store = Arc::new(MemoryStore::new());
        let bundle = calculator(&store)
            .calculate(&country("CO", "COP"))
            .await
            .unwrap();

        assert_eq!(bundle.composite, 100.0);
        assert_eq!(bundle.tier, RiskTier::Low);
        assert!(bundle.detail.missing.contains(MissingField::Inflation));
        assert!(bundle.detail.missing.contains(MissingField::GdpTrend));
        assert!(bundle.detail.missing.contains(MissingField::ExchangeRate));
    }

    #[tokio::test]
    async fn high_inflation_scenario_scores_eighty_point_five() {
        let store = Arc::new(MemoryStore::new());
        store.put_indicator(indicator("AR", IndicatorKind::GdpPerCapita, 2024, 8000.0));
        store.put_indicator(indicator("AR", IndicatorKind::Inflation, 2024, 60.0));
        store.put_indicator(indicator("AR", IndicatorKind::Unemployment, 2024, 5.0));
        store.put_indicator(indicator("AR", IndicatorKind::DebtToGdp, 2024, 20.0));
        store.put_indicator(indicator("AR", IndicatorKind::TradeBalance, 2024, 2.0));
        for day in 1..=4 {
            let date = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
            store.put_rate(fx_point("ARS", "USD", date, 1000.0, Some(0.0)));
        }

        let bundle = calculator(&store)
            .calculate(&country("AR", "ARS"))
            .await
            .unwrap();

        assert_eq!(bundle.economic, 55.0);
        assert_eq!(bundle.exchange, 100.0);
        assert_eq!(bundle.stability, 95.0);
        assert_eq!(bundle.composite, 80.5);
        assert_eq!(bundle.tier, RiskTier::Low);
    }

    #[tokio::test]
    async fn reference_currency_country_skips_fx_lookup() {
        let store = Arc::new(MemoryStore::new());
        let bundle = calculator(&store)
            .calculate(&country("EC", "USD"))
            .await
            .unwrap();

        assert_eq!(bundle.exchange, 100.0);
        assert_eq!(bundle.detail.exchange.sample_size, 0);
        assert!(bundle.detail.missing.contains(MissingField::ExchangeRate));
    }

    #[tokio::test]
    async fn malformed_country_is_rejected_before_any_read() {
        let store = Arc::new(MemoryStore::new());
        let mut bad = country("CO", "COP");
        bad.currency = CurrencyCode::new("PESO");

        let result = calculator(&store).calculate(&bad).await;
        assert!(matches!(result, Err(Error::Domain(_))));
    }
}
