//! Composition root: wires stores, services and settings together.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::sqlite::{self, SqliteStore};
use crate::application::risk::{AlertEmitter, RecalculationService};
use crate::application::seed::DemoSeed;
use crate::application::sync::{ExchangeRateSync, IndicatorSync};
use crate::application::{EngineSettings, RiskPorts};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::outbound::{
    AlertStore, CountryReader, CountryWriter, ExchangeRateReader, ExchangeRateWriter,
    IndicatorReader, IndicatorWriter, SnapshotStore,
};

/// Every service a driver needs, built over one store.
#[derive(Clone)]
pub struct Services {
    pub ports: RiskPorts,
    pub engine: RecalculationService,
    pub indicators: IndicatorSync,
    pub rates: ExchangeRateSync,
    pub countries: Arc<dyn CountryWriter>,
}

impl Services {
    /// Wire every service over `store`.
    pub fn wire<S>(store: Arc<S>, settings: EngineSettings) -> Self
    where
        S: CountryReader
            + CountryWriter
            + IndicatorReader
            + IndicatorWriter
            + ExchangeRateReader
            + ExchangeRateWriter
            + SnapshotStore
            + AlertStore
            + 'static,
    {
        let timeout = settings.repository_timeout;
        let ports = RiskPorts::from_store(store.clone());
        let rates = ExchangeRateSync::new(
            store.clone(),
            store.clone(),
            store.clone(),
            AlertEmitter::new(store.clone(), timeout),
            settings.alerts.fx_variation,
            timeout,
        );
        Self {
            indicators: IndicatorSync::new(store.clone(), timeout),
            rates,
            countries: store,
            engine: RecalculationService::new(ports.clone(), settings),
            ports,
        }
    }

    /// The demo data loader over the same store.
    #[must_use]
    pub fn seed(&self) -> DemoSeed {
        let settings = self.engine.settings();
        DemoSeed::new(
            self.countries.clone(),
            self.indicators.clone(),
            self.rates.clone(),
            settings.reference_currency.clone(),
            settings.repository_timeout,
        )
    }
}

/// Open the configured SQLite database, migrate it and wire the services.
///
/// # Errors
/// Fails when the database cannot be opened or migrated.
pub fn open(config: &Config) -> Result<Services> {
    let pool = sqlite::open(&config.database)?;
    info!(database = %config.database, "Database ready");
    let store = Arc::new(SqliteStore::new(pool));
    Ok(Services::wire(store, config.engine_settings()))
}
