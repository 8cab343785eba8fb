//! Bundle of outbound ports the services depend on, plus call bounding.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::port::outbound::{
    AlertStore, CountryReader, ExchangeRateReader, IndicatorReader, SnapshotStore,
};

/// Read/write ports needed to score and persist risk.
#[derive(Clone)]
pub struct RiskPorts {
    pub countries: Arc<dyn CountryReader>,
    pub indicators: Arc<dyn IndicatorReader>,
    pub exchange_rates: Arc<dyn ExchangeRateReader>,
    pub snapshots: Arc<dyn SnapshotStore>,
    pub alerts: Arc<dyn AlertStore>,
}

impl RiskPorts {
    /// Use one store implementing every port for all of them.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: CountryReader
            + IndicatorReader
            + ExchangeRateReader
            + SnapshotStore
            + AlertStore
            + 'static,
    {
        Self {
            countries: store.clone(),
            indicators: store.clone(),
            exchange_rates: store.clone(),
            snapshots: store.clone(),
            alerts: store,
        }
    }
}

/// Await `call`, failing with [`Error::Timeout`] after `timeout`.
pub async fn bounded<T, F>(operation: &'static str, timeout: Duration, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout {
            operation,
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }),
    }
}
