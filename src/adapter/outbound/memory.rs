//! In-process store implementing every outbound port.
//!
//! Backs unit tests and the integration suites. Upserts are keyed the same
//! way as in the SQLite store and snapshot ids stay stable across reruns.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use parking_lot::RwLock;

use crate::domain::{
    Alert, AlertId, Country, CountryCode, CurrencyCode, DomainError, ExchangeRatePoint,
    IndicatorKind, IndicatorRecord, IndicatorValue, NewAlert, RiskSnapshot, ScoreBundle,
    SnapshotId,
};
use crate::error::Result;
use crate::port::outbound::{
    AlertStore, CountryReader, CountryWriter, ExchangeRateReader, ExchangeRateWriter,
    IndicatorReader, IndicatorWriter, SnapshotStore,
};

type RateKey = (CurrencyCode, CurrencyCode, NaiveDate);

#[derive(Default)]
struct State {
    countries: BTreeMap<CountryCode, Country>,
    indicators: BTreeMap<(CountryCode, IndicatorKind, i32), IndicatorRecord>,
    rates: BTreeMap<RateKey, ExchangeRatePoint>,
    snapshots: BTreeMap<(CountryCode, NaiveDate), RiskSnapshot>,
    alerts: Vec<Alert>,
    next_snapshot_id: i64,
    next_alert_id: i64,
}

/// Thread-safe in-memory repository.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a country without validation.
    pub fn put_country(&self, country: Country) {
        self.state
            .write()
            .countries
            .insert(country.code.clone(), country);
    }

    /// Insert or replace an indicator record without validation.
    pub fn put_indicator(&self, record: IndicatorRecord) {
        let key = (record.country.clone(), record.kind, record.year);
        self.state.write().indicators.insert(key, record);
    }

    /// Insert or replace a rate point as given, variation included.
    pub fn put_rate(&self, point: ExchangeRatePoint) {
        let key = (point.origin.clone(), point.destination.clone(), point.date);
        self.state.write().rates.insert(key, point);
    }

    fn pair_points<'a>(
        state: &'a State,
        origin: &'a CurrencyCode,
        destination: &'a CurrencyCode,
    ) -> impl DoubleEndedIterator<Item = &'a ExchangeRatePoint> + 'a {
        state
            .rates
            .values()
            .filter(move |p| &p.origin == origin && &p.destination == destination)
    }
}

#[async_trait]
impl CountryReader for MemoryStore {
    async fn list_active(&self) -> Result<Vec<Country>> {
        Ok(self
            .state
            .read()
            .countries
            .values()
            .filter(|c| c.active)
            .cloned()
            .collect())
    }

    async fn get_country(&self, code: &CountryCode) -> Result<Option<Country>> {
        Ok(self.state.read().countries.get(code).cloned())
    }
}

#[async_trait]
impl CountryWriter for MemoryStore {
    async fn upsert_country(&self, country: &Country) -> Result<()> {
        self.put_country(country.clone());
        Ok(())
    }
}

#[async_trait]
impl IndicatorReader for MemoryStore {
    async fn get_indicator(
        &self,
        country: &CountryCode,
        kind: IndicatorKind,
        year: Option<i32>,
    ) -> Result<Option<IndicatorValue>> {
        let state = self.state.read();
        let record = match year {
            Some(year) => state.indicators.get(&(country.clone(), kind, year)),
            None => state
                .indicators
                .values()
                .filter(|r| &r.country == country && r.kind == kind)
                .max_by(|a, b| a.year.cmp(&b.year).then(a.updated_at.cmp(&b.updated_at))),
        };
        Ok(record.map(|r| IndicatorValue {
            year: r.year,
            value: r.value,
        }))
    }
}

#[async_trait]
impl IndicatorWriter for MemoryStore {
    async fn upsert_indicator(&self, record: &IndicatorRecord) -> Result<()> {
        self.put_indicator(record.clone());
        Ok(())
    }
}

#[async_trait]
impl ExchangeRateReader for MemoryStore {
    async fn recent_variations(
        &self,
        origin: &CurrencyCode,
        destination: &CurrencyCode,
        max_count: usize,
    ) -> Result<Vec<f64>> {
        let state = self.state.read();
        let variations = Self::pair_points(&state, origin, destination)
            .rev()
            .filter_map(|p| p.variation)
            .take(max_count)
            .collect();
        Ok(variations)
    }

    async fn point_before(
        &self,
        origin: &CurrencyCode,
        destination: &CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<ExchangeRatePoint>> {
        let state = self.state.read();
        let point = Self::pair_points(&state, origin, destination)
            .rev()
            .find(|p| p.date < date)
            .cloned();
        Ok(point)
    }

    async fn point_after(
        &self,
        origin: &CurrencyCode,
        destination: &CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<ExchangeRatePoint>> {
        let state = self.state.read();
        let point = Self::pair_points(&state, origin, destination)
            .find(|p| p.date > date)
            .cloned();
        Ok(point)
    }
}

#[async_trait]
impl ExchangeRateWriter for MemoryStore {
    async fn upsert_rate(&self, point: &ExchangeRatePoint) -> Result<()> {
        self.put_rate(point.clone());
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn upsert_snapshot(
        &self,
        country: &CountryCode,
        date: NaiveDate,
        bundle: &ScoreBundle,
    ) -> Result<SnapshotId> {
        let mut state = self.state.write();

        let latest = state
            .snapshots
            .keys()
            .filter(|(code, _)| code == country)
            .map(|(_, day)| *day)
            .max();
        if let Some(latest) = latest.filter(|latest| *latest > date) {
            return Err(DomainError::SnapshotSuperseded {
                country: country.to_string(),
                date,
                latest,
            }
            .into());
        }

        let key = (country.clone(), date);
        let id = match state.snapshots.get(&key) {
            Some(existing) => existing.id,
            None => {
                state.next_snapshot_id += 1;
                SnapshotId::new(state.next_snapshot_id)
            }
        };
        state.snapshots.insert(
            key,
            RiskSnapshot::from_bundle(id, country.clone(), date, bundle),
        );
        Ok(id)
    }

    async fn prior_snapshot(
        &self,
        country: &CountryCode,
        exclude_date: NaiveDate,
    ) -> Result<Option<RiskSnapshot>> {
        let state = self.state.read();
        Ok(state
            .snapshots
            .range((country.clone(), NaiveDate::MIN)..(country.clone(), exclude_date))
            .next_back()
            .map(|(_, s)| s.clone()))
    }

    async fn get_snapshot(
        &self,
        country: &CountryCode,
        date: NaiveDate,
    ) -> Result<Option<RiskSnapshot>> {
        Ok(self
            .state
            .read()
            .snapshots
            .get(&(country.clone(), date))
            .cloned())
    }

    async fn history(&self, country: &CountryCode, limit: usize) -> Result<Vec<RiskSnapshot>> {
        let state = self.state.read();
        Ok(state
            .snapshots
            .values()
            .rev()
            .filter(|s| &s.country == country)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AlertStore for MemoryStore {
    async fn create_alert_once(&self, alert: &NewAlert) -> Result<Option<AlertId>> {
        let mut state = self.state.write();
        if state.alerts.iter().any(|a| a.same_event(alert)) {
            return Ok(None);
        }
        state.next_alert_id += 1;
        let id = AlertId::new(state.next_alert_id);
        state.alerts.push(Alert {
            id,
            country: alert.country.clone(),
            kind: alert.kind,
            severity: alert.severity,
            title: alert.title.clone(),
            message: alert.message.clone(),
            read: false,
            event_date: alert.event_date,
            created_at: Utc::now(),
        });
        Ok(Some(id))
    }

    async fn list_alerts(&self, unread_only: bool, limit: usize) -> Result<Vec<Alert>> {
        Ok(self
            .state
            .read()
            .alerts
            .iter()
            .rev()
            .filter(|a| !unread_only || !a.read)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn mark_read(&self, id: AlertId) -> Result<bool> {
        let mut state = self.state.write();
        match state.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
