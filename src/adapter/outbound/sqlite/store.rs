//! SQLite store implementation.
//!
//! One [`SqliteStore`] implements every outbound port. Diesel calls are
//! blocking, so each one runs on the blocking thread pool with its own
//! pooled connection.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::dsl::max;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::BigInt;
use diesel::SqliteConnection;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{
    AlertRow, CountryRow, ExchangeRateRow, NewAlertRow, NewExchangeRateRow, NewIndicatorRow,
    NewSnapshotRow, SnapshotRow,
};
use crate::adapter::outbound::sqlite::database::schema::{
    alerts, countries, exchange_rates, indicators, risk_snapshots,
};
use crate::domain::score::CalculationDetail;
use crate::domain::{
    Alert, AlertId, AlertKind, Country, CountryCode, CurrencyCode, DomainError,
    ExchangeRatePoint, IndicatorKind, IndicatorRecord, IndicatorValue, NewAlert, RiskSnapshot,
    RiskTier, ScoreBundle, Severity, SnapshotId,
};
use crate::error::{Error, Result};
use crate::port::outbound::{
    AlertStore, CountryReader, CountryWriter, ExchangeRateReader, ExchangeRateWriter,
    IndicatorReader, IndicatorWriter, SnapshotStore,
};

/// SQLite-backed repository for countries, indicators, rates, snapshots
/// and alerts.
#[derive(Clone)]
pub struct SqliteStore {
    /// Database connection pool.
    pool: DbPool,
}

fn parse<T: FromStr<Err = String>>(value: &str) -> Result<T> {
    value.parse().map_err(Error::Parse)
}

fn to_limit(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

impl SqliteStore {
    /// Create a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run `op` with a pooled connection on the blocking thread pool.
    async fn with_conn<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
            op(&mut conn)
        })
        .await
        .map_err(|e| Error::Database(format!("blocking task failed: {e}")))?
    }

    fn country_from_row(row: CountryRow) -> Country {
        Country {
            code: CountryCode::new(row.code),
            name: row.name,
            currency: CurrencyCode::new(row.currency),
            active: row.active,
        }
    }

    fn rate_from_row(row: ExchangeRateRow) -> ExchangeRatePoint {
        ExchangeRatePoint {
            origin: CurrencyCode::new(row.origin),
            destination: CurrencyCode::new(row.destination),
            date: row.rate_date,
            rate: row.rate,
            variation: row.variation,
            source: row.source,
        }
    }

    fn snapshot_from_row(row: SnapshotRow) -> Result<RiskSnapshot> {
        let detail: CalculationDetail =
            serde_json::from_str(&row.detail).map_err(|e| Error::Parse(e.to_string()))?;
        Ok(RiskSnapshot {
            id: SnapshotId::new(row.id),
            country: CountryCode::new(row.country_code),
            date: row.calculation_date,
            economic: row.economic,
            exchange: row.exchange,
            stability: row.stability,
            composite: row.composite,
            tier: parse::<RiskTier>(&row.tier)?,
            detail,
        })
    }

    fn alert_from_row(row: AlertRow) -> Result<Alert> {
        Ok(Alert {
            id: AlertId::new(row.id),
            country: row.country_code.map(CountryCode::new),
            kind: parse::<AlertKind>(&row.kind)?,
            severity: parse::<Severity>(&row.severity)?,
            title: row.title,
            message: row.message,
            read: row.read,
            event_date: row.event_date,
            created_at: row.created_at.and_utc(),
        })
    }
}

#[async_trait]
impl CountryReader for SqliteStore {
    async fn list_active(&self) -> Result<Vec<Country>> {
        self.with_conn(|conn| {
            let rows: Vec<CountryRow> = countries::table
                .filter(countries::active.eq(true))
                .order(countries::code.asc())
                .select(CountryRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(Self::country_from_row).collect())
        })
        .await
    }

    async fn get_country(&self, code: &CountryCode) -> Result<Option<Country>> {
        let code = code.to_string();
        self.with_conn(move |conn| {
            let row: Option<CountryRow> = countries::table
                .find(code)
                .select(CountryRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(Self::country_from_row))
        })
        .await
    }
}

#[async_trait]
impl CountryWriter for SqliteStore {
    async fn upsert_country(&self, country: &Country) -> Result<()> {
        let row = CountryRow {
            code: country.code.to_string(),
            name: country.name.clone(),
            currency: country.currency.to_string(),
            active: country.active,
        };
        self.with_conn(move |conn| {
            diesel::insert_into(countries::table)
                .values(&row)
                .on_conflict(countries::code)
                .do_update()
                .set(&row)
                .execute(conn)?;
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl IndicatorReader for SqliteStore {
    async fn get_indicator(
        &self,
        country: &CountryCode,
        kind: IndicatorKind,
        year: Option<i32>,
    ) -> Result<Option<IndicatorValue>> {
        let country = country.to_string();
        self.with_conn(move |conn| {
            let mut query = indicators::table
                .filter(indicators::country_code.eq(country))
                .filter(indicators::kind.eq(kind.as_str()))
                .into_boxed();
            if let Some(year) = year {
                query = query.filter(indicators::year.eq(year));
            }
            let found: Option<(i32, f64)> = query
                .order((indicators::year.desc(), indicators::updated_at.desc()))
                .select((indicators::year, indicators::value))
                .first(conn)
                .optional()?;
            Ok(found.map(|(year, value)| IndicatorValue { year, value }))
        })
        .await
    }
}

#[async_trait]
impl IndicatorWriter for SqliteStore {
    async fn upsert_indicator(&self, record: &IndicatorRecord) -> Result<()> {
        let row = NewIndicatorRow {
            country_code: record.country.to_string(),
            kind: record.kind.as_str().to_string(),
            year: record.year,
            value: record.value,
            unit: record.unit.as_str().to_string(),
            source: record.source.as_str().to_string(),
            updated_at: record.updated_at.naive_utc(),
        };
        self.with_conn(move |conn| {
            diesel::insert_into(indicators::table)
                .values(&row)
                .on_conflict((
                    indicators::country_code,
                    indicators::kind,
                    indicators::year,
                ))
                .do_update()
                .set(&row)
                .execute(conn)?;
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl ExchangeRateReader for SqliteStore {
    async fn recent_variations(
        &self,
        origin: &CurrencyCode,
        destination: &CurrencyCode,
        max_count: usize,
    ) -> Result<Vec<f64>> {
        let origin = origin.to_string();
        let destination = destination.to_string();
        self.with_conn(move |conn| {
            let variations: Vec<Option<f64>> = exchange_rates::table
                .filter(exchange_rates::origin.eq(origin))
                .filter(exchange_rates::destination.eq(destination))
                .filter(exchange_rates::variation.is_not_null())
                .order(exchange_rates::rate_date.desc())
                .limit(to_limit(max_count))
                .select(exchange_rates::variation)
                .load(conn)?;
            Ok(variations.into_iter().flatten().collect())
        })
        .await
    }

    async fn point_before(
        &self,
        origin: &CurrencyCode,
        destination: &CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<ExchangeRatePoint>> {
        let origin = origin.to_string();
        let destination = destination.to_string();
        self.with_conn(move |conn| {
            let row: Option<ExchangeRateRow> = exchange_rates::table
                .filter(exchange_rates::origin.eq(origin))
                .filter(exchange_rates::destination.eq(destination))
                .filter(exchange_rates::rate_date.lt(date))
                .order(exchange_rates::rate_date.desc())
                .select(ExchangeRateRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(Self::rate_from_row))
        })
        .await
    }

    async fn point_after(
        &self,
        origin: &CurrencyCode,
        destination: &CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<ExchangeRatePoint>> {
        let origin = origin.to_string();
        let destination = destination.to_string();
        self.with_conn(move |conn| {
            let row: Option<ExchangeRateRow> = exchange_rates::table
                .filter(exchange_rates::origin.eq(origin))
                .filter(exchange_rates::destination.eq(destination))
                .filter(exchange_rates::rate_date.gt(date))
                .order(exchange_rates::rate_date.asc())
                .select(ExchangeRateRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(Self::rate_from_row))
        })
        .await
    }
}

#[async_trait]
impl ExchangeRateWriter for SqliteStore {
    async fn upsert_rate(&self, point: &ExchangeRatePoint) -> Result<()> {
        let row = NewExchangeRateRow {
            origin: point.origin.to_string(),
            destination: point.destination.to_string(),
            rate_date: point.date,
            rate: point.rate,
            variation: point.variation,
            source: point.source.clone(),
        };
        self.with_conn(move |conn| {
            diesel::insert_into(exchange_rates::table)
                .values(&row)
                .on_conflict((
                    exchange_rates::origin,
                    exchange_rates::destination,
                    exchange_rates::rate_date,
                ))
                .do_update()
                .set(&row)
                .execute(conn)?;
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl SnapshotStore for SqliteStore {
    async fn upsert_snapshot(
        &self,
        country: &CountryCode,
        date: NaiveDate,
        bundle: &ScoreBundle,
    ) -> Result<SnapshotId> {
        let row = NewSnapshotRow {
            country_code: country.to_string(),
            calculation_date: date,
            economic: bundle.economic,
            exchange: bundle.exchange,
            stability: bundle.stability,
            composite: bundle.composite,
            tier: bundle.tier.as_str().to_string(),
            detail: serde_json::to_string(&bundle.detail)?,
            updated_at: Utc::now().naive_utc(),
        };
        self.with_conn(move |conn| {
            conn.immediate_transaction(|conn| {
                let latest: Option<NaiveDate> = risk_snapshots::table
                    .filter(risk_snapshots::country_code.eq(&row.country_code))
                    .select(max(risk_snapshots::calculation_date))
                    .first(conn)?;
                if let Some(latest) = latest.filter(|latest| *latest > date) {
                    return Err(DomainError::SnapshotSuperseded {
                        country: row.country_code.clone(),
                        date,
                        latest,
                    }
                    .into());
                }

                diesel::insert_into(risk_snapshots::table)
                    .values(&row)
                    .on_conflict((
                        risk_snapshots::country_code,
                        risk_snapshots::calculation_date,
                    ))
                    .do_update()
                    .set(&row)
                    .execute(conn)?;

                let id: i64 = risk_snapshots::table
                    .filter(risk_snapshots::country_code.eq(&row.country_code))
                    .filter(risk_snapshots::calculation_date.eq(date))
                    .select(risk_snapshots::id)
                    .first(conn)?;
                Ok(SnapshotId::new(id))
            })
        })
        .await
    }

    async fn prior_snapshot(
        &self,
        country: &CountryCode,
        exclude_date: NaiveDate,
    ) -> Result<Option<RiskSnapshot>> {
        let country = country.to_string();
        self.with_conn(move |conn| {
            let row: Option<SnapshotRow> = risk_snapshots::table
                .filter(risk_snapshots::country_code.eq(country))
                .filter(risk_snapshots::calculation_date.lt(exclude_date))
                .order(risk_snapshots::calculation_date.desc())
                .select(SnapshotRow::as_select())
                .first(conn)
                .optional()?;
            row.map(Self::snapshot_from_row).transpose()
        })
        .await
    }

    async fn get_snapshot(
        &self,
        country: &CountryCode,
        date: NaiveDate,
    ) -> Result<Option<RiskSnapshot>> {
        let country = country.to_string();
        self.with_conn(move |conn| {
            let row: Option<SnapshotRow> = risk_snapshots::table
                .filter(risk_snapshots::country_code.eq(country))
                .filter(risk_snapshots::calculation_date.eq(date))
                .select(SnapshotRow::as_select())
                .first(conn)
                .optional()?;
            row.map(Self::snapshot_from_row).transpose()
        })
        .await
    }

    async fn history(&self, country: &CountryCode, limit: usize) -> Result<Vec<RiskSnapshot>> {
        let country = country.to_string();
        self.with_conn(move |conn| {
            let rows: Vec<SnapshotRow> = risk_snapshots::table
                .filter(risk_snapshots::country_code.eq(country))
                .order(risk_snapshots::calculation_date.desc())
                .limit(to_limit(limit))
                .select(SnapshotRow::as_select())
                .load(conn)?;
            rows.into_iter().map(Self::snapshot_from_row).collect()
        })
        .await
    }
}

#[async_trait]
impl AlertStore for SqliteStore {
    async fn create_alert_once(&self, alert: &NewAlert) -> Result<Option<AlertId>> {
        let row = NewAlertRow {
            country_code: alert.country.as_ref().map(ToString::to_string),
            kind: alert.kind.as_str().to_string(),
            severity: alert.severity.as_str().to_string(),
            title: alert.title.clone(),
            message: alert.message.clone(),
            read: false,
            event_date: alert.event_date,
            created_at: Utc::now().naive_utc(),
        };
        self.with_conn(move |conn| {
            conn.immediate_transaction(|conn| {
                // idx_alerts_event rejects a second alert for the same event.
                match diesel::insert_into(alerts::table).values(&row).execute(conn) {
                    Ok(_) => {}
                    Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                        return Ok(None);
                    }
                    Err(e) => return Err(e.into()),
                }
                let id: i64 = diesel::select(diesel::dsl::sql::<BigInt>("last_insert_rowid()"))
                    .get_result(conn)?;
                Ok(Some(AlertId::new(id)))
            })
        })
        .await
    }

    async fn list_alerts(&self, unread_only: bool, limit: usize) -> Result<Vec<Alert>> {
        self.with_conn(move |conn| {
            let mut query = alerts::table.into_boxed();
            if unread_only {
                query = query.filter(alerts::read.eq(false));
            }
            let rows: Vec<AlertRow> = query
                .order(alerts::id.desc())
                .limit(to_limit(limit))
                .select(AlertRow::as_select())
                .load(conn)?;
            rows.into_iter().map(Self::alert_from_row).collect()
        })
        .await
    }

    async fn mark_read(&self, id: AlertId) -> Result<bool> {
        self.with_conn(move |conn| {
            let updated = diesel::update(alerts::table.find(id.value()))
                .set(alerts::read.eq(true))
                .execute(conn)?;
            Ok(updated > 0)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::open;
    use crate::domain::score::{self, RiskInputs};
    use crate::testkit::domain::{country, indicator};
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, SqliteStore) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.db");
        let pool = open(path.to_str().unwrap()).unwrap();
        (dir, SqliteStore::new(pool))
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    #[tokio::test]
    async fn countries_round_trip_and_filter_inactive() {
        let (_dir, store) = temp_store();
        store.upsert_country(&country("CO", "COP")).await.unwrap();
        let mut pe = country("PE", "PEN");
        pe.active = false;
        store.upsert_country(&pe).await.unwrap();

        let active = store.list_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].code, CountryCode::new("CO"));
        assert!(store
            .get_country(&CountryCode::new("PE"))
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn indicator_upsert_replaces_same_year() {
        let (_dir, store) = temp_store();
        store
            .upsert_indicator(&indicator("CO", IndicatorKind::Inflation, 2024, 9.0))
            .await
            .unwrap();
        store
            .upsert_indicator(&indicator("CO", IndicatorKind::Inflation, 2024, 7.0))
            .await
            .unwrap();
        store
            .upsert_indicator(&indicator("CO", IndicatorKind::Inflation, 2023, 11.0))
            .await
            .unwrap();

        let latest = store
            .get_indicator(&CountryCode::new("CO"), IndicatorKind::Inflation, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest, IndicatorValue { year: 2024, value: 7.0 });
    }

    #[tokio::test]
    async fn snapshot_upsert_keeps_id_and_rejects_older_dates() {
        let (_dir, store) = temp_store();
        let co = CountryCode::new("CO");
        let bundle = score::score(&RiskInputs::default());

        let first = store.upsert_snapshot(&co, day(2), &bundle).await.unwrap();
        let again = store.upsert_snapshot(&co, day(2), &bundle).await.unwrap();
        assert_eq!(first, again);

        let older = store.upsert_snapshot(&co, day(1), &bundle).await;
        assert!(matches!(
            older,
            Err(Error::Domain(DomainError::SnapshotSuperseded { .. }))
        ));

        let stored = store.get_snapshot(&co, day(2)).await.unwrap().unwrap();
        assert_eq!(stored.detail, bundle.detail);
        assert_eq!(stored.tier, bundle.tier);
    }

    #[tokio::test]
    async fn variations_come_newest_first_without_gaps() {
        let (_dir, store) = temp_store();
        let cop = CurrencyCode::new("COP");
        let usd = CurrencyCode::new("USD");
        for (d, variation) in [(1, None), (2, Some(1.0)), (3, Some(-2.0))] {
            store
                .upsert_rate(&ExchangeRatePoint {
                    origin: cop.clone(),
                    destination: usd.clone(),
                    date: day(d),
                    rate: 4000.0,
                    variation,
                    source: "test".to_string(),
                })
                .await
                .unwrap();
        }

        let variations = store.recent_variations(&cop, &usd, 10).await.unwrap();
        assert_eq!(variations, vec![-2.0, 1.0]);
        let before = store.point_before(&cop, &usd, day(3)).await.unwrap().unwrap();
        assert_eq!(before.date, day(2));
        let after = store.point_after(&cop, &usd, day(1)).await.unwrap().unwrap();
        assert_eq!(after.date, day(2));
        assert!(store.point_after(&cop, &usd, day(3)).await.unwrap().is_none());
    }

    fn critical_alert(country: Option<&str>, event_date: NaiveDate) -> NewAlert {
        NewAlert {
            country: country.map(CountryCode::new),
            kind: AlertKind::Risk,
            severity: Severity::Critical,
            title: "Critical risk index".to_string(),
            message: "test".to_string(),
            event_date,
        }
    }

    #[tokio::test]
    async fn alerts_dedupe_by_event_date_and_track_read_flag() {
        let (_dir, store) = temp_store();
        let alert = critical_alert(Some("CO"), day(1));

        let id = store.create_alert_once(&alert).await.unwrap().unwrap();
        assert!(store.create_alert_once(&alert).await.unwrap().is_none());
        let next_day = store
            .create_alert_once(&critical_alert(Some("CO"), day(2)))
            .await
            .unwrap();
        assert!(next_day.is_some());

        let stored = store.list_alerts(false, 10).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1].event_date, day(1));

        assert!(store.mark_read(id).await.unwrap());
        let unread = store.list_alerts(true, 10).await.unwrap();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].event_date, day(2));
    }

    #[tokio::test]
    async fn alerts_without_country_are_deduped_too() {
        let (_dir, store) = temp_store();
        let alert = critical_alert(None, day(3));

        assert!(store.create_alert_once(&alert).await.unwrap().is_some());
        assert!(store.create_alert_once(&alert).await.unwrap().is_none());
        assert!(store
            .create_alert_once(&critical_alert(Some("CO"), day(3)))
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_store_one_alert() {
        let (_dir, store) = temp_store();
        let alert = critical_alert(Some("AR"), day(4));

        let attempts = (0..8).map(|_| {
            let store = store.clone();
            let alert = alert.clone();
            tokio::spawn(async move { store.create_alert_once(&alert).await })
        });
        let mut created = 0;
        for attempt in attempts.collect::<Vec<_>>() {
            if attempt.await.unwrap().unwrap().is_some() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.list_alerts(false, 10).await.unwrap().len(), 1);
    }
}
