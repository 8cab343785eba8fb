//! Database model types for Diesel ORM.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use super::schema::{alerts, countries, exchange_rates, indicators, risk_snapshots};

/// Database row for a country.
#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = countries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CountryRow {
    pub code: String,
    pub name: String,
    pub currency: String,
    pub active: bool,
}

/// Database row for an indicator (insertable).
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = indicators)]
pub struct NewIndicatorRow {
    pub country_code: String,
    pub kind: String,
    pub year: i32,
    pub value: f64,
    pub unit: String,
    pub source: String,
    pub updated_at: NaiveDateTime,
}

/// Database row for an exchange-rate point (insertable).
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = exchange_rates)]
#[diesel(treat_none_as_null = true)]
pub struct NewExchangeRateRow {
    pub origin: String,
    pub destination: String,
    pub rate_date: NaiveDate,
    pub rate: f64,
    pub variation: Option<f64>,
    pub source: String,
}

/// Database row for an exchange-rate point (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = exchange_rates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExchangeRateRow {
    pub id: i64,
    pub origin: String,
    pub destination: String,
    pub rate_date: NaiveDate,
    pub rate: f64,
    pub variation: Option<f64>,
    pub source: String,
}

/// Database row for a risk snapshot (insertable).
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = risk_snapshots)]
pub struct NewSnapshotRow {
    pub country_code: String,
    pub calculation_date: NaiveDate,
    pub economic: f64,
    pub exchange: f64,
    pub stability: f64,
    pub composite: f64,
    pub tier: String,
    pub detail: String,
    pub updated_at: NaiveDateTime,
}

/// Database row for a risk snapshot (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = risk_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SnapshotRow {
    pub id: i64,
    pub country_code: String,
    pub calculation_date: NaiveDate,
    pub economic: f64,
    pub exchange: f64,
    pub stability: f64,
    pub composite: f64,
    pub tier: String,
    pub detail: String,
    pub updated_at: NaiveDateTime,
}

/// Database row for an alert (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = alerts)]
pub struct NewAlertRow {
    pub country_code: Option<String>,
    pub kind: String,
    pub severity: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub event_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Database row for an alert (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = alerts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AlertRow {
    pub id: i64,
    pub country_code: Option<String>,
    pub kind: String,
    pub severity: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub event_date: NaiveDate,
    pub created_at: NaiveDateTime,
}
