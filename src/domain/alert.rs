//! Alert records raised by the engine and the sync layer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::id::{AlertId, CountryCode};

/// What an alert is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Risk,
    Exchange,
    Indicator,
}

impl AlertKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Risk => "RISK",
            Self::Exchange => "EXCHANGE",
            Self::Indicator => "INDICATOR",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RISK" => Ok(Self::Risk),
            "EXCHANGE" => Ok(Self::Exchange),
            "INDICATOR" => Ok(Self::Indicator),
            other => Err(format!("unknown alert kind '{other}'")),
        }
    }
}

/// How urgent an alert is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(format!("unknown severity '{other}'")),
        }
    }
}

/// An alert to be created.
///
/// `event_date` is the business date the alert describes: the calculation
/// date for risk alerts and the quote date for exchange alerts. At most one
/// alert exists per country, kind, severity, title and event date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAlert {
    pub country: Option<CountryCode>,
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub event_date: NaiveDate,
}

/// A stored alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub country: Option<CountryCode>,
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub event_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Alert {
    /// True when `candidate` describes the same event as this alert.
    #[must_use]
    pub fn same_event(&self, candidate: &NewAlert) -> bool {
        self.country == candidate.country
            && self.kind == candidate.kind
            && self.severity == candidate.severity
            && self.title == candidate.title
            && self.event_date == candidate.event_date
    }
}
