//! Macroeconomic indicator records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::CountryCode;

/// Kind of macroeconomic indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorKind {
    /// Gross domestic product level.
    Gdp,
    /// GDP per capita, USD.
    GdpPerCapita,
    /// Annual inflation, percent.
    Inflation,
    /// Unemployment rate, percent.
    Unemployment,
    /// Trade balance, percent of GDP.
    TradeBalance,
    /// Public debt, percent of GDP.
    DebtToGdp,
}

impl IndicatorKind {
    pub const ALL: [Self; 6] = [
        Self::Gdp,
        Self::GdpPerCapita,
        Self::Inflation,
        Self::Unemployment,
        Self::TradeBalance,
        Self::DebtToGdp,
    ];

    /// Stable storage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gdp => "GDP",
            Self::GdpPerCapita => "GDP_PER_CAPITA",
            Self::Inflation => "INFLATION",
            Self::Unemployment => "UNEMPLOYMENT",
            Self::TradeBalance => "TRADE_BALANCE",
            Self::DebtToGdp => "DEBT_TO_GDP",
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown indicator kind '{s}'"))
    }
}

/// Unit an indicator value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorUnit {
    Percent,
    Usd,
    UsdBillions,
}

impl IndicatorUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Percent => "PERCENT",
            Self::Usd => "USD",
            Self::UsdBillions => "USD_BILLIONS",
        }
    }
}

impl FromStr for IndicatorUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PERCENT" => Ok(Self::Percent),
            "USD" => Ok(Self::Usd),
            "USD_BILLIONS" => Ok(Self::UsdBillions),
            other => Err(format!("unknown indicator unit '{other}'")),
        }
    }
}

/// Where an indicator value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorSource {
    WorldBank,
    Manual,
}

impl IndicatorSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WorldBank => "WORLD_BANK",
            Self::Manual => "MANUAL",
        }
    }
}

impl FromStr for IndicatorSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WORLD_BANK" => Ok(Self::WorldBank),
            "MANUAL" => Ok(Self::Manual),
            other => Err(format!("unknown indicator source '{other}'")),
        }
    }
}

/// One stored indicator value, unique per (country, kind, year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    pub country: CountryCode,
    pub kind: IndicatorKind,
    pub year: i32,
    pub value: f64,
    pub unit: IndicatorUnit,
    pub source: IndicatorSource,
    pub updated_at: DateTime<Utc>,
}

impl IndicatorRecord {
    /// Create a manual record stamped with the current time.
    pub fn new(
        country: impl Into<CountryCode>,
        kind: IndicatorKind,
        year: i32,
        value: f64,
        unit: IndicatorUnit,
    ) -> Self {
        Self {
            country: country.into(),
            kind,
            year,
            value,
            unit,
            source: IndicatorSource::Manual,
            updated_at: Utc::now(),
        }
    }
}

/// Result of an indicator lookup: the value and the year it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorValue {
    pub year: i32,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip_through_from_str() {
        for kind in IndicatorKind::ALL {
            assert_eq!(kind.as_str().parse::<IndicatorKind>(), Ok(kind));
        }
        assert!("PIB".parse::<IndicatorKind>().is_err());
    }

    #[test]
    fn kind_serializes_with_storage_name() {
        let json = serde_json::to_string(&IndicatorKind::DebtToGdp).unwrap();
        assert_eq!(json, "\"DEBT_TO_GDP\"");
    }
}
