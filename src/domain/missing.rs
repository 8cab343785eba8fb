//! Typed record of inputs that were absent during a computation.
//!
//! Absence is never folded into a zero value: a missing indicator skips its
//! deduction and is listed here so the snapshot detail shows what the score
//! was computed without.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An input the scoring could not find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissingField {
    GdpPerCapita,
    Inflation,
    Unemployment,
    DebtToGdp,
    TradeBalance,
    GdpTrend,
    ExchangeRate,
}

impl MissingField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GdpPerCapita => "GDP_PER_CAPITA",
            Self::Inflation => "INFLATION",
            Self::Unemployment => "UNEMPLOYMENT",
            Self::DebtToGdp => "DEBT_TO_GDP",
            Self::TradeBalance => "TRADE_BALANCE",
            Self::GdpTrend => "GDP_TREND",
            Self::ExchangeRate => "EXCHANGE_RATE",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, duplicate-free set of [`MissingField`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissingFields(BTreeSet<MissingField>);

impl MissingFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: MissingField) {
        self.0.insert(field);
    }

    /// Record `field` when `value` is absent and pass the value through.
    pub fn track(&mut self, field: MissingField, value: Option<f64>) -> Option<f64> {
        if value.is_none() {
            self.insert(field);
        }
        value
    }

    #[must_use]
    pub fn contains(&self, field: MissingField) -> bool {
        self.0.contains(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = MissingField> + '_ {
        self.0.iter().copied()
    }

    /// Union of `self` and `other`.
    #[must_use]
    pub fn merged(mut self, other: &Self) -> Self {
        self.0.extend(other.iter());
        self
    }
}

impl FromIterator<MissingField> for MissingFields {
    fn from_iter<I: IntoIterator<Item = MissingField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.iter().map(MissingField::as_str).collect();
        f.write_str(&names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_records_only_absent_values() {
        let mut missing = MissingFields::new();
        assert_eq!(missing.track(MissingField::Inflation, Some(4.0)), Some(4.0));
        assert_eq!(missing.track(MissingField::DebtToGdp, None), None);
        assert!(!missing.contains(MissingField::Inflation));
        assert!(missing.contains(MissingField::DebtToGdp));
    }

    #[test]
    fn merged_is_a_set_union() {
        let a: MissingFields = [MissingField::GdpTrend, MissingField::Inflation]
            .into_iter()
            .collect();
        let b: MissingFields = [MissingField::Inflation, MissingField::ExchangeRate]
            .into_iter()
            .collect();
        let merged = a.merged(&b);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn serializes_as_array_of_names() {
        let missing: MissingFields = [MissingField::ExchangeRate].into_iter().collect();
        assert_eq!(serde_json::to_string(&missing).unwrap(), "[\"EXCHANGE_RATE\"]");
    }
}
