//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! A country record that fails validation is rejected for that country only;
//! the batch carries on with the rest.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Country code is not a two-letter ISO code.
    #[error("invalid country code '{code}'")]
    InvalidCountryCode {
        /// The rejected code.
        code: String,
    },

    /// Currency code is not a three-letter ISO code.
    #[error("invalid currency code '{code}' for country {country}")]
    InvalidCurrencyCode {
        /// Country owning the currency.
        country: String,
        /// The rejected code.
        code: String,
    },

    /// Country display name is empty.
    #[error("country {country} has an empty name")]
    EmptyCountryName {
        /// Country with the missing name.
        country: String,
    },

    /// Indicator values must be finite numbers.
    #[error("non-finite {kind} value for {country}")]
    NonFiniteIndicator {
        /// Country of the rejected record.
        country: String,
        /// Indicator kind of the rejected record.
        kind: String,
    },

    /// Exchange rates must be finite and strictly positive.
    #[error("invalid exchange rate {rate} for {pair}")]
    InvalidRate {
        /// Currency pair, e.g. `COP/USD`.
        pair: String,
        /// The rejected rate.
        rate: f64,
    },

    /// A snapshot for a later date already exists, so this date is frozen.
    #[error("snapshot for {country} on {date} is superseded by {latest}")]
    SnapshotSuperseded {
        /// Country of the rejected write.
        country: String,
        /// Date that was being written.
        date: NaiveDate,
        /// Latest stored snapshot date.
        latest: NaiveDate,
    },
}
