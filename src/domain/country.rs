//! Country reference data read by the engine.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{CountryCode, CurrencyCode};

/// A country tracked by the engine.
///
/// Countries are created and updated by an external sync process; the engine
/// only reads those flagged `active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub code: CountryCode,
    pub name: String,
    pub currency: CurrencyCode,
    pub active: bool,
}

impl Country {
    /// Create an active country.
    pub fn new(
        code: impl Into<CountryCode>,
        name: impl Into<String>,
        currency: impl Into<CurrencyCode>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            currency: currency.into(),
            active: true,
        }
    }

    /// Check the record is well formed enough to score.
    ///
    /// # Errors
    ///
    /// Returns the first violated field as a [`DomainError`].
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.code.is_valid() {
            return Err(DomainError::InvalidCountryCode {
                code: self.code.to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyCountryName {
                country: self.code.to_string(),
            });
        }
        if !self.currency.is_valid() {
            return Err(DomainError::InvalidCurrencyCode {
                country: self.code.to_string(),
                code: self.currency.to_string(),
            });
        }
        Ok(())
    }
}
