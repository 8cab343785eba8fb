//! Country reference data ports.

use async_trait::async_trait;

use crate::domain::{Country, CountryCode};
use crate::error::Result;

/// Read access to tracked countries.
#[async_trait]
pub trait CountryReader: Send + Sync {
    /// All countries flagged active, ordered by code.
    async fn list_active(&self) -> Result<Vec<Country>>;

    /// Look up one country regardless of its active flag.
    async fn get_country(&self, code: &CountryCode) -> Result<Option<Country>>;
}

/// Write access used by the sync layer.
#[async_trait]
pub trait CountryWriter: Send + Sync {
    /// Create or replace a country keyed by its code.
    async fn upsert_country(&self, country: &Country) -> Result<()>;
}
