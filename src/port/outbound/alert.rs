//! Alert persistence port.

use async_trait::async_trait;

use crate::domain::{Alert, AlertId, NewAlert};
use crate::error::Result;

/// Append-only alert storage with a read flag.
#[async_trait]
pub trait AlertStore: Send + Sync {
    /// Append `alert` unless one for the same country, kind, severity, title
    /// and event date is already stored.
    ///
    /// The check and the insert are atomic with respect to concurrent
    /// callers. Returns the new id, or `None` when the alert was a duplicate.
    async fn create_alert_once(&self, alert: &NewAlert) -> Result<Option<AlertId>>;

    /// Up to `limit` alerts, newest first.
    async fn list_alerts(&self, unread_only: bool, limit: usize) -> Result<Vec<Alert>>;

    /// Set the read flag. Returns `false` when no such alert exists.
    async fn mark_read(&self, id: AlertId) -> Result<bool>;
}
