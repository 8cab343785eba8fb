//! Handlers for the `alerts` command group.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::AlertId;
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap::Services;

#[derive(Tabled)]
struct AlertRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Date")]
    event_date: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Read")]
    read: &'static str,
}

/// Execute `alerts list`.
pub async fn list(services: &Services, unread_only: bool, limit: usize) -> Result<()> {
    let alerts = services.ports.alerts.list_alerts(unread_only, limit).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "alerts.list",
            "alerts": alerts,
        }));
        return Ok(());
    }

    output::section(if unread_only { "Unread alerts" } else { "Alerts" });
    if alerts.is_empty() {
        output::note("(none)");
        return Ok(());
    }

    let rows = alerts.iter().map(|a| AlertRow {
        id: a.id.value(),
        created: a.created_at.format("%Y-%m-%d %H:%M").to_string(),
        event_date: a.event_date.to_string(),
        country: a
            .country
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string),
        severity: output::severity(a.severity),
        kind: a.kind.to_string(),
        title: a.title.clone(),
        read: if a.read { "yes" } else { "no" },
    });
    output::lines(&Table::new(rows).to_string());

    for alert in alerts.iter().filter(|a| output::verbosity() > 0 || !a.read) {
        output::note(&format!("#{} {}", alert.id, alert.message));
    }
    Ok(())
}

/// Execute `alerts read`.
pub async fn read(services: &Services, id: i64) -> Result<()> {
    let id = AlertId::new(id);
    if !services.ports.alerts.mark_read(id).await? {
        return Err(Error::NotFound(format!("alert {id}")));
    }

    if output::is_json() {
        output::json_output(json!({
            "command": "alerts.read",
            "id": id,
            "read": true,
        }));
        return Ok(());
    }
    output::success(&format!("Alert {id} marked as read"));
    Ok(())
}
