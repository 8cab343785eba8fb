//! Handler for `recalculate`.

use chrono::{NaiveDate, Utc};
use serde_json::json;
use tabled::{Table, Tabled};
use tokio::sync::watch;
use tracing::warn;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap::Services;
use crate::port::inbound::risk::RecalculationSummary;

#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Error")]
    message: String,
}

/// Run a batch recalculation for `date` (default today, UTC).
///
/// Ctrl-C stops the batch before further countries start. Returns whether
/// every country was processed.
pub async fn execute(services: &Services, date: Option<NaiveDate>) -> Result<bool> {
    let date = date.unwrap_or_else(|| Utc::now().date_naive());

    let (shutdown_tx, shutdown) = watch::channel(false);
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, finishing in-flight countries");
            let _ = shutdown_tx.send(true);
        }
    });

    let summary = services
        .engine
        .recalculate_all_with_shutdown(date, shutdown)
        .await;
    interrupt.abort();
    let summary = summary?;

    render(&summary);
    Ok(summary.is_complete())
}

/// Print a recalculation summary in the active output mode.
pub fn render(summary: &RecalculationSummary) {
    if output::is_json() {
        output::json_output(json!({
            "command": "recalculate",
            "summary": summary,
        }));
        return;
    }

    output::section("Recalculation");
    output::field("Date", summary.run_date);
    output::field("Snapshots", output::positive(summary.snapshots_updated));
    output::field("Warnings", summary.warnings_emitted);
    output::field("Criticals", summary.criticals_emitted);

    if !summary.failed.is_empty() {
        output::field("Failed", output::negative(summary.failed.len()));
        let rows = summary.failed.iter().map(|f| FailureRow {
            country: f.country.to_string(),
            stage: f.stage.to_string(),
            message: f.message.clone(),
        });
        output::lines(&Table::new(rows).to_string());
    }
    if !summary.skipped.is_empty() {
        let skipped: Vec<&str> = summary.skipped.iter().map(|c| c.as_str()).collect();
        output::warning(&format!("Skipped after interrupt: {}", skipped.join(", ")));
    }
    if summary.is_complete() {
        output::success("All active countries recalculated");
    }
}
