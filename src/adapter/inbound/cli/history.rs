//! Handler for `history`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::CountryCode;
use crate::error::Result;
use crate::infrastructure::bootstrap::Services;

#[derive(Tabled)]
struct SnapshotRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Composite")]
    composite: String,
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "Economic")]
    economic: String,
    #[tabled(rename = "Exchange")]
    exchange: String,
    #[tabled(rename = "Stability")]
    stability: String,
}

/// Show up to `limit` stored snapshots of `country`, newest first.
pub async fn execute(services: &Services, country: &str, limit: usize) -> Result<()> {
    let code = CountryCode::new(country);
    let snapshots = services.ports.snapshots.history(&code, limit).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "history",
            "country": code,
            "snapshots": snapshots,
        }));
        return Ok(());
    }

    output::section(&format!("Risk history {code}"));
    if snapshots.is_empty() {
        output::note("(no snapshots)");
        output::hint(&format!(
            "run {} first",
            output::highlight("riskpulse recalculate")
        ));
        return Ok(());
    }

    let rows = snapshots.iter().map(|s| SnapshotRow {
        date: s.date.to_string(),
        composite: format!("{:.2}", s.composite),
        tier: output::tier(s.tier),
        economic: format!("{:.2}", s.economic),
        exchange: format!("{:.2}", s.exchange),
        stability: format!("{:.2}", s.stability),
    });
    output::lines(&Table::new(rows).to_string());
    Ok(())
}
