//! Handler for `seed`.

use chrono::Utc;
use serde_json::json;

use crate::adapter::inbound::cli::{output, recalculate};
use crate::error::Result;
use crate::infrastructure::bootstrap::Services;
use crate::port::inbound::risk::RiskEngine;

/// Load the demo data set as of today, then recalculate.
///
/// Returns whether the recalculation processed every country.
pub async fn execute(services: &Services) -> Result<bool> {
    let today = Utc::now().date_naive();
    let report = services.seed().run(today).await?;
    let summary = services.engine.recalculate_all(today).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "seed",
            "seed": report,
            "summary": summary,
        }));
        return Ok(summary.is_complete());
    }

    output::section("Seed");
    output::field("Countries", report.countries);
    output::field("Indicators", report.indicators);
    output::field("Rates", report.rates);
    output::field("FX alerts", report.fx_alerts);
    recalculate::render(&summary);
    Ok(summary.is_complete())
}
