//! Handler for `preview`.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::domain::CountryCode;
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap::Services;
use crate::port::inbound::risk::RiskEngine;

/// Score one stored country without persisting the result.
pub async fn execute(services: &Services, country: &str) -> Result<()> {
    let code = CountryCode::new(country);
    let Some(country) = services.ports.countries.get_country(&code).await? else {
        return Err(Error::NotFound(format!("country {code}")));
    };

    let bundle = services.engine.calculate_risk(&country).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "preview",
            "country": country.code,
            "bundle": bundle,
        }));
        return Ok(());
    }

    output::section(&format!("{} ({})", country.name, country.code));
    output::field("Economic", format!("{:.2}", bundle.economic));
    output::field("Exchange", format!("{:.2}", bundle.exchange));
    output::field("Stability", format!("{:.2}", bundle.stability));
    output::field("Composite", output::highlight(format!("{:.2}", bundle.composite)));
    output::field("Tier", output::tier(bundle.tier));
    if let Some(growth) = bundle.detail.stability.growth {
        output::field("GDP growth", format!("{growth:.2}%"));
    }
    if let Some(volatility) = bundle.detail.exchange.volatility {
        output::field("FX vol", format!("{volatility:.4}"));
    }
    if !bundle.detail.missing.is_empty() {
        output::field("Missing", output::muted(&bundle.detail.missing));
    }
    output::note(&bundle.detail.formula);
    Ok(())
}
