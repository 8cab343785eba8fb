//! Handlers for the `config` command group.
//!
//! Neither command opens the database.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::{Config, DATABASE_ENV, DEFAULT_CONFIG_PATH};

fn source(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => DEFAULT_CONFIG_PATH.to_string(),
        None => "(defaults)".to_string(),
    }
}

/// Execute `config show`.
pub fn execute_show(path: Option<&Path>, config: &Config) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "source": source(path),
            "config": config,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Source", source(path));
    output::field("Database", &config.database);
    if std::env::var_os(DATABASE_ENV).is_some() {
        output::note(&format!("database overridden by {DATABASE_ENV}"));
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Engine");
    output::field("Reference", &config.engine.reference_currency);
    output::field("FX window", format!("{} points", config.engine.fx_window));
    output::field("Concurrency", config.engine.max_concurrency);
    output::field(
        "Timeout",
        format!("{}ms", config.engine.repository_timeout_ms),
    );

    output::section("Alerts");
    output::field("Critical", format!("< {:.2}", config.alerts.critical_index));
    output::field("Drop", format!("> {:.2} points", config.alerts.drop_points));
    output::field(
        "Inflation",
        format!("> {:.2}%", config.alerts.extreme_inflation),
    );
    output::field("FX swing", format!("> {:.2}%", config.alerts.fx_variation));
    Ok(())
}

/// Execute `config validate`.
///
/// Loading already validates, so reaching this point means the file passed.
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "source": source(path),
            "valid": true,
        }));
        return Ok(());
    }
    output::success(&format!("Configuration valid: {}", source(path)));
    Ok(())
}
