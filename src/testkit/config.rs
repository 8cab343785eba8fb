//! Canonical test configurations.
//!
//! Single source of truth for engine settings used across tests.

use std::time::Duration;

use crate::application::EngineSettings;

/// Default settings with a short repository timeout and the given
/// concurrency.
pub fn engine(max_concurrency: usize) -> EngineSettings {
    EngineSettings {
        max_concurrency,
        repository_timeout: Duration::from_millis(500),
        ..EngineSettings::default()
    }
}

/// Minimal valid TOML pointing at `database`.
pub fn toml(database: &str) -> String {
    format!(
        r#"database = "{database}"

[logging]
level = "warn"
format = "pretty"

[engine]
reference_currency = "USD"
fx_window = 30
max_concurrency = 2
repository_timeout_ms = 2000
"#
    )
}
