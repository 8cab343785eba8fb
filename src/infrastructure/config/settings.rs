//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the database path can be
//! overridden with the `RISKPULSE_DATABASE` environment variable.
//!
//! # Example
//!
//! ```no_run
//! use riskpulse::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("riskpulse.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::alerts::AlertConfig;
use super::engine::EngineConfig;
use super::logging::LoggingConfig;
use crate::application::EngineSettings;
use crate::domain::CurrencyCode;
use crate::error::{ConfigError, Result};

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "riskpulse.toml";

/// Environment variable overriding [`Config::database`].
pub const DATABASE_ENV: &str = "RISKPULSE_DATABASE";

/// Upper bound of `engine.fx_window`.
pub const MAX_FX_WINDOW: usize = 365;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to SQLite database file.
    ///
    /// Defaults to "riskpulse.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Scoring engine settings.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Alert thresholds.
    #[serde(default)]
    pub alerts: AlertConfig,
}

fn default_database_path() -> String {
    "riskpulse.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database_path(),
            logging: LoggingConfig::default(),
            engine: EngineConfig::default(),
            alerts: AlertConfig::default(),
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
    .into()
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` when given, else [`DEFAULT_CONFIG_PATH`] when it exists,
    /// else the defaults.
    ///
    /// # Errors
    ///
    /// An explicit path must exist; otherwise as [`Config::load`].
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => {
                let mut config = Self::default();
                config.apply_env();
                config.validate()?;
                Ok(config)
            }
        }
    }

    fn apply_env(&mut self) {
        if let Ok(database) = std::env::var(DATABASE_ENV) {
            if !database.trim().is_empty() {
                self.database = database;
            }
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field as
    /// [`ConfigError::InvalidValue`].
    pub fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }

        if !LoggingConfig::FORMATS.contains(&self.logging.format.as_str()) {
            return Err(invalid("logging.format", "must be \"pretty\" or \"json\""));
        }

        if !CurrencyCode::new(&self.engine.reference_currency).is_valid() {
            return Err(invalid(
                "engine.reference_currency",
                "must be a three-letter currency code",
            ));
        }
        if self.engine.fx_window == 0 || self.engine.fx_window > MAX_FX_WINDOW {
            return Err(invalid("engine.fx_window", "must be between 1 and 365"));
        }
        if self.engine.max_concurrency == 0 {
            return Err(invalid("engine.max_concurrency", "must be greater than 0"));
        }
        if self.engine.repository_timeout_ms == 0 {
            return Err(invalid(
                "engine.repository_timeout_ms",
                "must be greater than 0",
            ));
        }

        let thresholds = [
            ("alerts.critical_index", self.alerts.critical_index),
            ("alerts.drop_points", self.alerts.drop_points),
            ("alerts.extreme_inflation", self.alerts.extreme_inflation),
            ("alerts.fx_variation", self.alerts.fx_variation),
        ];
        for (field, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a finite number >= 0"));
            }
        }
        if self.alerts.critical_index > 100.0 {
            return Err(invalid("alerts.critical_index", "must be <= 100"));
        }

        Ok(())
    }

    /// Initialize the tracing subscriber from `[logging]`.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Runtime engine settings.
    #[must_use]
    pub fn engine_settings(&self) -> EngineSettings {
        self.engine.settings(self.alerts.into())
    }
}

impl From<&Config> for EngineSettings {
    fn from(config: &Config) -> Self {
        config.engine_settings()
    }
}
