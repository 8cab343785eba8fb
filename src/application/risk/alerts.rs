//! Alert rules and de-duplicated emission.
//!
//! Rules are pure functions of the fresh bundle and the prior snapshot.
//! [`AlertEmitter`] writes what they produce, skipping any alert already
//! raised for the same event on the same event date.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::application::ports::bounded;
use crate::application::settings::AlertThresholds;
use crate::domain::{AlertKind, Country, NewAlert, RiskSnapshot, ScoreBundle, Severity};
use crate::error::Result;
use crate::port::outbound::AlertStore;

pub const CRITICAL_INDEX_TITLE: &str = "Critical risk index";
pub const INDEX_DROP_TITLE: &str = "Risk index drop";
pub const EXTREME_INFLATION_TITLE: &str = "Extreme inflation";
pub const FX_SWING_TITLE: &str = "Exchange rate swing";

/// Alerts warranted by the score calculated for `date`, in emission order.
#[must_use]
pub fn evaluate(
    country: &Country,
    date: NaiveDate,
    bundle: &ScoreBundle,
    prior: Option<&RiskSnapshot>,
    thresholds: &AlertThresholds,
) -> Vec<NewAlert> {
    let mut alerts = Vec::new();

    if bundle.composite < thresholds.critical_index {
        alerts.push(NewAlert {
            country: Some(country.code.clone()),
            kind: AlertKind::Risk,
            severity: Severity::Critical,
            title: CRITICAL_INDEX_TITLE.to_string(),
            message: format!(
                "{} composite risk index is {:.2}, below {:.2} ({})",
                country.name, bundle.composite, thresholds.critical_index, bundle.tier
            ),
            event_date: date,
        });
    }

    if let Some(prior) = prior {
        let drop = prior.composite - bundle.composite;
        if drop > thresholds.drop_points {
            alerts.push(NewAlert {
                country: Some(country.code.clone()),
                kind: AlertKind::Risk,
                severity: Severity::Warning,
                title: INDEX_DROP_TITLE.to_string(),
                message: format!(
                    "{} composite risk index fell {:.2} points since {} ({:.2} -> {:.2})",
                    country.name, drop, prior.date, prior.composite, bundle.composite
                ),
                event_date: date,
            });
        }
    }

    if let Some(inflation) = bundle.detail.inputs.inflation {
        if inflation > thresholds.extreme_inflation {
            alerts.push(NewAlert {
                country: Some(country.code.clone()),
                kind: AlertKind::Indicator,
                severity: Severity::Critical,
                title: EXTREME_INFLATION_TITLE.to_string(),
                message: format!(
                    "{} inflation is {:.2}%, above {:.2}%",
                    country.name, inflation, thresholds.extreme_inflation
                ),
                event_date: date,
            });
        }
    }

    alerts
}

/// Counts of alerts actually written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmittedAlerts {
    pub warnings: usize,
    pub criticals: usize,
}

impl EmittedAlerts {
    fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Warning => self.warnings += 1,
            Severity::Critical => self.criticals += 1,
            Severity::Info => {}
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.warnings + self.criticals
    }
}

/// Writes alerts through the [`AlertStore`], once per event.
#[derive(Clone)]
pub struct AlertEmitter {
    store: Arc<dyn AlertStore>,
    timeout: Duration,
}

impl AlertEmitter {
    pub fn new(store: Arc<dyn AlertStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Create `alert` unless the same event was already raised for its
    /// event date.
    ///
    /// Returns whether a record was written.
    pub async fn emit_one(&self, alert: &NewAlert) -> Result<bool> {
        let created = bounded(
            "create_alert_once",
            self.timeout,
            self.store.create_alert_once(alert),
        )
        .await?;
        let Some(id) = created else {
            debug!(title = %alert.title, event_date = %alert.event_date, "Alert already raised");
            return Ok(false);
        };

        info!(
            alert_id = %id,
            country = alert.country.as_ref().map(|c| c.as_str()).unwrap_or("-"),
            kind = %alert.kind,
            severity = %alert.severity,
            title = %alert.title,
            event_date = %alert.event_date,
            "Alert emitted"
        );
        Ok(true)
    }

    /// Emit every alert in order, stopping at the first store error.
    pub async fn emit(&self, alerts: &[NewAlert]) -> Result<EmittedAlerts> {
        let mut emitted = EmittedAlerts::default();
        for alert in alerts {
            if self.emit_one(alert).await? {
                emitted.record(alert.severity);
            }
        }
        Ok(emitted)
    }
}
