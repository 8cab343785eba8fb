//! Batch recalculation: score, persist and diff every active country.
//!
//! Countries are independent. Each runs through validate, compute, persist
//! and alert stages; an error stops that country only and is reported in the
//! [`RecalculationSummary`] with the stage it happened in.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::stream::{self, StreamExt};
use tokio::sync::watch;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::application::ports::{bounded, RiskPorts};
use crate::application::settings::EngineSettings;
use crate::domain::score;
use crate::domain::{Country, CountryCode, RiskSnapshot, ScoreBundle, SnapshotId};
use crate::error::{Error, Result};
use crate::port::inbound::risk::{
    CountryFailure, FailureStage, RecalculationSummary, RiskEngine,
};

use super::alerts::{evaluate, AlertEmitter, EmittedAlerts};
use super::calculator::RiskCalculator;

/// Result of processing one country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryOutcome {
    pub country: CountryCode,
    /// Set once the snapshot was stored, even if alerting failed afterwards.
    pub snapshot: Option<SnapshotId>,
    pub alerts: EmittedAlerts,
    pub failure: Option<CountryFailure>,
}

impl CountryOutcome {
    fn new(country: CountryCode) -> Self {
        Self {
            country,
            snapshot: None,
            alerts: EmittedAlerts::default(),
            failure: None,
        }
    }

    fn fail(mut self, stage: FailureStage, error: &Error) -> Self {
        warn!(country = %self.country, %stage, error = %error, "Country recalculation failed");
        self.failure = Some(CountryFailure {
            country: self.country.clone(),
            stage,
            message: error.to_string(),
        });
        self
    }
}

enum Processed {
    Done(CountryOutcome),
    Skipped(CountryCode),
}

/// The recalculate-persist-diff orchestrator.
#[derive(Clone)]
pub struct RecalculationService {
    ports: RiskPorts,
    calculator: RiskCalculator,
    emitter: AlertEmitter,
    settings: Arc<EngineSettings>,
}

impl RecalculationService {
    pub fn new(ports: RiskPorts, settings: EngineSettings) -> Self {
        let settings = Arc::new(settings);
        let calculator = RiskCalculator::new(
            ports.indicators.clone(),
            ports.exchange_rates.clone(),
            settings.clone(),
        );
        let emitter = AlertEmitter::new(ports.alerts.clone(), settings.repository_timeout);
        Self {
            ports,
            calculator,
            emitter,
            settings,
        }
    }

    #[must_use]
    pub fn calculator(&self) -> &RiskCalculator {
        &self.calculator
    }

    #[must_use]
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    async fn compute(
        &self,
        country: &Country,
        date: NaiveDate,
    ) -> Result<(ScoreBundle, Option<RiskSnapshot>)> {
        let inputs = self.calculator.inputs(country).await?;
        let prior = bounded(
            "prior_snapshot",
            self.settings.repository_timeout,
            self.ports.snapshots.prior_snapshot(&country.code, date),
        )
        .await?;
        Ok((score::score(&inputs), prior))
    }

    /// Look for the snapshot a timed-out upsert was writing.
    ///
    /// Timing out does not cancel the store call, so the row may already be
    /// there. A write that lands after this check is reported as a persist
    /// failure; rerunning the date converges because upserts are idempotent.
    async fn applied_after_timeout(
        &self,
        country: &CountryCode,
        date: NaiveDate,
        bundle: &ScoreBundle,
    ) -> Option<SnapshotId> {
        let found = bounded(
            "get_snapshot",
            self.settings.repository_timeout,
            self.ports.snapshots.get_snapshot(country, date),
        )
        .await
        .ok()??;
        let expected = RiskSnapshot::from_bundle(found.id, country.clone(), date, bundle);
        (found == expected).then_some(found.id)
    }

    /// Run one country through every stage for `date`.
    pub async fn recalculate_country(&self, country: &Country, date: NaiveDate) -> CountryOutcome {
        let outcome = CountryOutcome::new(country.code.clone());

        if let Err(e) = country.validate() {
            return outcome.fail(FailureStage::Validate, &Error::from(e));
        }

        let (bundle, prior) = match self.compute(country, date).await {
            Ok(computed) => computed,
            Err(e) => return outcome.fail(FailureStage::Compute, &e),
        };

        let stored = bounded(
            "upsert_snapshot",
            self.settings.repository_timeout,
            self.ports.snapshots.upsert_snapshot(&country.code, date, &bundle),
        )
        .await;
        let stored = match stored {
            Err(e @ Error::Timeout { .. }) => {
                match self.applied_after_timeout(&country.code, date, &bundle).await {
                    Some(id) => {
                        warn!(country = %country.code, "Snapshot write timed out but was applied");
                        Ok(id)
                    }
                    None => Err(e),
                }
            }
            other => other,
        };
        let mut outcome = match stored {
            Ok(id) => CountryOutcome {
                snapshot: Some(id),
                ..outcome
            },
            Err(e) => return outcome.fail(FailureStage::Persist, &e),
        };

        debug!(
            country = %country.code,
            composite = bundle.composite,
            tier = %bundle.tier,
            prior = prior.as_ref().map(|p| p.composite),
            "Snapshot stored"
        );

        let alerts = evaluate(country, date, &bundle, prior.as_ref(), &self.settings.alerts);
        match self.emitter.emit(&alerts).await {
            Ok(emitted) => {
                outcome.alerts = emitted;
                outcome
            }
            Err(e) => outcome.fail(FailureStage::Alert, &e),
        }
    }

    /// Recalculate every active country, stopping before further countries
    /// once `shutdown` turns true. In-flight countries always finish.
    ///
    /// # Errors
    /// Only failing to list the active countries is an error.
    pub async fn recalculate_all_with_shutdown(
        &self,
        date: NaiveDate,
        shutdown: watch::Receiver<bool>,
    ) -> Result<RecalculationSummary> {
        let run_id = Uuid::new_v4();
        let span = info_span!("recalculation", %run_id, %date);

        async move {
            let countries = bounded(
                "list_active",
                self.settings.repository_timeout,
                self.ports.countries.list_active(),
            )
            .await?;
            info!(
                countries = countries.len(),
                max_concurrency = self.settings.max_concurrency,
                "Recalculation started"
            );

            let processed: Vec<Processed> = stream::iter(countries)
                .map(|country| {
                    let shutdown = shutdown.clone();
                    async move {
                        if *shutdown.borrow() {
                            return Processed::Skipped(country.code);
                        }
                        Processed::Done(self.recalculate_country(&country, date).await)
                    }
                })
                .buffer_unordered(self.settings.max_concurrency.max(1))
                .collect()
                .await;

            let mut summary = RecalculationSummary::new(date);
            for item in processed {
                match item {
                    Processed::Skipped(code) => summary.skipped.push(code),
                    Processed::Done(outcome) => {
                        if outcome.snapshot.is_some() {
                            summary.snapshots_updated += 1;
                        }
                        summary.warnings_emitted += outcome.alerts.warnings;
                        summary.criticals_emitted += outcome.alerts.criticals;
                        if let Some(failure) = outcome.failure {
                            summary.failed.push(failure);
                        }
                    }
                }
            }
            summary.failed.sort_by(|a, b| a.country.cmp(&b.country));
            summary.skipped.sort();

            info!(
                snapshots_updated = summary.snapshots_updated,
                warnings = summary.warnings_emitted,
                criticals = summary.criticals_emitted,
                failed = summary.failed.len(),
                skipped = summary.skipped.len(),
                "Recalculation finished"
            );
            Ok(summary)
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl RiskEngine for RecalculationService {
    async fn calculate_risk(&self, country: &Country) -> Result<ScoreBundle> {
        self.calculator.calculate(country).await
    }

    async fn recalculate_all(&self, date: NaiveDate) -> Result<RecalculationSummary> {
        let (_shutdown_tx, shutdown) = watch::channel(false);
        self.recalculate_all_with_shutdown(date, shutdown).await
    }
}
