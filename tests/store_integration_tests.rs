//! SQLite-backed services wired through the composition root.

mod support;

use chrono::Utc;
use riskpulse::domain::AlertId;
use riskpulse::infrastructure::bootstrap;
use riskpulse::infrastructure::config::Config;
use riskpulse::port::inbound::risk::RiskEngine;
use riskpulse::testkit;
use riskpulse::testkit::domain::{country, high_inflation_indicators};
use tempfile::TempDir;

use support::scenario::{crisis_indicators, day, snapshots_on};

fn config(dir: &TempDir) -> Config {
    let path = dir.path().join("risk.db");
    let path = path.to_str().expect("utf-8 temp path");
    Config::parse_toml(&testkit::config::toml(path)).expect("valid test config")
}

#[tokio::test]
async fn seed_and_recalculate_persist_across_reopen() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);
    let today = Utc::now().date_naive();

    {
        let services = bootstrap::open(&config).unwrap();
        let report = services.seed().run(today).await.unwrap();
        assert_eq!(report.countries, 10);
        assert_eq!(report.indicators, 180);

        let summary = services.engine.recalculate_all(today).await.unwrap();
        assert!(summary.is_complete());
        assert_eq!(summary.snapshots_updated, 10);
    }

    let services = bootstrap::open(&config).unwrap();
    let history = services.ports.snapshots.history(&"CO".into(), 30).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].date, today);
    assert!(history[0].detail.formula.contains("0.40"));

    let active = services.ports.countries.list_active().await.unwrap();
    assert_eq!(active.len(), 10);
}

#[tokio::test]
async fn alerts_can_be_listed_and_acknowledged() {
    let dir = TempDir::new().unwrap();
    let services = bootstrap::open(&config(&dir)).unwrap();
    let today = Utc::now().date_naive();

    services.countries.upsert_country(&country("AR", "ARS")).await.unwrap();
    for record in high_inflation_indicators("AR", 2024) {
        services.indicators.upsert(&record).await.unwrap();
    }
    let summary = services.engine.recalculate_all(today).await.unwrap();
    assert_eq!(summary.criticals_emitted, 1);

    let unread = services.ports.alerts.list_alerts(true, 10).await.unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].country, Some("AR".into()));

    assert!(services.ports.alerts.mark_read(unread[0].id).await.unwrap());
    assert!(services.ports.alerts.list_alerts(true, 10).await.unwrap().is_empty());
    assert!(!services.ports.alerts.mark_read(AlertId::new(9_999)).await.unwrap());
}

#[tokio::test]
async fn rerunning_a_day_stores_identical_snapshots() {
    let dir = TempDir::new().unwrap();
    let services = bootstrap::open(&config(&dir)).unwrap();
    services.countries.upsert_country(&country("AR", "ARS")).await.unwrap();
    services.countries.upsert_country(&country("CO", "COP")).await.unwrap();
    for record in crisis_indicators("AR", 2025)
        .into_iter()
        .chain(high_inflation_indicators("CO", 2024))
    {
        services.indicators.upsert(&record).await.unwrap();
    }

    services.engine.recalculate_all(day(4)).await.unwrap();
    let before = snapshots_on(services.ports.snapshots.as_ref(), &["AR", "CO"], day(4)).await;
    services.engine.recalculate_all(day(4)).await.unwrap();
    let after = snapshots_on(services.ports.snapshots.as_ref(), &["AR", "CO"], day(4)).await;

    assert_eq!(before.len(), 2);
    assert_eq!(before, after);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_batches_raise_each_alert_once() {
    let dir = TempDir::new().unwrap();
    let services = bootstrap::open(&config(&dir)).unwrap();
    let codes = [
        ("AR", "ARS"),
        ("BO", "BOB"),
        ("CL", "CLP"),
        ("MX", "MXN"),
        ("PY", "PYG"),
        ("UY", "UYU"),
        ("VE", "VES"),
        ("SR", "SRD"),
    ];
    for (code, currency) in codes {
        services.countries.upsert_country(&country(code, currency)).await.unwrap();
        for record in high_inflation_indicators(code, 2024) {
            services.indicators.upsert(&record).await.unwrap();
        }
    }

    let (a, b) = tokio::join!(
        services.engine.recalculate_all(day(1)),
        services.engine.recalculate_all(day(1)),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    assert!(a.is_complete() && b.is_complete());
    assert_eq!(a.criticals_emitted + b.criticals_emitted, codes.len());
    let alerts = services.ports.alerts.list_alerts(false, 50).await.unwrap();
    assert_eq!(alerts.len(), codes.len());
}
