//! End-to-end scoring scenarios over the in-memory store.

mod support;

use riskpulse::application::risk::alerts::{
    EXTREME_INFLATION_TITLE, FX_SWING_TITLE, INDEX_DROP_TITLE,
};
use riskpulse::application::sync::RateQuote;
use riskpulse::domain::{AlertKind, CurrencyCode, RiskTier, Severity};
use riskpulse::port::inbound::risk::RiskEngine;
use riskpulse::port::outbound::{AlertStore, SnapshotStore};
use riskpulse::testkit::domain::{country, high_inflation_indicators};

use support::scenario::{crisis_indicators, day, memory_services, put_all, snapshots_on};

#[tokio::test]
async fn high_inflation_country_is_stored_with_an_indicator_alert() {
    let (store, services) = memory_services(4);
    store.put_country(country("AR", "ARS"));
    put_all(&store, high_inflation_indicators("AR", 2024));

    let summary = services.engine.recalculate_all(day(1)).await.unwrap();

    assert!(summary.is_complete());
    assert_eq!(summary.snapshots_updated, 1);
    assert_eq!(summary.criticals_emitted, 1);
    assert_eq!(summary.warnings_emitted, 0);

    let snapshot = store
        .get_snapshot(&"AR".into(), day(1))
        .await
        .unwrap()
        .expect("snapshot stored");
    assert_eq!(snapshot.composite, 80.5);
    assert_eq!(snapshot.tier, RiskTier::Low);

    let alerts = store.list_alerts(false, 10).await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Indicator);
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert_eq!(alerts[0].title, EXTREME_INFLATION_TITLE);
}

#[tokio::test]
async fn sharp_drop_against_prior_snapshot_raises_a_warning() {
    let (store, services) = memory_services(4);
    store.put_country(country("AR", "ARS"));
    put_all(&store, high_inflation_indicators("AR", 2024));
    services.engine.recalculate_all(day(1)).await.unwrap();

    put_all(&store, crisis_indicators("AR", 2025));
    let summary = services.engine.recalculate_all(day(2)).await.unwrap();

    let latest = store
        .get_snapshot(&"AR".into(), day(2))
        .await
        .unwrap()
        .expect("snapshot stored");
    assert_eq!(latest.economic, 0.0);
    assert_eq!(latest.stability, 55.0);
    assert_eq!(latest.composite, 46.5);
    assert_eq!(latest.tier, RiskTier::High);

    // Inflation is still extreme on the new date, so it is raised again.
    assert_eq!(summary.warnings_emitted, 1);
    assert_eq!(summary.criticals_emitted, 1);

    let alerts = store.list_alerts(false, 10).await.unwrap();
    assert_eq!(alerts.len(), 3);
    assert_eq!(alerts[0].title, EXTREME_INFLATION_TITLE);
    assert_eq!(alerts[0].event_date, day(2));
    assert_eq!(alerts[1].title, INDEX_DROP_TITLE);
    assert!(alerts[1].message.contains("34.00 points"));
    assert_eq!(alerts[2].event_date, day(1));
}

#[tokio::test]
async fn each_day_of_a_worsening_run_is_compared_and_alerted() {
    let (store, services) = memory_services(1);
    store.put_country(country("AR", "ARS"));

    let first = services.engine.recalculate_all(day(1)).await.unwrap();
    put_all(&store, high_inflation_indicators("AR", 2024));
    let second = services.engine.recalculate_all(day(2)).await.unwrap();
    put_all(&store, crisis_indicators("AR", 2025));
    let third = services.engine.recalculate_all(day(3)).await.unwrap();

    let composites: Vec<f64> = store
        .history(&"AR".into(), 10)
        .await
        .unwrap()
        .iter()
        .map(|s| s.composite)
        .collect();
    assert_eq!(composites, vec![46.5, 80.5, 100.0]);

    assert_eq!((first.warnings_emitted, first.criticals_emitted), (0, 0));
    assert_eq!((second.warnings_emitted, second.criticals_emitted), (1, 1));
    assert_eq!((third.warnings_emitted, third.criticals_emitted), (1, 1));

    let drops: Vec<_> = store
        .list_alerts(false, 10)
        .await
        .unwrap()
        .into_iter()
        .filter(|a| a.title == INDEX_DROP_TITLE)
        .map(|a| a.event_date)
        .collect();
    assert_eq!(drops, vec![day(3), day(2)]);
}

#[tokio::test]
async fn rerunning_a_day_keeps_one_snapshot_and_no_extra_alerts() {
    let (store, services) = memory_services(2);
    store.put_country(country("AR", "ARS"));
    store.put_country(country("CO", "COP"));
    put_all(&store, high_inflation_indicators("AR", 2024));

    let first = services.engine.recalculate_all(day(3)).await.unwrap();
    let before = store.get_snapshot(&"AR".into(), day(3)).await.unwrap();
    let second = services.engine.recalculate_all(day(3)).await.unwrap();
    let after = store.get_snapshot(&"AR".into(), day(3)).await.unwrap();

    assert_eq!(first.snapshots_updated, 2);
    assert_eq!(second.snapshots_updated, 2);
    assert_eq!(second.criticals_emitted + second.warnings_emitted, 0);
    assert_eq!(before.map(|s| s.id), after.map(|s| s.id));
    assert_eq!(store.history(&"AR".into(), 10).await.unwrap().len(), 1);
    assert_eq!(store.list_alerts(false, 10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn rerunning_a_day_stores_identical_snapshots() {
    let (store, services) = memory_services(2);
    store.put_country(country("AR", "ARS"));
    store.put_country(country("CO", "COP"));
    put_all(&store, crisis_indicators("AR", 2025));
    put_all(&store, high_inflation_indicators("CO", 2024));

    services.engine.recalculate_all(day(4)).await.unwrap();
    let before = snapshots_on(store.as_ref(), &["AR", "CO"], day(4)).await;
    services.engine.recalculate_all(day(4)).await.unwrap();
    let after = snapshots_on(store.as_ref(), &["AR", "CO"], day(4)).await;

    assert_eq!(before.len(), 2);
    assert_eq!(before, after);
}

#[tokio::test]
async fn preview_does_not_persist() {
    let (store, services) = memory_services(1);
    let ar = country("AR", "ARS");
    store.put_country(ar.clone());
    put_all(&store, high_inflation_indicators("AR", 2024));

    let bundle = services.engine.calculate_risk(&ar).await.unwrap();

    assert_eq!(bundle.composite, 80.5);
    assert!(store.history(&"AR".into(), 10).await.unwrap().is_empty());
    assert!(store.list_alerts(false, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn seeded_demo_data_recalculates_every_country() {
    let (_store, services) = memory_services(4);
    let today = day(15);

    let report = services.seed().run(today).await.unwrap();
    let summary = services.engine.recalculate_all(today).await.unwrap();

    assert_eq!(report.countries, 10);
    assert!(summary.is_complete());
    assert_eq!(summary.snapshots_updated, 10);
}

#[tokio::test]
async fn fx_swing_alerts_every_country_using_the_currency() {
    let (store, services) = memory_services(1);
    store.put_country(country("CO", "COP"));
    store.put_country(country("PE", "PEN"));

    let quote = |d, rate| RateQuote {
        origin: CurrencyCode::new("COP"),
        destination: CurrencyCode::new("USD"),
        date: day(d),
        rate,
        source: "TEST".to_string(),
    };
    let report = services.rates.record_all(&[quote(1, 4_000.0), quote(2, 4_400.0)]).await;

    assert_eq!(report.updated, 2);
    assert_eq!(report.alerts, 1);
    assert!(report.errors.is_empty());

    let alerts = store.list_alerts(true, 10).await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Exchange);
    assert_eq!(alerts[0].severity, Severity::Warning);
    assert_eq!(alerts[0].title, FX_SWING_TITLE);
    assert_eq!(alerts[0].country, Some("CO".into()));
    assert_eq!(alerts[0].event_date, day(2));
}
