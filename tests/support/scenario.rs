//! In-memory engine fixtures shared by the scenario tests.

use std::sync::Arc;

use chrono::NaiveDate;
use riskpulse::adapter::outbound::memory::MemoryStore;
use riskpulse::domain::{IndicatorKind, IndicatorRecord, RiskSnapshot};
use riskpulse::infrastructure::bootstrap::Services;
use riskpulse::port::outbound::SnapshotStore;
use riskpulse::testkit;
use riskpulse::testkit::domain::indicator;

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).expect("valid date")
}

/// Services over a fresh memory store.
pub fn memory_services(max_concurrency: usize) -> (Arc<MemoryStore>, Services) {
    let store = Arc::new(MemoryStore::new());
    let services = Services::wire(store.clone(), testkit::config::engine(max_concurrency));
    (store, services)
}

pub fn put_all(store: &MemoryStore, records: Vec<IndicatorRecord>) {
    for record in records {
        store.put_indicator(record);
    }
}

/// A collapsing economy: every economic indicator in its worst tier and a
/// deep trade deficit. Scores economic 0, stability 55.
pub fn crisis_indicators(code: &str, year: i32) -> Vec<IndicatorRecord> {
    vec![
        indicator(code, IndicatorKind::GdpPerCapita, year, 2_000.0),
        indicator(code, IndicatorKind::Inflation, year, 60.0),
        indicator(code, IndicatorKind::Unemployment, year, 16.0),
        indicator(code, IndicatorKind::DebtToGdp, year, 90.0),
        indicator(code, IndicatorKind::TradeBalance, year, -12.0),
    ]
}

/// Stored snapshots of `codes` on `date`, in the given order.
pub async fn snapshots_on(
    store: &dyn SnapshotStore,
    codes: &[&str],
    date: NaiveDate,
) -> Vec<RiskSnapshot> {
    let mut snapshots = Vec::new();
    for code in codes {
        if let Some(snapshot) = store.get_snapshot(&(*code).into(), date).await.unwrap() {
            snapshots.push(snapshot);
        }
    }
    snapshots
}
