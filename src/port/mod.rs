//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! Outbound ports are implemented by storage adapters; inbound ports are
//! implemented by application services and driven by the CLI.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!      CLI ────────▶ │  RiskEngine (inbound)   │
//!                    │  Application + Domain   │
//!                    └────────────┬────────────┘
//!                                 │ outbound ports
//!        ┌──────────────┬─────────┴────┬───────────────┬──────────────┐
//!        ▼              ▼              ▼               ▼              ▼
//!   Countries      Indicators     ExchangeRates    Snapshots       Alerts
//! ```

pub mod inbound;
pub mod outbound;
