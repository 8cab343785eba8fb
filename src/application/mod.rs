//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate the outbound
//! ports to implement the application's use cases.

pub mod ports;
pub mod risk;
pub mod seed;
pub mod settings;
pub mod sync;

pub use ports::RiskPorts;
pub use settings::{AlertThresholds, EngineSettings};
