//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`]: drivers of the engine (the CLI)
//! - [`outbound`]: repositories the engine reads and writes

pub mod inbound;
pub mod outbound;
