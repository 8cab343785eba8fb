//! CLI module graph.

pub mod alerts;
pub mod command;
pub mod config;
pub mod history;
pub mod output;
pub mod preview;
pub mod recalculate;
pub mod run;
pub mod seed;
