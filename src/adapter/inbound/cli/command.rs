//! Command-line interface definitions.
//!
//! Defines the CLI structure for the riskpulse application using `clap`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Default number of rows listed by `history` and `alerts list`.
pub const DEFAULT_LIMIT: usize = 30;

/// Country risk scoring and alerting
#[derive(Parser, Debug)]
#[command(name = "riskpulse")]
#[command(version, about)]
pub struct Cli {
    /// Configuration file [default: riskpulse.toml when present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recalculate, store and diff the risk of every active country
    Recalculate(RecalculateArgs),

    /// Score one country from current data without storing anything
    Preview(PreviewArgs),

    /// Show the stored risk time series of a country
    History(HistoryArgs),

    /// List and acknowledge alerts
    #[command(subcommand)]
    Alerts(AlertsCommand),

    /// Load the demo data set and recalculate
    Seed,

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `recalculate`.
#[derive(Parser, Debug)]
pub struct RecalculateArgs {
    /// Calculation date (YYYY-MM-DD) [default: today, UTC]
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for `preview`.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Two-letter country code
    pub country: String,
}

/// Arguments for `history`.
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Two-letter country code
    pub country: String,

    /// Maximum snapshots shown, newest first
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}

/// Subcommands for `riskpulse alerts`.
#[derive(Subcommand, Debug)]
pub enum AlertsCommand {
    /// List alerts, newest first
    List {
        /// Only unread alerts
        #[arg(long)]
        unread: bool,

        /// Maximum alerts shown
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
    /// Mark an alert as read
    Read {
        /// Alert id
        id: i64,
    },
}

/// Subcommands for `riskpulse config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied
    Show,
    /// Validate the configuration
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_name_and_version() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "riskpulse");
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn parse_recalculate_with_date() {
        let cli = Cli::try_parse_from(["riskpulse", "recalculate", "--date", "2025-03-01"]).unwrap();
        match cli.command {
            Commands::Recalculate(args) => {
                assert_eq!(args.date, NaiveDate::from_ymd_opt(2025, 3, 1));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_malformed_date() {
        assert!(Cli::try_parse_from(["riskpulse", "recalculate", "--date", "03/01/2025"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["riskpulse", "history", "CO", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::History(args) => {
                assert_eq!(args.country, "CO");
                assert_eq!(args.limit, DEFAULT_LIMIT);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_alerts_subcommands() {
        let cli = Cli::try_parse_from(["riskpulse", "alerts", "list", "--unread", "--limit", "5"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Alerts(AlertsCommand::List {
                unread: true,
                limit: 5
            })
        ));

        let cli = Cli::try_parse_from(["riskpulse", "alerts", "read", "7"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Alerts(AlertsCommand::Read { id: 7 })
        ));
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::try_parse_from(["riskpulse", "-c", "custom.toml", "config", "show"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Config(ConfigCommand::Show)));
    }
}
