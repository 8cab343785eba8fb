//! Command dispatch.

use std::process::ExitCode;

use tracing::debug;

use crate::adapter::inbound::cli::command::{AlertsCommand, Cli, Commands, ConfigCommand};
use crate::adapter::inbound::cli::{alerts, config, history, output, preview, recalculate, seed};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Log level implied by repeated `-v` flags, if any.
fn verbose_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Run one parsed command line.
///
/// Output mode must already be configured. Commands that finish with
/// failed or skipped countries return [`ExitCode::FAILURE`] after printing
/// their summary; hard errors propagate.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let mut settings = Config::resolve(cli.config.as_deref())?;
    if let Some(level) = verbose_level(cli.verbose) {
        settings.logging.level = level.to_string();
    }
    settings.init_logging();
    debug!(database = %settings.database, "Configuration loaded");

    let complete = match cli.command {
        Commands::Config(ConfigCommand::Show) => {
            config::execute_show(cli.config.as_deref(), &settings)?;
            true
        }
        Commands::Config(ConfigCommand::Validate) => {
            config::execute_validate(cli.config.as_deref())?;
            true
        }
        command => {
            let services = bootstrap::open(&settings)?;
            output::header(env!("CARGO_PKG_VERSION"));
            match command {
                Commands::Recalculate(args) => recalculate::execute(&services, args.date).await?,
                Commands::Preview(args) => {
                    preview::execute(&services, &args.country).await?;
                    true
                }
                Commands::History(args) => {
                    history::execute(&services, &args.country, args.limit).await?;
                    true
                }
                Commands::Alerts(AlertsCommand::List { unread, limit }) => {
                    alerts::list(&services, unread, limit).await?;
                    true
                }
                Commands::Alerts(AlertsCommand::Read { id }) => {
                    alerts::read(&services, id).await?;
                    true
                }
                Commands::Seed => seed::execute(&services).await?,
                Commands::Config(_) => true,
            }
        }
    };

    Ok(if complete {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
