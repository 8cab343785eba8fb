use std::process::ExitCode;

use clap::Parser;

use riskpulse::adapter::inbound::cli::command::Cli;
use riskpulse::adapter::inbound::cli::output::{self, OutputConfig};
use riskpulse::adapter::inbound::cli::run::run;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
