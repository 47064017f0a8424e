mod currencies;
mod ticker;

use btcwatch_core::TickerConfig;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Dispatch the parsed command and return the rendered output.
pub async fn run(cli: &Cli, config: &TickerConfig) -> Result<String, CliError> {
    match &cli.command {
        Command::Ticker(args) => ticker::run(args, config, cli.format, cli.pretty).await,
        Command::Currencies => currencies::run(config, cli.format, cli.pretty),
    }
}
