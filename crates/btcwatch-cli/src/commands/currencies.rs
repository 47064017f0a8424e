use btcwatch_core::TickerConfig;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

pub fn run(config: &TickerConfig, format: OutputFormat, pretty: bool) -> Result<String, CliError> {
    let api = config.build_api()?;
    output::currencies(api.currencies(), format, pretty)
}
