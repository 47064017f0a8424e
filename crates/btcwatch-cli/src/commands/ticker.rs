use btcwatch_core::{RateSnapshot, Ticker, TickerConfig};

use crate::cli::{OutputFormat, TickerArgs};
use crate::error::CliError;
use crate::output::{self, TickerView};

pub async fn run(
    args: &TickerArgs,
    config: &TickerConfig,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, CliError> {
    let ticker = Ticker::with_reqwest(config.build_api()?, config)?;

    let mut snapshot = RateSnapshot::new();
    ticker.fetch_and_parse(&args.currency, &mut snapshot).await?;

    let (buy, sell) = args.shows();
    let view = TickerView {
        buy,
        sell,
        units: args.units,
    };
    output::ticker(&snapshot, view, format, pretty)
}
