//! Rendering of pipeline results for the terminal.

use btcwatch_core::{CurrencyInfo, CurrencyTable, Price, RateSnapshot};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Which parts of a ticker to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerView {
    pub buy: bool,
    pub sell: bool,
    pub units: bool,
}

pub fn ticker(
    snapshot: &RateSnapshot,
    view: TickerView,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => to_json(snapshot, pretty),
        OutputFormat::Text => Ok(ticker_text(snapshot, view)),
    }
}

pub fn currencies(
    table: &CurrencyTable,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => to_json(table, pretty),
        OutputFormat::Text => Ok(table
            .iter()
            .map(|currency| {
                format!(
                    "{}  {:<4}  1/{}",
                    currency.code(),
                    currency.symbol(),
                    currency.scale_factor()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

fn ticker_text(snapshot: &RateSnapshot, view: TickerView) -> String {
    let Some(currency) = snapshot.currency() else {
        return String::from("no ticker data");
    };

    let mut lines = vec![format!(
        "result: {}",
        if snapshot.success() { "success" } else { "failure" }
    )];
    if view.buy {
        lines.push(format!("buy:  {}", price_text(currency, snapshot.buy(), view.units)));
    }
    if view.sell {
        lines.push(format!("sell: {}", price_text(currency, snapshot.sell(), view.units)));
    }
    lines.join("\n")
}

fn price_text(currency: &CurrencyInfo, price: Price, units: bool) -> String {
    if units {
        return format!("{} {}", price.int, currency.code());
    }
    let decimals = currency.scale_factor().checked_ilog10().unwrap_or(0) as usize;
    format!(
        "{} {:.*} {}",
        currency.symbol(),
        decimals,
        price.float,
        currency.code()
    )
}
