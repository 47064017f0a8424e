//! CLI argument definitions for btcwatch.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ticker` | Fetch buy/sell prices for one currency |
//! | `currencies` | List currencies the selected service quotes |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--api` | `mtgox` | Ticker service convention |
//! | `--timeout-ms` | `5000` | Request timeout in ms |
//! | `--config` | none | JSON configuration file |
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--verbose` | `false` | Debug logging on stderr |
//!
//! # Examples
//!
//! ```bash
//! btcwatch ticker eur
//! btcwatch --api btce ticker rur --buy
//! btcwatch ticker usd --format json --pretty
//! btcwatch --api btce currencies
//! ```

use std::path::PathBuf;

use btcwatch_core::ApiStyle;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Bitcoin exchange ticker for the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "btcwatch",
    author,
    version,
    about = "Bitcoin exchange ticker for the terminal"
)]
pub struct Cli {
    /// Ticker service convention; overrides config file and BTCWATCH_API.
    #[arg(long, global = true, value_enum)]
    pub api: Option<ApiSelector>,

    /// Request timeout in milliseconds; overrides config file and
    /// BTCWATCH_TIMEOUT_MS.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// JSON configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Log request details to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// Single JSON document.
    Json,
}

/// Ticker service selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ApiSelector {
    /// MtGox v2 (integer-string prices).
    Mtgox,
    /// BTC-e v2 (numeric prices).
    Btce,
}

impl From<ApiSelector> for ApiStyle {
    fn from(value: ApiSelector) -> Self {
        match value {
            ApiSelector::Mtgox => Self::MtGox,
            ApiSelector::Btce => Self::BtcE,
        }
    }
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the current buy/sell ticker for a currency.
    ///
    /// # Examples
    ///
    ///   btcwatch ticker
    ///   btcwatch ticker eur --sell
    ///   btcwatch ticker jpy --units
    Ticker(TickerArgs),

    /// List the currencies the selected service quotes.
    Currencies,
}

#[derive(Debug, Args)]
pub struct TickerArgs {
    /// Three-letter currency code (case-insensitive).
    #[arg(default_value = "USD")]
    pub currency: String,

    /// Show the buy price.
    #[arg(short, long, default_value_t = false)]
    pub buy: bool,

    /// Show the sell price.
    #[arg(short, long, default_value_t = false)]
    pub sell: bool,

    /// Print integer price units instead of decimals.
    #[arg(long, default_value_t = false)]
    pub units: bool,
}

impl TickerArgs {
    /// Both prices are shown unless exactly one was asked for.
    pub const fn shows(&self) -> (bool, bool) {
        if self.buy || self.sell {
            (self.buy, self.sell)
        } else {
            (true, true)
        }
    }
}
