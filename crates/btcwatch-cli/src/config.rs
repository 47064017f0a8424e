//! Layered configuration: defaults < config file < environment < flags.

use std::env;
use std::fs;
use std::path::Path;

use btcwatch_core::{ApiStyle, TickerConfig};

use crate::cli::Cli;
use crate::error::CliError;

pub const ENV_API: &str = "BTCWATCH_API";
pub const ENV_TIMEOUT_MS: &str = "BTCWATCH_TIMEOUT_MS";
pub const ENV_URL_TEMPLATE: &str = "BTCWATCH_URL_TEMPLATE";

pub fn load(cli: &Cli) -> Result<TickerConfig, CliError> {
    load_with(cli, |key| env::var(key).ok())
}

/// [`load`] with an explicit environment lookup.
pub fn load_with<F>(cli: &Cli, lookup: F) -> Result<TickerConfig, CliError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config {
        Some(path) => read_file(path)?,
        None => TickerConfig::default(),
    };

    apply_env(&mut config, lookup)?;

    if let Some(api) = cli.api {
        config.api = api.into();
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }

    tracing::debug!(
        api = %config.api,
        timeout_ms = config.timeout_ms,
        custom_url = config.url_template.is_some(),
        custom_currencies = config.currencies.is_some(),
        "configuration loaded"
    );

    Ok(config)
}

fn read_file(path: &Path) -> Result<TickerConfig, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::ConfigFile {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ConfigParse {
        path: path.display().to_string(),
        source,
    })
}

fn apply_env<F>(config: &mut TickerConfig, lookup: F) -> Result<(), CliError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(ENV_API) {
        config.api = value.parse::<ApiStyle>()?;
    }
    if let Some(value) = lookup(ENV_TIMEOUT_MS) {
        config.timeout_ms = value
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidEnv {
                key: ENV_TIMEOUT_MS,
                value,
            })?;
    }
    if let Some(value) = lookup(ENV_URL_TEMPLATE) {
        config.url_template = Some(value);
    }
    Ok(())
}
