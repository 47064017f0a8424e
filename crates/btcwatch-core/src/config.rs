use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::adapters::{BtcEApi, MtGoxApi};
use crate::fetch::DEFAULT_TIMEOUT_MS;
use crate::http_client::DEFAULT_MAX_BODY_BYTES;
use crate::url_template::CodeCase;
use crate::{ApiStyle, ConfigError, CurrencyInfo, CurrencyTable, TickerApi, UrlTemplate};

/// Runtime settings for a [`Ticker`](crate::Ticker).
///
/// Every field has a default, so partial JSON documents deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TickerConfig {
    pub api: ApiStyle,
    pub timeout_ms: u64,
    pub user_agent: String,
    /// Replacement request URL; must contain an `xxx` currency slot.
    pub url_template: Option<String>,
    pub max_body_bytes: usize,
    /// Replacement currency table for deployments quoting other fiats.
    pub currencies: Option<Vec<CurrencyInfo>>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            api: ApiStyle::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("btcwatch/{}", env!("CARGO_PKG_VERSION")),
            url_template: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            currencies: None,
        }
    }
}

impl TickerConfig {
    pub fn for_api(api: ApiStyle) -> Self {
        Self {
            api,
            ..Self::default()
        }
    }

    /// Build the ticker adapter selected by [`api`](Self::api), applying any
    /// URL or currency overrides.
    pub fn build_api(&self) -> Result<Arc<dyn TickerApi>, ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let currencies = match &self.currencies {
            Some(entries) => CurrencyTable::new(entries.clone())?,
            None => match self.api {
                ApiStyle::MtGox => CurrencyTable::mtgox(),
                ApiStyle::BtcE => CurrencyTable::btce(),
            },
        };

        let api: Arc<dyn TickerApi> = match self.api {
            ApiStyle::MtGox => {
                let url_template = match &self.url_template {
                    Some(template) => UrlTemplate::with_placeholder(template.as_str(), CodeCase::Upper)?,
                    None => MtGoxApi::default_url_template(),
                };
                Arc::new(MtGoxApi::new(currencies, url_template))
            }
            ApiStyle::BtcE => {
                let url_template = match &self.url_template {
                    Some(template) => UrlTemplate::with_placeholder(template.as_str(), CodeCase::Lower)?,
                    None => BtcEApi::default_url_template(),
                };
                Arc::new(BtcEApi::new(currencies, url_template))
            }
        };

        Ok(api)
    }
}
