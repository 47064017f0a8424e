use serde_json::Value;

use crate::parse::{number, object, parse_document};
use crate::url_template::CodeCase;
use crate::{ApiError, ApiStyle, CurrencyTable, ParsedRates, Price, TickerApi, UrlTemplate};

const BTCE_TICKER_URL: &str = "https://btc-e.com/api/2/btc_xxx/ticker";
const BTCE_CURRENCY_OFFSET: usize = 28;

/// BTC-e v2 ticker adapter.
///
/// Response shape:
///
/// ```json
/// {"ticker": {"high": 112.0, "low": 104.1, "buy": 109.9, "sell": 109.5, ...}}
/// ```
///
/// BTC-e reports prices as decimals only, so integer units are derived.
/// Rejected pairs come back as `{"error": "invalid pair"}`.
#[derive(Debug, Clone)]
pub struct BtcEApi {
    currencies: CurrencyTable,
    url_template: UrlTemplate,
}

impl Default for BtcEApi {
    fn default() -> Self {
        Self {
            currencies: CurrencyTable::btce(),
            url_template: Self::default_url_template(),
        }
    }
}

impl BtcEApi {
    pub fn new(currencies: CurrencyTable, url_template: UrlTemplate) -> Self {
        Self {
            currencies,
            url_template,
        }
    }

    pub fn default_url_template() -> UrlTemplate {
        UrlTemplate::fixed(BTCE_TICKER_URL, BTCE_CURRENCY_OFFSET, CodeCase::Lower)
    }

    fn ticker(root: &Value) -> Result<&Value, ApiError> {
        object(root, "ticker", "ticker").map_err(|missing| {
            match root.get("error").and_then(Value::as_str) {
                Some(reason) => {
                    ApiError::missing_field_with("ticker", format!("service reported: {reason}"))
                }
                None => missing,
            }
        })
    }
}

impl TickerApi for BtcEApi {
    fn style(&self) -> ApiStyle {
        ApiStyle::BtcE
    }

    fn currencies(&self) -> &CurrencyTable {
        &self.currencies
    }

    fn url_template(&self) -> &UrlTemplate {
        &self.url_template
    }

    fn parse(&self, body: &str, scale_factor: u32) -> Result<ParsedRates, ApiError> {
        let root = parse_document(body)?;
        let ticker = Self::ticker(&root)?;

        let buy = number(ticker, "buy", "ticker.buy")?;
        let sell = number(ticker, "sell", "ticker.sell")?;

        Ok(ParsedRates {
            buy: Price::from_float(buy, scale_factor),
            sell: Price::from_float(sell, scale_factor),
            success: true,
        })
    }
}
