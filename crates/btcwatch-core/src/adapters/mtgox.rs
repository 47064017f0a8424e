use serde_json::Value;

use crate::parse::{integer_string, object, parse_document};
use crate::url_template::CodeCase;
use crate::{ApiError, ApiStyle, CurrencyTable, ParsedRates, Price, TickerApi, UrlTemplate};

const MTGOX_TICKER_URL: &str = "https://data.mtgox.com/api/2/BTCxxx/money/ticker_fast";
const MTGOX_CURRENCY_OFFSET: usize = 32;

/// MtGox v2 `ticker_fast` adapter.
///
/// Response shape:
///
/// ```json
/// {"result": "success",
///  "data": {"buy": {"value_int": "10951000", ...},
///           "sell": {"value_int": "10900001", ...}, ...}}
/// ```
#[derive(Debug, Clone)]
pub struct MtGoxApi {
    currencies: CurrencyTable,
    url_template: UrlTemplate,
}

impl Default for MtGoxApi {
    fn default() -> Self {
        Self {
            currencies: CurrencyTable::mtgox(),
            url_template: Self::default_url_template(),
        }
    }
}

impl MtGoxApi {
    pub fn new(currencies: CurrencyTable, url_template: UrlTemplate) -> Self {
        Self {
            currencies,
            url_template,
        }
    }

    pub fn default_url_template() -> UrlTemplate {
        UrlTemplate::fixed(MTGOX_TICKER_URL, MTGOX_CURRENCY_OFFSET, CodeCase::Upper)
    }

    fn price(data: &Value, side: &str, scale_factor: u32) -> Result<Price, ApiError> {
        let quote = object(data, side, &format!("data.{side}"))?;
        let units = integer_string(quote, "value_int", &format!("data.{side}.value_int"))?;
        Ok(Price::from_int(units, scale_factor))
    }
}

impl TickerApi for MtGoxApi {
    fn style(&self) -> ApiStyle {
        ApiStyle::MtGox
    }

    fn currencies(&self) -> &CurrencyTable {
        &self.currencies
    }

    fn url_template(&self) -> &UrlTemplate {
        &self.url_template
    }

    fn parse(&self, body: &str, scale_factor: u32) -> Result<ParsedRates, ApiError> {
        let root = parse_document(body)?;
        let data = object(&root, "data", "data")?;

        let buy = Self::price(data, "buy", scale_factor)?;
        let sell = Self::price(data, "sell", scale_factor)?;

        // Absent status means the service did not report one.
        let success = root
            .get("result")
            .map_or(true, |result| result.as_str() == Some("success"));

        Ok(ParsedRates { buy, sell, success })
    }
}
