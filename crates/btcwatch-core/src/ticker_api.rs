//! Ticker service contract.
//!
//! A [`TickerApi`] bundles everything that differs between price-quoting
//! services: the accepted currencies, the request URL, and the response
//! schema. The pipeline picks one at runtime from [`ApiStyle`].
//!
//! | Style | Implementation | Price encoding | Source of truth |
//! |-------|----------------|----------------|-----------------|
//! | `mtgox` | [`MtGoxApi`](crate::MtGoxApi) | `data.buy.value_int` string | integer units |
//! | `btce` | [`BtcEApi`](crate::BtcEApi) | `ticker.buy` number | display float |

use crate::{ApiError, ApiStyle, CurrencyTable, ParsedRates, UrlTemplate};

/// Service-specific request and response conventions.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one instance is shared by every
/// pipeline call.
pub trait TickerApi: Send + Sync {
    /// Convention identifier.
    fn style(&self) -> ApiStyle;

    /// Currencies the service quotes.
    fn currencies(&self) -> &CurrencyTable;

    /// Request URL with the currency slot.
    fn url_template(&self) -> &UrlTemplate;

    /// Decode a raw response body.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MalformedJson`] when `body` is not JSON
    /// - [`ApiError::MissingField`] when the ticker object or a price is
    ///   absent or has the wrong type
    fn parse(&self, body: &str, scale_factor: u32) -> Result<ParsedRates, ApiError>;
}
