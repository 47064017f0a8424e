//! The resolve → fetch → parse pipeline.
//!
//! ```rust,ignore
//! use btcwatch_core::{ApiStyle, RateSnapshot, Ticker, TickerConfig};
//!
//! let config = TickerConfig::for_api(ApiStyle::MtGox);
//! let ticker = Ticker::with_reqwest(config.build_api()?, &config)?;
//!
//! let mut snapshot = RateSnapshot::new();
//! ticker.fetch_and_parse("usd", &mut snapshot).await?;
//! println!("buy: {:.5}", snapshot.buy().float);
//! ```

use std::sync::Arc;

use crate::fetch::TickerFetcher;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::{
    ApiError, CurrencyInfo, ParsedRates, RateSnapshot, SharedSnapshot, TickerApi, TickerConfig,
};

/// One configured ticker service plus the transport used to reach it.
#[derive(Clone)]
pub struct Ticker {
    api: Arc<dyn TickerApi>,
    fetcher: TickerFetcher,
}

impl Ticker {
    pub fn new(api: Arc<dyn TickerApi>, http_client: Arc<dyn HttpClient>) -> Self {
        Self::with_fetcher(api, TickerFetcher::new(http_client))
    }

    pub fn with_fetcher(api: Arc<dyn TickerApi>, fetcher: TickerFetcher) -> Self {
        Self { api, fetcher }
    }

    /// Build a reqwest-backed ticker using the transport settings in `config`.
    ///
    /// # Errors
    ///
    /// [`ApiError::TransportInit`] when the HTTP client cannot be created.
    pub fn with_reqwest(api: Arc<dyn TickerApi>, config: &TickerConfig) -> Result<Self, ApiError> {
        let client = ReqwestHttpClient::try_new(&config.user_agent)
            .map_err(|e| ApiError::transport_init(e.message()))?;
        let fetcher = TickerFetcher::new(Arc::new(client))
            .with_timeout_ms(config.timeout_ms)
            .with_max_body_bytes(config.max_body_bytes);
        Ok(Self::with_fetcher(api, fetcher))
    }

    pub fn api(&self) -> &dyn TickerApi {
        self.api.as_ref()
    }

    /// Validate `code` against the service's currency table.
    pub fn resolve(&self, code: &str) -> Result<CurrencyInfo, ApiError> {
        self.api.currencies().resolve(code)
    }

    /// Resolve, fetch and parse without touching any snapshot.
    pub async fn fetch_rates(&self, code: &str) -> Result<(CurrencyInfo, ParsedRates), ApiError> {
        let result = async {
            let currency = self.resolve(code)?;
            let body = self.fetcher.fetch(self.api.as_ref(), &currency).await?;
            let rates = self.api.parse(&body, currency.scale_factor())?;
            Ok::<_, ApiError>((currency, rates))
        }
        .await;

        result.inspect_err(|error: &ApiError| {
            tracing::warn!(
                api = %self.api.style(),
                currency = code,
                code = error.code(),
                "ticker refresh failed: {error}"
            );
        })
    }

    /// Run the pipeline and commit into `snapshot` on success.
    ///
    /// On error `snapshot` is left exactly as it was.
    pub async fn fetch_and_parse(
        &self,
        code: &str,
        snapshot: &mut RateSnapshot,
    ) -> Result<RateSnapshot, ApiError> {
        let (currency, rates) = self.fetch_rates(code).await?;
        snapshot.commit(currency, rates);
        Ok(snapshot.clone())
    }

    /// Like [`fetch_and_parse`](Self::fetch_and_parse) against a shared
    /// snapshot. The lock is not held while the request is in flight.
    pub async fn refresh(
        &self,
        code: &str,
        shared: &SharedSnapshot,
    ) -> Result<RateSnapshot, ApiError> {
        let (currency, rates) = self.fetch_rates(code).await?;
        Ok(shared.commit(currency, rates))
    }
}
