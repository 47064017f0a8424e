use std::sync::Arc;

use crate::http_client::{HttpClient, HttpRequest, DEFAULT_MAX_BODY_BYTES};
use crate::{ApiError, CurrencyInfo, TickerApi};

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Issues the single ticker request for a resolved currency.
#[derive(Clone)]
pub struct TickerFetcher {
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
    max_body_bytes: usize,
}

impl TickerFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Fetch the raw ticker body for `currency`.
    ///
    /// Non-2xx responses are treated as transport failures. No retry is
    /// attempted.
    pub async fn fetch(&self, api: &dyn TickerApi, currency: &CurrencyInfo) -> Result<String, ApiError> {
        let request = HttpRequest::get(api.url_template().render(currency))
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms)
            .with_max_body_bytes(self.max_body_bytes);

        tracing::debug!(api = %api.style(), url = %request.url, "requesting ticker");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| ApiError::transport(e.message()))?;

        tracing::debug!(
            api = %api.style(),
            status = response.status,
            bytes = response.body.len(),
            "ticker response received"
        );

        if !response.is_success() {
            return Err(ApiError::transport(format!(
                "{} returned HTTP status {}",
                api.style(),
                response.status
            )));
        }

        Ok(response.body)
    }
}
