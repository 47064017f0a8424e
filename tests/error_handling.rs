//! Behavior tests for failures: every stage short-circuits and the caller's
//! snapshot keeps whatever it held before.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use btcwatch_core::{
    ApiError, ApiErrorKind, HttpClient, HttpError, HttpRequest, HttpResponse, MtGoxApi,
    RateSnapshot, ReqwestHttpClient, Ticker, TickerConfig, TickerFetcher,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const MTGOX_USD: &str = r#"{"result":"success","data":{"buy":{"value_int":"10951000"},"sell":{"value_int":"10990001"}}}"#;

/// Plays back one scripted response per request.
struct ScriptedHttpClient {
    script: Mutex<Vec<Result<HttpResponse, HttpError>>>,
}

impl ScriptedHttpClient {
    fn new(script: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script),
        })
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        _request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let next = self
            .script
            .lock()
            .expect("script should not be poisoned")
            .remove(0);
        Box::pin(async move { next })
    }
}

/// Serve exactly one raw HTTP/1.1 response on a loopback port.
async fn serve_once(status_line: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("loopback bind should succeed");
    let addr = listener.local_addr().expect("bound address");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = [0_u8; 2048];
        let _ = socket.read(&mut request).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/api/2/BTCxxx/money/ticker_fast")
}

fn ticker_for(template: &str, fetcher: impl FnOnce(TickerFetcher) -> TickerFetcher) -> Ticker {
    let config = TickerConfig {
        url_template: Some(template.to_owned()),
        ..TickerConfig::default()
    };
    let client = ReqwestHttpClient::try_new("btcwatch-test").expect("client builds");
    Ticker::with_fetcher(
        config.build_api().expect("valid config"),
        fetcher(TickerFetcher::new(Arc::new(client))),
    )
}

// =============================================================================
// Error Handling: Transport Failures
// =============================================================================

#[tokio::test]
async fn when_first_fetch_fails_snapshot_stays_empty() {
    // Given: a transport that cannot connect
    let client = ScriptedHttpClient::new(vec![Err(HttpError::new(
        "connection failed: error trying to connect: dns error",
    ))]);
    let ticker = Ticker::new(Arc::new(MtGoxApi::default()), client);
    let mut snapshot = RateSnapshot::new();

    // When: the first refresh runs
    let err = ticker
        .fetch_and_parse("USD", &mut snapshot)
        .await
        .expect_err("transport failure surfaces");

    // Then: the diagnostic is passed through and nothing was written
    assert_eq!(err.kind(), ApiErrorKind::Transport);
    assert!(err.to_string().contains("dns error"));
    assert!(!snapshot.has_data());
    assert_eq!(snapshot, RateSnapshot::new());
}

#[tokio::test]
async fn when_later_fetch_fails_previous_rates_survive() {
    let client = ScriptedHttpClient::new(vec![
        Ok(HttpResponse::ok_json(MTGOX_USD)),
        Err(HttpError::new("request timeout: operation timed out")),
        Ok(HttpResponse::with_status(503, "maintenance")),
        Ok(HttpResponse::ok_json("{not json")),
    ]);
    let ticker = Ticker::new(Arc::new(MtGoxApi::default()), client);
    let mut snapshot = RateSnapshot::new();

    let good = ticker
        .fetch_and_parse("USD", &mut snapshot)
        .await
        .expect("first call succeeds");

    let kinds = [
        ApiErrorKind::Transport,
        ApiErrorKind::Transport,
        ApiErrorKind::MalformedJson,
    ];
    for expected in kinds {
        let err = ticker
            .fetch_and_parse("GBP", &mut snapshot)
            .await
            .expect_err("refresh fails");
        assert_eq!(err.kind(), expected);
        assert!(snapshot.has_data());
        assert_eq!(snapshot, good, "snapshot must not be half-written");
        assert_eq!(snapshot.updated_at(), good.updated_at());
    }
}

#[tokio::test]
async fn when_currency_is_invalid_snapshot_metadata_is_unchanged() {
    let client = ScriptedHttpClient::new(vec![Ok(HttpResponse::ok_json(MTGOX_USD))]);
    let ticker = Ticker::new(Arc::new(MtGoxApi::default()), client);
    let mut snapshot = RateSnapshot::new();
    let good = ticker
        .fetch_and_parse("usd", &mut snapshot)
        .await
        .expect("first call succeeds");

    let err = ticker
        .fetch_and_parse("RUR", &mut snapshot)
        .await
        .expect_err("RUR is a BTC-e code");
    assert_eq!(
        err,
        ApiError::UnknownCurrency {
            code: String::from("RUR")
        }
    );
    assert_eq!(snapshot, good);
}

// =============================================================================
// Error Handling: Real transport over loopback
// =============================================================================

#[tokio::test]
async fn when_server_answers_reqwest_client_buffers_the_whole_body() {
    let template = serve_once("200 OK", String::from(MTGOX_USD)).await;
    let ticker = ticker_for(&template, |fetcher| fetcher);

    let (currency, rates) = ticker.fetch_rates("USD").await.expect("pipeline succeeds");

    assert_eq!(currency.code(), "USD");
    assert_eq!(rates.buy.int, 10_951_000);
}

#[tokio::test]
async fn when_server_returns_error_status_it_is_a_transport_error() {
    let template = serve_once("404 Not Found", String::from(r#"{"error":"not found"}"#)).await;
    let ticker = ticker_for(&template, |fetcher| fetcher);

    let err = ticker.fetch_rates("USD").await.expect_err("must fail");

    assert_eq!(err, ApiError::transport("mtgox returned HTTP status 404"));
}

#[tokio::test]
async fn when_body_exceeds_limit_it_is_rejected_not_truncated() {
    let padding = " ".repeat(4_096);
    let template = serve_once("200 OK", format!("{MTGOX_USD}{padding}")).await;
    let ticker = ticker_for(&template, |fetcher| fetcher.with_max_body_bytes(1_600));

    let err = ticker.fetch_rates("USD").await.expect_err("must fail");

    assert_eq!(err.kind(), ApiErrorKind::Transport);
    assert!(err.to_string().contains("exceeds 1600 bytes"), "{err}");
}

#[tokio::test]
async fn when_nothing_listens_connection_failure_is_reported() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("bound address");
    drop(listener);

    let template = format!("http://{addr}/api/2/BTCxxx/money/ticker_fast");
    let ticker = ticker_for(&template, |fetcher| fetcher.with_timeout_ms(2_000));

    let err = ticker.fetch_rates("USD").await.expect_err("must fail");

    assert_eq!(err.kind(), ApiErrorKind::Transport);
}

#[test]
fn when_user_agent_is_not_a_header_value_client_init_fails() {
    // Given: a configured user agent that cannot be sent as a header
    let config = TickerConfig {
        user_agent: String::from("bad\nagent"),
        ..TickerConfig::default()
    };
    let api = config.build_api().expect("valid config");

    // When: the reqwest-backed ticker is built
    let err = Ticker::with_reqwest(api, &config)
        .err()
        .expect("client construction must fail");

    // Then: the failure is reported before any request is attempted
    assert_eq!(err.kind(), ApiErrorKind::TransportInit);
    assert_eq!(err.code(), "transport.init_failure");
}
