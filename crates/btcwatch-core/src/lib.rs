//! # btcwatch Core
//!
//! Fetches a Bitcoin exchange ticker for one fiat currency and exposes the
//! parsed buy/sell prices together with the currency's display metadata.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Ticker service conventions (MtGox, BTC-e) |
//! | [`config`] | Runtime configuration |
//! | [`domain`] | Currency metadata, prices, timestamps |
//! | [`error`] | Pipeline and configuration errors |
//! | [`fetch`] | Single-request ticker fetcher |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`parse`] | JSON field lookup helpers |
//! | [`snapshot`] | Caller-owned rate record |
//! | [`source`] | Ticker service identifiers |
//! | [`ticker`] | The resolve → fetch → parse pipeline |
//! | [`ticker_api`] | Service contract trait |
//! | [`url_template`] | Currency slot substitution in request URLs |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Caller / CLI   │  owns RateSnapshot
//! └────────┬────────┘
//!          │ code
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Currency        │────▶│ CurrencyTable    │
//! │ Resolver        │     │ (per service)    │
//! └────────┬────────┘     └──────────────────┘
//!          │ CurrencyInfo
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Ticker Fetcher  │────▶│ HTTP Client      │
//! │ (UrlTemplate)   │     │ (reqwest)        │
//! └────────┬────────┘     └──────────────────┘
//!          │ body
//!          ▼
//! ┌─────────────────┐
//! │ TickerApi parse │  → ParsedRates → RateSnapshot::commit
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every stage short-circuits with an [`ApiError`]; a snapshot is only
//! written after the whole pipeline succeeded.
//!
//! ```rust
//! use btcwatch_core::{ApiErrorKind, CurrencyTable};
//!
//! let table = CurrencyTable::mtgox();
//! assert_eq!(table.resolve("XY").unwrap_err().kind(), ApiErrorKind::InvalidLength);
//! assert_eq!(table.resolve("ZZZ").unwrap_err().kind(), ApiErrorKind::UnknownCurrency);
//! assert_eq!(table.resolve("eur").unwrap().symbol(), "\u{20ac}");
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod http_client;
pub mod parse;
pub mod snapshot;
pub mod source;
pub mod ticker;
pub mod ticker_api;
pub mod url_template;

// Adapter implementations
pub use adapters::{BtcEApi, MtGoxApi};

// Configuration
pub use config::TickerConfig;

// Domain values
pub use domain::{CurrencyInfo, CurrencyTable, ParsedRates, Price, UtcDateTime};

// Error types
pub use error::{ApiError, ApiErrorKind, ConfigError};

// Fetcher
pub use fetch::TickerFetcher;

// HTTP client types
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

// Snapshot
pub use snapshot::{RateSnapshot, SharedSnapshot};

// Service identifiers
pub use source::ApiStyle;

// Pipeline
pub use ticker::Ticker;
pub use ticker_api::TickerApi;
pub use url_template::{CodeCase, UrlTemplate};
