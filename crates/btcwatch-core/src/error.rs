use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Fieldless classification of [`ApiError`], convenient for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    InvalidLength,
    UnknownCurrency,
    TransportInit,
    Transport,
    MalformedJson,
    MissingField,
}

impl ApiErrorKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidLength => "currency.invalid_length",
            Self::UnknownCurrency => "currency.unknown",
            Self::TransportInit => "transport.init_failure",
            Self::Transport => "transport.error",
            Self::MalformedJson => "parse.malformed_json",
            Self::MissingField => "parse.missing_field",
        }
    }
}

impl Display for ApiErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors raised by the resolve → fetch → parse pipeline.
///
/// Every variant is terminal for the current call. None of them leave a
/// [`RateSnapshot`](crate::RateSnapshot) partially written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("bad currency length: expected 3 characters, got {len}")]
    InvalidLength { len: usize },

    #[error("invalid currency '{code}'")]
    UnknownCurrency { code: String },

    #[error("unable to initialise HTTP client: {message}")]
    TransportInit { message: String },

    #[error("{message}")]
    Transport { message: String },

    #[error("malformed JSON: {message}")]
    MalformedJson { message: String },

    #[error("couldn't get JSON field '{path}'{}", detail_suffix(.detail))]
    MissingField {
        path: String,
        detail: Option<String>,
    },
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn transport_init(message: impl Into<String>) -> Self {
        Self::TransportInit {
            message: message.into(),
        }
    }

    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::MalformedJson {
            message: message.into(),
        }
    }

    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::MissingField {
            path: path.into(),
            detail: None,
        }
    }

    pub fn missing_field_with(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MissingField {
            path: path.into(),
            detail: Some(detail.into()),
        }
    }

    pub const fn kind(&self) -> ApiErrorKind {
        match self {
            Self::InvalidLength { .. } => ApiErrorKind::InvalidLength,
            Self::UnknownCurrency { .. } => ApiErrorKind::UnknownCurrency,
            Self::TransportInit { .. } => ApiErrorKind::TransportInit,
            Self::Transport { .. } => ApiErrorKind::Transport,
            Self::MalformedJson { .. } => ApiErrorKind::MalformedJson,
            Self::MissingField { .. } => ApiErrorKind::MissingField,
        }
    }

    pub const fn code(&self) -> &'static str {
        self.kind().code()
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {detail}"))
        .unwrap_or_default()
}

/// Errors raised while assembling a [`TickerConfig`](crate::TickerConfig) or
/// a custom currency table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid api '{value}', expected one of mtgox, btce")]
    InvalidApi { value: String },

    #[error("url template has no 'xxx' currency slot: '{template}'")]
    MissingCurrencySlot { template: String },

    #[error("currency slot at offset {offset} does not fit url template '{template}'")]
    SlotOutOfBounds { template: String, offset: usize },

    #[error("currency code must be 3 ASCII letters: '{code}'")]
    InvalidCurrencyCode { code: String },

    #[error("currency '{code}' is declared more than once")]
    DuplicateCurrency { code: String },

    #[error("scale factor for '{code}' must be greater than zero")]
    ZeroScaleFactor { code: String },

    #[error("currency table must contain at least one entry")]
    EmptyCurrencyTable,

    #[error("timeout_ms must be greater than zero")]
    ZeroTimeout,
}
