use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{ApiError, ConfigError};

const CODE_LEN: usize = 3;

/// Display and scaling metadata for one supported fiat currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub code: String,
    pub symbol: String,
    /// Number of integer price units per display unit.
    pub scale_factor: u32,
}

impl CurrencyInfo {
    pub fn new(code: impl Into<String>, symbol: impl Into<String>, scale_factor: u32) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            scale_factor,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub const fn scale_factor(&self) -> u32 {
        self.scale_factor
    }
}

impl Display for CurrencyInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.symbol)
    }
}

/// Fixed list of currencies a deployment accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CurrencyTable {
    entries: Vec<CurrencyInfo>,
}

impl CurrencyTable {
    /// Build a table from explicitly declared entries.
    ///
    /// Codes are normalized to uppercase. Every code must be three ASCII
    /// letters, appear once, and carry a non-zero scale factor.
    pub fn new(entries: Vec<CurrencyInfo>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyCurrencyTable);
        }

        let mut normalized: Vec<CurrencyInfo> = Vec::with_capacity(entries.len());
        for mut entry in entries {
            let valid = entry.code.len() == CODE_LEN
                && entry.code.chars().all(|ch| ch.is_ascii_alphabetic());
            if !valid {
                return Err(ConfigError::InvalidCurrencyCode { code: entry.code });
            }
            entry.code.make_ascii_uppercase();

            if entry.scale_factor == 0 {
                return Err(ConfigError::ZeroScaleFactor { code: entry.code });
            }
            if normalized.iter().any(|existing| existing.code == entry.code) {
                return Err(ConfigError::DuplicateCurrency { code: entry.code });
            }
            normalized.push(entry);
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// Currencies quoted by the MtGox v2 `ticker_fast` endpoint.
    pub fn mtgox() -> Self {
        Self::from_static(&[
            ("AUD", "$", 100_000),
            ("CAD", "$", 100_000),
            ("CHF", "Fr.", 100_000),
            ("CNY", "\u{a5}", 100_000),
            ("CZK", "K\u{10d}.", 100_000),
            ("DKK", "kr.", 100_000),
            ("EUR", "\u{20ac}", 100_000),
            ("GBP", "\u{a3}", 100_000),
            ("HKD", "$", 100_000),
            ("JPY", "\u{a5}", 1_000),
            ("NOK", "kr.", 100_000),
            ("PLN", "z\u{142}.", 100_000),
            ("RUB", "p.", 100_000),
            ("SEK", "kr.", 1_000),
            ("SGD", "$", 100_000),
            ("THB", "\u{e3f}", 100_000),
            ("USD", "$", 100_000),
        ])
    }

    /// Currencies quoted by the BTC-e v2 ticker endpoint.
    pub fn btce() -> Self {
        Self::from_static(&[
            ("EUR", "\u{20ac}", 100_000),
            ("RUR", "p.", 100_000),
            ("USD", "$", 100_000),
        ])
    }

    fn from_static(entries: &[(&str, &str, u32)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(code, symbol, scale_factor)| CurrencyInfo::new(*code, *symbol, *scale_factor))
                .collect(),
        }
    }

    /// Validate `code` and return its metadata.
    ///
    /// Lookup is case-insensitive. Length is counted in characters, so
    /// multi-byte input is reported with its visible length.
    pub fn resolve(&self, code: &str) -> Result<CurrencyInfo, ApiError> {
        let len = code.chars().count();
        if len != CODE_LEN {
            return Err(ApiError::InvalidLength { len });
        }

        let normalized = code.to_ascii_uppercase();
        self.entries
            .iter()
            .find(|entry| entry.code == normalized)
            .cloned()
            .ok_or(ApiError::UnknownCurrency { code: normalized })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.resolve(code).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurrencyInfo> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
