use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::{CurrencyInfo, ParsedRates, Price, UtcDateTime};

/// Most recent successfully parsed ticker.
///
/// Starts empty. Fields are only ever replaced together by [`commit`], so a
/// failed refresh leaves the previous rates in place.
///
/// Equality compares the rates and currency only; `updated_at` is commit
/// metadata and two commits of the same ticker compare equal.
///
/// [`commit`]: RateSnapshot::commit
#[derive(Debug, Clone, Default, Serialize)]
pub struct RateSnapshot {
    has_data: bool,
    currency: Option<CurrencyInfo>,
    buy: Price,
    sell: Price,
    success: bool,
    updated_at: Option<UtcDateTime>,
}

impl RateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace currency, prices and status in one step.
    pub fn commit(&mut self, currency: CurrencyInfo, rates: ParsedRates) {
        *self = Self {
            has_data: true,
            currency: Some(currency),
            buy: rates.buy,
            sell: rates.sell,
            success: rates.success,
            updated_at: Some(UtcDateTime::now()),
        };
    }

    pub const fn has_data(&self) -> bool {
        self.has_data
    }

    pub fn currency(&self) -> Option<&CurrencyInfo> {
        self.currency.as_ref()
    }

    pub const fn buy(&self) -> Price {
        self.buy
    }

    pub const fn sell(&self) -> Price {
        self.sell
    }

    /// Trade validity reported by the exchange on the last commit.
    pub const fn success(&self) -> bool {
        self.success
    }

    pub const fn updated_at(&self) -> Option<UtcDateTime> {
        self.updated_at
    }
}

impl PartialEq for RateSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.has_data == other.has_data
            && self.currency == other.currency
            && self.buy == other.buy
            && self.sell == other.sell
            && self.success == other.success
    }
}

/// Snapshot shared between concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct SharedSnapshot {
    inner: Arc<Mutex<RateSnapshot>>,
}

impl SharedSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current snapshot.
    pub fn read(&self) -> RateSnapshot {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Commit under the lock and return the new contents.
    pub fn commit(&self, currency: CurrencyInfo, rates: ParsedRates) -> RateSnapshot {
        // Commits assign the whole struct, so a poisoned guard still holds a
        // consistent snapshot.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        guard.commit(currency, rates);
        guard.clone()
    }
}
