//! Domain values shared by the resolver, parser and rate snapshot.

mod currency;
mod price;
mod timestamp;

pub use currency::{CurrencyInfo, CurrencyTable};
pub use price::{ParsedRates, Price};
pub use timestamp::UtcDateTime;
