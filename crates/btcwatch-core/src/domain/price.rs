use serde::{Deserialize, Serialize};

/// A quoted price in integer units and as a display float.
///
/// Whichever side the service reports is the source of truth; the other is
/// derived from the currency scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Price {
    pub int: i64,
    pub float: f64,
}

impl Price {
    /// Price reported as integer units; the float is `int / scale_factor`.
    pub fn from_int(int: i64, scale_factor: u32) -> Self {
        Self {
            int,
            float: int as f64 / f64::from(scale_factor),
        }
    }

    /// Price reported as a decimal; the integer is `float * scale_factor`
    /// truncated toward zero.
    pub fn from_float(float: f64, scale_factor: u32) -> Self {
        Self {
            int: (float * f64::from(scale_factor)).trunc() as i64,
            float,
        }
    }
}

/// Buy and sell prices decoded from one ticker response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedRates {
    pub buy: Price,
    pub sell: Price,
    /// Trade validity as reported by the exchange.
    pub success: bool,
}
