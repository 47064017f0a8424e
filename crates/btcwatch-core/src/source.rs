use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Ticker service conventions selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStyle {
    /// Prices as integer strings under `data.{buy,sell}.value_int`.
    #[default]
    MtGox,
    /// Prices as JSON numbers under `ticker.{buy,sell}`.
    BtcE,
}

impl ApiStyle {
    pub const ALL: [Self; 2] = [Self::MtGox, Self::BtcE];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MtGox => "mtgox",
            Self::BtcE => "btce",
        }
    }
}

impl Display for ApiStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiStyle {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mtgox" | "mt_gox" => Ok(Self::MtGox),
            "btce" | "btc-e" | "btc_e" => Ok(Self::BtcE),
            other => Err(ConfigError::InvalidApi {
                value: other.to_owned(),
            }),
        }
    }
}
