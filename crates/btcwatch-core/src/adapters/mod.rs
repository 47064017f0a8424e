mod btce;
mod mtgox;

pub use btce::BtcEApi;
pub use mtgox::MtGoxApi;

use std::sync::Arc;

use crate::{ApiStyle, TickerApi};

/// Built-in adapter for `style` with its default URL and currency table.
pub fn default_for(style: ApiStyle) -> Arc<dyn TickerApi> {
    match style {
        ApiStyle::MtGox => Arc::new(MtGoxApi::default()),
        ApiStyle::BtcE => Arc::new(BtcEApi::default()),
    }
}
