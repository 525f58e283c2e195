use std::time::Duration;

use crate::window::DEFAULT_LOOKBACK;

#[derive(Clone, Debug, PartialEq)]
pub struct MarketConfig {
    /// How far back trades count towards a stock's volume weighted price.
    ///
    /// Also bounds the all-share index, which is built from those prices.
    pub vwap_window: Duration,

    /// Decimal places the volume weighted price is rounded to.
    pub price_decimals: u32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            vwap_window: DEFAULT_LOOKBACK,
            price_decimals: 2,
        }
    }
}

impl MarketConfig {
    pub fn with_vwap_window(mut self, window: Duration) -> Self {
        self.vwap_window = window;
        self
    }

    pub fn with_price_decimals(mut self, decimals: u32) -> Self {
        self.price_decimals = decimals;
        self
    }
}
