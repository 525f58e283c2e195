use std::sync::Arc;

use parking_lot::RwLock;

use crate::clock::{Clock, SystemClock};
use crate::config::MarketConfig;
use crate::error::Result;
use crate::exchange::Market;
use crate::stock::Stock;
use crate::trade::{RecordedTrade, Trade};

/// Thread-safe handle over a [`Market`].
///
/// Writers (`add_stock`, `add_trade`) are exclusive with each other and with
/// readers, so a reader never observes a half-appended trade log. Clones share
/// the same market.
pub struct SharedMarket<C = SystemClock> {
    inner: Arc<RwLock<Market<C>>>,
}

impl<C> Clone for SharedMarket<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedMarket<SystemClock> {
    pub fn new() -> Self {
        Self::from_market(Market::new())
    }

    pub fn with_config(config: MarketConfig) -> Self {
        Self::from_market(Market::with_config(config))
    }
}

impl Default for SharedMarket<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SharedMarket<C> {
    pub fn from_market(market: Market<C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(market)),
        }
    }

    pub fn add_stock(&self, stock: Stock) -> Result<()> {
        self.inner.write().add_stock(stock)
    }

    pub fn add_trade(&self, trade: Trade) -> Result<RecordedTrade> {
        self.inner.write().add_trade(trade)
    }

    /// Copy of the listed stock, if any.
    pub fn get_stock(&self, symbol: &str) -> Option<Stock> {
        self.inner.read().get_stock(symbol).cloned()
    }

    pub fn volume_weighted_price(&self, symbol: &str) -> Result<Option<f64>> {
        self.inner.read().volume_weighted_price(symbol)
    }

    pub fn all_share_index(&self) -> f64 {
        self.inner.read().all_share_index()
    }

    pub fn trade_count(&self) -> usize {
        self.inner.read().trade_count()
    }

    /// Run several reads against one consistent snapshot.
    pub fn with_read<R>(&self, f: impl FnOnce(&Market<C>) -> R) -> R {
        f(&self.inner.read())
    }
}
