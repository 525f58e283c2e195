//! Market
//!
//! The exchange ledger. Owns the listed stocks and the append-only trade log,
//! checks referential integrity at insertion, and derives window-based price
//! metrics on demand.
//!
//! Responsibilities:
//!   • List stocks under unique, non-empty symbols
//!   • Timestamp, validate, and record trades against listed stocks
//!   • Volume weighted price per stock over the trailing window
//!   • All-share index as the geometric mean of those prices
//!
//! Everything is synchronous and single-owner. Wrap it in
//! [`SharedMarket`](crate::shared::SharedMarket) to hand it to several threads.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::MarketConfig;
use crate::error::{MarketError, Result};
use crate::formulas;
use crate::stock::Stock;
use crate::trade::{RecordedTrade, Trade};
use crate::window::TradeWindow;

pub struct Market<C = SystemClock> {
    /// Listed stocks in listing order
    stocks: Vec<Stock>,

    /// Symbol -> position in `stocks`
    by_symbol: HashMap<String, usize>,

    /// Accepted trades in submission order
    trades: Vec<RecordedTrade>,

    /// Symbol -> positions in `trades`
    trades_by_symbol: HashMap<String, Vec<usize>>,

    window: TradeWindow,
    config: MarketConfig,
    clock: C,
}

impl Market<SystemClock> {
    pub fn new() -> Self {
        Self::with_config(MarketConfig::default())
    }

    pub fn with_config(config: MarketConfig) -> Self {
        Self::with_clock(SystemClock, config)
    }
}

impl Default for Market<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Market<C> {
    pub fn with_clock(clock: C, config: MarketConfig) -> Self {
        Self {
            stocks: Vec::new(),
            by_symbol: HashMap::new(),
            trades: Vec::new(),
            trades_by_symbol: HashMap::new(),
            window: TradeWindow::new(config.vwap_window),
            config,
            clock,
        }
    }

    /// List a new stock.
    ///
    /// Fails with `MissingSymbol` for a blank symbol, `DuplicateSymbol`
    /// when the symbol is already listed and `InvalidStock` when the dividend
    /// terms cannot be priced. Nothing is inserted on failure.
    #[instrument(skip(self, stock), fields(symbol = %stock.symbol, class = %stock.class))]
    pub fn add_stock(&mut self, stock: Stock) -> Result<()> {
        if stock.symbol.trim().is_empty() {
            warn!("stock rejected: missing symbol");
            return Err(MarketError::MissingSymbol);
        }

        if self.by_symbol.contains_key(&stock.symbol) {
            warn!("stock rejected: duplicate symbol");
            return Err(MarketError::DuplicateSymbol(stock.symbol));
        }

        stock
            .validate()
            .inspect_err(|e| warn!(error = %e, "stock rejected: invalid terms"))?;

        self.by_symbol.insert(stock.symbol.clone(), self.stocks.len());
        self.stocks.push(stock);

        debug!(listed = self.stocks.len(), "stock listed");
        Ok(())
    }

    pub fn get_stock(&self, symbol: &str) -> Option<&Stock> {
        self.by_symbol.get(symbol).map(|&i| &self.stocks[i])
    }

    /// Record a trade.
    ///
    /// Checks run in a fixed order and the first failure wins:
    ///   1. a missing timestamp is filled from the clock
    ///   2. every field must be present (`IncompleteTrade`)
    ///   3. the symbol must be listed (`UnknownStock`)
    ///   4. quantity and price must be positive (`InvalidTrade`)
    ///
    /// On success the trade is appended to the log and a copy is returned.
    #[instrument(
        skip(self, trade),
        fields(symbol = trade.stock_symbol.as_deref().unwrap_or(""))
    )]
    pub fn add_trade(&mut self, mut trade: Trade) -> Result<RecordedTrade> {
        if trade.timestamp.is_none() {
            trade.timestamp = Some(self.clock.now());
        }

        let recorded = self
            .validate_trade(trade)
            .inspect_err(|e| warn!(error = %e, "trade rejected"))?;

        let position = self.trades.len();
        self.trades_by_symbol
            .entry(recorded.stock_symbol.clone())
            .or_default()
            .push(position);
        self.trades.push(recorded.clone());

        debug!(
            side = %recorded.side,
            quantity = recorded.quantity,
            price = recorded.price,
            notional = recorded.notional(),
            "trade recorded"
        );

        Ok(recorded)
    }

    fn validate_trade(&self, trade: Trade) -> Result<RecordedTrade> {
        let missing = trade.missing_fields();

        let Trade {
            stock_symbol: Some(stock_symbol),
            timestamp: Some(timestamp),
            side: Some(side),
            quantity: Some(quantity),
            price: Some(price),
        } = trade
        else {
            return Err(MarketError::IncompleteTrade { missing });
        };

        if !self.by_symbol.contains_key(&stock_symbol) {
            return Err(MarketError::UnknownStock(stock_symbol));
        }

        if quantity == 0 {
            return Err(MarketError::InvalidTrade {
                field: "quantity",
                reason: "must be positive",
            });
        }

        if !price.is_finite() || price <= 0.0 {
            return Err(MarketError::InvalidTrade {
                field: "price",
                reason: "must be finite and positive",
            });
        }

        Ok(RecordedTrade {
            stock_symbol,
            timestamp,
            side,
            quantity,
            price,
        })
    }

    /// Volume weighted price of `symbol` over the trailing window, rounded to
    /// `price_decimals` places.
    ///
    /// `Ok(None)` means no trade of that stock falls inside the window. That
    /// is "no price", not a price of zero.
    pub fn volume_weighted_price(&self, symbol: &str) -> Result<Option<f64>> {
        if !self.by_symbol.contains_key(symbol) {
            return Err(MarketError::UnknownStock(symbol.to_string()));
        }

        Ok(self.window_price(symbol, self.clock.now()))
    }

    /// Geometric mean of every listed stock's volume weighted price.
    ///
    /// Stocks without a trade inside the window are left out. Returns 0.0
    /// when nothing is listed or when no listed stock has a price.
    #[instrument(skip(self), fields(listed = self.stocks.len()))]
    pub fn all_share_index(&self) -> f64 {
        if self.stocks.is_empty() {
            return 0.0;
        }

        let now = self.clock.now();
        let prices: Vec<f64> = self
            .stocks
            .iter()
            .filter_map(|s| self.window_price(&s.symbol, now))
            .collect();

        match formulas::geometric_mean(&prices) {
            Some(index) => {
                debug!(priced = prices.len(), index, "all-share index computed");
                index
            }
            None => {
                debug!("no listed stock traded inside the window");
                0.0
            }
        }
    }

    fn window_price(&self, symbol: &str, now: DateTime<Utc>) -> Option<f64> {
        let fills = self
            .window
            .select(now, self.trades_for(symbol))
            .map(|t| (t.price, t.quantity));

        formulas::volume_weighted_price(fills)
            .map(|vwap| formulas::round_to(vwap, self.config.price_decimals))
    }

    /// Listed stocks in listing order.
    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    /// Full trade log in submission order.
    pub fn trades(&self) -> &[RecordedTrade] {
        &self.trades
    }

    /// Trades of one stock in submission order, regardless of age.
    pub fn trades_for<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a RecordedTrade> {
        self.trades_by_symbol
            .get(symbol)
            .into_iter()
            .flatten()
            .map(move |&i| &self.trades[i])
    }

    pub fn stock_count(&self) -> usize {
        self.stocks.len()
    }

    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::types::Side;
    use chrono::TimeDelta;
    use tracing_test::traced_test;

    fn manual_market() -> (Market<ManualClock>, ManualClock) {
        let clock = ManualClock::new(Utc::now());
        (
            Market::with_clock(clock.clone(), MarketConfig::default()),
            clock,
        )
    }

    fn buy(symbol: &str, quantity: u64, price: f64) -> Trade {
        Trade::new()
            .symbol(symbol)
            .side(Side::Buy)
            .quantity(quantity)
            .price(price)
    }

    #[test]
    fn listing_keeps_insertion_order_and_index() {
        let mut m = Market::new();
        for sym in ["TEA", "POP", "ALE"] {
            m.add_stock(Stock::common(sym, 1.0)).unwrap();
        }

        let order: Vec<_> = m.stocks().iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(order, ["TEA", "POP", "ALE"]);
        assert_eq!(m.get_stock("POP").map(|s| s.symbol.as_str()), Some("POP"));
    }

    #[test]
    fn blank_symbol_counts_as_missing() {
        let mut m = Market::new();
        assert_eq!(
            m.add_stock(Stock::common("   ", 1.0)),
            Err(MarketError::MissingSymbol)
        );
        assert_eq!(m.stock_count(), 0);
    }

    #[test]
    fn secondary_index_tracks_positions() {
        let (mut m, _clock) = manual_market();
        m.add_stock(Stock::common("TEA", 0.0)).unwrap();
        m.add_stock(Stock::common("POP", 8.0)).unwrap();

        m.add_trade(buy("TEA", 1, 1.0)).unwrap();
        m.add_trade(buy("POP", 2, 2.0)).unwrap();
        m.add_trade(buy("TEA", 3, 3.0)).unwrap();

        let qty: Vec<u64> = m.trades_for("TEA").map(|t| t.quantity).collect();
        assert_eq!(qty, [1, 3]);
        assert_eq!(m.trades_for("JOE").count(), 0);
    }

    #[test]
    fn listing_checked_before_values() {
        let (mut m, _clock) = manual_market();

        // unknown symbol *and* zero quantity: listing check fires first
        let err = m.add_trade(buy("ZZZ", 0, 10.0)).unwrap_err();
        assert_eq!(err, MarketError::UnknownStock("ZZZ".into()));

        m.add_stock(Stock::common("POP", 8.0)).unwrap();
        let err = m.add_trade(buy("POP", 0, 10.0)).unwrap_err();
        assert_eq!(
            err,
            MarketError::InvalidTrade {
                field: "quantity",
                reason: "must be positive"
            }
        );

        let err = m.add_trade(buy("POP", 10, -1.0)).unwrap_err();
        assert!(matches!(err, MarketError::InvalidTrade { field: "price", .. }));
        assert_eq!(m.trade_count(), 0);
    }

    #[test]
    fn custom_decimals_apply_to_vwap() {
        let clock = ManualClock::default();
        let mut m = Market::with_clock(clock, MarketConfig::default().with_price_decimals(0));
        m.add_stock(Stock::common("POP", 8.0)).unwrap();
        m.add_trade(buy("POP", 100, 10.0)).unwrap();
        m.add_trade(buy("POP", 300, 20.0)).unwrap();

        assert_eq!(m.volume_weighted_price("POP").unwrap(), Some(18.0));
    }

    #[test]
    fn window_is_anchored_at_query_time() {
        let (mut m, clock) = manual_market();
        m.add_stock(Stock::common("ALE", 23.0)).unwrap();
        m.add_trade(buy("ALE", 10, 60.0)).unwrap();

        assert_eq!(m.volume_weighted_price("ALE").unwrap(), Some(60.0));

        clock.advance(TimeDelta::minutes(5));
        assert_eq!(m.volume_weighted_price("ALE").unwrap(), Some(60.0));

        clock.advance(TimeDelta::seconds(1));
        assert_eq!(m.volume_weighted_price("ALE").unwrap(), None);
        assert_eq!(m.all_share_index(), 0.0);

        // log keeps the trade even after it ages out
        assert_eq!(m.trade_count(), 1);
    }

    #[test]
    #[traced_test]
    fn rejections_are_logged() {
        let mut m = Market::new();
        m.add_stock(Stock::common("JOE", 13.0)).unwrap();
        let _ = m.add_stock(Stock::common("JOE", 13.0));
        let _ = m.add_trade(buy("GIN", 10, 100.0));

        assert!(logs_contain("stock rejected: duplicate symbol"));
        assert!(logs_contain("trade rejected"));
    }
}
