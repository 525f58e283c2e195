//! GBCE market ledger.
//!
//! A closed, in-memory exchange: a catalog of listed stocks, an append-only
//! log of buy/sell trades against them, and the metrics derived from both.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`exchange`] | [`Market`]: listing, trade recording, VWAP, all-share index |
//! | [`stock`] | [`Stock`] reference data, dividend yield, P/E ratio |
//! | [`trade`] | [`Trade`] tickets and [`RecordedTrade`] log entries |
//! | [`formulas`] | Pure arithmetic behind every metric |
//! | [`window`] | Trailing time window for price metrics |
//! | [`clock`] | Injectable source of "now" |
//! | [`shared`] | Lock-guarded handle for multi-threaded callers |
//!
//! ```rust
//! use market::{Market, Side, Stock, Trade};
//!
//! let mut gbce = Market::new();
//! gbce.add_stock(Stock::preferred("GIN", 8.0, 2.0, 100.0))?;
//! gbce.add_trade(Trade::new().symbol("GIN").side(Side::Buy).quantity(1000).price(114.0))?;
//!
//! assert_eq!(gbce.volume_weighted_price("GIN")?, Some(114.0));
//! assert!(gbce.all_share_index() > 0.0);
//! # Ok::<(), market::MarketError>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod exchange;
pub mod formulas;
pub mod shared;
pub mod stock;
pub mod trade;
pub mod types;
pub mod window;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::MarketConfig;
pub use error::{MarketError, Result};
pub use exchange::Market;
pub use shared::SharedMarket;
pub use stock::Stock;
pub use trade::{RecordedTrade, Trade};
pub use types::{Side, StockClass};
pub use window::TradeWindow;
