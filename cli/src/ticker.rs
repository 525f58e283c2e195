use std::time::Duration;

use market::{RecordedTrade, Side, Trade};
use rand::Rng;
use rand::seq::SliceRandom;

/// Lot sizes the ticker trades in.
pub const QUANTITIES: [u64; 7] = [500, 1_000, 2_000, 5_000, 10_000, 20_000, 50_000];

/// Whole-unit prices, lower bound inclusive, upper exclusive.
pub const PRICE_RANGE: std::ops::Range<u32> = 50..150;

/// Extra pause added after each ticker line, in milliseconds.
pub const JITTER_MS: [u64; 4] = [100, 150, 250, 450];

/// Random ticket against one of `symbols`. `None` if there is nothing to trade.
pub fn random_ticket<R: Rng + ?Sized>(rng: &mut R, symbols: &[String]) -> Option<Trade> {
    let symbol = symbols.choose(rng)?;
    let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
    let quantity = *QUANTITIES.choose(rng)?;
    let price = rng.gen_range(PRICE_RANGE);

    Some(
        Trade::new()
            .symbol(symbol.as_str())
            .side(side)
            .quantity(quantity)
            .price(f64::from(price)),
    )
}

pub fn jitter<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(*JITTER_MS.choose(rng).unwrap_or(&0))
}

/// `HH:MM:SS: Buy 500 shares of GIN for 114 (GBCE All-Share: 98.41)`
pub fn format_line(trade: &RecordedTrade, all_share_index: f64) -> String {
    format!(
        "{time}: {side} {qty} shares of {symbol} for {price} (GBCE All-Share: {index:.2})",
        time = trade.timestamp.format("%H:%M:%S"),
        side = trade.side,
        qty = trade.quantity,
        symbol = trade.stock_symbol,
        price = trade.price,
        index = all_share_index,
    )
}
