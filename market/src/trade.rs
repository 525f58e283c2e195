use chrono::{DateTime, Utc};

use crate::types::Side;

/// A buy/sell ticket as submitted by a caller.
///
/// Every field starts absent. `Market::add_trade` fills a missing timestamp,
/// then refuses the ticket unless every other field is present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trade {
    pub stock_symbol: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub side: Option<Side>,
    pub quantity: Option<u64>,
    pub price: Option<f64>,
}

impl Trade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.stock_symbol = Some(symbol.into());
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Names of the fields still absent, in a fixed order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("timestamp", self.timestamp.is_none()),
            ("stock_symbol", self.stock_symbol.is_none()),
            ("quantity", self.quantity.is_none()),
            ("side", self.side.is_none()),
            ("price", self.price.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// An accepted trade. Only the market creates these, and it never edits
/// them once they are in the log.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedTrade {
    pub stock_symbol: String,
    pub timestamp: DateTime<Utc>,
    pub side: Side,
    pub quantity: u64,
    pub price: f64,
}

impl RecordedTrade {
    /// `price * quantity`.
    pub fn notional(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ticket_is_missing_everything() {
        let t = Trade::new();

        assert!(!t.is_complete());
        assert_eq!(
            t.missing_fields(),
            vec!["timestamp", "stock_symbol", "quantity", "side", "price"]
        );
    }

    #[test]
    fn ticket_without_timestamp_is_incomplete_until_stamped() {
        let t = Trade::new()
            .symbol("GIN")
            .side(Side::Buy)
            .quantity(1000)
            .price(114.0);

        assert_eq!(t.missing_fields(), vec!["timestamp"]);

        let stamped = t.at(Utc::now());
        assert!(stamped.is_complete());
    }

    #[test]
    fn reports_only_absent_fields() {
        let t = Trade::new().symbol("7UP").side(Side::Sell).price(1003.0);
        assert_eq!(t.missing_fields(), vec!["timestamp", "quantity"]);
    }

    #[test]
    fn notional_is_price_times_quantity() {
        let t = RecordedTrade {
            stock_symbol: "POP".into(),
            timestamp: Utc::now(),
            side: Side::Buy,
            quantity: 300,
            price: 20.0,
        };
        assert_eq!(t.notional(), 6000.0);
    }
}
