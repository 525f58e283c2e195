use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        };
        f.write_str(s)
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(format!("invalid side: {other}")),
        }
    }
}

/// Share class of a listed stock.
///
/// Preferred-only terms live on the `Preferred` variant, so a common stock can
/// never carry a fixed dividend or par value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StockClass {
    Common,
    Preferred {
        /// Percentage of par paid as dividend (2.0 means 2%).
        fixed_dividend_pct: f64,
        par_value: f64,
    },
}

impl StockClass {
    pub fn name(&self) -> &'static str {
        match self {
            StockClass::Common => "Common",
            StockClass::Preferred { .. } => "Preferred",
        }
    }
}

impl fmt::Display for StockClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_round_trips_through_text() {
        for side in [Side::Buy, Side::Sell] {
            assert_eq!(side.to_string().parse::<Side>().unwrap(), side);
        }
        assert_eq!(" SELL ".parse::<Side>().unwrap(), Side::Sell);
        assert!("hold".parse::<Side>().is_err());
    }

    #[test]
    fn stock_class_serializes_with_type_tag() {
        let json = serde_json::to_value(StockClass::Preferred {
            fixed_dividend_pct: 2.0,
            par_value: 100.0,
        })
        .unwrap();

        assert_eq!(json["type"], "preferred");
        assert_eq!(json["fixed_dividend_pct"], 2.0);

        let common: StockClass = serde_json::from_str(r#"{"type":"common"}"#).unwrap();
        assert_eq!(common, StockClass::Common);
    }
}
