use thiserror::Error;

/// Rejection of a single market call. Never fatal to the process; the
/// collections are left untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    #[error("a stock must have a non-empty symbol to be listed")]
    MissingSymbol,

    #[error("a stock with symbol {0} is already listed")]
    DuplicateSymbol(String),

    #[error("stock {symbol} field `{field}` is invalid: {reason}")]
    InvalidStock {
        symbol: String,
        field: &'static str,
        reason: &'static str,
    },

    #[error("trade is incomplete, missing: {}", .missing.join(", "))]
    IncompleteTrade { missing: Vec<&'static str> },

    #[error("trade field `{field}` is invalid: {reason}")]
    InvalidTrade {
        field: &'static str,
        reason: &'static str,
    },

    #[error("no stock listed with symbol {0}")]
    UnknownStock(String),

    #[error("price must be finite and positive, got {0}")]
    InvalidPrice(f64),

    #[error("stock {symbol} has a zero dividend")]
    DivisionByZero { symbol: String },
}

pub type Result<T> = std::result::Result<T, MarketError>;
