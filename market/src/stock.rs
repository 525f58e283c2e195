use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::{MarketError, Result};
use crate::exchange::Market;
use crate::formulas;
use crate::types::StockClass;

/// Static reference data for a listed instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub symbol: String,
    #[serde(default)]
    pub last_dividend: f64,
    pub class: StockClass,
}

impl Stock {
    pub fn common(symbol: impl Into<String>, last_dividend: f64) -> Self {
        Self {
            symbol: symbol.into(),
            last_dividend,
            class: StockClass::Common,
        }
    }

    pub fn preferred(
        symbol: impl Into<String>,
        last_dividend: f64,
        fixed_dividend_pct: f64,
        par_value: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            last_dividend,
            class: StockClass::Preferred {
                fixed_dividend_pct,
                par_value,
            },
        }
    }

    /// Check the reference data is usable for pricing.
    ///
    /// The last dividend must be finite and non-negative. Preferred stocks
    /// also need a finite, non-negative fixed percentage and a finite,
    /// positive par value.
    pub fn validate(&self) -> Result<()> {
        if !self.last_dividend.is_finite() || self.last_dividend < 0.0 {
            return Err(self.invalid("last_dividend", "must be finite and non-negative"));
        }

        if let StockClass::Preferred {
            fixed_dividend_pct,
            par_value,
        } = self.class
        {
            if !fixed_dividend_pct.is_finite() || fixed_dividend_pct < 0.0 {
                return Err(self.invalid("fixed_dividend_pct", "must be finite and non-negative"));
            }
            if !par_value.is_finite() || par_value <= 0.0 {
                return Err(self.invalid("par_value", "must be finite and positive"));
            }
        }

        Ok(())
    }

    fn invalid(&self, field: &'static str, reason: &'static str) -> MarketError {
        MarketError::InvalidStock {
            symbol: self.symbol.clone(),
            field,
            reason,
        }
    }

    /// Dividend yield at `price`.
    ///
    /// Common stocks yield `last_dividend / price`; preferred stocks yield
    /// their fixed percentage of par over `price`.
    pub fn dividend_yield(&self, price: f64) -> Result<f64> {
        check_price(price)?;

        let y = match self.class {
            StockClass::Common => formulas::dividend_yield_common(self.last_dividend, price),
            StockClass::Preferred {
                fixed_dividend_pct,
                par_value,
            } => formulas::dividend_yield_preferred(fixed_dividend_pct, par_value, price),
        };

        Ok(y)
    }

    /// Price / earnings ratio at `price`. Fails when the last dividend is zero.
    pub fn pe_ratio(&self, price: f64) -> Result<f64> {
        check_price(price)?;

        if self.last_dividend == 0.0 {
            return Err(MarketError::DivisionByZero {
                symbol: self.symbol.clone(),
            });
        }

        Ok(formulas::pe_ratio(price, self.last_dividend))
    }

    /// Volume weighted price of this stock over the market's trade window.
    pub fn volume_weighted_price<C: Clock>(&self, market: &Market<C>) -> Result<Option<f64>> {
        market.volume_weighted_price(&self.symbol)
    }
}

fn check_price(price: f64) -> Result<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(MarketError::InvalidPrice(price));
    }
    Ok(())
}
