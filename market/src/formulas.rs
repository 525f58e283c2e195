//! Stateless financial formulas.
//!
//! Callers validate their operands; these functions only do the arithmetic.

/// Dividend yield of a common stock.
pub fn dividend_yield_common(last_dividend: f64, price: f64) -> f64 {
    last_dividend / price
}

/// Dividend yield of a preferred stock. `fixed_dividend_pct` is a percentage
/// (2.0 means 2%).
pub fn dividend_yield_preferred(fixed_dividend_pct: f64, par_value: f64, price: f64) -> f64 {
    fixed_dividend_pct / 100.0 * par_value / price
}

/// Price / earnings ratio, using the dividend as the earnings proxy.
pub fn pe_ratio(price: f64, dividend: f64) -> f64 {
    price / dividend
}

/// `sum(price * quantity) / sum(quantity)`.
///
/// Returns `None` when there is nothing to weight.
pub fn volume_weighted_price<I>(fills: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, u64)>,
{
    let (notional, volume) = fills
        .into_iter()
        .fold((0.0_f64, 0_u64), |(notional, volume), (price, qty)| {
            (notional + price * qty as f64, volume.saturating_add(qty))
        });

    if volume == 0 {
        return None;
    }

    Some(notional / volume as f64)
}

/// Geometric mean of strictly positive values.
///
/// Evaluated in log space so a long list of prices cannot overflow the
/// running product. `None` for an empty slice.
pub fn geometric_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let log_sum: f64 = values.iter().map(|v| v.ln()).sum();
    Some((log_sum / values.len() as f64).exp())
}

/// Most decimal places `round_to` honours. An f64 carries no more.
pub const MAX_DECIMALS: u32 = 15;

/// Round half away from zero to `decimals` places, capped at
/// [`MAX_DECIMALS`]. Values too large to scale come back unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let scaled = value * scale;

    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]
        #[test]
        fn geometric_mean_stays_within_min_and_max(
            values in prop::collection::vec(0.01..10_000.0f64, 1..200)
        ) {
            let g = geometric_mean(&values).unwrap();
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

            // log/exp round trip may drift by a few ulps
            let eps = max * 1e-12;
            prop_assert!(g >= min - eps, "{} < min {}", g, min);
            prop_assert!(g <= max + eps, "{} > max {}", g, max);
        }

        #[test]
        fn vwap_stays_within_traded_prices(
            fills in prop::collection::vec((1.0..1_000.0f64, 1..100_000u64), 1..50)
        ) {
            let v = volume_weighted_price(fills.iter().copied()).unwrap();
            let min = fills.iter().map(|f| f.0).fold(f64::INFINITY, f64::min);
            let max = fills.iter().map(|f| f.0).fold(f64::NEG_INFINITY, f64::max);

            prop_assert!(v >= min - 1e-9 && v <= max + 1e-9);
        }
    }
}
