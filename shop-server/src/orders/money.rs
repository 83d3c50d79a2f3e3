//! Money arithmetic
//!
//! Prices are stored as `f64`; sums are done in `Decimal` so that adding
//! prices does not accumulate binary rounding noise.

use rust_decimal::prelude::*;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Sum of `prices`
pub fn sum_prices(prices: impl IntoIterator<Item = f64>) -> f64 {
    to_f64(prices.into_iter().map(to_decimal).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_without_float_noise() {
        assert_eq!(sum_prices([0.1, 0.2]), 0.3);
        assert_eq!(sum_prices([10.0, 15.5]), 25.5);
        assert_eq!(sum_prices([19.99, 0.01, 5.0]), 25.0);
    }

    #[test]
    fn empty_sum_is_zero() {
        assert_eq!(sum_prices(std::iter::empty()), 0.0);
    }
}
