//! Type-safe price representation in minor currency units.
//!
//! Prices are stored as whole minor units (cents). Display converts to the
//! major unit with [`rust_decimal`] so `150` always renders as `1.50`, never
//! as a float approximation. One minor unit is always 1/100 of a major unit.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Symbol used when a product does not declare its own currency.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// A non-negative amount in minor currency units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a price from minor units (e.g., cents).
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// Amount in major units with two decimal places (e.g., `15.00`).
    #[must_use]
    pub fn major_units(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), 2)
    }

    /// Multiply by a line quantity, saturating at `u64::MAX`.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Format for display (e.g., `"$19.99"`).
    #[must_use]
    pub fn display(self, symbol: &str) -> String {
        format!("{symbol}{:.2}", self.major_units())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<u64> for Price {
    fn from(minor: u64) -> Self {
        Self(minor)
    }
}

/// Format minor units as `symbol` followed by the major amount with exactly
/// two decimals.
///
/// ```rust
/// # use lexic_core::format_price;
/// assert_eq!(format_price(150, "$"), "$1.50");
/// assert_eq!(format_price(699_000, "$"), "$6990.00");
/// ```
#[must_use]
pub fn format_price(minor: u64, symbol: &str) -> String {
    Price::from_minor(minor).display(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(150, "$"), "$1.50");
        assert_eq!(format_price(6990, "$"), "$69.90");
        assert_eq!(format_price(699_000, "$"), "$6990.00");
        assert_eq!(format_price(0, "$"), "$0.00");
        assert_eq!(format_price(7, "€"), "€0.07");
    }

    #[test]
    fn test_format_price_handles_max() {
        assert_eq!(format_price(u64::MAX, "$"), "$184467440737095516.15");
    }

    #[test]
    fn test_price_arithmetic_saturates() {
        let line = Price::from_minor(1500).times(3);
        assert_eq!(line.minor_units(), 4500);

        let huge = Price::from_minor(u64::MAX).times(2);
        assert_eq!(huge.minor_units(), u64::MAX);

        let total: Price = [Price::from_minor(u64::MAX), Price::from_minor(1)]
            .into_iter()
            .sum();
        assert_eq!(total.minor_units(), u64::MAX);
    }

    #[test]
    fn test_price_deserializes_from_integer() {
        let price: Price = serde_json::from_str("6990").unwrap_or_default();
        assert_eq!(price, Price::from_minor(6990));
        assert!(serde_json::from_str::<Price>("-1").is_err());
    }
}
