//! # Money Module
//!
//! Provides the `Money` type for handling prices and totals safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing cart lines as floats:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Backend prices are converted ONCE, at the fetch boundary, and every  │
//! │    total after that is exact integer math.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use furniro_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let line = price * 3u32;             // $32.97
//! assert_eq!(line.cents(), 3297);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// ProductRecord.price (f64) ──► Product.price ──► cart line ──► cart_total
///                                                                   │
///                                  OrderDocument.total ◄────────────┤
///                                  PaymentRequest.amount ◄──────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use furniro_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a major-unit amount (as the content backend stores it) to
    /// cents, rounding to the nearest cent.
    ///
    /// Returns `None` for negative, NaN or infinite amounts. Only the fetch
    /// boundary should call this; everything downstream stays in cents.
    ///
    /// ```rust
    /// use furniro_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_units(250.5).unwrap().cents(), 25050);
    /// assert_eq!(Money::from_major_units(0.1 + 0.2).unwrap().cents(), 30);
    /// assert!(Money::from_major_units(-1.0).is_none());
    /// ```
    pub fn from_major_units(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let cents = (amount * 100.0).round();
        if cents > i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value in major units, for wire formats that carry a
    /// plain number (the order document's `total`).
    #[inline]
    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$12.34`. Pages do their own localized formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// Cart arithmetic saturates at the i64 bounds instead of panicking.

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0.saturating_mul(i64::from(qty)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let sofa = Money::from_cents(250_050);
        assert_eq!(sofa.dollars(), 2500);
        assert_eq!(sofa.cents_part(), 50);
    }

    #[test]
    fn test_from_major_units_rounds_to_cent() {
        assert_eq!(Money::from_major_units(250.0).unwrap().cents(), 25_000);
        assert_eq!(Money::from_major_units(19.999).unwrap().cents(), 2000);
        assert_eq!(Money::from_major_units(0.0), Some(Money::zero()));
    }

    #[test]
    fn test_from_major_units_rejects_bad_amounts() {
        assert!(Money::from_major_units(-0.01).is_none());
        assert!(Money::from_major_units(f64::NAN).is_none());
        assert!(Money::from_major_units(f64::INFINITY).is_none());
    }

    #[test]
    fn test_to_major_units() {
        assert_eq!(Money::from_cents(3050).to_major_units(), 30.5);
        assert_eq!(Money::zero().to_major_units(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(15_000).to_string(), "$150.00");
        assert_eq!(Money::from_cents(7).to_string(), "$0.07");
        assert_eq!(Money::from_cents(-1250).to_string(), "-$12.50");
    }

    #[test]
    fn test_cart_line_math() {
        let chair = Money::from_cents(25_000);
        let mut total = chair * 2u32;
        total += Money::from_cents(15_000);
        assert_eq!(total.cents(), 65_000);
        assert_eq!((chair + chair).cents(), 50_000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(i64::MAX / 2 + 1);
        assert_eq!((huge * 2u32).cents(), i64::MAX);
        assert_eq!((huge + huge).cents(), i64::MAX);

        let mut total = huge;
        total += huge;
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 50].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 400);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }
}
