//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                            │
//! │                                                                        │
//! │  In JavaScript/floating point:                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                          │
//! │                                                                        │
//! │  OUR SOLUTION: Integer Pesos                                           │
//! │    Prices in this shop are whole currency units (3500, 500, ...).     │
//! │    All arithmetic stays in i64; the single rounding point is the      │
//! │    percentage discount, which rounds half up explicitly.              │
//! │                                                                        │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use scissors_core::money::Money;
//!
//! let price = Money::new(3500);
//! let with_extra = price + Money::new(500);
//! assert_eq!(with_extra.percent(20).amount(), 800);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole currency units (pesos).
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic intermediates may dip negative; the public
///   builder API never exposes a negative total
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, serializes as a bare integer so the
///   persisted row keeps the original numeric columns
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount in whole currency units.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Computes a percentage of this amount, rounding half up.
    ///
    /// ## Implementation
    /// Integer math: `(amount * pct + 50) / 100`. The `+50` provides the
    /// half-up rounding (50/100 = 0.5). `i128` intermediates prevent
    /// overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use scissors_core::money::Money;
    ///
    /// // 20% of $4.000 = $800
    /// assert_eq!(Money::new(4000).percent(20).amount(), 800);
    ///
    /// // 33% of $50 = 16.5 → rounds up to 17
    /// assert_eq!(Money::new(50).percent(33).amount(), 17);
    /// ```
    pub fn percent(&self, pct: u32) -> Money {
        let raw = (self.0 as i128 * pct as i128 + 50) / 100;
        Money(raw as i64)
    }

    /// Subtracts, flooring the result at zero.
    ///
    /// Used for totals: a discount can never push a cobro below $0.
    #[inline]
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money((self.0 - other.0).max(0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation with thousands separators, e.g. `$3.500`.
///
/// ## Note
/// This is display formatting only; persistence always stores the raw
/// integer. Localization beyond this is out of scope.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        write!(f, "{}${}", sign, grouped)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Summing an iterator of Money values (extras totals, daily totals).
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
    fn test_new_and_amount() {
        let money = Money::new(3500);
        assert_eq!(money.amount(), 3500);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(3500)), "$3.500");
        assert_eq!(format!("{}", Money::new(500)), "$500");
        assert_eq!(format!("{}", Money::new(1234567)), "$1.234.567");
        assert_eq!(format!("{}", Money::new(0)), "$0");
        assert_eq!(format!("{}", Money::new(-550)), "-$550");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(3500);
        let b = Money::new(500);

        assert_eq!((a + b).amount(), 4000);
        assert_eq!((a - b).amount(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.amount(), 4000);
    }

    #[test]
    fn test_percent_exact() {
        // 20% of 4000 = 800 exactly
        assert_eq!(Money::new(4000).percent(20).amount(), 800);
        // 0% is always zero
        assert_eq!(Money::new(4000).percent(0).amount(), 0);
        // 100% is the full amount
        assert_eq!(Money::new(4000).percent(100).amount(), 4000);
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 33% of 50 = 16.5 → 17
        assert_eq!(Money::new(50).percent(33).amount(), 17);
        // 10% of 25 = 2.5 → 3
        assert_eq!(Money::new(25).percent(10).amount(), 3);
        // 10% of 24 = 2.4 → 2
        assert_eq!(Money::new(24).percent(10).amount(), 2);
    }

    #[test]
    fn test_saturating_sub_floors_at_zero() {
        let subtotal = Money::new(1000);
        assert_eq!(subtotal.saturating_sub(Money::new(300)).amount(), 700);
        assert_eq!(subtotal.saturating_sub(Money::new(1000)).amount(), 0);
        assert_eq!(subtotal.saturating_sub(Money::new(5000)).amount(), 0);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::new(500), Money::new(300), Money::new(800)]
            .into_iter()
            .sum();
        assert_eq!(total.amount(), 1600);
    }
}
