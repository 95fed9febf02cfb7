//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                     │
//! │                                                                 │
//! │  In floating point:                                             │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                   │
//! │                                                                 │
//! │  OUR SOLUTION: Integer Cents                                    │
//! │    Every price, subtotal, discount, tax, payment, and change    │
//! │    is an i64 count of cents. Two-decimal display happens only   │
//! │    at the rendering edge.                                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use corner_core::money::{Money, Rate};
//!
//! let price = Money::from_cents(20_000); // $200.00
//! let line = price * 2;                  // $400.00
//!
//! // 10% of $400.00
//! let tax = line.apply_rate(Rate::from_bps(1000));
//! assert_eq!(tax.cents(), 4_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use crate::error::MoneyParseError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic on differences (change, shortfall) stays
///   closed under subtraction
/// - **Single-field tuple struct**: zero-cost abstraction over i64
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use corner_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// ```rust
    /// use corner_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollars portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99, absolute value).
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies money by a quantity (line total = unit price × qty).
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns the given rate's portion of this amount, rounded to the
    /// nearest cent.
    ///
    /// ## Implementation
    /// Integer math in i128 to prevent overflow: `(cents * bps + 5000) / 10000`.
    /// The +5000 rounds the half-cent boundary up.
    ///
    /// ```rust
    /// use corner_core::money::{Money, Rate};
    ///
    /// // 5% of $6000.00 = $300.00
    /// let discount = Money::from_cents(600_000).apply_rate(Rate::from_bps(500));
    /// assert_eq!(discount.cents(), 30_000);
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        let portion = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money(portion as i64)
    }
}

// =============================================================================
// Rate Type
// =============================================================================

/// A percentage rate in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so rates stay in integer math:
/// 500 bps = 5% discount, 1000 bps = 10% tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$D.CC`, e.g. `$10.99` or `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
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

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Parses free-text dollar amounts typed at the payment prompt.
///
/// Accepts an optional leading `$`, then digits with at most two decimal
/// places: `"1100"`, `"$12.5"`, `"0.99"`. Anything else is rejected, which
/// is how non-numeric payment input surfaces as a re-prompt.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let unsigned = raw.strip_prefix('$').unwrap_or(raw);
        let invalid = || MoneyParseError {
            input: raw.to_string(),
        };

        let (whole, frac) = match unsigned.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (unsigned, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let mut cents = whole
            .parse::<i64>()
            .map_err(|_| invalid())?
            .checked_mul(100)
            .ok_or_else(invalid)?;

        if let Some(frac) = frac {
            if frac.is_empty() || frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let mut minor: i64 = frac.parse().map_err(|_| invalid())?;
            if frac.len() == 1 {
                minor *= 10;
            }
            cents = cents.checked_add(minor).ok_or_else(invalid)?;
        }

        Ok(Money(cents))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.multiply_quantity(4).cents(), 4000);
    }

    #[test]
    fn test_apply_rate_exact() {
        // 10% of $10.00 = $1.00
        let tax = Money::from_cents(1000).apply_rate(Rate::from_bps(1000));
        assert_eq!(tax.cents(), 100);
    }

    #[test]
    fn test_apply_rate_rounding() {
        // 5% of $0.09 = 0.45 cents, rounds up to 1 cent
        let portion = Money::from_cents(9).apply_rate(Rate::from_bps(500));
        assert_eq!(portion.cents(), 1);

        // 5% of $0.08 = 0.4 cents, rounds down to 0
        let portion = Money::from_cents(8).apply_rate(Rate::from_bps(500));
        assert_eq!(portion.cents(), 0);
    }

    #[test]
    fn test_rate_percentage() {
        assert!((Rate::from_bps(500).percentage() - 5.0).abs() < f64::EPSILON);
        assert!((Rate::from_bps(1000).percentage() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_valid_amounts() {
        assert_eq!("1100".parse::<Money>().unwrap().cents(), 110_000);
        assert_eq!("$12.34".parse::<Money>().unwrap().cents(), 1234);
        assert_eq!("12.5".parse::<Money>().unwrap().cents(), 1250);
        assert_eq!(" 0.99 ".parse::<Money>().unwrap().cents(), 99);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err());
        assert!("12.".parse::<Money>().is_err());
        assert!("-5".parse::<Money>().is_err());
        assert!("1,100".parse::<Money>().is_err());
    }
}
