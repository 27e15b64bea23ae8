//! # Money Module
//!
//! Provides the `Money` type for handling menu prices and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With doubles:                                                          │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │    and an overflowing total silently turns into `inf`                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    12.50 is stored as 1250                                              │
//! │    Every sum that could overflow goes through checked_* and             │
//! │    reports None instead of wrapping                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::money::Money;
//!
//! let price = Money::from_cents(1250); // 12.50
//! let line = price.checked_mul_quantity(3).unwrap();
//! assert_eq!(line.to_string(), "37.50");
//!
//! // Decimal text from the catalog file or the keyboard
//! assert_eq!(Money::parse("13").unwrap().cents(), 1300);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// PizzaType.price ──► OrderItem.unit_price ──► OrderItem.subtotal
///                                                     │
///                          Order.total_amount ◄───────┘
///                                 │
///                                 ▼
///                        BillSplit.per_person
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount, rounding half away from
    /// zero to the nearest cent.
    ///
    /// Returns `None` for NaN, infinities and amounts that do not fit in
    /// `i64` cents.
    ///
    /// ## Example
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(12.5).unwrap().cents(), 1250);
    /// assert_eq!(Money::from_decimal(0.125).unwrap().cents(), 13);
    /// assert!(Money::from_decimal(f64::NAN).is_none());
    /// assert!(Money::from_decimal(1e30).is_none());
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let cents = (amount * 100.0).round();
        // 2^63 is exactly representable; i64::MAX as f64 rounds up to it.
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        if cents >= LIMIT || cents < -LIMIT {
            return None;
        }

        Some(Money(cents as i64))
    }

    /// Parses a decimal literal such as `"12.5"`, `"10"` or `"1.25e1"`.
    ///
    /// Surrounding whitespace is ignored. The amount is rounded to cents.
    pub fn parse(text: &str) -> Option<Self> {
        text.trim()
            .parse::<f64>()
            .ok()
            .and_then(Money::from_decimal)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies a unit price by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1450);
    /// assert_eq!(unit_price.checked_mul_quantity(2).unwrap().cents(), 2900);
    /// assert!(Money::from_cents(i64::MAX).checked_mul_quantity(2).is_none());
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(self, qty: u32) -> Option<Money> {
        match self.0.checked_mul(qty as i64) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Divides the amount evenly between `parts` shares, rounding each share
    /// half away from zero to the cent.
    ///
    /// Returns `None` when `parts` is zero.
    ///
    /// ## Precision
    /// ```text
    /// 37.50 / 3 = 12.50       exact
    /// 10.00 / 3 =  3.33       (3 × 3.33 = 9.99, one cent short)
    /// 10.00 / 6 =  1.67       (6 × 1.67 = 10.02, two cents over)
    /// ```
    /// The shares are for display; the order total itself is never rounded.
    pub fn split_even(self, parts: u32) -> Option<Money> {
        if parts == 0 {
            return None;
        }

        // Doubling keeps the half-cent decision in integer math.
        let numerator = self.0 as i128 * 2;
        let denominator = parts as i128 * 2;
        let half = parts as i128;
        let share = if numerator >= 0 {
            (numerator + half) / denominator
        } else {
            (numerator - half) / denominator
        };

        Some(Money(share as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with exactly two fraction digits and no currency symbol.
///
/// The CLI prefixes the configured symbol when printing.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let text = format!("{}{}.{:02}", sign, self.major().abs(), self.minor());
        f.pad(&text)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
