//! # Money Module
//!
//! Provides the `Money` type used for every price, subtotal and total.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing a cart in floating point:                                      │
//! │    79.99 + 2 × 199.99 + 89.99 = 569.9599999999999  ❌                   │
//! │                                                                         │
//! │  After a few hundred +1/-1 taps the error keeps growing.               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    7999 + 2 × 19999 + 8999 = 56996 cents = $569.96  ✅                  │
//! │    Exact no matter how many adjustments happen.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//!
//! let price = Money::from_cents(7999); // $79.99
//! let line = price * 2;                // $159.98
//! assert_eq!(line.to_string(), "$159.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money Flows
/// ```text
/// Product.price ──► LineItem.unit_price ──► LineItem::line_total()
///                                                   │
///                                                   ▼
///                   Summary.subtotal ──► tax ──► Summary.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let price = Money::from_cents(19999);
    /// assert_eq!(price.cents(), 19999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounding half away from zero to the cent.
    ///
    /// ## Implementation
    /// Integer math in `i128`: `(|amount| × bps + 5000) / 10000`, sign restored.
    ///
    /// ```rust
    /// use shop_core::money::Money;
    /// use shop_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(56996); // $569.96
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(800)); // 8%
    /// // $45.5968 → $45.60
    /// assert_eq!(tax.cents(), 4560);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let magnitude = (self.0 as i128).abs() * rate.bps() as i128;
        let rounded = (magnitude + 5000) / 10000;
        let signed = if self.0 < 0 { -rounded } else { rounded };
        Money::from_cents(signed.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Multiplies a unit price by a quantity, saturating at the i64 bounds.
    ///
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let line_total = Money::from_cents(19999).multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 39998);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly `$12.34` rendering. Locale-aware formatting is done by
/// `ConfigState::format_currency` in the session layer.
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

// Addition, subtraction and summing saturate at the i64 bounds, like
// `multiply_quantity`, so a summary over saturated lines never overflows.

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

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
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
