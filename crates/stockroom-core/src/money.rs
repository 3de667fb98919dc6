//! # Money Module
//!
//! Provides the `Money` type for handling monetary values.
//!
//! ## Precision Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FULL PRECISION INSIDE, TWO PLACES OUTSIDE                              │
//! │                                                                         │
//! │  6 × $899.99        = 5399.94                                           │
//! │  10% bulk discount  =  539.994      (kept as-is, never rounded)        │
//! │  total              = 4859.946                                          │
//! │                                                                         │
//! │  Invoice prints:      $5399.94 / -$539.99 / $4859.95                   │
//! │                                                                         │
//! │  Rounding happens ONLY in Display. Arithmetic never rounds, so         │
//! │  total + discount == subtotal holds to floating precision.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price = Money::new(19.99);
//! let line = price * 3;
//! assert_eq!(line.to_string(), "$59.97");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in major currency units (dollars).
///
/// ## Design Decisions
/// - **f64**: unit prices are entered as decimals and discounts keep their
///   fractional cents until display
/// - **Single field tuple struct**: zero-cost wrapper, serialized transparently
/// - **No currency**: single-location store, one currency
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► PriceBreakdown.subtotal ──► discount ──► total
///       │                                                     │
///       └──► InventoryStatistics.total_value       Transaction.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value from an amount in dollars.
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Checks if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let unit_price = Money::new(49.99);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.to_string(), "$149.97");
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty as f64)
    }

    /// Returns `rate` of this amount, without rounding.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let subtotal = Money::new(100.0);
    /// assert_eq!(subtotal.percentage_of(0.10), Money::new(10.0));
    /// ```
    #[inline]
    pub fn percentage_of(&self, rate: f64) -> Money {
        Money(self.0 * rate)
    }

    /// Compares two amounts within an absolute tolerance.
    pub fn approx_eq(&self, other: Money, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two-decimal display with a leading `$` (`-$5.50` for negatives).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs())
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

// =============================================================================
// Unit Tests
// =============================================================================
