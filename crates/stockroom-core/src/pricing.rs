//! # Pricing Engine
//!
//! Turns a purchase quantity and unit price into subtotal, bulk discount and
//! total.
//!
//! ## Rule
//! ```text
//! subtotal = quantity × unit_price
//!
//! quantity >= 5 ? discount = subtotal × 10%
//!               : discount = 0
//!
//! total    = subtotal − discount
//! ```
//! Threshold and rate are crate constants, not per-product settings.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::{BULK_DISCOUNT_RATE, BULK_DISCOUNT_THRESHOLD};

/// Result of pricing one purchase line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
}

impl PriceBreakdown {
    /// True when a bulk discount was applied.
    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }
}

/// True when `quantity` qualifies for the bulk discount.
#[inline]
pub fn qualifies_for_bulk_discount(quantity: i64) -> bool {
    quantity >= BULK_DISCOUNT_THRESHOLD
}

/// Prices a purchase of `quantity` units at `unit_price`.
///
/// ## Example
/// ```rust
/// use stockroom_core::money::Money;
/// use stockroom_core::pricing::price_purchase;
///
/// let small = price_purchase(4, Money::new(899.99));
/// assert!(small.discount.is_zero());
/// assert_eq!(small.total.to_string(), "$3599.96");
/// ```
pub fn price_purchase(quantity: i64, unit_price: Money) -> PriceBreakdown {
    let subtotal = unit_price.multiply_quantity(quantity);

    let discount = if qualifies_for_bulk_discount(quantity) {
        subtotal.percentage_of(BULK_DISCOUNT_RATE)
    } else {
        Money::zero()
    };

    PriceBreakdown {
        subtotal,
        discount,
        total: subtotal - discount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
