//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │    Supplier     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  name (key)     │   │  name (key)     │       │
//! │  │  name           │   │  description    │   │  contact        │       │
//! │  │  category ──────┼──►│  is_active      │   │  is_active      │       │
//! │  │  quantity       │   └─────────────────┘   └─────────────────┘       │
//! │  │  price (Money)  │                                                    │
//! │  │  is_active      │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  └─────────────────┘   │   Transaction   │   │  StockStatus    │       │
//! │                        │  ─────────────  │   │  ─────────────  │       │
//! │                        │  id (u64)       │   │  InStock        │       │
//! │                        │  name_snapshot  │   │  LowStock       │       │
//! │                        │  totals, stamp  │   │  OutOfStock     │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Soft Delete
//! Product, Category and Supplier carry `is_active`. Deactivated rows stay
//! in storage forever; lookups and uniqueness checks only see active rows.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Stock Status
// =============================================================================

/// Stock classification of a quantity on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    /// More than the low-stock threshold on hand.
    InStock,
    /// Between 1 and the low-stock threshold.
    LowStock,
    /// Nothing on hand.
    OutOfStock,
}

impl StockStatus {
    /// Classifies a quantity.
    ///
    /// ```rust
    /// use stockroom_core::StockStatus;
    ///
    /// assert_eq!(StockStatus::from_quantity(0), StockStatus::OutOfStock);
    /// assert_eq!(StockStatus::from_quantity(5), StockStatus::LowStock);
    /// assert_eq!(StockStatus::from_quantity(6), StockStatus::InStock);
    /// ```
    pub fn from_quantity(quantity: i64) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Long label used on detail views and alerts.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "IN STOCK",
            StockStatus::LowStock => "LOW STOCK",
            StockStatus::OutOfStock => "OUT OF STOCK",
        }
    }

    /// Short label used in the product table.
    pub fn short_label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "OK",
            StockStatus::LowStock => "LOW",
            StockStatus::OutOfStock => "OUT",
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product held in stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier, positive and unique among active products.
    pub id: i64,

    /// Display name; purchases resolve products by exact name.
    pub name: String,

    /// Name of the category (not a reference; renames break the link).
    pub category: String,

    /// Units on hand.
    pub quantity: i64,

    /// Unit price.
    pub price: Money,

    /// Whether product is active (soft delete).
    pub is_active: bool,
}

impl Product {
    /// Creates a new active product.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        price: Money,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            category: category.into(),
            quantity,
            price,
            is_active: true,
        }
    }

    /// Stock classification of the current quantity.
    #[inline]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity)
    }

    /// True when quantity is at or below the low-stock threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= LOW_STOCK_THRESHOLD
    }

    /// Value of the units on hand (quantity × price).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Checks if `quantity` units can be taken from stock.
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.quantity >= quantity
    }

    /// Removes `quantity` units from stock.
    ///
    /// Refuses to go below zero even if the caller already checked; the
    /// purchase workflow relies on both checks.
    pub fn withdraw_stock(&mut self, quantity: i64) -> CoreResult<()> {
        if !self.can_sell(quantity) {
            return Err(CoreError::InsufficientStock {
                product: self.name.clone(),
                available: self.quantity,
                requested: quantity,
            });
        }

        self.quantity -= quantity;
        Ok(())
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl Category {
    /// Creates a new active category.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Category {
            name: name.into(),
            description: description.into(),
            is_active: true,
        }
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier, keyed by name. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub contact: String,
    pub is_active: bool,
}

impl Supplier {
    /// Creates a new active supplier.
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Supplier {
            name: name.into(),
            contact: contact.into(),
            is_active: true,
        }
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A logged sale.
/// Uses snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Process-wide sequence number, never reused.
    pub id: u64,
    pub product_id: i64,
    /// Product name at time of sale (frozen).
    pub name_snapshot: String,
    pub quantity: i64,
    /// Unit price at time of sale (frozen).
    pub unit_price: Money,
    pub discount: Money,
    pub total: Money,
    /// `DD/MM/YYYY`
    pub date: String,
    /// `HH:MM:SS`
    pub time: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_boundaries() {
        assert_eq!(StockStatus::from_quantity(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(1), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(5), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(6), StockStatus::InStock);
    }

    #[test]
    fn test_stock_status_serialization() {
        assert_eq!(
            serde_json::to_string(&StockStatus::OutOfStock).unwrap(),
            "\"OUT_OF_STOCK\""
        );
        assert_eq!(
            serde_json::to_string(&StockStatus::LowStock).unwrap(),
            "\"LOW_STOCK\""
        );
    }

    #[test]
    fn test_money_serializes_transparently() {
        let product = Product::new(3, "Keyboard", "Electronics", 3, Money::new(49.99));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], serde_json::json!(49.99));
        assert_eq!(json["is_active"], serde_json::json!(true));
    }

    #[test]
    fn test_withdraw_stock() {
        let mut product = Product::new(1, "Laptop", "Electronics", 15, Money::new(899.99));

        product.withdraw_stock(6).unwrap();
        assert_eq!(product.quantity, 9);

        let err = product.withdraw_stock(10).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                product: "Laptop".to_string(),
                available: 9,
                requested: 10,
            }
        );
        assert_eq!(product.quantity, 9);
    }

    #[test]
    fn test_stock_value() {
        let product = Product::new(2, "Mouse", "Electronics", 50, Money::new(19.99));
        assert!(product.stock_value().approx_eq(Money::new(999.5), 1e-9));
        assert!(!product.is_low_stock());
    }
}
