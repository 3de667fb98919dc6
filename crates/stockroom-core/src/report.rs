//! # Reporting
//!
//! Read-only aggregates over products: dashboard statistics and the
//! low-stock alert list. Inactive products are skipped, so callers can pass
//! the whole table.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Product, StockStatus};

/// Counts and value across active products.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryStatistics {
    pub total_products: usize,
    /// Products with 0 < quantity <= threshold.
    pub low_stock: usize,
    /// Products with quantity == 0.
    pub out_of_stock: usize,
    /// Sum of quantity × price.
    pub total_value: Money,
}

/// One row of the low-stock alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAlert {
    pub product_id: i64,
    pub name: String,
    pub quantity: i64,
    /// Either `LowStock` or `OutOfStock`.
    pub status: StockStatus,
}

/// Computes statistics in a single pass over active products.
pub fn compute_statistics<'a, I>(products: I) -> InventoryStatistics
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| p.is_active)
        .fold(InventoryStatistics::default(), |mut stats, p| {
            stats.total_products += 1;
            stats.total_value += p.stock_value();

            match p.stock_status() {
                StockStatus::OutOfStock => stats.out_of_stock += 1,
                StockStatus::LowStock => stats.low_stock += 1,
                StockStatus::InStock => {}
            }

            stats
        })
}

/// Lists active products at or below the low-stock threshold, in input order.
pub fn low_stock_alert<'a, I>(products: I) -> Vec<StockAlert>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| p.is_active && p.is_low_stock())
        .map(|p| StockAlert {
            product_id: p.id,
            name: p.name.clone(),
            quantity: p.quantity,
            status: p.stock_status(),
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Laptop", "Electronics", 15, Money::new(899.99)),
            Product::new(2, "Mouse", "Electronics", 50, Money::new(19.99)),
            Product::new(3, "Keyboard", "Electronics", 3, Money::new(49.99)),
            Product::new(4, "T-Shirt", "Clothing", 100, Money::new(15.99)),
            Product::new(5, "Jeans", "Clothing", 2, Money::new(39.99)),
        ]
    }

    #[test]
    fn test_statistics_over_catalog() {
        let stats = compute_statistics(&catalog());

        assert_eq!(stats.total_products, 5);
        assert_eq!(stats.low_stock, 2);
        assert_eq!(stats.out_of_stock, 0);
        // 13499.85 + 999.50 + 149.97 + 1599.00 + 79.98
        assert!(stats.total_value.approx_eq(Money::new(16328.30), 1e-6));
    }

    #[test]
    fn test_statistics_skip_inactive() {
        let mut products = catalog();
        products[0].is_active = false;
        products[1].quantity = 0;

        let stats = compute_statistics(&products);
        assert_eq!(stats.total_products, 4);
        assert_eq!(stats.out_of_stock, 1);
        assert!(stats.total_value.approx_eq(Money::new(1828.95), 1e-6));
    }

    #[test]
    fn test_empty_catalog() {
        let stats = compute_statistics(&Vec::<Product>::new());
        assert_eq!(stats, InventoryStatistics::default());
        assert!(low_stock_alert(&Vec::<Product>::new()).is_empty());
    }

    #[test]
    fn test_low_stock_alert_tags() {
        let mut products = catalog();
        products[2].quantity = 0;

        let alerts = low_stock_alert(&products);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].name, "Keyboard");
        assert_eq!(alerts[0].status, StockStatus::OutOfStock);
        assert_eq!(alerts[1].name, "Jeans");
        assert_eq!(alerts[1].status, StockStatus::LowStock);
    }
}
