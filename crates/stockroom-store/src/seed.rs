//! # Seed Data
//!
//! The dataset every session starts from. Nothing is persisted, so each run
//! begins with exactly these records.
//!
//! ## Dataset
//! ```text
//! Categories   Electronics, Clothing, Food
//! Products     1 Laptop    Electronics  15 @ 899.99
//!              2 Mouse     Electronics  50 @  19.99
//!              3 Keyboard  Electronics   3 @  49.99   (low stock)
//!              4 T-Shirt   Clothing    100 @  15.99
//!              5 Jeans     Clothing      2 @  39.99   (low stock)
//! Suppliers    TechSupply Co, Fashion World
//! ```

use stockroom_core::{Money, ProductDraft};
use tracing::info;

use crate::error::StoreResult;
use crate::inventory::{Inventory, StoreConfig};

const CATEGORIES: &[(&str, &str)] = &[
    ("Electronics", "Electronic devices and accessories"),
    ("Clothing", "Apparel and fashion items"),
    ("Food", "Food and beverages"),
];

const PRODUCTS: &[(i64, &str, &str, i64, f64)] = &[
    (1, "Laptop", "Electronics", 15, 899.99),
    (2, "Mouse", "Electronics", 50, 19.99),
    (3, "Keyboard", "Electronics", 3, 49.99),
    (4, "T-Shirt", "Clothing", 100, 15.99),
    (5, "Jeans", "Clothing", 2, 39.99),
];

const SUPPLIERS: &[(&str, &str)] = &[
    ("TechSupply Co", "tech@supply.com"),
    ("Fashion World", "contact@fashion.com"),
];

/// Loads the sample dataset through the regular add operations, so it is
/// subject to the same validation and capacity limits as operator input.
pub fn load_sample_data(inventory: &mut Inventory) -> StoreResult<()> {
    for &(name, description) in CATEGORIES {
        inventory.add_category(name, description)?;
    }

    for &(id, name, category, quantity, price) in PRODUCTS {
        inventory.add_product(&ProductDraft {
            id,
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            price: Money::new(price),
        })?;
    }

    for &(name, contact) in SUPPLIERS {
        inventory.add_supplier(name, contact)?;
    }

    info!(
        categories = CATEGORIES.len(),
        products = PRODUCTS.len(),
        suppliers = SUPPLIERS.len(),
        "Sample data loaded"
    );

    Ok(())
}

impl Inventory {
    /// Creates an inventory holding the sample dataset.
    pub fn seeded(config: StoreConfig) -> StoreResult<Self> {
        let mut inventory = Inventory::new(config);
        load_sample_data(&mut inventory)?;
        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn test_seeded_counts() {
        let inv = Inventory::seeded(StoreConfig::default()).unwrap();

        assert_eq!(inv.categories().count(), 3);
        assert_eq!(inv.products().count(), 5);
        assert_eq!(inv.suppliers().count(), 2);
        assert!(inv.transactions().is_empty());
    }

    #[test]
    fn test_seeded_statistics() {
        let inv = Inventory::seeded(StoreConfig::default()).unwrap();
        let stats = inv.statistics();

        assert_eq!(stats.total_products, 5);
        assert_eq!(stats.low_stock, 2);
        assert_eq!(stats.out_of_stock, 0);
        assert!(stats.total_value.approx_eq(Money::new(16328.30), 1e-6));

        let alerts: Vec<i64> = inv.low_stock_alert().iter().map(|a| a.product_id).collect();
        assert_eq!(alerts, vec![3, 5]);
    }

    #[test]
    fn test_seed_respects_capacity() {
        let err = Inventory::seeded(StoreConfig::default().max_products(2)).unwrap_err();
        assert_eq!(err, StoreError::capacity("Product", 2));
    }
}
