//! # Purchase Workflow
//!
//! Sells units of one product and records the sale.
//!
//! ## Stages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Purchase Workflow                                 │
//! │                                                                         │
//! │  AwaitingProductName                                                   │
//! │       │ begin_purchase(name)                                           │
//! │       ├──────────────► NotFound (no active product with that name)     │
//! │       ▼                                                                 │
//! │  ProductResolved ──► QuantityEntered                                   │
//! │                           │ complete_purchase(resolved, qty)           │
//! │                           ├─────────► InsufficientStock (qty > stock)  │
//! │                           ▼                                             │
//! │                      QuantityValidated                                 │
//! │                           │ price_purchase()                           │
//! │                           ▼                                             │
//! │                      PricingComputed                                   │
//! │                           │ withdraw_stock() (checked again)           │
//! │                           ▼                                             │
//! │                      StockUpdated                                      │
//! │                           │ TransactionLog::record()                   │
//! │                           ▼                                             │
//! │                      TransactionLogged ──► InvoiceRendered (console)   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is mutated before `StockUpdated`. A full transaction log does not
//! fail the sale: the stock change stands and the receipt carries a
//! `HistoryFull` notice instead of a transaction id.

use chrono::NaiveDateTime;
use stockroom_core::validation::{validate_purchase_quantity, validate_required};
use stockroom_core::{price_purchase, CoreError, Money, PriceBreakdown, LOW_STOCK_THRESHOLD};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::inventory::Inventory;

/// Steps of a purchase, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PurchaseStage {
    AwaitingProductName,
    ProductResolved,
    QuantityEntered,
    QuantityValidated,
    PricingComputed,
    StockUpdated,
    TransactionLogged,
    InvoiceRendered,
}

/// A product picked for purchase, before a quantity is known.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPurchase {
    pub product_id: i64,
    pub name: String,
    /// Stock at the time of lookup.
    pub available: i64,
    pub unit_price: Money,
}

/// Something the operator should be told after a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseNotice {
    /// Quantity qualified for the bulk discount.
    BulkDiscountApplied,
    /// Remaining stock is at or below the low-stock threshold.
    LowStock { remaining: i64 },
    /// Transaction log is full; the sale was not recorded.
    HistoryFull { max: usize },
}

/// Outcome of a completed purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseReceipt {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub breakdown: PriceBreakdown,
    /// `None` when the log was full.
    pub transaction_id: Option<u64>,
    /// `DD/MM/YYYY`
    pub date: String,
    /// `HH:MM:SS`
    pub time: String,
    pub remaining_stock: i64,
    /// Last stage reached: `TransactionLogged`, or `StockUpdated` when the
    /// log was full.
    pub stage: PurchaseStage,
    pub notices: Vec<PurchaseNotice>,
}

impl PurchaseReceipt {
    pub fn has_notice(&self, notice: PurchaseNotice) -> bool {
        self.notices.contains(&notice)
    }
}

impl Inventory {
    /// Resolves the product to sell by exact name.
    ///
    /// ## Returns
    /// * `Ok(ResolvedPurchase)` - Oldest active product with this name
    /// * `Err(Validation(Required))` - Blank name
    /// * `Err(Core(ProductNotFound))` - No active product with this name
    pub fn begin_purchase(&self, name: &str) -> StoreResult<ResolvedPurchase> {
        let name = validate_required("product name", name)?;

        let product = self
            .products
            .find_by_name(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?;

        debug!(stage = ?PurchaseStage::ProductResolved, id = product.id, "Purchase");

        Ok(ResolvedPurchase {
            product_id: product.id,
            name: product.name.clone(),
            available: product.quantity,
            unit_price: product.price,
        })
    }

    /// Completes a purchase stamped with the local clock.
    pub fn complete_purchase(
        &mut self,
        resolved: &ResolvedPurchase,
        quantity: i64,
    ) -> StoreResult<PurchaseReceipt> {
        let now = chrono::Local::now().naive_local();
        self.complete_purchase_at(resolved, quantity, now)
    }

    /// Completes a purchase stamped with `now`.
    ///
    /// The product is looked up again by id, so a stale `resolved` can
    /// never oversell.
    pub fn complete_purchase_at(
        &mut self,
        resolved: &ResolvedPurchase,
        quantity: i64,
        now: NaiveDateTime,
    ) -> StoreResult<PurchaseReceipt> {
        debug!(stage = ?PurchaseStage::QuantityEntered, quantity, "Purchase");
        validate_purchase_quantity(quantity)?;

        let product = self
            .products
            .get(resolved.product_id)
            .ok_or_else(|| CoreError::ProductNotFound(resolved.name.clone()))?
            .clone();

        if !product.can_sell(quantity) {
            return Err(CoreError::InsufficientStock {
                product: product.name.clone(),
                available: product.quantity,
                requested: quantity,
            }
            .into());
        }
        debug!(stage = ?PurchaseStage::QuantityValidated, "Purchase");

        let breakdown = price_purchase(quantity, product.price);
        debug!(
            stage = ?PurchaseStage::PricingComputed,
            subtotal = breakdown.subtotal.amount(),
            discount = breakdown.discount.amount(),
            "Purchase"
        );

        let remaining = self
            .products
            .withdraw_stock(product.id, quantity)?
            .map_err(StoreError::from)?;
        let mut stage = PurchaseStage::StockUpdated;

        let date = now.format("%d/%m/%Y").to_string();
        let time = now.format("%H:%M:%S").to_string();

        let mut notices = Vec::new();
        if breakdown.has_discount() {
            notices.push(PurchaseNotice::BulkDiscountApplied);
        }

        let transaction_id = match self.transactions.record(
            &product,
            quantity,
            &breakdown,
            date.clone(),
            time.clone(),
        ) {
            Ok(id) => {
                stage = PurchaseStage::TransactionLogged;
                Some(id)
            }
            Err(StoreError::CapacityReached { max, .. }) => {
                warn!(max, product_id = product.id, "Transaction history full, sale not recorded");
                notices.push(PurchaseNotice::HistoryFull { max });
                None
            }
            Err(e) => return Err(e),
        };

        if remaining <= LOW_STOCK_THRESHOLD {
            notices.push(PurchaseNotice::LowStock { remaining });
        }

        info!(
            product_id = product.id,
            quantity,
            total = breakdown.total.amount(),
            ?transaction_id,
            "Purchase completed"
        );

        Ok(PurchaseReceipt {
            product_id: product.id,
            product_name: product.name,
            quantity,
            unit_price: product.price,
            breakdown,
            transaction_id,
            date,
            time,
            remaining_stock: remaining,
            stage,
            notices,
        })
    }

    /// Resolves and completes a purchase in one call.
    pub fn purchase(&mut self, name: &str, quantity: i64) -> StoreResult<PurchaseReceipt> {
        let resolved = self.begin_purchase(name)?;
        self.complete_purchase(&resolved, quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::StoreConfig;
    use proptest::prelude::*;
    use stockroom_core::{ProductDraft, ValidationError};

    fn noon() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(12, 30, 5)
            .unwrap()
    }

    fn seeded() -> Inventory {
        Inventory::seeded(StoreConfig::default()).unwrap()
    }

    fn stocked(quantity: i64) -> Inventory {
        let mut inv = Inventory::new(StoreConfig::default());
        inv.add_category("Electronics", "").unwrap();
        inv.add_product(&ProductDraft {
            id: 1,
            name: "Widget".to_string(),
            category: "Electronics".to_string(),
            quantity,
            price: Money::new(2.5),
        })
        .unwrap();
        inv
    }

    fn buy(inv: &mut Inventory, name: &str, qty: i64) -> StoreResult<PurchaseReceipt> {
        let resolved = inv.begin_purchase(name)?;
        inv.complete_purchase_at(&resolved, qty, noon())
    }

    #[test]
    fn test_bulk_purchase_of_laptops() {
        let mut inv = seeded();
        let receipt = buy(&mut inv, "Laptop", 6).unwrap();

        assert!(receipt.breakdown.subtotal.approx_eq(Money::new(5399.94), 1e-9));
        assert!(receipt.breakdown.discount.approx_eq(Money::new(539.994), 1e-9));
        assert!(receipt.breakdown.total.approx_eq(Money::new(4859.946), 1e-9));
        assert_eq!(receipt.remaining_stock, 9);
        assert_eq!(receipt.transaction_id, Some(1));
        assert_eq!(receipt.stage, PurchaseStage::TransactionLogged);
        assert_eq!(receipt.date, "19/10/2026");
        assert_eq!(receipt.time, "12:30:05");
        assert_eq!(receipt.notices, vec![PurchaseNotice::BulkDiscountApplied]);

        assert_eq!(inv.find_product(1).unwrap().quantity, 9);
        assert_eq!(inv.transactions().len(), 1);
    }

    #[test]
    fn test_small_purchase_has_no_discount() {
        let mut inv = seeded();
        let receipt = buy(&mut inv, "Laptop", 4).unwrap();

        assert!(receipt.breakdown.discount.is_zero());
        assert!(receipt.breakdown.total.approx_eq(Money::new(3599.96), 1e-9));
        assert!(receipt.notices.is_empty());
    }

    #[test]
    fn test_insufficient_stock_mutates_nothing() {
        let mut inv = seeded();
        let err = buy(&mut inv, "Keyboard", 5).unwrap_err();

        assert_eq!(
            err,
            StoreError::Core(CoreError::InsufficientStock {
                product: "Keyboard".to_string(),
                available: 3,
                requested: 5,
            })
        );
        assert_eq!(inv.find_product(3).unwrap().quantity, 3);
        assert!(inv.transactions().is_empty());
    }

    #[test]
    fn test_unknown_or_blank_name() {
        let inv = seeded();

        assert_eq!(
            inv.begin_purchase("laptop").unwrap_err(),
            StoreError::Core(CoreError::ProductNotFound("laptop".to_string()))
        );
        assert_eq!(
            inv.begin_purchase("  ").unwrap_err(),
            StoreError::from(ValidationError::required("product name"))
        );
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let mut inv = seeded();

        for qty in [0, -3] {
            let err = buy(&mut inv, "Mouse", qty).unwrap_err();
            assert!(matches!(
                err,
                StoreError::Validation(ValidationError::MustBePositive { .. })
            ));
        }
        assert_eq!(inv.find_product(2).unwrap().quantity, 50);
    }

    #[test]
    fn test_low_stock_notice_after_sale() {
        let mut inv = seeded();
        let receipt = buy(&mut inv, "Jeans", 1).unwrap();

        assert_eq!(receipt.remaining_stock, 1);
        assert!(receipt.has_notice(PurchaseNotice::LowStock { remaining: 1 }));
    }

    #[test]
    fn test_selling_out_updates_statistics() {
        let mut inv = seeded();
        let before = inv.statistics();

        buy(&mut inv, "Laptop", 15).unwrap();
        let after = inv.statistics();

        assert_eq!(after.out_of_stock, before.out_of_stock + 1);
        let drop = before.total_value - after.total_value;
        assert!(drop.approx_eq(Money::new(15.0 * 899.99), 1e-6));
    }

    #[test]
    fn test_full_history_keeps_sale() {
        let mut inv = Inventory::seeded(StoreConfig::default().max_transactions(1)).unwrap();

        buy(&mut inv, "Mouse", 1).unwrap();
        let receipt = buy(&mut inv, "Mouse", 2).unwrap();

        assert_eq!(receipt.transaction_id, None);
        assert_eq!(receipt.stage, PurchaseStage::StockUpdated);
        assert!(receipt.has_notice(PurchaseNotice::HistoryFull { max: 1 }));
        assert_eq!(inv.find_product(2).unwrap().quantity, 47);
        assert_eq!(inv.transactions().len(), 1);
    }

    #[test]
    fn test_stale_resolution_cannot_oversell() {
        let mut inv = seeded();
        let resolved = inv.begin_purchase("Jeans").unwrap();

        buy(&mut inv, "Jeans", 2).unwrap();
        let err = inv.complete_purchase_at(&resolved, 1, noon()).unwrap_err();

        assert!(matches!(
            err,
            StoreError::Core(CoreError::InsufficientStock { available: 0, .. })
        ));
    }

    #[test]
    fn test_purchase_of_deleted_product() {
        let mut inv = seeded();
        let resolved = inv.begin_purchase("Mouse").unwrap();
        inv.delete_product(2).unwrap();

        assert!(inv.begin_purchase("Mouse").is_err());
        assert!(inv.complete_purchase_at(&resolved, 1, noon()).is_err());
    }

    /// Property: asking for more than the shelf holds changes nothing.
    #[test]
    fn oversized_purchase_leaves_store_untouched() {
        proptest!(|(stock in 0i64..500, extra in 1i64..500)| {
            let mut inv = stocked(stock);
            let resolved = inv.begin_purchase("Widget").unwrap();
            let err = inv.complete_purchase_at(&resolved, stock + extra, noon()).unwrap_err();

            let is_short = matches!(err, StoreError::Core(CoreError::InsufficientStock { .. }));
            prop_assert!(is_short);
            prop_assert_eq!(inv.find_product(1).unwrap().quantity, stock);
            prop_assert!(inv.transactions().is_empty());
        });
    }

    /// Property: a purchase within stock takes exactly that many units.
    #[test]
    fn purchase_within_stock_decrements_exactly() {
        proptest!(|(qty in 1i64..500, spare in 0i64..500)| {
            let stock = qty + spare;
            let mut inv = stocked(stock);
            let receipt = buy(&mut inv, "Widget", qty).unwrap();

            prop_assert_eq!(receipt.remaining_stock, stock - qty);
            prop_assert_eq!(inv.find_product(1).unwrap().quantity, stock - qty);
            prop_assert_eq!(inv.transactions().len(), 1);
        });
    }
}
