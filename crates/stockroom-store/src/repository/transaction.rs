//! # Transaction Log
//!
//! Append-only record of completed purchases.
//!
//! ## Id Assignment
//! ```text
//! next_id: 1 ──record──► 2 ──record──► 3 ── log full ──► 3 (unchanged)
//! ```
//! Ids start at 1 and only advance when an entry is actually stored. Once
//! the log is full, purchases still complete but are no longer recorded.

use stockroom_core::{Money, PriceBreakdown, Product, Transaction};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Bounded, insertion-ordered transaction history.
#[derive(Debug, Clone)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
    capacity: usize,
    next_id: u64,
}

impl TransactionLog {
    pub fn new(capacity: usize) -> Self {
        TransactionLog {
            entries: Vec::new(),
            capacity,
            next_id: 1,
        }
    }

    /// Appends an entry for a sale of `quantity` units of `product`.
    ///
    /// `product` is the record as it was before the sale; its name and
    /// price are frozen into the entry.
    ///
    /// ## Returns
    /// * `Ok(id)` - The new entry's id
    /// * `Err(CapacityReached)` - Log is full; no id consumed
    pub fn record(
        &mut self,
        product: &Product,
        quantity: i64,
        breakdown: &PriceBreakdown,
        date: String,
        time: String,
    ) -> StoreResult<u64> {
        if self.is_full() {
            return Err(StoreError::capacity("Transaction", self.capacity));
        }

        let id = self.next_id;
        self.next_id += 1;

        debug!(id, product_id = product.id, quantity, "Recording transaction");

        self.entries.push(Transaction {
            id,
            product_id: product.id,
            name_snapshot: product.name.clone(),
            quantity,
            unit_price: product.price,
            discount: breakdown.discount,
            total: breakdown.total,
            date,
            time,
        });

        Ok(id)
    }

    /// Entries newest first, as the history screen lists them.
    pub fn recent_first(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().rev()
    }

    /// Sum of every logged total.
    pub fn total_revenue(&self) -> Money {
        self.entries.iter().map(|t| t.total).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::price_purchase;

    fn record(log: &mut TransactionLog, product: &Product, qty: i64) -> StoreResult<u64> {
        let breakdown = price_purchase(qty, product.price);
        log.record(
            product,
            qty,
            &breakdown,
            "19/10/2026".to_string(),
            "10:15:00".to_string(),
        )
    }

    fn entry(log: &TransactionLog, id: u64) -> &Transaction {
        log.recent_first().find(|t| t.id == id).unwrap()
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut log = TransactionLog::new(10);
        let mouse = Product::new(2, "Mouse", "Electronics", 50, Money::new(19.99));

        assert_eq!(record(&mut log, &mouse, 1).unwrap(), 1);
        assert_eq!(record(&mut log, &mouse, 2).unwrap(), 2);
        assert_eq!(entry(&log, 2).quantity, 2);
    }

    #[test]
    fn test_snapshot_and_discount() {
        let mut log = TransactionLog::new(10);
        let laptop = Product::new(1, "Laptop", "Electronics", 15, Money::new(899.99));
        record(&mut log, &laptop, 6).unwrap();

        let entry = entry(&log, 1);
        assert_eq!(entry.name_snapshot, "Laptop");
        assert_eq!(entry.unit_price, Money::new(899.99));
        assert!(entry.discount.approx_eq(Money::new(539.994), 1e-9));
        assert!(entry.total.approx_eq(Money::new(4859.946), 1e-9));
    }

    #[test]
    fn test_full_log_does_not_consume_id() {
        let mut log = TransactionLog::new(1);
        let mouse = Product::new(2, "Mouse", "Electronics", 50, Money::new(19.99));

        record(&mut log, &mouse, 1).unwrap();
        assert_eq!(
            record(&mut log, &mouse, 1).unwrap_err(),
            StoreError::capacity("Transaction", 1)
        );
        assert_eq!(log.len(), 1);
        assert_eq!(log.next_id, 2);
    }

    #[test]
    fn test_recent_first_and_revenue() {
        let mut log = TransactionLog::new(10);
        let mouse = Product::new(2, "Mouse", "Electronics", 50, Money::new(10.0));
        record(&mut log, &mouse, 1).unwrap();
        record(&mut log, &mouse, 3).unwrap();

        let ids: Vec<u64> = log.recent_first().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(log.total_revenue().approx_eq(Money::new(40.0), 1e-9));
    }
}
