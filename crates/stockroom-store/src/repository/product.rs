//! # Product Repository
//!
//! In-memory operations for products.
//!
//! ## Key Operations
//! - Lookup by id (unique among active products)
//! - Lookup by exact name (purchase workflow)
//! - Insert, update, stock withdrawal, soft delete
//!
//! ## Name Lookup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Name Lookup Works                                │
//! │                                                                         │
//! │  Names are NOT unique among products. The name index maps each name    │
//! │  to the ordered set of slots of active products carrying it:           │
//! │                                                                         │
//! │    "Laptop"   → {0}                                                    │
//! │    "Keyboard" → {2, 7}      ← two active products share the name       │
//! │                                                                         │
//! │  find_by_name("Keyboard") returns slot 2: the oldest active row wins,  │
//! │  exactly like a front-to-back scan would.                              │
//! │                                                                         │
//! │  Matching is exact and case-sensitive. No fuzzy matching.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{BTreeSet, HashMap};

use stockroom_core::{CoreResult, Product, ProductDraft};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::table::Table;

/// Repository for product records.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    table: Table<Product>,
    by_name: HashMap<String, BTreeSet<usize>>,
}

impl ProductRepository {
    /// Creates an empty repository holding at most `capacity` products.
    pub fn new(capacity: usize) -> Self {
        ProductRepository {
            table: Table::new(capacity),
            by_name: HashMap::new(),
        }
    }

    /// Gets an active product by its id.
    pub fn get(&self, id: i64) -> Option<&Product> {
        self.table.get(&id)
    }

    /// Gets the oldest active product with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.by_name
            .get(name)
            .and_then(|slots| slots.first())
            .and_then(|&slot| self.table.row(slot))
    }

    /// True iff an active product has this id.
    pub fn contains(&self, id: i64) -> bool {
        self.table.contains(&id)
    }

    /// True iff any active product is filed under `category`.
    pub fn any_in_category(&self, category: &str) -> bool {
        self.table.iter_active().any(|p| p.category == category)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(&Product)` - The stored product
    /// * `Err(CapacityReached)` - Every slot is used
    /// * `Err(Validation(Duplicate))` - Id already used by an active product
    pub fn insert(&mut self, product: Product) -> StoreResult<&Product> {
        debug!(id = product.id, name = %product.name, "Inserting product");

        let name = product.name.clone();
        let slot = self.table.insert(product)?;
        self.by_name.entry(name).or_default().insert(slot);

        self.table
            .row(slot)
            .ok_or_else(|| StoreError::not_found("Product", slot))
    }

    /// Replaces name, category, quantity and price of an active product.
    ///
    /// The draft's id is ignored; `id` names the product.
    pub fn update(&mut self, id: i64, draft: &ProductDraft) -> StoreResult<&Product> {
        debug!(id, "Updating product");

        let slot = self
            .table
            .slot_of(&id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;
        let product = self
            .table
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        let old_name = std::mem::replace(&mut product.name, draft.name.trim().to_string());
        product.category = draft.category.trim().to_string();
        product.quantity = draft.quantity;
        product.price = draft.price;
        let new_name = product.name.clone();

        if old_name != new_name {
            self.unindex_name(&old_name, slot);
            self.by_name.entry(new_name).or_default().insert(slot);
        }

        self.table
            .get(&id)
            .ok_or_else(|| StoreError::not_found("Product", id))
    }

    /// Removes `quantity` units from an active product's stock.
    ///
    /// ## Returns
    /// * `Ok(Ok(remaining))` - Stock decremented
    /// * `Ok(Err(InsufficientStock))` - Refused, nothing changed
    /// * `Err(NotFound)` - No active product with this id
    pub fn withdraw_stock(&mut self, id: i64, quantity: i64) -> StoreResult<CoreResult<i64>> {
        debug!(id, quantity, "Withdrawing stock");

        let product = self
            .table
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        Ok(product.withdraw_stock(quantity).map(|()| product.quantity))
    }

    /// Soft-deletes a product by setting is_active = false.
    ///
    /// ## Why Soft Delete?
    /// - Logged transactions still carry this product's id
    /// - The id becomes free for a new product
    pub fn deactivate(&mut self, id: i64) -> StoreResult<&Product> {
        debug!(id, "Soft-deleting product");

        let slot = self
            .table
            .slot_of(&id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        let name = self.table.deactivate(&id)?.name.clone();
        self.unindex_name(&name, slot);

        self.table
            .row(slot)
            .ok_or_else(|| StoreError::not_found("Product", id))
    }

    /// Active products in insertion order.
    pub fn list_active(&self) -> impl Iterator<Item = &Product> {
        self.table.iter_active()
    }

    /// Counts active products.
    pub fn count(&self) -> usize {
        self.table.active_count()
    }

    /// True when no further product can be inserted.
    pub fn is_full(&self) -> bool {
        self.table.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    fn unindex_name(&mut self, name: &str, slot: usize) {
        if let Some(slots) = self.by_name.get_mut(name) {
            slots.remove(&slot);
            if slots.is_empty() {
                self.by_name.remove(name);
            }
        }
    }
}
