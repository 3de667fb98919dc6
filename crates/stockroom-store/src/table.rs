//! # Soft-Delete Table
//!
//! Generic fixed-capacity table shared by products, categories and suppliers.
//!
//! ## Layout
//! ```text
//! rows:   [ Laptop | Mouse | Keyboard(inactive) | Keyboard | ... ]
//!            slot 0   slot 1   slot 2              slot 3
//!
//! index:  { 1 → 0, 2 → 1, 3 → 3 }      ← active rows only
//! ```
//! - Rows are appended and never removed; a slot is never reused.
//! - Soft delete drops the key from the index, which frees the key (not the
//!   slot) for a new row.
//! - Capacity counts every slot, active or not.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use stockroom_core::{Category, Product, Supplier, ValidationError};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Record Trait
// =============================================================================

/// A row that can live in a [`Table`].
pub trait Record {
    /// Key that is unique among active rows.
    type Key: Eq + Hash + Clone + Debug + Display;

    /// Entity name used in error messages.
    const ENTITY: &'static str;

    /// Field name used in duplicate-key messages.
    const KEY_FIELD: &'static str;

    fn key(&self) -> Self::Key;

    fn is_active(&self) -> bool;

    fn deactivate(&mut self);
}

impl Record for Product {
    type Key = i64;
    const ENTITY: &'static str = "Product";
    const KEY_FIELD: &'static str = "product id";

    fn key(&self) -> i64 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Record for Category {
    type Key = String;
    const ENTITY: &'static str = "Category";
    const KEY_FIELD: &'static str = "category";

    fn key(&self) -> String {
        self.name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Record for Supplier {
    type Key = String;
    const ENTITY: &'static str = "Supplier";
    const KEY_FIELD: &'static str = "supplier";

    fn key(&self) -> String {
        self.name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn deactivate(&mut self) {
        self.is_active = false;
    }
}

// =============================================================================
// Table
// =============================================================================

/// Insertion-ordered rows plus an index of active keys.
#[derive(Debug, Clone)]
pub struct Table<T: Record> {
    rows: Vec<T>,
    index: HashMap<T::Key, usize>,
    capacity: usize,
}

impl<T: Record> Table<T> {
    /// Creates an empty table holding at most `capacity` rows.
    pub fn new(capacity: usize) -> Self {
        Table {
            rows: Vec::new(),
            index: HashMap::new(),
            capacity,
        }
    }

    /// Maximum number of rows.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots used, including inactive rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when no further row can be appended.
    pub fn is_full(&self) -> bool {
        self.rows.len() >= self.capacity
    }

    /// Number of active rows.
    pub fn active_count(&self) -> usize {
        self.index.len()
    }

    /// Appends a row and returns its slot.
    ///
    /// ## Errors
    /// - `CapacityReached` when every slot is used
    /// - `Duplicate` when an active row already has the key
    pub fn insert(&mut self, row: T) -> StoreResult<usize> {
        if self.is_full() {
            return Err(StoreError::capacity(T::ENTITY, self.capacity));
        }

        let key = row.key();
        if row.is_active() && self.index.contains_key(&key) {
            return Err(ValidationError::duplicate(T::KEY_FIELD, &key).into());
        }

        let slot = self.rows.len();
        if row.is_active() {
            self.index.insert(key, slot);
        }
        self.rows.push(row);

        Ok(slot)
    }

    /// Looks up an active row by key.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&slot| &self.rows[slot])
    }

    /// Mutable lookup of an active row.
    ///
    /// Callers must not change the row's key.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut T>
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(&slot) => self.rows.get_mut(slot),
            None => None,
        }
    }

    /// Slot of the active row with this key.
    pub fn slot_of<Q>(&self, key: &Q) -> Option<usize>
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    /// Row stored at `slot`, active or not.
    pub fn row(&self, slot: usize) -> Option<&T> {
        self.rows.get(slot)
    }

    /// True iff an active row has this key.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Soft-deletes the active row with this key and returns it.
    pub fn deactivate<Q>(&mut self, key: &Q) -> StoreResult<&T>
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let slot = self
            .index
            .remove(key)
            .ok_or_else(|| StoreError::not_found(T::ENTITY, key))?;

        let row = &mut self.rows[slot];
        row.deactivate();
        Ok(row)
    }

    /// Active rows in insertion order.
    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().filter(|row| row.is_active())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut table = Table::new(3);
        table.insert(Category::new("Food", "Food and beverages")).unwrap();

        assert_eq!(table.get("Food").unwrap().description, "Food and beverages");
        assert!(table.get("food").is_none());
        assert_eq!(table.active_count(), 1);
    }

    #[test]
    fn test_duplicate_active_key_rejected() {
        let mut table = Table::new(3);
        table.insert(Category::new("Food", "")).unwrap();

        let err = table.insert(Category::new("Food", "again")).unwrap_err();
        assert_eq!(err, StoreError::from(ValidationError::duplicate("category", "Food")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_soft_delete_keeps_slot_and_frees_key() {
        let mut table = Table::new(3);
        table.insert(Category::new("Food", "old")).unwrap();
        table.deactivate("Food").unwrap();

        assert!(!table.contains("Food"));
        assert_eq!(table.len(), 1);
        assert!(!table.row(0).unwrap().is_active);

        let slot = table.insert(Category::new("Food", "new")).unwrap();
        assert_eq!(slot, 1);
        assert_eq!(table.get("Food").unwrap().description, "new");
        assert_eq!(table.iter_active().count(), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_deactivate_twice_is_not_found() {
        let mut table = Table::new(3);
        table.insert(Supplier::new("Fashion World", "")).unwrap();
        table.deactivate("Fashion World").unwrap();

        let err = table.deactivate("Fashion World").unwrap_err();
        assert_eq!(err, StoreError::not_found("Supplier", "Fashion World"));
    }

    #[test]
    fn test_capacity_counts_inactive_slots() {
        let mut table = Table::new(2);
        table.insert(Category::new("A", "")).unwrap();
        table.insert(Category::new("B", "")).unwrap();
        table.deactivate("A").unwrap();

        assert!(table.is_full());
        let err = table.insert(Category::new("C", "")).unwrap_err();
        assert_eq!(err, StoreError::capacity("Category", 2));
    }
}
