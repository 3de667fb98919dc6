//! # Category Repository
//!
//! Categories are keyed by exact name. A product refers to its category by
//! name only; the link is checked when products are added or updated and
//! when a category is deleted.

use stockroom_core::Category;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::table::Table;

/// Repository for category records.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    table: Table<Category>,
}

impl CategoryRepository {
    pub fn new(capacity: usize) -> Self {
        CategoryRepository {
            table: Table::new(capacity),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    /// Inserts a new category.
    ///
    /// Fails with `CapacityReached` before checking for duplicates.
    pub fn insert(&mut self, category: Category) -> StoreResult<&Category> {
        debug!(name = %category.name, "Inserting category");

        let name = category.name.clone();
        let slot = self.table.insert(category)?;

        self.table
            .row(slot)
            .ok_or_else(|| StoreError::not_found("Category", name))
    }

    /// Soft-deletes a category. Callers check product references first.
    pub fn deactivate(&mut self, name: &str) -> StoreResult<&Category> {
        debug!(name, "Soft-deleting category");
        self.table.deactivate(name)
    }

    /// Active categories in insertion order.
    pub fn list_active(&self) -> impl Iterator<Item = &Category> {
        self.table.iter_active()
    }

    pub fn count(&self) -> usize {
        self.table.active_count()
    }

    pub fn is_full(&self) -> bool {
        self.table.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_deactivate() {
        let mut repo = CategoryRepository::new(5);
        repo.insert(Category::new("Electronics", "Electronic devices and accessories"))
            .unwrap();

        assert!(repo.contains("Electronics"));
        assert_eq!(repo.count(), 1);

        let removed = repo.deactivate("Electronics").unwrap();
        assert!(!removed.is_active);
        assert!(!repo.contains("Electronics"));
        assert_eq!(repo.list_active().count(), 0);
    }

    #[test]
    fn test_deactivate_unknown() {
        let mut repo = CategoryRepository::new(5);
        assert_eq!(
            repo.deactivate("Toys").unwrap_err(),
            StoreError::not_found("Category", "Toys")
        );
    }
}
