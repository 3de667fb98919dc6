//! # Supplier Repository
//!
//! Suppliers are informational: nothing else references them, so they can
//! be deleted at any time.

use stockroom_core::Supplier;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::table::Table;

/// Repository for supplier records.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    table: Table<Supplier>,
}

impl SupplierRepository {
    pub fn new(capacity: usize) -> Self {
        SupplierRepository {
            table: Table::new(capacity),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    pub fn insert(&mut self, supplier: Supplier) -> StoreResult<&Supplier> {
        debug!(name = %supplier.name, "Inserting supplier");

        let name = supplier.name.clone();
        let slot = self.table.insert(supplier)?;

        self.table
            .row(slot)
            .ok_or_else(|| StoreError::not_found("Supplier", name))
    }

    pub fn deactivate(&mut self, name: &str) -> StoreResult<&Supplier> {
        debug!(name, "Soft-deleting supplier");
        self.table.deactivate(name)
    }

    pub fn list_active(&self) -> impl Iterator<Item = &Supplier> {
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
    use stockroom_core::ValidationError;

    fn contact_of<'a>(repo: &'a SupplierRepository, name: &str) -> &'a str {
        &repo.list_active().find(|s| s.name == name).unwrap().contact
    }

    #[test]
    fn test_duplicate_supplier_rejected() {
        let mut repo = SupplierRepository::new(5);
        repo.insert(Supplier::new("TechSupply Co", "tech@supply.com"))
            .unwrap();

        let err = repo
            .insert(Supplier::new("TechSupply Co", "other@supply.com"))
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::from(ValidationError::duplicate("supplier", "TechSupply Co"))
        );
        assert_eq!(contact_of(&repo, "TechSupply Co"), "tech@supply.com");
    }

    #[test]
    fn test_readd_after_delete() {
        let mut repo = SupplierRepository::new(5);
        repo.insert(Supplier::new("Fashion World", "contact@fashion.com"))
            .unwrap();
        repo.deactivate("Fashion World").unwrap();
        repo.insert(Supplier::new("Fashion World", "new@fashion.com"))
            .unwrap();

        assert_eq!(repo.count(), 1);
        assert_eq!(contact_of(&repo, "Fashion World"), "new@fashion.com");
    }
}
