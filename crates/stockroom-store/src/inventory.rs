//! # Inventory
//!
//! The `Inventory` owns every table and enforces the rules that span more
//! than one of them.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Inventory                                      │
//! │                                                                         │
//! │  Console startup                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::default() ← Table capacities                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Inventory::seeded(config) ← Empty tables + sample data                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────┐          │
//! │  │ products    │ categories │ suppliers │ transactions      │          │
//! │  │ (by id,     │ (by name)  │ (by name) │ (append only)     │          │
//! │  │  by name)   │            │           │                   │          │
//! │  └──────────────────────────────────────────────────────────┘          │
//! │                                                                         │
//! │  Cross-table rules live here:                                          │
//! │  • a product's category must exist when it is added or updated         │
//! │  • a category cannot be deleted while an active product uses it        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation validates fully before it mutates anything, so a failed
//! call leaves the inventory exactly as it was.

use stockroom_core::validation::{
    validate_new_product, validate_product_update, validate_required,
};
use stockroom_core::{
    compute_statistics, low_stock_alert, Category, InventoryStatistics, InventoryView,
    Product, ProductDraft, StockAlert, Supplier, MAX_RECORDS, MAX_TRANSACTIONS,
};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::repository::category::CategoryRepository;
use crate::repository::product::ProductRepository;
use crate::repository::supplier::SupplierRepository;
use crate::repository::transaction::TransactionLog;

// =============================================================================
// Configuration
// =============================================================================

/// Table capacities.
///
/// ## Example
/// ```rust
/// use stockroom_store::StoreConfig;
///
/// let config = StoreConfig::default().max_transactions(500);
/// assert_eq!(config.max_products, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Product slots, active or not.
    /// Default: 100
    pub max_products: usize,

    /// Category slots.
    /// Default: 100
    pub max_categories: usize,

    /// Supplier slots.
    /// Default: 100
    pub max_suppliers: usize,

    /// Logged transactions.
    /// Default: 200
    pub max_transactions: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            max_products: MAX_RECORDS,
            max_categories: MAX_RECORDS,
            max_suppliers: MAX_RECORDS,
            max_transactions: MAX_TRANSACTIONS,
        }
    }
}

impl StoreConfig {
    pub fn max_products(mut self, max: usize) -> Self {
        self.max_products = max;
        self
    }

    pub fn max_categories(mut self, max: usize) -> Self {
        self.max_categories = max;
        self
    }

    pub fn max_suppliers(mut self, max: usize) -> Self {
        self.max_suppliers = max;
        self
    }

    pub fn max_transactions(mut self, max: usize) -> Self {
        self.max_transactions = max;
        self
    }
}

// =============================================================================
// Report
// =============================================================================

/// Summary shown by the inventory report screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryReport {
    pub statistics: InventoryStatistics,
    /// Active categories.
    pub categories: usize,
    /// Active suppliers.
    pub suppliers: usize,
    /// Logged transactions.
    pub transactions: usize,
}

// =============================================================================
// Inventory
// =============================================================================

/// Handle over every record in the store.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub(crate) products: ProductRepository,
    categories: CategoryRepository,
    suppliers: SupplierRepository,
    pub(crate) transactions: TransactionLog,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new(config: StoreConfig) -> Self {
        info!(
            max_products = config.max_products,
            max_transactions = config.max_transactions,
            "Initializing inventory"
        );

        Inventory {
            products: ProductRepository::new(config.max_products),
            categories: CategoryRepository::new(config.max_categories),
            suppliers: SupplierRepository::new(config.max_suppliers),
            transactions: TransactionLog::new(config.max_transactions),
        }
    }

    /// Product access.
    pub fn products(&self) -> &ProductRepository {
        &self.products
    }

    /// Category access.
    pub fn categories(&self) -> &CategoryRepository {
        &self.categories
    }

    /// Supplier access.
    pub fn suppliers(&self) -> &SupplierRepository {
        &self.suppliers
    }

    /// Transaction history access.
    pub fn transactions(&self) -> &TransactionLog {
        &self.transactions
    }

    // -------------------------------------------------------------------------
    // Categories
    // -------------------------------------------------------------------------

    /// Adds a category. The description may be empty.
    pub fn add_category(&mut self, name: &str, description: &str) -> StoreResult<&Category> {
        let name = validate_required("category name", name)?;

        if self.categories.is_full() {
            return Err(StoreError::capacity("Category", self.categories.capacity()));
        }

        info!(name, "Adding category");
        self.categories
            .insert(Category::new(name, description.trim()))
    }

    /// Deletes a category no active product uses.
    pub fn delete_category(&mut self, name: &str) -> StoreResult<&Category> {
        let name = validate_required("category name", name)?;

        if !self.categories.contains(name) {
            return Err(StoreError::not_found("Category", name));
        }

        if self.products.any_in_category(name) {
            warn!(name, "Refusing to delete category in use");
            return Err(StoreError::InUse {
                entity: "category".to_string(),
                key: name.to_string(),
            });
        }

        info!(name, "Deleting category");
        self.categories.deactivate(name)
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    /// Adds a product after full validation.
    ///
    /// ## Errors
    /// - `Validation` for the first failing field (see `validate_new_product`)
    /// - `CapacityReached` when every product slot is used
    pub fn add_product(&mut self, draft: &ProductDraft) -> StoreResult<&Product> {
        validate_new_product(&*self, draft)?;

        if self.products.is_full() {
            return Err(StoreError::capacity("Product", self.products.capacity()));
        }

        info!(id = draft.id, name = draft.name.trim(), "Adding product");
        self.products.insert(Product::new(
            draft.id,
            draft.name.trim(),
            draft.category.trim(),
            draft.quantity,
            draft.price,
        ))
    }

    /// Replaces the fields of an active product, keeping its id.
    ///
    /// Nothing changes unless every field is valid.
    pub fn update_product(&mut self, id: i64, draft: &ProductDraft) -> StoreResult<&Product> {
        if !self.products.contains(id) {
            return Err(StoreError::not_found("Product", id));
        }

        validate_product_update(&*self, draft)?;

        info!(id, "Updating product");
        self.products.update(id, draft)
    }

    /// Soft-deletes a product. Its transactions stay in the log.
    pub fn delete_product(&mut self, id: i64) -> StoreResult<&Product> {
        info!(id, "Deleting product");
        self.products.deactivate(id)
    }

    /// Looks up an active product by id.
    pub fn find_product(&self, id: i64) -> StoreResult<&Product> {
        self.products
            .get(id)
            .ok_or_else(|| StoreError::not_found("Product", id))
    }

    /// Looks up the oldest active product with exactly this name.
    pub fn find_product_by_name(&self, name: &str) -> StoreResult<&Product> {
        let name = validate_required("product name", name)?;

        self.products
            .find_by_name(name)
            .ok_or_else(|| StoreError::not_found("Product", name))
    }

    // -------------------------------------------------------------------------
    // Suppliers
    // -------------------------------------------------------------------------

    /// Adds a supplier. The contact may be empty.
    pub fn add_supplier(&mut self, name: &str, contact: &str) -> StoreResult<&Supplier> {
        let name = validate_required("supplier name", name)?;

        if self.suppliers.is_full() {
            return Err(StoreError::capacity("Supplier", self.suppliers.capacity()));
        }

        info!(name, "Adding supplier");
        self.suppliers.insert(Supplier::new(name, contact.trim()))
    }

    pub fn delete_supplier(&mut self, name: &str) -> StoreResult<&Supplier> {
        let name = validate_required("supplier name", name)?;

        info!(name, "Deleting supplier");
        self.suppliers.deactivate(name)
    }

    // -------------------------------------------------------------------------
    // Reporting
    // -------------------------------------------------------------------------

    pub fn statistics(&self) -> InventoryStatistics {
        compute_statistics(self.products.list_active())
    }

    pub fn low_stock_alert(&self) -> Vec<StockAlert> {
        low_stock_alert(self.products.list_active())
    }

    pub fn report(&self) -> InventoryReport {
        debug!("Building inventory report");

        InventoryReport {
            statistics: self.statistics(),
            categories: self.categories.count(),
            suppliers: self.suppliers.count(),
            transactions: self.transactions.len(),
        }
    }
}

impl InventoryView for Inventory {
    fn has_active_product(&self, id: i64) -> bool {
        self.products.contains(id)
    }

    fn has_active_category(&self, name: &str) -> bool {
        self.categories.contains(name)
    }

    fn has_active_supplier(&self, name: &str) -> bool {
        self.suppliers.contains(name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
