//! # stockroom-store: Record Store for Stockroom
//!
//! This crate holds the store's records in memory and runs every operation
//! that mutates them, including the purchase workflow.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Console command (purchase)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Inventory   │    │  Repositories │    │   Purchase   │  │   │
//! │  │   │(inventory.rs) │    │ (product.rs)  │    │ (purchase.rs)│  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ StoreConfig   │◄───│ ProductRepo   │    │ resolve      │  │   │
//! │  │   │ integrity     │    │ CategoryRepo  │    │ price        │  │   │
//! │  │   │ reports       │    │ TransactionLog│    │ withdraw/log │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Table<T> (table.rs): rows + active-key index, fixed capacity          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`table`] - Generic soft-delete table
//! - [`repository`] - Per-entity repositories and the transaction log
//! - [`inventory`] - The `Inventory` facade and its configuration
//! - [`purchase`] - Purchase workflow
//! - [`seed`] - Startup dataset
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use stockroom_store::{Inventory, StoreConfig};
//!
//! let mut inventory = Inventory::seeded(StoreConfig::default()).unwrap();
//!
//! let receipt = inventory.purchase("Laptop", 6).unwrap();
//! assert_eq!(receipt.remaining_stock, 9);
//! assert_eq!(receipt.transaction_id, Some(1));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod purchase;
pub mod repository;
pub mod seed;
pub mod table;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use inventory::{Inventory, InventoryReport, StoreConfig};
pub use purchase::{PurchaseNotice, PurchaseReceipt, PurchaseStage, ResolvedPurchase};

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::product::ProductRepository;
pub use repository::supplier::SupplierRepository;
pub use repository::transaction::TransactionLog;
