//! # Repository Module
//!
//! Per-entity repositories over the in-memory tables.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Inventory (facade)                                                    │
//! │       │                                                                 │
//! │       │  inventory.products().find_by_name("Laptop")                   │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── get(&self, id)                                                    │
//! │  ├── find_by_name(&self, name)                                         │
//! │  ├── insert(&mut self, product)                                        │
//! │  └── update / withdraw_stock / deactivate                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Table<Product> (rows + active-key index)                              │
//! │                                                                         │
//! │  Cross-entity rules (category in use, category exists) live in         │
//! │  Inventory, not here: a repository only knows its own table.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Products with id and name lookup
//! - [`category::CategoryRepository`] - Categories keyed by name
//! - [`supplier::SupplierRepository`] - Suppliers keyed by name
//! - [`transaction::TransactionLog`] - Append-only sales log

pub mod category;
pub mod product;
pub mod supplier;
pub mod transaction;
