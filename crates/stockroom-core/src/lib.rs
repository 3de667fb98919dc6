//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It contains the domain types and
//! every numeric policy of the store as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Menu ──► Forms ──► Purchase ──► Invoice / Reports           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stockroom-store (Inventory)                      │   │
//! │  │      Tables, indices, transaction log, purchase workflow        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │  report   │  │ validation│  │   │
//! │  │   │  Product  │  │  Bulk     │  │  Stats    │  │   rules   │  │   │
//! │  │   │  Category │  │  discount │  │  Alerts   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO MUTABLE STATE • PURE FUNCTIONS                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Supplier, Transaction)
//! - [`money`] - Money type with full floating precision, 2-place display
//! - [`pricing`] - Bulk discount pricing engine
//! - [`report`] - Stock statistics and low-stock alerts
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::money::Money;
//! use stockroom_core::pricing::price_purchase;
//!
//! let breakdown = price_purchase(6, Money::new(899.99));
//!
//! // 6 units meets the bulk threshold: 10% off
//! assert!(breakdown.has_discount());
//! assert_eq!(breakdown.total.to_string(), "$4859.95");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{price_purchase, PriceBreakdown};
pub use report::{compute_statistics, low_stock_alert, InventoryStatistics, StockAlert};
pub use types::*;
pub use validation::{InventoryView, ProductDraft};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity at or below which a product counts as low stock.
///
/// ## Business Reason
/// Five units is roughly one day of sales for the slowest lines in a single
/// store; anything under that needs a reorder.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Minimum purchase quantity that earns the bulk discount.
pub const BULK_DISCOUNT_THRESHOLD: i64 = 5;

/// Bulk discount rate (10%).
pub const BULK_DISCOUNT_RATE: f64 = 0.10;

/// Default capacity of the product, category and supplier tables.
pub const MAX_RECORDS: usize = 100;

/// Default capacity of the transaction log.
pub const MAX_TRANSACTIONS: usize = 200;
