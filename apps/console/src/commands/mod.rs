//! # Console Commands
//!
//! One function per menu action.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── category.rs  ◄─── Add / list / delete categories
//! ├── product.rs   ◄─── Add / update / delete / search / list products
//! ├── supplier.rs  ◄─── Add / list / delete suppliers
//! ├── sale.rs      ◄─── Purchase + transaction history
//! └── report.rs    ◄─── Inventory report + low-stock alert
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Console Command Flow                                 │
//! │                                                                         │
//! │  fn add_product(console: &mut Console<R, W>, inventory: &mut Inventory)│
//! │         │                                                               │
//! │         │ prompts, checking each field as soon as it is typed          │
//! │         ▼                                                               │
//! │  inventory.add_product(&draft)?   ◄── full validation, then mutation   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  console.success("Product added successfully!")                        │
//! │                                                                         │
//! │  Any `?` failure becomes a ConsoleError; the menu loop prints          │
//! │  "[ERROR] ..." for command errors and carries on.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command takes only what it needs: read-only screens borrow the
//! inventory immutably.

pub mod category;
pub mod product;
pub mod report;
pub mod sale;
pub mod supplier;
