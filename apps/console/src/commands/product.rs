//! # Product Commands
//!
//! ## Add Product Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Enter Product ID ──► not a number? ──► [ERROR] back to menu           │
//! │  Enter Product Name ─► blank? ─────────► [ERROR]                       │
//! │  Enter Category ─────► blank? ─────────► [ERROR]                       │
//! │  Enter Quantity ─────► not a number? ──► [ERROR]                       │
//! │  Enter Price ────────► not a number? ──► [ERROR]                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Inventory::add_product ─► id > 0, id unused, quantity >= 0,           │
//! │                            price >= 0, category exists                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  [SUCCESS] + [WARNING] when the new product is already low on stock    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use stockroom_core::validation::{validate_category_exists, validate_required};
use stockroom_core::{Money, ProductDraft};
use stockroom_store::{Inventory, StoreError};
use tracing::debug;

use crate::console::Console;
use crate::error::ConsoleResult;
use crate::render;

const ID_FORMAT: &str = "Invalid input! ID must be a number.";
const QUANTITY_FORMAT: &str = "Invalid input! Quantity must be a number.";
const PRICE_FORMAT: &str = "Invalid input! Price must be a number.";

/// Menu 4: Add Product.
pub fn add_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> ConsoleResult<()> {
    let products = inventory.products();
    if products.is_full() {
        return Err(StoreError::capacity("Product", products.capacity()).into());
    }

    console.screen("ADD NEW PRODUCT")?;

    let id = console.prompt_i64("Enter Product ID: ", ID_FORMAT)?;

    let name = console.prompt("Enter Product Name: ")?;
    validate_required("product name", &name)?;

    let category = console.prompt("Enter Category: ")?;
    validate_required("category", &category)?;

    let quantity = console.prompt_i64("Enter Quantity: ", QUANTITY_FORMAT)?;
    let price = console.prompt_f64("Enter Price: $", PRICE_FORMAT)?;

    let draft = ProductDraft {
        id,
        name,
        category,
        quantity,
        price: Money::new(price),
    };
    let low_stock = inventory.add_product(&draft)?.is_low_stock();

    console.success("Product added successfully!")?;
    if low_stock {
        console.warning("This product has low stock!")?;
    }
    Ok(())
}

/// Menu 5: Update Product.
///
/// All four fields are replaced; nothing changes unless every new value
/// is valid.
pub fn update_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> ConsoleResult<()> {
    console.screen("UPDATE PRODUCT")?;

    let id = console.prompt_i64("Enter Product ID to update: ", ID_FORMAT)?;
    let current = inventory.find_product(id)?;
    console.block(&render::current_details(current))?;

    let name = console.prompt("\nEnter New Name: ")?;
    validate_required("product name", &name)?;

    let category = console.prompt("Enter New Category: ")?;
    let trimmed = validate_required("category", &category)?;
    validate_category_exists(&*inventory, trimmed)?;

    let quantity = console.prompt_i64("Enter New Quantity: ", QUANTITY_FORMAT)?;
    let price = console.prompt_f64("Enter New Price: $", PRICE_FORMAT)?;

    let draft = ProductDraft {
        id,
        name,
        category,
        quantity,
        price: Money::new(price),
    };
    inventory.update_product(id, &draft)?;

    console.success("Product updated successfully!")
}

/// Menu 6: Delete Product.
pub fn delete_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> ConsoleResult<()> {
    console.screen("DELETE PRODUCT")?;

    let id = console.prompt_i64("Enter Product ID to delete: ", ID_FORMAT)?;
    inventory.delete_product(id)?;

    console.success("Product deleted successfully!")
}

/// Menu 7: Search Product (by id).
pub fn search_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> ConsoleResult<()> {
    console.screen("SEARCH PRODUCT")?;

    let id = console.prompt_i64("Enter Product ID: ", ID_FORMAT)?;
    let product = inventory.find_product(id)?;
    debug!(id, "Product found");

    console.clear()?;
    console.block(&render::product_details(product))
}

/// Menu 8: View All Products, followed by the low-stock block.
pub fn list_products<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> ConsoleResult<()> {
    if inventory.products().count() == 0 {
        return console.error("No products available!");
    }

    console.screen("ALL PRODUCTS")?;
    console.block(&render::products_table(inventory.products().list_active()))?;

    super::report::print_stock_alert(console, inventory)
}
