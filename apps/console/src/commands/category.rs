//! # Category Commands

use std::io::{BufRead, Write};

use stockroom_core::validation::validate_required;
use stockroom_core::ValidationError;
use stockroom_store::{Inventory, StoreError};

use crate::console::Console;
use crate::error::ConsoleResult;
use crate::render;

/// Menu 1: Add Category.
pub fn add_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> ConsoleResult<()> {
    let categories = inventory.categories();
    if categories.is_full() {
        return Err(StoreError::capacity("Category", categories.capacity()).into());
    }

    console.screen("ADD NEW CATEGORY")?;

    let name = console.prompt("Enter Category Name: ")?;
    let name = validate_required("category name", &name)?;
    if inventory.categories().contains(name) {
        return Err(ValidationError::duplicate("category", name).into());
    }

    let description = console.prompt("Enter Description: ")?;

    inventory.add_category(name, &description)?;
    console.success("Category added successfully!")
}

/// Menu 2: View All Categories.
pub fn list_categories<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> ConsoleResult<()> {
    if inventory.categories().count() == 0 {
        return console.error("No categories available!");
    }

    console.screen("ALL CATEGORIES")?;
    console.block(&render::categories_table(inventory.categories().list_active()))
}

/// Menu 3: Delete Category.
pub fn delete_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> ConsoleResult<()> {
    console.screen("DELETE CATEGORY")?;

    let name = console.prompt("Enter Category Name: ")?;
    inventory.delete_category(&name)?;

    console.success("Category deleted successfully!")
}
