//! # Supplier Commands

use std::io::{BufRead, Write};

use stockroom_core::validation::validate_required;
use stockroom_core::ValidationError;
use stockroom_store::{Inventory, StoreError};

use crate::console::Console;
use crate::error::ConsoleResult;
use crate::render;

/// Menu 11: Add Supplier.
pub fn add_supplier<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> ConsoleResult<()> {
    let suppliers = inventory.suppliers();
    if suppliers.is_full() {
        return Err(StoreError::capacity("Supplier", suppliers.capacity()).into());
    }

    console.screen("ADD NEW SUPPLIER")?;

    let name = console.prompt("Enter Supplier Name: ")?;
    let name = validate_required("supplier name", &name)?;
    if inventory.suppliers().contains(name) {
        return Err(ValidationError::duplicate("supplier", name).into());
    }

    let contact = console.prompt("Enter Contact Info: ")?;

    inventory.add_supplier(name, &contact)?;
    console.success("Supplier added successfully!")
}

/// Menu 12: View All Suppliers.
pub fn list_suppliers<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> ConsoleResult<()> {
    if inventory.suppliers().count() == 0 {
        return console.error("No suppliers available!");
    }

    console.screen("ALL SUPPLIERS")?;
    console.block(&render::suppliers_table(inventory.suppliers().list_active()))
}

/// Menu 13: Delete Supplier.
pub fn delete_supplier<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> ConsoleResult<()> {
    console.screen("DELETE SUPPLIER")?;

    let name = console.prompt("Enter Supplier Name: ")?;
    inventory.delete_supplier(&name)?;

    console.success("Supplier deleted successfully!")
}
