//! # Report Commands

use std::io::{BufRead, Write};

use stockroom_store::Inventory;

use crate::console::Console;
use crate::error::ConsoleResult;
use crate::render;

/// Menu 14: Inventory Report.
pub fn inventory_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> ConsoleResult<()> {
    console.screen("INVENTORY REPORT")?;
    console.block(&render::inventory_report(&inventory.report()))
}

/// Menu 15: Check Low Stock Alerts.
pub fn low_stock_alerts<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> ConsoleResult<()> {
    console.clear()?;

    if inventory.low_stock_alert().is_empty() {
        return console.line("\nAll products are above the low-stock threshold.");
    }
    print_stock_alert(console, inventory)
}

/// Prints the "LOW STOCK ALERT!" warning and table, or nothing when every
/// product is well stocked.
pub(crate) fn print_stock_alert<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> ConsoleResult<()> {
    let alerts = inventory.low_stock_alert();
    if alerts.is_empty() {
        return Ok(());
    }

    console.warning("LOW STOCK ALERT!")?;
    console.block(&render::stock_alert(&alerts))
}
