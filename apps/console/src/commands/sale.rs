//! # Sale Commands
//!
//! The purchase screen drives the store's two-step workflow:
//! `begin_purchase` (by name) then `complete_purchase` (by quantity).

use std::io::{BufRead, Write};

use stockroom_store::{Inventory, PurchaseNotice, PurchaseStage};
use tracing::debug;

use crate::console::Console;
use crate::error::ConsoleResult;
use crate::render;

/// Menu 9: Purchase Product.
pub fn purchase_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> ConsoleResult<()> {
    console.screen("PURCHASE PRODUCT")?;

    let name = console.prompt("Enter Product Name: ")?;
    let resolved = inventory.begin_purchase(&name)?;

    let quantity = console.prompt_i64(
        "Enter Quantity to Purchase: ",
        "Invalid input! Quantity must be a number.",
    )?;
    let receipt = inventory.complete_purchase(&resolved, quantity)?;

    console.clear()?;
    console.block(&render::invoice(&receipt))?;
    debug!(stage = ?PurchaseStage::InvoiceRendered, product_id = receipt.product_id, "Purchase");

    for notice in &receipt.notices {
        let message = match notice {
            PurchaseNotice::BulkDiscountApplied => "Bulk discount applied!",
            PurchaseNotice::HistoryFull { .. } => "Transaction history limit reached!",
            PurchaseNotice::LowStock { .. } => "Low stock alert for this product!",
        };
        console.warning(message)?;
    }

    Ok(())
}

/// Menu 10: View Transaction History.
pub fn transaction_history<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> ConsoleResult<()> {
    if inventory.transactions().is_empty() {
        return console.error("No transactions recorded!");
    }

    console.screen("TRANSACTION HISTORY")?;
    console.block(&render::transaction_history(inventory.transactions()))
}
