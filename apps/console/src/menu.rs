//! # Main Menu
//!
//! Maps menu numbers to commands.
//!
//! ```text
//!  1 Add Category         9 Purchase Product
//!  2 View All Categories 10 View Transaction History
//!  3 Delete Category     11 Add Supplier
//!  4 Add Product         12 View All Suppliers
//!  5 Update Product      13 Delete Supplier
//!  6 Delete Product      14 Inventory Report
//!  7 Search Product      15 Check Low Stock Alerts
//!  8 View All Products    0 Exit
//! ```

use std::io::{BufRead, Write};

use stockroom_store::Inventory;

use crate::commands::{category, product, report, sale, supplier};
use crate::console::Console;
use crate::error::{CommandError, ConsoleResult};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddCategory,
    ListCategories,
    DeleteCategory,
    AddProduct,
    UpdateProduct,
    DeleteProduct,
    SearchProduct,
    ListProducts,
    PurchaseProduct,
    TransactionHistory,
    AddSupplier,
    ListSuppliers,
    DeleteSupplier,
    InventoryReport,
    LowStockAlerts,
}

impl TryFrom<i64> for MenuChoice {
    type Error = CommandError;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        let choice = match number {
            0 => MenuChoice::Exit,
            1 => MenuChoice::AddCategory,
            2 => MenuChoice::ListCategories,
            3 => MenuChoice::DeleteCategory,
            4 => MenuChoice::AddProduct,
            5 => MenuChoice::UpdateProduct,
            6 => MenuChoice::DeleteProduct,
            7 => MenuChoice::SearchProduct,
            8 => MenuChoice::ListProducts,
            9 => MenuChoice::PurchaseProduct,
            10 => MenuChoice::TransactionHistory,
            11 => MenuChoice::AddSupplier,
            12 => MenuChoice::ListSuppliers,
            13 => MenuChoice::DeleteSupplier,
            14 => MenuChoice::InventoryReport,
            15 => MenuChoice::LowStockAlerts,
            _ => return Err(CommandError::invalid_choice()),
        };

        Ok(choice)
    }
}

/// Runs the command behind `choice`. `Exit` is handled by the caller.
pub fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> ConsoleResult<()> {
    match choice {
        MenuChoice::Exit => Ok(()),
        MenuChoice::AddCategory => category::add_category(console, inventory),
        MenuChoice::ListCategories => category::list_categories(console, inventory),
        MenuChoice::DeleteCategory => category::delete_category(console, inventory),
        MenuChoice::AddProduct => product::add_product(console, inventory),
        MenuChoice::UpdateProduct => product::update_product(console, inventory),
        MenuChoice::DeleteProduct => product::delete_product(console, inventory),
        MenuChoice::SearchProduct => product::search_product(console, inventory),
        MenuChoice::ListProducts => product::list_products(console, inventory),
        MenuChoice::PurchaseProduct => sale::purchase_product(console, inventory),
        MenuChoice::TransactionHistory => sale::transaction_history(console, inventory),
        MenuChoice::AddSupplier => supplier::add_supplier(console, inventory),
        MenuChoice::ListSuppliers => supplier::list_suppliers(console, inventory),
        MenuChoice::DeleteSupplier => supplier::delete_supplier(console, inventory),
        MenuChoice::InventoryReport => report::inventory_report(console, inventory),
        MenuChoice::LowStockAlerts => report::low_stock_alerts(console, inventory),
    }
}
