//! # Screen Rendering
//!
//! Pure functions that turn records into the text blocks the console
//! prints. Nothing here reads input or touches the inventory.
//!
//! ## Column Layout
//! ```text
//! ID    Name                Category       Quantity  Price       Status
//! ----------------------------------------------------------------
//! 1     Laptop              Electronics    15        $899.99     OK
//! 3     Keyboard            Electronics    3         $49.99      LOW
//! ```
//! Names longer than their column push the row right; they are never cut.

use stockroom_core::{Category, Product, StockAlert, Supplier};
use stockroom_store::{InventoryReport, PurchaseReceipt, TransactionLog};

use crate::console::{RULE, THIN_RULE};

const WIDE_RULE: &str =
    "--------------------------------------------------------------------------------";
const WIDE_DOUBLE_RULE: &str =
    "================================================================================";

/// Joins rows into a block, each row ending in a newline.
fn block<I>(rows: I) -> String
where
    I: IntoIterator<Item = String>,
{
    rows.into_iter().map(|row| row + "\n").collect()
}

// =============================================================================
// Menu
// =============================================================================

pub fn main_menu(store_name: &str) -> String {
    let banner = format!("{:^64}", store_name.to_uppercase());
    let sections: [(&str, &[&str]); 5] = [
        (
            "CATEGORY MANAGEMENT",
            &["1. Add Category", "2. View All Categories", "3. Delete Category"],
        ),
        (
            "PRODUCT MANAGEMENT",
            &[
                "4. Add Product",
                "5. Update Product",
                "6. Delete Product",
                "7. Search Product",
                "8. View All Products",
            ],
        ),
        (
            "SALES & TRANSACTIONS",
            &["9. Purchase Product", "10. View Transaction History"],
        ),
        (
            "SUPPLIER MANAGEMENT",
            &["11. Add Supplier", "12. View All Suppliers", "13. Delete Supplier"],
        ),
        (
            "REPORTS & ANALYTICS",
            &["14. Inventory Report", "15. Check Low Stock Alerts"],
        ),
    ];

    let mut rows = vec![
        String::new(),
        RULE.to_string(),
        banner.trim_end().to_string(),
        RULE.to_string(),
    ];
    for (title, items) in sections {
        rows.push(format!("  {}", title));
        rows.extend(items.iter().map(|item| format!("    {}", item)));
        rows.push(THIN_RULE.to_string());
    }
    rows.push("    0. Exit".to_string());
    rows.push(RULE.to_string());

    let mut out = block(rows);
    out.push_str("Enter your choice: ");
    out
}

pub fn farewell(store_name: &str) -> String {
    format!("\n{}\n  Thank you for using {}!\n{}\n\n", RULE, store_name, RULE)
}

// =============================================================================
// Categories & Suppliers
// =============================================================================

pub fn categories_table<'a>(categories: impl IntoIterator<Item = &'a Category>) -> String {
    let mut out = format!("{:<20}Description\n{}\n", "Name", THIN_RULE);
    out.push_str(&block(
        categories
            .into_iter()
            .map(|c| format!("{:<20}{}", c.name, c.description)),
    ));
    out.push_str(THIN_RULE);
    out.push('\n');
    out
}

pub fn suppliers_table<'a>(suppliers: impl IntoIterator<Item = &'a Supplier>) -> String {
    let mut out = format!("{:<25}Contact\n{}\n", "Name", THIN_RULE);
    out.push_str(&block(
        suppliers
            .into_iter()
            .map(|s| format!("{:<25}{}", s.name, s.contact)),
    ));
    out.push_str(THIN_RULE);
    out.push('\n');
    out
}

// =============================================================================
// Products
// =============================================================================

pub fn products_table<'a>(products: impl IntoIterator<Item = &'a Product>) -> String {
    let mut out = format!(
        "{:<6}{:<20}{:<15}{:<10}{:<12}Status\n{}\n",
        "ID", "Name", "Category", "Quantity", "Price", THIN_RULE
    );
    out.push_str(&block(products.into_iter().map(|p| {
        format!(
            "{:<6}{:<20}{:<15}{:<10}${:<11.2}{}",
            p.id,
            p.name,
            p.category,
            p.quantity,
            p.price.amount(),
            p.stock_status().short_label()
        )
    })));
    out.push_str(THIN_RULE);
    out.push('\n');
    out
}

/// Rows of the low-stock alert block. Empty input renders nothing.
pub fn stock_alert(alerts: &[StockAlert]) -> String {
    if alerts.is_empty() {
        return String::new();
    }

    let mut out = format!(
        "{}\n{:<6}{:<20}{:<12}Status\n{}\n",
        THIN_RULE, "ID", "Product", "Quantity", THIN_RULE
    );
    out.push_str(&block(alerts.iter().map(|a| {
        format!(
            "{:<6}{:<20}{:<12}{}",
            a.product_id,
            a.name,
            a.quantity,
            a.status.label()
        )
    })));
    out.push_str(THIN_RULE);
    out.push('\n');
    out
}

/// Fields shown before an update asks for new values.
pub fn current_details(product: &Product) -> String {
    format!(
        "\nCurrent Details:\nName: {}\nCategory: {}\nQuantity: {}\nPrice: {}\n",
        product.name, product.category, product.quantity, product.price
    )
}

pub fn product_details(product: &Product) -> String {
    block([
        String::new(),
        RULE.to_string(),
        "  PRODUCT DETAILS".to_string(),
        RULE.to_string(),
        format!("ID:           {}", product.id),
        format!("Name:         {}", product.name),
        format!("Category:     {}", product.category),
        format!("Quantity:     {}", product.quantity),
        format!("Price:        {}", product.price),
        format!("Status:       {}", product.stock_status().label()),
        RULE.to_string(),
    ])
}

// =============================================================================
// Sales
// =============================================================================

pub fn invoice(receipt: &PurchaseReceipt) -> String {
    let breakdown = &receipt.breakdown;
    let id = receipt
        .transaction_id
        .map_or_else(|| "-".to_string(), |id| id.to_string());

    let mut rows = vec![
        String::new(),
        RULE.to_string(),
        format!("{:^64}", "INVOICE"),
        RULE.to_string(),
        format!("Transaction ID: {}", id),
        format!("Date: {}  Time: {}", receipt.date, receipt.time),
        THIN_RULE.to_string(),
        format!("{:<25}{:<10}{:<12}Amount", "Product", "Qty", "Unit Price"),
        THIN_RULE.to_string(),
        format!(
            "{:<25}{:<10}${:<11.2}${:.2}",
            receipt.product_name,
            receipt.quantity,
            receipt.unit_price.amount(),
            breakdown.subtotal.amount()
        ),
        THIN_RULE.to_string(),
        format!("{:>47}{:.2}", "Subtotal: $", breakdown.subtotal.amount()),
    ];
    if breakdown.has_discount() {
        rows.push(format!(
            "{:>47}{:.2}",
            "Discount (10%): -$",
            breakdown.discount.amount()
        ));
    }
    rows.push(format!("{:>47}{:.2}", "TOTAL: $", breakdown.total.amount()));
    rows.push(RULE.to_string());

    block(rows)
}

/// Transaction history, newest first, with the revenue footer.
pub fn transaction_history(log: &TransactionLog) -> String {
    let mut out = format!(
        "{:<8}{:<20}{:<6}{:<12}{:<12}{:<12}{:<12}Time\n{}\n",
        "Trans#", "Product", "Qty", "Unit Price", "Discount", "Total", "Date", WIDE_RULE
    );
    out.push_str(&block(log.recent_first().map(|t| {
        format!(
            "{:<8}{:<20}{:<6}${:<11.2}${:<11.2}${:<11.2}{:<12}{}",
            t.id,
            t.name_snapshot,
            t.quantity,
            t.unit_price.amount(),
            t.discount.amount(),
            t.total.amount(),
            t.date,
            t.time
        )
    })));
    out.push_str(&block([
        WIDE_RULE.to_string(),
        format!("{:>70}{:.2}", "Total Revenue: $", log.total_revenue().amount()),
        WIDE_DOUBLE_RULE.to_string(),
    ]));
    out
}

// =============================================================================
// Reports
// =============================================================================

pub fn inventory_report(report: &InventoryReport) -> String {
    let stats = &report.statistics;
    block([
        format!("Total Products:        {}", stats.total_products),
        format!("Low Stock Products:    {}", stats.low_stock),
        format!("Out of Stock Products: {}", stats.out_of_stock),
        format!("Total Inventory Value: {}", stats.total_value),
        format!("Total Categories:      {}", report.categories),
        format!("Total Suppliers:       {}", report.suppliers),
        format!("Total Transactions:    {}", report.transactions),
        RULE.to_string(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{price_purchase, Money};
    use stockroom_store::{PurchaseStage, StoreConfig};

    fn laptop() -> Product {
        Product::new(1, "Laptop", "Electronics", 15, Money::new(899.99))
    }

    #[test]
    fn test_products_table_row() {
        let out = products_table([&laptop()]);
        assert!(out.contains("1     Laptop              Electronics    15        $899.99     OK\n"));
    }

    #[test]
    fn test_tables_frame_rows_with_rules() {
        let food = Category::new("Food", "Food and beverages");
        let out = categories_table([&food]);
        assert_eq!(
            out,
            format!(
                "Name                Description\n{rule}\nFood                Food and beverages\n{rule}\n",
                rule = THIN_RULE
            )
        );

        let empty = suppliers_table(Vec::<&Supplier>::new());
        assert_eq!(empty, format!("Name                     Contact\n{rule}\n{rule}\n", rule = THIN_RULE));
    }

    #[test]
    fn test_stock_alert_empty_renders_nothing() {
        assert_eq!(stock_alert(&[]), "");
    }

    #[test]
    fn test_product_details_status() {
        let mut p = laptop();
        p.quantity = 0;
        let out = product_details(&p);
        assert!(out.contains("Status:       OUT OF STOCK\n"));
        assert!(out.contains("Price:        $899.99\n"));
    }

    #[test]
    fn test_invoice_discount_line_only_when_discounted() {
        let mut receipt = PurchaseReceipt {
            product_id: 1,
            product_name: "Laptop".to_string(),
            quantity: 6,
            unit_price: Money::new(899.99),
            breakdown: price_purchase(6, Money::new(899.99)),
            transaction_id: Some(1),
            date: "19/10/2026".to_string(),
            time: "12:30:05".to_string(),
            remaining_stock: 9,
            stage: PurchaseStage::TransactionLogged,
            notices: Vec::new(),
        };

        let out = invoice(&receipt);
        assert!(out.contains("Transaction ID: 1\n"));
        assert!(out.contains("Subtotal: $5399.94\n"));
        assert!(out.contains("Discount (10%): -$539.99\n"));
        assert!(out.contains("TOTAL: $4859.95\n"));

        receipt.quantity = 4;
        receipt.breakdown = price_purchase(4, Money::new(899.99));
        receipt.transaction_id = None;
        let out = invoice(&receipt);
        assert!(!out.contains("Discount"));
        assert!(out.contains("Transaction ID: -\n"));
        assert!(out.contains("TOTAL: $3599.96\n"));
    }

    #[test]
    fn test_report_lines() {
        let inventory = stockroom_store::Inventory::seeded(StoreConfig::default()).unwrap();
        let out = inventory_report(&inventory.report());

        assert!(out.contains("Total Products:        5\n"));
        assert!(out.contains("Low Stock Products:    2\n"));
        assert!(out.contains("Total Inventory Value: $16328.30\n"));
        assert!(out.contains("Total Suppliers:       2\n"));
    }

    #[test]
    fn test_menu_lists_every_option() {
        let out = main_menu("Smart Inventory Management System");
        assert!(out.contains("SMART INVENTORY MANAGEMENT SYSTEM"));
        for n in 1..=15 {
            assert!(out.contains(&format!("{}. ", n)), "missing option {}", n);
        }
        assert!(out.ends_with("Enter your choice: "));
    }
}
