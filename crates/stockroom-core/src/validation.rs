//! # Validation Module
//!
//! Input validation rules for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (apps/console)                                       │
//! │  ├── Number parsing (input-format errors)                              │
//! │  └── Immediate re-prompt from the menu                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Pure predicates (id > 0, quantity >= 0, price >= 0)              │
//! │  └── Store-aware checks through `InventoryView`                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: stockroom-store                                              │
//! │  ├── Capacity limits                                                   │
//! │  └── Referential guard on category delete                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule exists twice: an `is_*` predicate and a `validate_*` form that
//! names the failing field.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Store View
// =============================================================================

/// Read-only view of the active records a validation rule may consult.
///
/// Implemented by `stockroom_store::Inventory`; tests implement it over
/// plain collections.
pub trait InventoryView {
    /// True iff an active product has this id.
    fn has_active_product(&self, id: i64) -> bool;

    /// True iff an active category has this name.
    fn has_active_category(&self, name: &str) -> bool;

    /// True iff an active supplier has this name.
    fn has_active_supplier(&self, name: &str) -> bool;
}

// =============================================================================
// Predicates
// =============================================================================

/// True iff `id` is strictly positive.
#[inline]
pub fn is_valid_identifier(id: i64) -> bool {
    id > 0
}

/// True iff `quantity` is zero or greater.
#[inline]
pub fn is_valid_quantity(quantity: i64) -> bool {
    quantity >= 0
}

/// True iff `price` is zero or greater.
#[inline]
pub fn is_valid_price(price: Money) -> bool {
    price.amount() >= 0.0
}

/// True iff an active product already uses `id`.
pub fn is_duplicate_identifier<V: InventoryView + ?Sized>(view: &V, id: i64) -> bool {
    view.has_active_product(id)
}

/// True iff an active category is named `name`.
pub fn category_exists<V: InventoryView + ?Sized>(view: &V, name: &str) -> bool {
    view.has_active_category(name)
}

/// True iff an active supplier is named `name`.
pub fn supplier_exists<V: InventoryView + ?Sized>(view: &V, name: &str) -> bool {
    view.has_active_supplier(name)
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required free-text field (must not be blank).
///
/// ## Returns
/// The trimmed value.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_required;
///
/// assert_eq!(validate_required("name", "  Laptop ").unwrap(), "Laptop");
/// assert!(validate_required("name", "   ").is_err());
/// ```
pub fn validate_required<'a>(field: &str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    Ok(value)
}

/// Validates a product identifier.
pub fn validate_identifier(id: i64) -> ValidationResult<()> {
    if !is_valid_identifier(id) {
        return Err(ValidationError::MustBePositive {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock quantity (zero allowed).
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if !is_valid_quantity(quantity) {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a purchase quantity (must be at least one unit).
pub fn validate_purchase_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price (free items allowed).
///
/// ## Example
/// ```rust
/// use stockroom_core::money::Money;
/// use stockroom_core::validation::validate_price;
///
/// assert!(validate_price(Money::new(10.99)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::new(-1.0)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !is_valid_price(price) {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates that `name` refers to an active category.
pub fn validate_category_exists<V: InventoryView + ?Sized>(
    view: &V,
    name: &str,
) -> ValidationResult<()> {
    if !category_exists(view, name) {
        return Err(ValidationError::unknown("category", name));
    }

    Ok(())
}

// =============================================================================
// Product Drafts
// =============================================================================

/// User-entered product fields, before they become a `Product`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: Money,
}

/// Validates a new product.
///
/// ## Order
/// ```text
/// name, category not blank
///      │
///      ▼
/// id > 0 ──► id unused ──► quantity >= 0 ──► price >= 0 ──► category exists
/// ```
/// Stops at the first failure; each step has its own message.
pub fn validate_new_product<V: InventoryView + ?Sized>(
    view: &V,
    draft: &ProductDraft,
) -> ValidationResult<()> {
    validate_required("product name", &draft.name)?;
    validate_required("category", &draft.category)?;

    validate_identifier(draft.id)?;

    if is_duplicate_identifier(view, draft.id) {
        return Err(ValidationError::duplicate("product id", draft.id));
    }

    validate_quantity(draft.quantity)?;
    validate_price(draft.price)?;
    validate_category_exists(view, draft.category.trim())?;

    Ok(())
}

/// Validates replacement fields for an existing product.
///
/// The id is not re-checked: it names the product being updated.
pub fn validate_product_update<V: InventoryView + ?Sized>(
    view: &V,
    draft: &ProductDraft,
) -> ValidationResult<()> {
    validate_required("product name", &draft.name)?;
    validate_required("category", &draft.category)?;
    validate_category_exists(view, draft.category.trim())?;
    validate_quantity(draft.quantity)?;
    validate_price(draft.price)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeView {
        product_ids: Vec<i64>,
        categories: Vec<&'static str>,
    }

    impl InventoryView for FakeView {
        fn has_active_product(&self, id: i64) -> bool {
            self.product_ids.contains(&id)
        }

        fn has_active_category(&self, name: &str) -> bool {
            self.categories.contains(&name)
        }

        fn has_active_supplier(&self, _name: &str) -> bool {
            false
        }
    }

    fn view() -> FakeView {
        FakeView {
            product_ids: vec![1, 2],
            categories: vec!["Electronics"],
        }
    }

    fn draft(id: i64, quantity: i64, price: f64, category: &str) -> ProductDraft {
        ProductDraft {
            id,
            name: "Monitor".to_string(),
            category: category.to_string(),
            quantity,
            price: Money::new(price),
        }
    }

    #[test]
    fn test_predicates() {
        assert!(is_valid_identifier(1));
        assert!(!is_valid_identifier(0));
        assert!(!is_valid_identifier(-3));

        assert!(is_valid_quantity(0));
        assert!(!is_valid_quantity(-1));

        assert!(is_valid_price(Money::zero()));
        assert!(!is_valid_price(Money::new(-0.01)));

        let view = view();
        assert!(is_duplicate_identifier(&view, 1));
        assert!(!is_duplicate_identifier(&view, 7));
        assert!(category_exists(&view, "Electronics"));
        assert!(!category_exists(&view, "electronics"));
        assert!(!supplier_exists(&view, "TechSupply Co"));
    }

    #[test]
    fn test_new_product_accepted() {
        assert!(validate_new_product(&view(), &draft(7, 0, 0.0, "Electronics")).is_ok());
    }

    #[test]
    fn test_new_product_checks_in_order() {
        let view = view();

        // Invalid id wins over every later failure
        let err = validate_new_product(&view, &draft(0, -1, -1.0, "Toys")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MustBePositive {
                field: "id".to_string()
            }
        );

        let err = validate_new_product(&view, &draft(1, -1, -1.0, "Toys")).unwrap_err();
        assert_eq!(err, ValidationError::duplicate("product id", 1));

        let err = validate_new_product(&view, &draft(7, -1, -1.0, "Toys")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MustBeNonNegative {
                field: "quantity".to_string()
            }
        );

        let err = validate_new_product(&view, &draft(7, 1, -1.0, "Toys")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MustBeNonNegative {
                field: "price".to_string()
            }
        );

        let err = validate_new_product(&view, &draft(7, 1, 1.0, "Toys")).unwrap_err();
        assert_eq!(err, ValidationError::unknown("category", "Toys"));
    }

    #[test]
    fn test_blank_text_rejected_first() {
        let mut blank = draft(0, -1, -1.0, "Electronics");
        blank.name = "  ".to_string();
        assert_eq!(
            validate_new_product(&view(), &blank).unwrap_err(),
            ValidationError::required("product name")
        );
    }

    #[test]
    fn test_product_update_ignores_id() {
        // Updating product 1 must not trip the duplicate-id rule
        assert!(validate_product_update(&view(), &draft(1, 3, 9.5, "Electronics")).is_ok());
        assert!(validate_product_update(&view(), &draft(1, 3, 9.5, "Toys")).is_err());
    }

    #[test]
    fn test_purchase_quantity() {
        assert!(validate_purchase_quantity(1).is_ok());
        assert!(validate_purchase_quantity(0).is_err());
        assert!(validate_purchase_quantity(-4).is_err());
    }
}
