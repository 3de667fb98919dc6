//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule failures                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                               │
//! │  └── StoreError       - Lookup, capacity and integrity failures        │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── CommandError     - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → CommandError         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (name, id, quantities)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a distinct user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// No active product matches the requested name or id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Insufficient stock to complete a purchase.
    ///
    /// ## User Workflow
    /// ```text
    /// Purchase "Keyboard" (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { product: "Keyboard", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// Console shows: "Insufficient stock for Keyboard: available 3, requested 5"
    /// ```
    #[error("Insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Every check runs before any record is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: String },

    /// Duplicate value among active records (e.g. product id, category name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// A referenced record does not exist among active records.
    #[error("{entity} '{value}' does not exist")]
    UnknownReference { entity: String, value: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates a Duplicate error.
    pub fn duplicate(field: impl Into<String>, value: impl ToString) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Creates an UnknownReference error.
    pub fn unknown(entity: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::UnknownReference {
            entity: entity.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product: "Keyboard".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Keyboard: available 3, requested 5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::required("name").to_string(), "name is required");
        assert_eq!(
            ValidationError::duplicate("product id", 7).to_string(),
            "product id '7' already exists"
        );
        assert_eq!(
            ValidationError::unknown("category", "Toys").to_string(),
            "category 'Toys' does not exist"
        );
        assert_eq!(
            ValidationError::MustBeNonNegative {
                field: "price".to_string()
            }
            .to_string(),
            "price must be non-negative"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("name").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
