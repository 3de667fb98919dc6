//! # Store Error Types
//!
//! Error types for record store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (stockroom-core)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds lookup, capacity, integrity failures  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CommandError (console) ← Labeled message for the operator             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::{CoreError, ValidationError};
use thiserror::Error;

/// Record store errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// No active record has this key.
    ///
    /// ## When This Occurs
    /// - Key never existed
    /// - Record was soft-deleted
    #[error("{entity} not found: {key}")]
    NotFound { entity: String, key: String },

    /// Table is full; rows are never evicted.
    #[error("{entity} limit reached ({max})")]
    CapacityReached { entity: String, max: usize },

    /// Record is still referenced by active rows and cannot be deactivated.
    #[error("Cannot delete {entity} '{key}': in use by active products")]
    InUse { entity: String, key: String },

    /// Business rule failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Input validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and key.
    pub fn not_found(entity: impl Into<String>, key: impl ToString) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            key: key.to_string(),
        }
    }

    /// Creates a CapacityReached error.
    pub fn capacity(entity: impl Into<String>, max: usize) -> Self {
        StoreError::CapacityReached {
            entity: entity.into(),
            max,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            StoreError::not_found("Category", "Toys").to_string(),
            "Category not found: Toys"
        );
        assert_eq!(
            StoreError::capacity("Product", 100).to_string(),
            "Product limit reached (100)"
        );

        let wrapped: StoreError = ValidationError::required("category name").into();
        assert_eq!(wrapped.to_string(), "category name is required");
    }
}
