//! # Command Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Operator                    Command                                    │
//! │  ────────                    ───────                                    │
//! │                                                                         │
//! │  "Enter Quantity: abc"                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  → Result<(), ConsoleError>                    │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad number? ─────── CommandError::input_format ──┐             │  │
//! │  │         │                                         │             │  │
//! │  │         ▼                                         ▼             │  │
//! │  │  Store refused? ──── StoreError ──────────► CommandError ──────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  stdin closed / write failed ──► ConsoleError::{Closed, Io}     │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  CommandError   → printed as "[ERROR] message", back to the menu       │
//! │  Closed         → menu loop ends quietly                               │
//! │  Io             → returned from `run`                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::io;

use stockroom_core::{CoreError, ValidationError};
use stockroom_store::StoreError;
use thiserror::Error;

/// An operator-facing failure of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Message shown after `[ERROR]`
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Input could not be parsed as the requested type
    InputFormat,

    /// Input parsed but broke a rule
    ValidationError,

    /// No active record with that key
    NotFound,

    /// Purchase exceeds stock
    InsufficientStock,

    /// Table is full
    Capacity,

    /// Record still referenced
    InUse,

    /// Menu number out of range
    InvalidChoice,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InputFormat => "INPUT_FORMAT",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::Capacity => "CAPACITY",
            ErrorCode::InUse => "IN_USE",
            ErrorCode::InvalidChoice => "INVALID_CHOICE",
        }
    }
}

impl CommandError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CommandError {
            code,
            message: message.into(),
        }
    }

    /// Creates an input-format error.
    pub fn input_format(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::InputFormat, message)
    }

    /// Creates a not found error.
    pub fn not_found(entity: &str) -> Self {
        CommandError::new(ErrorCode::NotFound, format!("{} not found!", entity))
    }

    pub fn invalid_choice() -> Self {
        CommandError::new(ErrorCode::InvalidChoice, "Invalid choice! Please try again.")
    }
}

/// Upper-cases the first letter: "product name" → "Product name".
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display label for a validated field.
fn field_label(field: &str) -> String {
    match field {
        "id" => "ID".to_string(),
        "product id" => "Product ID".to_string(),
        other => capitalize(other),
    }
}

/// Mid-sentence label: only acronyms change case.
fn inline_label(field: &str) -> &str {
    match field {
        "id" => "ID",
        other => other,
    }
}

/// Converts validation errors to command errors.
impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        let message = match &err {
            ValidationError::Required { field } => {
                format!("{} cannot be empty!", field_label(field))
            }
            ValidationError::MustBePositive { field } => {
                format!("Invalid {}! Must be positive.", inline_label(field))
            }
            ValidationError::MustBeNonNegative { field } => {
                format!("Invalid {}! Must be non-negative.", inline_label(field))
            }
            ValidationError::Duplicate { field, .. } => {
                format!("{} already exists!", field_label(field))
            }
            ValidationError::UnknownReference { entity, .. } => {
                format!("{} does not exist! Please create it first.", field_label(entity))
            }
        };

        CommandError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to command errors.
impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(_) => CommandError::not_found("Product"),
            CoreError::InsufficientStock {
                available,
                requested,
                ..
            } => CommandError::new(
                ErrorCode::InsufficientStock,
                format!(
                    "Insufficient stock!\nAvailable: {}\nRequested: {}",
                    available, requested
                ),
            ),
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// Converts store errors to command errors.
impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, .. } => CommandError::not_found(&entity),
            StoreError::CapacityReached { entity, .. } => {
                CommandError::new(ErrorCode::Capacity, format!("{} limit reached!", entity))
            }
            StoreError::InUse { entity, .. } => CommandError::new(
                ErrorCode::InUse,
                format!("Cannot delete! {} is in use by products.", capitalize(&entity)),
            ),
            StoreError::Core(e) => e.into(),
            StoreError::Validation(e) => e.into(),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for CommandError {}

// =============================================================================
// Console Error
// =============================================================================

/// Why a command stopped early.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reported to the operator; the menu loop continues.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Input ended; the menu loop stops.
    #[error("input closed")]
    Closed,

    /// Terminal I/O failed; `run` returns it.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<StoreError> for ConsoleError {
    fn from(err: StoreError) -> Self {
        ConsoleError::Command(err.into())
    }
}

impl From<ValidationError> for ConsoleError {
    fn from(err: ValidationError) -> Self {
        ConsoleError::Command(err.into())
    }
}

/// Result type for console commands.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let cases = [
            (ValidationError::required("product name"), "Product name cannot be empty!"),
            (
                ValidationError::MustBePositive { field: "id".into() },
                "Invalid ID! Must be positive.",
            ),
            (
                ValidationError::MustBePositive { field: "quantity".into() },
                "Invalid quantity! Must be positive.",
            ),
            (
                ValidationError::MustBeNonNegative { field: "quantity".into() },
                "Invalid quantity! Must be non-negative.",
            ),
            (ValidationError::duplicate("product id", 1), "Product ID already exists!"),
            (ValidationError::duplicate("category", "Food"), "Category already exists!"),
            (
                ValidationError::unknown("category", "Toys"),
                "Category does not exist! Please create it first.",
            ),
        ];

        for (err, expected) in cases {
            let cmd = CommandError::from(err);
            assert_eq!(cmd.code, ErrorCode::ValidationError);
            assert_eq!(cmd.message, expected);
        }
    }

    #[test]
    fn test_store_messages() {
        let in_use = StoreError::InUse {
            entity: "category".into(),
            key: "Electronics".into(),
        };
        assert_eq!(
            CommandError::from(in_use).message,
            "Cannot delete! Category is in use by products."
        );

        let full = CommandError::from(StoreError::capacity("Supplier", 100));
        assert_eq!(full.code, ErrorCode::Capacity);
        assert_eq!(full.message, "Supplier limit reached!");

        let missing = CommandError::from(StoreError::not_found("Product", 42));
        assert_eq!(missing.message, "Product not found!");
    }

    #[test]
    fn test_insufficient_stock_lists_both_quantities() {
        let err = CommandError::from(StoreError::Core(CoreError::InsufficientStock {
            product: "Keyboard".into(),
            available: 3,
            requested: 5,
        }));

        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.message, "Insufficient stock!\nAvailable: 3\nRequested: 5");
        assert_eq!(err.to_string(), format!("[INSUFFICIENT_STOCK] {}", err.message));
    }
}
