//! # Error Types
//!
//! Domain-specific error types for pizza-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizza-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog and order rule violations              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pizza-store errors (separate crate)                                   │
//! │  └── StoreError       - Catalog file could not be read or written      │
//! │                                                                         │
//! │  pizza-cli errors (app)                                                │
//! │  └── CliError         - What ends the process with status 1            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → CliError             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate is fatal. Every rule violation comes back as a
//! value and leaves the catalog or order exactly as it was.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and order rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A pizza with the same name (ignoring case) is already on the menu.
    #[error("Pizza type '{0}' already exists")]
    DuplicateName(String),

    /// No pizza with this name (ignoring case) is on the menu.
    #[error("Pizza type '{0}' not found")]
    NotFound(String),

    /// The catalog or the order has no free slot left.
    ///
    /// ## When This Occurs
    /// - Adding a 21st pizza type to the menu
    /// - Ordering a 21st distinct pizza
    #[error("Cannot hold more than {max} {what}")]
    CapacityExceeded { what: &'static str, max: usize },

    /// Adding a line item would overflow the running total.
    ///
    /// The order is left untouched when this is returned.
    #[error("Order total would overflow")]
    ArithmeticOverflow,

    /// Ordering a pizza again adds to its existing line, and the combined
    /// quantity would pass the per-line maximum.
    #[error("Order already has {ordered} x {name}; the combined quantity must be at most {max}")]
    LineQuantityExceeded { name: String, ordered: u32, max: u32 },

    /// The chosen pizza is currently marked unavailable.
    #[error("Sorry, {0} is not available")]
    PizzaUnavailable(String),

    /// The order has no line items, so there is nothing to split.
    #[error("No items in order")]
    EmptyOrder,

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a CapacityExceeded error for the catalog.
    pub fn catalog_full(max: usize) -> Self {
        CoreError::CapacityExceeded {
            what: "pizza types",
            max,
        }
    }

    /// Creates a CapacityExceeded error for an order.
    pub fn order_full(max: usize) -> Self {
        CoreError::CapacityExceeded {
            what: "order lines",
            max,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any business rule runs. The session driver reacts to
/// them by asking for the value again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} cannot be empty")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Price is outside the accepted window.
    #[error("price must be between {min} and {max}")]
    PriceOutOfRange { min: Money, max: Money },

    /// Value must be positive.
    #[error("{field} must be a positive number")]
    MustBePositive { field: String },

    /// Invalid format (e.g., characters that the catalog file cannot hold).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
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
        let err = CoreError::DuplicateName("Margherita".to_string());
        assert_eq!(err.to_string(), "Pizza type 'Margherita' already exists");

        let err = CoreError::catalog_full(20);
        assert_eq!(err.to_string(), "Cannot hold more than 20 pizza types");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 1000,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 1000");

        let err = ValidationError::PriceOutOfRange {
            min: Money::from_cents(1),
            max: Money::from_cents(99_999),
        };
        assert_eq!(err.to_string(), "price must be between 0.01 and 999.99");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "name cannot be empty");
    }
}
