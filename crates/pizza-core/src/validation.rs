//! # Validation Module
//!
//! Input validation for catalog and order operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Session driver (pizza-cli)                                   │
//! │  ├── Parses keyboard input into numbers                                │
//! │  └── Re-prompts on garbage                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Name length / characters, price window                            │
//! │  └── Quantity and party size bounds                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog / Order invariants                                   │
//! │  ├── Unique names, capacity                                            │
//! │  └── Checked totals                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The core re-validates everything it is handed; callers are not trusted
//! with invariants.

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_NAME_LENGTH, MAX_PRICE, MIN_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a pizza name typed by a user and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 49 characters
/// - Letters, digits, spaces and `-'&.` only
///
/// The character rule keeps commas and line breaks out of names, so every
/// name this crate accepts survives a save/load cycle unchanged.
///
/// ## Example
/// ```rust
/// use pizza_core::validation::validate_pizza_name;
///
/// assert_eq!(validate_pizza_name("  Diavola ").unwrap(), "Diavola");
/// assert!(validate_pizza_name("Salami, extra").is_err());
/// assert!(validate_pizza_name("").is_err());
/// ```
pub fn validate_pizza_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "Pizza name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "Pizza name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    if !name.chars().all(is_name_char) {
        return Err(ValidationError::InvalidFormat {
            field: "Pizza name".to_string(),
            reason: "use only letters, numbers, spaces and - ' & .".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Checks that a name can be written to and read back from the catalog file.
///
/// Looser than [`validate_pizza_name`]: the name is taken as is, and any
/// character is allowed except the field separator and line breaks.
///
/// ## Rules
/// - Must not be empty
/// - At most 49 characters
/// - No `,`, `\n` or `\r`
pub fn validate_stored_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "Pizza name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "Pizza name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    if name.contains([',', '\n', '\r']) {
        return Err(ValidationError::InvalidFormat {
            field: "Pizza name".to_string(),
            reason: "commas and line breaks cannot be stored".to_string(),
        });
    }

    Ok(())
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ' ' | '-' | '\'' | '&' | '.')
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price.
///
/// ## Rules
/// - Between 0.01 and 999.99 inclusive
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price < MIN_PRICE || price > MAX_PRICE {
        return Err(ValidationError::PriceOutOfRange {
            min: MIN_PRICE,
            max: MAX_PRICE,
        });
    }

    Ok(())
}

/// Validates a line-item quantity against the configured maximum.
///
/// ## User Workflow
/// ```text
/// Enter quantity for Hawaiian: 5
///       │
///       ▼
/// validate_quantity(5, 1000) ← THIS FUNCTION
///       │
///       ├── qty <= 0?    → "quantity must be a positive number"
///       ├── qty > max?   → "quantity must be between 1 and 1000"
///       └── OK → 5u32
/// ```
pub fn validate_quantity(qty: i64, max: u32) -> ValidationResult<u32> {
    validate_count("quantity", qty, max)
}

/// Validates the number of people splitting a bill.
pub fn validate_party_size(people: i64, max: u32) -> ValidationResult<u32> {
    validate_count("number of people", people, max)
}

fn validate_count(field: &str, value: i64, max: u32) -> ValidationResult<u32> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    if value > i64::from(max) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: i64::from(max),
        });
    }

    // In range 1..=max, so it fits.
    Ok(value as u32)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_pizza_name() {
        assert_eq!(validate_pizza_name("Margherita").unwrap(), "Margherita");
        assert_eq!(validate_pizza_name("Mama's B.B.Q. & Co-op").unwrap(), "Mama's B.B.Q. & Co-op");
        assert!(validate_pizza_name("Quattro Formaggi").is_ok());

        assert!(validate_pizza_name("").is_err());
        assert!(validate_pizza_name("   ").is_err());
        assert!(validate_pizza_name("Ham,Pineapple").is_err());
        assert!(validate_pizza_name("Tab\tName").is_err());
        assert!(validate_pizza_name(&"A".repeat(50)).is_err());
        assert!(validate_pizza_name(&"A".repeat(49)).is_ok());
    }

    #[test]
    fn test_validate_stored_name() {
        assert!(validate_stored_name(" Spaced ").is_ok());
        assert!(validate_stored_name("Crudo É Rucola").is_ok());
        assert!(validate_stored_name(&"N".repeat(49)).is_ok());

        assert!(matches!(
            validate_stored_name(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_stored_name(&"N".repeat(60)),
            Err(ValidationError::TooLong { max: 49, .. })
        ));
        for bad in ["Ham, Pineapple", "Two\nLines", "Carriage\rReturn"] {
            assert!(matches!(
                validate_stored_name(bad),
                Err(ValidationError::InvalidFormat { .. })
            ));
        }
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::from_cents(1250)).is_ok());
        assert!(validate_price(Money::from_cents(99_999)).is_ok());

        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(-100)).is_err());
        assert!(validate_price(Money::from_cents(100_000)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1, 1000).unwrap(), 1);
        assert_eq!(validate_quantity(1000, 1000).unwrap(), 1000);

        assert!(matches!(
            validate_quantity(0, 1000),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_quantity(-3, 1000).is_err());
        assert!(matches!(
            validate_quantity(1001, 1000),
            Err(ValidationError::OutOfRange { max: 1000, .. })
        ));
    }

    #[test]
    fn test_validate_party_size() {
        assert_eq!(validate_party_size(4, 1000).unwrap(), 4);
        assert!(validate_party_size(0, 1000).is_err());
        assert!(validate_party_size(11, 10).is_err());
    }
}
