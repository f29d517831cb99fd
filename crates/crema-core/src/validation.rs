//! # Validation Module
//!
//! Checks for input arriving from the presentation layer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  └── Form fields, immediate feedback (out of scope here)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Item ids, names, prices on add-to-cart payloads                   │
//! │  └── Quantity text fields (non-numeric rejected)                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart transitions                                             │
//! │  └── Never fail: unknown ids are no-ops, quantities clamp to >= 1      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_ID_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ITEM_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog item id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - Lowercase slug characters only: `a-z`, `0-9`, `-`, `_`
///
/// ## Example
/// ```rust
/// use crema_core::validation::validate_item_id;
///
/// assert!(validate_item_id("blueberry-muffin").is_ok());
/// assert!(validate_item_id("").is_err());
/// assert!(validate_item_id("Earl Grey").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.chars().count() > MAX_ITEM_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ITEM_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only lowercase letters, digits, hyphens, and underscores"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates an item's display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free samples)
///
/// ## Example
/// ```rust
/// use crema_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(350).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Parses the cart drawer's quantity field.
///
/// Only the text format is checked here. Zero and negative values parse
/// fine; the cart clamps them to 1 rather than removing the line.
///
/// ## User Workflow
/// ```text
/// User types "3" in the quantity box
///      │
///      ▼
/// validate_quantity_input("3") ← THIS FUNCTION
///      │
///      ├── "abc"? → Error: "quantity has invalid format"
///      │
///      └── Ok(3) → UpdateQuantity { id, quantity: 3 }
/// ```
pub fn validate_quantity_input(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    raw.parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("espresso").is_ok());
        assert!(validate_item_id("earl-grey").is_ok());
        assert!(validate_item_id("item_2").is_ok());

        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("   ").is_err());
        assert!(validate_item_id("Latte").is_err());
        assert!(validate_item_id("green tea").is_err());
        assert!(validate_item_id(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Blueberry Muffin").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(" \t ").is_err());
        assert!(validate_item_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_lengths_count_characters() {
        // 200 characters, 400 bytes
        assert!(validate_item_name(&"é".repeat(200)).is_ok());
        assert!(matches!(
            validate_item_name(&"é".repeat(201)),
            Err(ValidationError::TooLong { max: 200, .. })
        ));

        assert!(matches!(
            validate_item_id(&"é".repeat(40)),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(475).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_quantity_input() {
        assert_eq!(validate_quantity_input("3").unwrap(), 3);
        assert_eq!(validate_quantity_input(" 12 ").unwrap(), 12);
        // Clamping happens in the cart, not here
        assert_eq!(validate_quantity_input("0").unwrap(), 0);
        assert_eq!(validate_quantity_input("-4").unwrap(), -4);

        assert!(validate_quantity_input("").is_err());
        assert!(validate_quantity_input("two").is_err());
        assert!(validate_quantity_input("1.5").is_err());
    }
}
