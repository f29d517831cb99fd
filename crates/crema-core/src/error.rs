//! # Error Types
//!
//! Error types for crema-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  crema-core errors (this file)                                         │
//! │  ├── CoreError        - Lookup and schedule failures                   │
//! │  └── ValidationError  - Malformed input from the UI boundary           │
//! │                                                                         │
//! │  crema-store errors                                                    │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart transitions themselves never fail: an unknown id is a no-op and
//! out-of-range quantities are clamped. Errors only come from the boundary.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised outside the cart transitions (catalog lookups, schedules).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A menu item id did not match anything in the catalog.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    /// Opening hours for a day close before they open.
    #[error("Opening hours for {day} close at {close} before opening at {open}")]
    InvalidHours {
        day: String,
        open: String,
        close: String,
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
/// Raised when input from the presentation layer is malformed, before it
/// reaches the cart.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., non-numeric quantity, bad time of day).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two menu items sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
