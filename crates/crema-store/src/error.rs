//! # API Error Type
//!
//! Unified error type for the presentation-facing commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  Frontend                    Rust                                       │
//! │  ────────                    ────                                       │
//! │                                                                         │
//! │  addToCart('flat-white')                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function → Result<CartResponse, ApiError>               │  │
//! │  │         │                                                        │  │
//! │  │  Unknown menu id? ─── CoreError::MenuItemNotFound ──┐           │  │
//! │  │         │                                           ▼           │  │
//! │  │  Bad payload / quantity? ── ValidationError ───── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │  Cart transition ── never fails ──────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) { e.code === 'NOT_FOUND' ... }                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crema_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Menu item not found: flat-white"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown menu item
    NotFound,

    /// Malformed input from the UI boundary
    ValidationError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MenuItemNotFound(id) => ApiError::not_found("Menu item", &id),
            CoreError::InvalidHours { .. } => ApiError::validation(err.to_string()),
            CoreError::Validation(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use crema_core::schedule::DayHours;

    #[test]
    fn test_not_found_serialization() {
        let err: ApiError = CoreError::MenuItemNotFound("flat-white".to_string()).into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Menu item not found: flat-white");
    }

    #[test]
    fn test_validation_maps_to_validation_code() {
        let err: ApiError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.to_string(), "[ValidationError] name is required");

        let wrapped: ApiError = CoreError::Validation(ValidationError::Required {
            field: "id".to_string(),
        })
        .into();
        assert_eq!(wrapped.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_invalid_hours_is_a_validation_error() {
        let err: ApiError = DayHours::parse(Weekday::Mon, "18:00", "8:00")
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(serde_json::to_value(&err).unwrap()["code"], "VALIDATION_ERROR");
    }
}
