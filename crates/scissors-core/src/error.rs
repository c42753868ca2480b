//! # Error Types
//!
//! Domain-specific error types for scissors-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                   │
//! │                                                                        │
//! │  scissors-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                        │
//! │  scissors-db errors (separate crate)                                   │
//! │  └── StoreError       - Persistence operation failures                 │
//! │                                                                        │
//! │  Terminal app errors                                                   │
//! │  └── AppError         - What the UI shell sees                         │
//! │                                                                        │
//! │  Flow: ValidationError → CoreError → AppError → notification           │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (entity, id, field names)
//! 3. Errors are enum variants, never String
//! 4. A validation failure never mutates state

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations or domain logic failures and
/// should be translated to user-facing messages by the caller.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A catalog entity referenced by the selection no longer exists.
    ///
    /// ## When This Occurs
    /// - Wizard holds a barber/service id that was deleted mid-selection
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Reported synchronously to the caller; the triggering action is blocked
/// and no state mutation occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required selections are missing at submit time.
    ///
    /// ## When This Occurs
    /// - Submitting a cobro without barber, service, or payment method
    ///
    /// The message names every missing field so the user can fix all of
    /// them in one pass.
    #[error("missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// A required text field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
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
    fn test_missing_fields_message_names_every_field() {
        let err = ValidationError::MissingFields {
            fields: vec!["barber".to_string(), "payment_method".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "missing required fields: barber, payment_method"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = CoreError::not_found("Service", "abc-123");
        assert_eq!(err.to_string(), "Service not found: abc-123");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
