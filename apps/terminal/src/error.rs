//! # App Error Type
//!
//! Unified error type for terminal actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                   Error Flow in Scissors POS                           │
//! │                                                                        │
//! │  Action Function                                                       │
//! │  Result<T, AppError>                                                   │
//! │         │                                                              │
//! │         ▼                                                              │
//! │  Store Error? ─── StoreError::QueryFailed("...") ──┐                   │
//! │         │                                          │                   │
//! │         ▼                                          ▼                   │
//! │  Validation Error? ─── CoreError::Validation ──► AppError ──► caller   │
//! │         │                                                              │
//! │         ▼                                                              │
//! │  Success ────────────────────────────────────────────────────► caller  │
//! │                                                                        │
//! │  Background store failures do NOT flow here: they become error         │
//! │  notifications, because the local update already succeeded.            │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use scissors_core::CoreError;
use scissors_db::StoreError;

/// Error returned from terminal actions.
///
/// ## Serialization
/// Shaped for a UI shell:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Service not found: abc-123"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for action responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced entity no longer exists
    NotFound,

    /// Input validation failed; nothing was mutated
    ValidationError,

    /// Store operation failed
    StoreError,

    /// Internal error
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { entity, id } => AppError::not_found(entity, &id),
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

/// Converts store errors to app errors.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => AppError::not_found(&entity, &id),
            StoreError::UniqueViolation { field, value } => AppError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            StoreError::ConnectionFailed(_) => {
                AppError::new(ErrorCode::StoreError, "Store connection failed")
            }
            StoreError::MigrationFailed(_) => {
                AppError::new(ErrorCode::StoreError, "Store migration failed")
            }
            StoreError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Store query failed: {}", e);
                AppError::new(ErrorCode::StoreError, "Store operation failed")
            }
            StoreError::ForeignKeyViolation { message } => {
                tracing::error!("Foreign key violation: {}", message);
                AppError::new(ErrorCode::ValidationError, "Invalid reference")
            }
            StoreError::CorruptPayload { id, message } => {
                tracing::error!(id = %id, "Corrupt stored payload: {}", message);
                AppError::new(ErrorCode::StoreError, "Stored record is corrupt")
            }
            StoreError::PoolExhausted => {
                AppError::new(ErrorCode::StoreError, "Store pool exhausted")
            }
            StoreError::Internal(e) => {
                tracing::error!("Internal store error: {}", e);
                AppError::new(ErrorCode::StoreError, "Store operation failed")
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_not_found_maps_to_not_found() {
        let err: AppError = CoreError::not_found("Service", "s1").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Service not found: s1");
    }

    #[test]
    fn test_validation_keeps_field_message() {
        let err: AppError = CoreError::Validation(scissors_core::ValidationError::MissingFields {
            fields: vec!["barber".to_string(), "payment_method".to_string()],
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("barber"));
        assert!(err.message.contains("payment_method"));
    }
}
