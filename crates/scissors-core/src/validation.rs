//! # Validation Module
//!
//! Input validation for catalog mutations.
//!
//! ## Validation Strategy
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                                │
//! │                                                                        │
//! │  Layer 1: UI shell (external)                                          │
//! │  └── Immediate feedback on empty/overlong input                        │
//! │           │                                                            │
//! │           ▼                                                            │
//! │  Layer 2: THIS MODULE — business rule validation before any mutation   │
//! │           │                                                            │
//! │           ▼                                                            │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL / CHECK constraints as the last line                     │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog entity name (service, extra, barber, line, label).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_NAME_LEN`] characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (promotional freebies)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
pub fn validate_percentage(pct: u32) -> ValidationResult<()> {
    if pct > 100 {
        return Err(ValidationError::OutOfRange {
            field: "percentage".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
