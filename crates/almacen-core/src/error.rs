//! # Error Types
//!
//! Domain-specific error types for almacen-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  almacen-core errors (this file)                                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  almacen-db errors (separate crate)                                    │
//! │  ├── DbError          - Database operation failures                    │
//! │  └── IntakeError      - Order intake failures (wraps everything)       │
//! │                                                                         │
//! │  Flow: ValidationError → IntakeError → service layer → caller          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limit, ...)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any transaction is opened - a request that fails
/// validation never touches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing.
    #[error("Missing required field: {field}")]
    Required { field: &'static str },

    /// An identifier field must be a positive number.
    #[error("{field} must be a positive number")]
    MustBePositive { field: &'static str },

    /// Quantity is zero or negative.
    #[error("quantity must be greater than 0")]
    QuantityNotPositive,

    /// Quantity is above the configured ceiling.
    #[error("quantity exceeds maximum allowed ({max})")]
    QuantityTooLarge { max: i64 },

    /// No price entry is valid for the product right now.
    ///
    /// Raised by the price resolver inside the intake transaction; a missing
    /// price is a request problem, not a store fault.
    #[error("Product has no valid price")]
    NoValidPrice,
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required { field: "client_id" };
        assert_eq!(err.to_string(), "Missing required field: client_id");

        let err = ValidationError::MustBePositive { field: "product_id" };
        assert_eq!(err.to_string(), "product_id must be a positive number");

        let err = ValidationError::QuantityNotPositive;
        assert_eq!(err.to_string(), "quantity must be greater than 0");

        let err = ValidationError::QuantityTooLarge { max: 1000 };
        assert_eq!(err.to_string(), "quantity exceeds maximum allowed (1000)");

        let err = ValidationError::NoValidPrice;
        assert_eq!(err.to_string(), "Product has no valid price");
    }
}
