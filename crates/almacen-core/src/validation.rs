//! # Validation Module
//!
//! Order request validation for the Almacén order service.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Transport (outside this workspace)                           │
//! │  ├── JSON shape / type checks at deserialization                       │
//! │  └── Auth, rate limiting, sanitization middleware                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  ├── Required fields present                                           │
//! │  ├── Identifiers positive                                              │
//! │  └── Quantity within 1..=MAX_ORDER_QUANTITY                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE order_number                                               │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  A request that fails here never opens a transaction.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{OrderRequest, ValidOrderRequest};
use crate::MAX_ORDER_QUANTITY;

// =============================================================================
// Order Request Validation
// =============================================================================

/// Validates an incoming order request.
///
/// ## Rules
/// - `client_id`, `product_id`, `quantity` are required
/// - `client_id`, `product_id` must be positive identifiers
/// - `quantity` must be greater than 0 and at most [`MAX_ORDER_QUANTITY`]
///
/// Checks run in field order and the first failure wins, so callers get one
/// precise message rather than a bundle.
///
/// ## Example
/// ```rust
/// use almacen_core::types::OrderRequest;
/// use almacen_core::validation::validate_order_request;
///
/// let request = OrderRequest {
///     client_id: Some(1),
///     product_id: Some(7),
///     quantity: Some(2),
///     ..Default::default()
/// };
/// let valid = validate_order_request(&request).unwrap();
/// assert_eq!(valid.quantity, 2);
/// ```
pub fn validate_order_request(request: &OrderRequest) -> ValidationResult<ValidOrderRequest> {
    let client_id = request
        .client_id
        .ok_or(ValidationError::Required { field: "client_id" })?;
    let product_id = request.product_id.ok_or(ValidationError::Required {
        field: "product_id",
    })?;
    let quantity = request
        .quantity
        .ok_or(ValidationError::Required { field: "quantity" })?;

    if client_id <= 0 {
        return Err(ValidationError::MustBePositive { field: "client_id" });
    }

    if product_id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "product_id",
        });
    }

    validate_quantity(quantity)?;

    Ok(ValidOrderRequest {
        client_id,
        product_id,
        quantity,
        delivery_class: request.delivery_class.clone(),
        payment_terms: request.payment_terms.clone(),
    })
}

/// Validates an order quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ORDER_QUANTITY`] (1000)
///
/// The two failure modes carry distinct messages so callers can tell a typo
/// (0) from an over-order (1001).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::QuantityNotPositive);
    }

    if qty > MAX_ORDER_QUANTITY {
        return Err(ValidationError::QuantityTooLarge {
            max: MAX_ORDER_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
