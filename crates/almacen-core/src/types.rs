//! # Domain Types
//!
//! Core domain types used throughout the Almacén order service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  OrderRequest   │   │      Order      │   │  OrderDetails   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  wire shape,    │──►│  persisted row  │──►│  joined with    │       │
//! │  │  all Optional   │   │  order_number   │   │  client/product │       │
//! │  │  (unvalidated)  │   │  price snapshot │   │  display fields │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   StockRecord   │   │   PriceEntry    │   │   OrderFilter   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product row    │   │  [from, to)     │   │  optional AND   │       │
//! │  │  qty on hand    │   │  validity       │   │  predicates     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! Every persisted entity has a store-assigned integer `id`; orders
//! additionally carry a business-visible `order_number` (monotonic, unique,
//! assigned by the sequencer inside the intake transaction).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Order Request
// =============================================================================

/// An incoming order-creation request, exactly as received from the caller.
///
/// All fields are optional at this stage - validation turns this into a
/// [`ValidOrderRequest`] or rejects it before any store access.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Client placing the order.
    pub client_id: Option<i64>,

    /// Product being ordered.
    pub product_id: Option<i64>,

    /// Requested quantity.
    pub quantity: Option<i64>,

    /// Delivery class (e.g. "Express"). Stored as-is when supplied.
    pub delivery_class: Option<String>,

    /// Payment terms applied to this order (e.g. "Cash").
    pub payment_terms: Option<String>,
}

/// A validated order request. Can only be obtained through
/// [`crate::validation::validate_order_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidOrderRequest {
    pub client_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub delivery_class: Option<String>,
    pub payment_terms: Option<String>,
}

// =============================================================================
// Stock Record
// =============================================================================

/// A product's stock row as observed under the intake transaction's lock.
///
/// The stock guard returns this record but never mutates it; the decrement
/// happens later in the same transaction, after pricing and numbering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct StockRecord {
    /// Product identifier.
    pub id: i64,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Quantity currently on hand. Never negative.
    pub stock_qty: i64,
}

// =============================================================================
// Price Entry
// =============================================================================

/// One row of the price list: a unit price valid for `[valid_from, valid_to)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PriceEntry {
    pub id: i64,
    pub product_id: i64,

    /// Unit price in cents.
    pub unit_price_cents: i64,

    /// Start of the validity window (inclusive).
    pub valid_from: DateTime<Utc>,

    /// End of the validity window (exclusive).
    pub valid_to: DateTime<Utc>,
}

impl PriceEntry {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Checks whether this entry is valid at the given instant.
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        self.valid_from <= at && at < self.valid_to
    }
}

// =============================================================================
// Order
// =============================================================================

/// A persisted order row.
///
/// Created exactly once inside a successful intake transaction; never
/// updated or deleted afterwards. Unit price and total are snapshots taken
/// at creation time - later price-list changes do not touch them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    /// Surrogate id, assigned by the store.
    pub id: i64,

    /// Business-visible order number (monotonic, unique).
    pub order_number: i64,

    pub client_id: i64,
    pub product_id: i64,

    /// Quantity ordered.
    pub quantity: i64,

    /// Unit price in cents at creation time (frozen).
    pub unit_price_cents: i64,

    /// Computed total in cents (unit price × quantity, frozen).
    pub total_cents: i64,

    /// Delivery class, absent when not supplied.
    pub delivery_class: Option<String>,

    /// Payment terms, absent when not supplied.
    pub payment_terms: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns the unit price snapshot as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Order Details
// =============================================================================

/// An order joined with client and product display fields.
///
/// This is the success payload of order creation and the row shape of the
/// order listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderDetails {
    pub id: i64,
    pub order_number: i64,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub total_cents: i64,
    pub delivery_class: Option<String>,
    pub payment_terms: Option<String>,
    pub created_at: DateTime<Utc>,

    /// Client display fields.
    pub client_first_name: String,
    pub client_last_name: String,
    pub client_tax_id: String,

    /// Product display fields.
    pub product_sku: String,
    pub product_name: String,
}

impl OrderDetails {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Order Filter
// =============================================================================

/// Optional filters for listing orders. All supplied predicates are combined
/// with logical AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilter {
    /// Exact order id.
    pub order_id: Option<i64>,

    /// Client tax id (exact match).
    pub client_tax_id: Option<String>,

    /// Orders created at or after this instant.
    pub created_from: Option<DateTime<Utc>>,

    /// Orders created at or before this instant.
    pub created_to: Option<DateTime<Utc>>,
}

impl OrderFilter {
    /// True when no predicate is set (listing is unfiltered).
    pub fn is_empty(&self) -> bool {
        self.order_id.is_none()
            && self.client_tax_id.is_none()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
