//! # Price Resolver
//!
//! Looks up the unit price currently valid for a product.
//!
//! ## Validity Windows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  price_list rows per product:                                           │
//! │                                                                         │
//! │    [2026-01-01 ────────── 2026-02-01)   $100.00                         │
//! │                  [2026-01-15 ─────────────── 2026-03-01)   $110.00      │
//! │                          ▲                                              │
//! │                         now                                             │
//! │                                                                         │
//! │  Both windows cover "now". Tie-break: most recently started window     │
//! │  wins ($110.00), then lowest id. Deterministic per call.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The read happens inside the intake transaction, so the resolved price is
//! snapshot-consistent with the stock row already locked by the stock guard.

use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::IntakeResult;
use almacen_core::{Money, PriceEntry, ValidationError};

/// Resolves the unit price valid for `product_id` at instant `at`.
///
/// Windows are `[valid_from, valid_to)`. When several windows overlap the
/// most recently started one wins, then the lowest id.
///
/// ## Errors
/// * [`ValidationError::NoValidPrice`] - no window covers `at`
pub async fn current_price(
    conn: &mut SqliteConnection,
    product_id: i64,
    at: DateTime<Utc>,
) -> IntakeResult<Money> {
    let entry: Option<PriceEntry> = sqlx::query_as(
        r#"
        SELECT id, product_id, unit_price_cents, valid_from, valid_to
        FROM price_list
        WHERE product_id = ?1
          AND valid_from <= ?2
          AND ?2 < valid_to
        ORDER BY valid_from DESC, id ASC
        LIMIT 1
        "#,
    )
    .bind(product_id)
    .bind(at)
    .fetch_optional(conn)
    .await?;

    let entry = entry.ok_or(ValidationError::NoValidPrice)?;

    debug!(
        product_id,
        price_entry_id = entry.id,
        unit_price = %entry.unit_price(),
        "Price resolved"
    );

    Ok(entry.unit_price())
}
