//! # Stock Guard
//!
//! Lock acquisition and availability check for a product's stock row.
//!
//! ## Why a Guard and Not a Decrement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  reserve() locks and validates but does NOT mutate.                     │
//! │                                                                         │
//! │  reserve(product, qty)  ← take the write lock, fail on shortage        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  price resolution, numbering, insert ...                               │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  order::decrement_stock()  ← the only mutation, same transaction       │
//! │                                                                         │
//! │  A later failure (e.g. no valid price) therefore rolls back with       │
//! │  stock untouched.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## How the Lock Works
//! SQLite has no `SELECT ... FOR UPDATE`, so the guard issues a no-op write
//! to the stock row as the transaction's first statement. That upgrades the
//! transaction to SQLite's writer before anything is read: a concurrent
//! intake blocks on the same statement (bounded by the pool's busy_timeout)
//! until the holder commits or rolls back, then observes the decremented
//! quantity. This is the sole serialization point between racing intakes.

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::{IntakeError, IntakeResult};
use almacen_core::StockRecord;

/// Locks `product_id`'s stock row for the rest of the enclosing transaction
/// and validates that at least `quantity` is on hand.
///
/// Returns the stock row as observed under the lock. Does not mutate it.
///
/// ## Errors
/// * [`IntakeError::ProductNotFound`] - no such product
/// * [`IntakeError::OutOfStock`] - quantity on hand is zero
/// * [`IntakeError::InsufficientStock`] - on hand < requested, message carries
///   the available amount
pub async fn reserve(
    conn: &mut SqliteConnection,
    product_id: i64,
    quantity: i64,
) -> IntakeResult<StockRecord> {
    // Write-intent touch: forces the transaction to take the write lock
    // before the availability read, so the quantity below can never be a
    // stale snapshot from before a concurrent commit.
    let touched = sqlx::query(
        r#"
        UPDATE products
        SET stock_qty = stock_qty
        WHERE id = ?1
        "#,
    )
    .bind(product_id)
    .execute(&mut *conn)
    .await?;

    if touched.rows_affected() == 0 {
        return Err(IntakeError::ProductNotFound { product_id });
    }

    let record: StockRecord = sqlx::query_as(
        r#"
        SELECT id, sku, stock_qty
        FROM products
        WHERE id = ?1
        "#,
    )
    .bind(product_id)
    .fetch_one(conn)
    .await?;

    if record.stock_qty == 0 {
        return Err(IntakeError::OutOfStock { product_id });
    }

    if record.stock_qty < quantity {
        return Err(IntakeError::InsufficientStock {
            product_id,
            available: record.stock_qty,
            requested: quantity,
        });
    }

    debug!(
        product_id,
        sku = %record.sku,
        on_hand = record.stock_qty,
        requested = quantity,
        "Stock reserved"
    );

    Ok(record)
}
