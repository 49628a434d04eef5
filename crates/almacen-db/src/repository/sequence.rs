//! # Order Sequencer
//!
//! Assigns the next business-visible order number.
//!
//! ## Why a Counter Row and Not MAX()+1
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MAX(order_number)+1 is only safe if every pair of concurrent intakes   │
//! │  contends on the same lock. That holds for two orders of one product,  │
//! │  but nothing serializes intakes for DIFFERENT products, so two of      │
//! │  them could read the same MAX and collide.                             │
//! │                                                                         │
//! │  The order_sequence table is a single row incremented in place:        │
//! │                                                                         │
//! │    UPDATE order_sequence SET last_number = last_number + 1             │
//! │    WHERE id = 1 RETURNING last_number                                  │
//! │                                                                         │
//! │  The increment is atomic within the intake transaction; numbers are    │
//! │  unique and strictly increasing across ALL products. Numbers consumed  │
//! │  by rolled-back intakes are reused only because the rollback restores  │
//! │  the counter - committed numbers never repeat.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The counter is seeded at `ORDER_NUMBER_FLOOR - 1` by the initial
//! migration, so the first committed order receives the floor (1001).

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::{DbError, IntakeResult};

/// Increments the order-number counter and returns the assigned number.
///
/// Must be called inside the intake transaction; the new value becomes
/// visible to other intakes only on commit.
pub async fn next_order_number(conn: &mut SqliteConnection) -> IntakeResult<i64> {
    let number: Option<i64> = sqlx::query_scalar(
        r#"
        UPDATE order_sequence
        SET last_number = last_number + 1
        WHERE id = 1
        RETURNING last_number
        "#,
    )
    .fetch_optional(conn)
    .await?;

    // The sequence row is created by the initial migration; its absence
    // means the schema is broken, not that there are no orders yet.
    let number = number.ok_or_else(|| DbError::not_found("order_sequence row", 1))?;

    debug!(order_number = number, "Order number assigned");

    Ok(number)
}
