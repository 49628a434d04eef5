//! # Order Intake
//!
//! The order-creation transaction coordinator: the one piece of this system
//! where concurrent requests can race.
//!
//! ## Intake Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Intake Lifecycle                             │
//! │                                                                         │
//! │  Validating ── request rules, no store access                          │
//! │       │                                                                 │
//! │       ▼        ┌──────────────── one atomic transaction ─────────────┐ │
//! │  Locking       │ stock::reserve — write lock + availability check    │ │
//! │       │        │                                                     │ │
//! │  Pricing       │ price::current_price — valid unit price, snapshot   │ │
//! │       │        │ total = unit price × quantity                       │ │
//! │  Numbering     │ sequence::next_order_number — monotonic counter     │ │
//! │       │        │                                                     │ │
//! │  Inserting     │ order::insert — persist the order row               │ │
//! │       │        │                                                     │ │
//! │  Decrementing  │ order::decrement_stock — the only stock mutation    │ │
//! │       │        │                                                     │ │
//! │       ▼        │ order::fetch_details — joined success payload       │ │
//! │  Committed     └─────────────────────────────────────────────────────┘ │
//! │                                                                         │
//! │  Any step failing → RolledBack (transaction dropped, lock released,    │
//! │  zero rows changed). Committed and RolledBack are terminal.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//! - Exactly one order row and one stock decrement per successful call
//! - Zero rows changed on any failure, with the error's kind preserved
//! - No retries here: retry policy belongs to the caller, and only for
//!   store-kind failures (validation/not-found/conflict are not transient)
//! - If the caller's future is dropped mid-flight, the transaction guard
//!   drops with it and sqlx rolls back, so the lock is never left held

use std::fmt;

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::error::{DbError, IntakeResult};
use crate::repository::{order, price, sequence, stock};
use almacen_core::validation::validate_order_request;
use almacen_core::{OrderDetails, OrderRequest};

// =============================================================================
// Intake Stage
// =============================================================================

/// Where an intake attempt currently is. Used for tracing and failure logs.
///
/// `Committed` and `RolledBack` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStage {
    Validating,
    Locking,
    Pricing,
    Numbering,
    Inserting,
    DecrementingStock,
    Committed,
    RolledBack,
}

impl fmt::Display for IntakeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntakeStage::Validating => "validating",
            IntakeStage::Locking => "locking",
            IntakeStage::Pricing => "pricing",
            IntakeStage::Numbering => "numbering",
            IntakeStage::Inserting => "inserting",
            IntakeStage::DecrementingStock => "decrementing_stock",
            IntakeStage::Committed => "committed",
            IntakeStage::RolledBack => "rolled_back",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Order Intake Coordinator
// =============================================================================

/// Coordinates order creation: validation, the atomic transaction, and the
/// mapping of every failure to a typed [`crate::IntakeError`].
#[derive(Debug, Clone)]
pub struct OrderIntake {
    pool: SqlitePool,
}

impl OrderIntake {
    /// Creates a new OrderIntake coordinator.
    pub fn new(pool: SqlitePool) -> Self {
        OrderIntake { pool }
    }

    /// Creates an order.
    ///
    /// ## Flow
    /// 1. Validate the request (fails fast, nothing touched)
    /// 2. Open one transaction and, inside it, in fixed order:
    ///    reserve stock → resolve price → assign number → insert order →
    ///    decrement stock → re-read the joined order
    /// 3. Commit and return the persisted order
    ///
    /// Any step's failure aborts the whole transaction; no partial state is
    /// ever observable outside it.
    pub async fn create_order(&self, request: &OrderRequest) -> IntakeResult<OrderDetails> {
        debug!(stage = %IntakeStage::Validating, "Order intake started");
        let valid = validate_order_request(request)?;

        let mut tx = self.pool.begin().await.map_err(DbError::from)?;

        // Dropping `tx` on any error path below rolls the transaction back
        // and releases the stock-row lock before the error reaches the
        // caller.
        let result = async {
            debug!(stage = %IntakeStage::Locking, product_id = valid.product_id, quantity = valid.quantity, "Reserving stock");
            stock::reserve(&mut tx, valid.product_id, valid.quantity).await?;

            let now = Utc::now();

            debug!(stage = %IntakeStage::Pricing, product_id = valid.product_id, "Resolving price");
            let unit_price = price::current_price(&mut tx, valid.product_id, now).await?;
            let total = unit_price.multiply_quantity(valid.quantity);

            debug!(stage = %IntakeStage::Numbering, "Assigning order number");
            let order_number = sequence::next_order_number(&mut tx).await?;

            debug!(stage = %IntakeStage::Inserting, order_number, "Persisting order");
            let order_id =
                order::insert(&mut tx, &valid, order_number, unit_price, total, now).await?;

            debug!(stage = %IntakeStage::DecrementingStock, product_id = valid.product_id, "Decrementing stock");
            order::decrement_stock(&mut tx, valid.product_id, valid.quantity).await?;

            order::fetch_details(&mut tx, order_id).await
        }
        .await;

        let details = match result {
            Ok(details) => details,
            Err(err) => {
                warn!(stage = %IntakeStage::RolledBack, kind = ?err.kind(), error = %err, "Order intake rolled back");
                return Err(err);
            }
        };

        tx.commit().await.map_err(DbError::from)?;

        info!(
            stage = %IntakeStage::Committed,
            order_id = details.id,
            order_number = details.order_number,
            total = %details.total(),
            "Order committed"
        );

        Ok(details)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, IntakeError};
    use crate::pool::{Database, DbConfig};
    use almacen_core::{Money, OrderFilter, ORDER_NUMBER_FLOOR};
    use chrono::{Duration, Utc};

    /// A file-backed database so every pooled connection sees the same data
    /// (in-memory SQLite gives each connection its own database).
    async fn test_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let config = DbConfig::new(dir.path().join("almacen-test.db"));
        let db = Database::new(config).await.unwrap();
        (dir, db)
    }

    async fn seed_client(db: &Database, tax_id: &str) -> i64 {
        sqlx::query("INSERT INTO clients (first_name, last_name, tax_id) VALUES (?1, ?2, ?3)")
            .bind("Ana")
            .bind("Suarez")
            .bind(tax_id)
            .execute(db.pool())
            .await
            .unwrap()
            .last_insert_rowid()
    }

    async fn seed_product(db: &Database, sku: &str, stock_qty: i64) -> i64 {
        sqlx::query("INSERT INTO products (sku, name, stock_qty) VALUES (?1, ?2, ?3)")
            .bind(sku)
            .bind(format!("Product {sku}"))
            .bind(stock_qty)
            .execute(db.pool())
            .await
            .unwrap()
            .last_insert_rowid()
    }

    /// Adds a price valid from an hour ago until tomorrow.
    async fn seed_price(db: &Database, product_id: i64, unit_price_cents: i64) -> i64 {
        let from = Utc::now() - Duration::hours(1);
        let to = Utc::now() + Duration::days(1);
        sqlx::query(
            "INSERT INTO price_list (product_id, unit_price_cents, valid_from, valid_to)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(product_id)
        .bind(unit_price_cents)
        .bind(from)
        .bind(to)
        .execute(db.pool())
        .await
        .unwrap()
        .last_insert_rowid()
    }

    async fn stock_of(db: &Database, product_id: i64) -> i64 {
        sqlx::query_scalar("SELECT stock_qty FROM products WHERE id = ?1")
            .bind(product_id)
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    fn request(client_id: i64, product_id: i64, quantity: i64) -> OrderRequest {
        OrderRequest {
            client_id: Some(client_id),
            product_id: Some(product_id),
            quantity: Some(quantity),
            ..Default::default()
        }
    }

    // -------------------------------------------------------------------------
    // Happy path
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_create_order_happy_path() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "20-11111111-1").await;
        let product_id = seed_product(&db, "TUERCA-10", 10).await;
        seed_price(&db, product_id, 10_000).await; // $100.00

        let details = db
            .intake()
            .create_order(&request(client_id, product_id, 2))
            .await
            .unwrap();

        assert_eq!(details.order_number, ORDER_NUMBER_FLOOR);
        assert_eq!(details.quantity, 2);
        assert_eq!(details.unit_price_cents, 10_000);
        assert_eq!(details.total_cents, 20_000);
        assert_eq!(details.client_first_name, "Ana");
        assert_eq!(details.client_tax_id, "20-11111111-1");
        assert_eq!(details.product_sku, "TUERCA-10");

        assert_eq!(stock_of(&db, product_id).await, 8);
    }

    #[tokio::test]
    async fn test_order_numbers_increase_from_floor() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "20-22222222-2").await;
        let product_id = seed_product(&db, "BULON-8", 50).await;
        seed_price(&db, product_id, 500).await;

        let first = db
            .intake()
            .create_order(&request(client_id, product_id, 1))
            .await
            .unwrap();
        let second = db
            .intake()
            .create_order(&request(client_id, product_id, 1))
            .await
            .unwrap();

        assert_eq!(first.order_number, ORDER_NUMBER_FLOOR);
        assert_eq!(second.order_number, ORDER_NUMBER_FLOOR + 1);
    }

    #[tokio::test]
    async fn test_optional_fields_are_persisted() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "20-33333333-3").await;
        let product_id = seed_product(&db, "CLAVO-5", 10).await;
        seed_price(&db, product_id, 100).await;

        let req = OrderRequest {
            delivery_class: Some("Express".to_string()),
            payment_terms: Some("Cash".to_string()),
            ..request(client_id, product_id, 1)
        };
        let details = db.intake().create_order(&req).await.unwrap();

        assert_eq!(details.delivery_class.as_deref(), Some("Express"));
        assert_eq!(details.payment_terms.as_deref(), Some("Cash"));

        // And they stay NULL when absent.
        let details = db
            .intake()
            .create_order(&request(client_id, product_id, 1))
            .await
            .unwrap();
        assert!(details.delivery_class.is_none());
        assert!(details.payment_terms.is_none());
    }

    // -------------------------------------------------------------------------
    // Validation precedes mutation
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_validation_rejects_before_any_mutation() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "20-44444444-4").await;
        let product_id = seed_product(&db, "ARANDELA", 10).await;
        seed_price(&db, product_id, 100).await;

        for bad in [
            request(client_id, product_id, 0),
            request(client_id, product_id, 1001),
            OrderRequest {
                product_id: None,
                ..request(client_id, product_id, 1)
            },
        ] {
            let err = db.intake().create_order(&bad).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }

        assert_eq!(stock_of(&db, product_id).await, 10);
        assert_eq!(db.orders().count().await.unwrap(), 0);
    }

    // -------------------------------------------------------------------------
    // Domain failures inside the transaction
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "20-55555555-5").await;

        let err = db
            .intake()
            .create_order(&request(client_id, 999, 1))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(matches!(
            err,
            IntakeError::ProductNotFound { product_id: 999 }
        ));
    }

    #[tokio::test]
    async fn test_zero_stock_is_out_of_stock() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "20-66666666-6").await;
        let product_id = seed_product(&db, "AGOTADO", 0).await;
        seed_price(&db, product_id, 100).await;

        let err = db
            .intake()
            .create_order(&request(client_id, product_id, 1))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.to_string(), "Out of stock");
    }

    #[tokio::test]
    async fn test_insufficient_stock_reports_available() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "20-77777777-7").await;
        let product_id = seed_product(&db, "ESCASO", 3).await;
        seed_price(&db, product_id, 100).await;

        let err = db
            .intake()
            .create_order(&request(client_id, product_id, 5))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.to_string(), "Insufficient stock. Available: 3");
        assert_eq!(stock_of(&db, product_id).await, 3);
    }

    #[tokio::test]
    async fn test_missing_price_rolls_back_with_stock_untouched() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "20-88888888-8").await;
        let product_id = seed_product(&db, "SIN-PRECIO", 10).await;
        // No price entry at all.

        let err = db
            .intake()
            .create_order(&request(client_id, product_id, 2))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Product has no valid price");

        // Atomicity: the stock guard ran and passed, but the failed pricing
        // step aborted the transaction before any decrement.
        assert_eq!(stock_of(&db, product_id).await, 10);
        assert_eq!(db.orders().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_expired_price_window_is_rejected() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "20-99999999-9").await;
        let product_id = seed_product(&db, "VENCIDO", 10).await;

        let from = Utc::now() - Duration::days(30);
        let to = Utc::now() - Duration::days(1);
        sqlx::query(
            "INSERT INTO price_list (product_id, unit_price_cents, valid_from, valid_to)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(product_id)
        .bind(100_i64)
        .bind(from)
        .bind(to)
        .execute(db.pool())
        .await
        .unwrap();

        let err = db
            .intake()
            .create_order(&request(client_id, product_id, 1))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_overlapping_windows_newest_start_wins() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "23-10101010-1").await;
        let product_id = seed_product(&db, "SOLAPADO", 10).await;

        // Older window, $100.00
        let from = Utc::now() - Duration::days(10);
        let to = Utc::now() + Duration::days(10);
        sqlx::query(
            "INSERT INTO price_list (product_id, unit_price_cents, valid_from, valid_to)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(product_id)
        .bind(10_000_i64)
        .bind(from)
        .bind(to)
        .execute(db.pool())
        .await
        .unwrap();

        // Newer window, $110.00
        let from = Utc::now() - Duration::hours(1);
        sqlx::query(
            "INSERT INTO price_list (product_id, unit_price_cents, valid_from, valid_to)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(product_id)
        .bind(11_000_i64)
        .bind(from)
        .bind(to)
        .execute(db.pool())
        .await
        .unwrap();

        let details = db
            .intake()
            .create_order(&request(client_id, product_id, 1))
            .await
            .unwrap();
        assert_eq!(details.unit_price_cents, 11_000);
    }

    // -------------------------------------------------------------------------
    // Price snapshot
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_stored_price_survives_price_list_changes() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "23-20202020-2").await;
        let product_id = seed_product(&db, "CONGELADO", 10).await;
        let price_id = seed_price(&db, product_id, 10_000).await;

        let details = db
            .intake()
            .create_order(&request(client_id, product_id, 2))
            .await
            .unwrap();
        assert_eq!(details.total_cents, 20_000);

        // Reprice after the fact.
        sqlx::query("UPDATE price_list SET unit_price_cents = 99999 WHERE id = ?1")
            .bind(price_id)
            .execute(db.pool())
            .await
            .unwrap();

        let stored = db.orders().get_details(details.id).await.unwrap().unwrap();
        assert_eq!(stored.unit_price_cents, 10_000);
        assert_eq!(stored.total_cents, 20_000);
    }

    // -------------------------------------------------------------------------
    // Concurrency
    // -------------------------------------------------------------------------

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_two_racers_one_wins_no_oversell() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "23-30303030-3").await;
        let product_id = seed_product(&db, "DISPUTADO", 10).await;
        seed_price(&db, product_id, 100).await;

        let a = {
            let db = db.clone();
            tokio::spawn(
                async move { db.intake().create_order(&request(client_id, product_id, 6)).await },
            )
        };
        let b = {
            let db = db.clone();
            tokio::spawn(
                async move { db.intake().create_order(&request(client_id, product_id, 6)).await },
            )
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let committed = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(committed, 1, "exactly one of the two racers must commit");

        let loser = results.iter().find(|r| r.is_err()).unwrap();
        let err = loser.as_ref().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(err.to_string().starts_with("Insufficient stock"));

        assert_eq!(stock_of(&db, product_id).await, 4);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_no_oversell_under_many_racers() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "23-40404040-4").await;
        let product_id = seed_product(&db, "POPULAR", 10).await;
        seed_price(&db, product_id, 100).await;

        let mut handles = Vec::new();
        for _ in 0..6 {
            let db = db.clone();
            handles.push(tokio::spawn(async move {
                db.intake().create_order(&request(client_id, product_id, 3)).await
            }));
        }

        let mut committed_qty = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(details) => committed_qty += details.quantity,
                Err(err) => assert_eq!(err.kind(), ErrorKind::Conflict),
            }
        }

        // 6 racers × qty 3 against stock 10: at most 3 can commit.
        assert!(committed_qty <= 10);
        assert_eq!(stock_of(&db, product_id).await, 10 - committed_qty);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_numbers_are_distinct_and_increasing() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "23-50505050-5").await;

        // Different products: no stock contention, only the sequence is shared.
        let mut handles = Vec::new();
        for i in 0..5 {
            let product_id = seed_product(&db, &format!("SEQ-{i}"), 10).await;
            seed_price(&db, product_id, 100).await;
            let db = db.clone();
            handles.push(tokio::spawn(async move {
                db.intake().create_order(&request(client_id, product_id, 1)).await
            }));
        }

        let mut numbers = Vec::new();
        for handle in handles {
            numbers.push(handle.await.unwrap().unwrap().order_number);
        }

        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), 5, "order numbers must be pairwise distinct");
        assert_eq!(numbers[0], ORDER_NUMBER_FLOOR);
        assert_eq!(numbers[4], ORDER_NUMBER_FLOOR + 4);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_abandoned_intake_rolls_back_and_releases_lock() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "23-60606060-6").await;
        let product_id = seed_product(&db, "ABANDONADO", 10).await;
        seed_price(&db, product_id, 100).await;

        // Hold the write lock with a manual transaction so the intake below
        // parks inside its stock-reservation step.
        let mut blocker = db.pool().begin().await.unwrap();
        sqlx::query("UPDATE products SET stock_qty = stock_qty WHERE id = ?1")
            .bind(product_id)
            .execute(&mut *blocker)
            .await
            .unwrap();

        let handle = {
            let db = db.clone();
            tokio::spawn(
                async move { db.intake().create_order(&request(client_id, product_id, 2)).await },
            )
        };

        // Abandon the caller while it is still waiting on the lock.
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());

        blocker.rollback().await.unwrap();

        // The abandoned intake left no order, no decrement, and no lock: a
        // fresh intake goes straight through and gets the first number.
        let details = db
            .intake()
            .create_order(&request(client_id, product_id, 2))
            .await
            .unwrap();
        assert_eq!(details.order_number, ORDER_NUMBER_FLOOR);
        assert_eq!(stock_of(&db, product_id).await, 8);
        assert_eq!(db.orders().count().await.unwrap(), 1);
    }

    // -------------------------------------------------------------------------
    // Listing (sibling read path)
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_list_orders_with_filters() {
        let (_dir, db) = test_db().await;
        let ana = seed_client(&db, "20-12345678-9").await;
        let ruben = seed_client(&db, "23-98765432-1").await;
        let product_id = seed_product(&db, "LISTADO", 100).await;
        seed_price(&db, product_id, 100).await;

        let first = db
            .intake()
            .create_order(&request(ana, product_id, 1))
            .await
            .unwrap();
        db.intake()
            .create_order(&request(ruben, product_id, 2))
            .await
            .unwrap();

        // Unfiltered: everything, newest first.
        let all = db.orders().list(&OrderFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        // By order id.
        let by_id = db
            .orders()
            .list(&OrderFilter {
                order_id: Some(first.id),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].order_number, first.order_number);

        // By client tax id.
        let by_tax = db
            .orders()
            .list(&OrderFilter {
                client_tax_id: Some("23-98765432-1".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_tax.len(), 1);
        assert_eq!(by_tax[0].quantity, 2);

        // Date range combined with tax id (AND semantics).
        let tomorrow = Utc::now() + Duration::days(1);
        let by_both = db
            .orders()
            .list(&OrderFilter {
                client_tax_id: Some("20-12345678-9".to_string()),
                created_from: Some(tomorrow),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(by_both.is_empty());
    }

    #[tokio::test]
    async fn test_get_returns_raw_order_row() {
        let (_dir, db) = test_db().await;
        let client_id = seed_client(&db, "20-70707070-7").await;
        let product_id = seed_product(&db, "CRUDO", 10).await;
        seed_price(&db, product_id, 10_000).await;

        let details = db
            .intake()
            .create_order(&request(client_id, product_id, 2))
            .await
            .unwrap();

        let row = db.orders().get(details.id).await.unwrap().unwrap();
        assert_eq!(row.order_number, details.order_number);
        assert_eq!(row.client_id, client_id);
        assert_eq!(row.product_id, product_id);
        assert_eq!(row.quantity, 2);
        assert_eq!(row.unit_price(), Money::from_cents(10_000));
        assert_eq!(row.total().cents(), 20_000);

        assert!(db.orders().get(details.id + 999).await.unwrap().is_none());
    }
}
