//! # Order Repository
//!
//! Persistence for order rows: the write steps used inside the intake
//! transaction, and the pool-scoped read paths (listing, lookup).
//!
//! ## Snapshot Pattern
//! The resolved unit price and the computed total are copied into the order
//! row. This preserves order history even if the price list changes later.

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult, IntakeResult};
use almacen_core::{Money, Order, OrderDetails, OrderFilter, ValidOrderRequest};

/// Shared SELECT for the joined order payload (client and product display
/// fields included).
const DETAILS_SELECT: &str = r#"
SELECT
    o.id,
    o.order_number,
    o.quantity,
    o.unit_price_cents,
    o.total_cents,
    o.delivery_class,
    o.payment_terms,
    o.created_at,
    c.first_name AS client_first_name,
    c.last_name AS client_last_name,
    c.tax_id AS client_tax_id,
    p.sku AS product_sku,
    p.name AS product_name
FROM orders o
INNER JOIN clients c ON o.client_id = c.id
INNER JOIN products p ON o.product_id = p.id
"#;

// =============================================================================
// Transaction-scoped writes (order intake steps)
// =============================================================================

/// Inserts the order row. Returns the store-assigned order id.
///
/// `delivery_class` and `payment_terms` are stored as NULL when absent.
pub async fn insert(
    conn: &mut SqliteConnection,
    request: &ValidOrderRequest,
    order_number: i64,
    unit_price: Money,
    total: Money,
    created_at: DateTime<Utc>,
) -> IntakeResult<i64> {
    debug!(order_number, total = %total, "Inserting order");

    let result = sqlx::query(
        r#"
        INSERT INTO orders (
            order_number, client_id, product_id, quantity,
            unit_price_cents, total_cents,
            delivery_class, payment_terms, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
    )
    .bind(order_number)
    .bind(request.client_id)
    .bind(request.product_id)
    .bind(request.quantity)
    .bind(unit_price.cents())
    .bind(total.cents())
    .bind(request.delivery_class.as_deref())
    .bind(request.payment_terms.as_deref())
    .bind(created_at)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Decrements the product's stock by the ordered quantity.
///
/// Unconditional arithmetic decrement: the stock guard already verified
/// sufficiency under the same lock, so this can never go below zero.
pub async fn decrement_stock(
    conn: &mut SqliteConnection,
    product_id: i64,
    quantity: i64,
) -> IntakeResult<()> {
    debug!(product_id, quantity, "Decrementing stock");

    let result = sqlx::query(
        r#"
        UPDATE products
        SET stock_qty = stock_qty - ?1
        WHERE id = ?2
        "#,
    )
    .bind(quantity)
    .bind(product_id)
    .execute(conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::not_found("Product", product_id).into());
    }

    Ok(())
}

/// Re-reads the freshly inserted order joined with client and product
/// display fields. This is the success payload of order creation.
pub async fn fetch_details(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> IntakeResult<OrderDetails> {
    let sql = format!("{DETAILS_SELECT} WHERE o.id = ?1");

    let details: Option<OrderDetails> = sqlx::query_as(&sql)
        .bind(order_id)
        .fetch_optional(conn)
        .await?;

    details.ok_or_else(|| DbError::not_found("Order", order_id).into())
}

// =============================================================================
// Pool-scoped reads
// =============================================================================

/// Repository for order read paths.
///
/// These are plain filtered reads with no concurrency concerns; they run on
/// any pooled connection outside the intake transaction.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Lists orders matching the filter, newest first.
    ///
    /// ## Filter Composition
    /// Each supplied predicate contributes one typed bound parameter and the
    /// predicates are combined with AND. User input never reaches the SQL
    /// text itself.
    pub async fn list(&self, filter: &OrderFilter) -> DbResult<Vec<OrderDetails>> {
        let mut query: QueryBuilder<'_, Sqlite> = QueryBuilder::new(DETAILS_SELECT);

        if !filter.is_empty() {
            query.push(" WHERE 1 = 1");

            if let Some(order_id) = filter.order_id {
                query.push(" AND o.id = ").push_bind(order_id);
            }

            if let Some(ref tax_id) = filter.client_tax_id {
                query.push(" AND c.tax_id = ").push_bind(tax_id);
            }

            if let Some(created_from) = filter.created_from {
                query.push(" AND o.created_at >= ").push_bind(created_from);
            }

            if let Some(created_to) = filter.created_to {
                query.push(" AND o.created_at <= ").push_bind(created_to);
            }
        }

        query.push(" ORDER BY o.created_at DESC");

        let orders = query
            .build_query_as::<OrderDetails>()
            .fetch_all(&self.pool)
            .await?;

        debug!(count = orders.len(), "Order listing returned rows");
        Ok(orders)
    }

    /// Gets one order row as persisted, without the joined display fields.
    ///
    /// Cheaper than [`Self::get_details`] when only the snapshot columns are
    /// needed (e.g. reconciliation against the price list).
    pub async fn get(&self, order_id: i64) -> DbResult<Option<Order>> {
        let order = sqlx::query_as(
            r#"
            SELECT id, order_number, client_id, product_id, quantity,
                   unit_price_cents, total_cents, delivery_class, payment_terms,
                   created_at
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Gets one order with its display fields.
    ///
    /// ## Returns
    /// * `Ok(Some(OrderDetails))` - Order found
    /// * `Ok(None)` - Order not found
    pub async fn get_details(&self, order_id: i64) -> DbResult<Option<OrderDetails>> {
        let sql = format!("{DETAILS_SELECT} WHERE o.id = ?1");

        let details = sqlx::query_as(&sql)
            .bind(order_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(details)
    }

    /// Counts all orders (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
