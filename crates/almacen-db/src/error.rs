//! # Database and Intake Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  IntakeError (this module) ← The coordinator's failure map:            │
//! │       │                       validation / not-found / conflict /      │
//! │       │                       store, each with a stable ErrorKind      │
//! │       ▼                                                                 │
//! │  Service layer maps kinds to transport codes                           │
//! │  (Validation→400, NotFound→404, Conflict→409, Store→500)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use almacen_core::ValidationError;

// =============================================================================
// Database Error
// =============================================================================

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context
/// for debugging and user feedback.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Duplicate SKU or client tax id
    /// - Duplicate order number (would indicate a sequencer bug)
    #[error("Duplicate {field}: already exists")]
    UniqueViolation { field: String },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - Order references a client or product id that does not exist
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                // "UNIQUE constraint failed: <table>.<column>"
                // "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation { field }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Error Kind
// =============================================================================

/// Machine-checkable classification of an intake failure.
///
/// The core is transport-agnostic; a surrounding service layer maps kinds to
/// its status codes (Validation→400, NotFound→404, Conflict→409, Store→500).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or out-of-range input; no store mutation occurred.
    Validation,
    /// The referenced product does not exist.
    NotFound,
    /// Stock is insufficient or zero.
    Conflict,
    /// Underlying transaction/connection failure.
    Store,
}

// =============================================================================
// Intake Error
// =============================================================================

/// Order intake errors.
///
/// Every failure inside the intake transaction propagates unchanged through
/// this enum; the coordinator performs no retries and swallows nothing.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Request failed validation (before the transaction) or the product has
    /// no currently valid price (inside the transaction).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced product does not exist.
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: i64 },

    /// Quantity on hand is zero.
    #[error("Out of stock")]
    OutOfStock { product_id: i64 },

    /// Quantity on hand is below the requested quantity.
    #[error("Insufficient stock. Available: {available}")]
    InsufficientStock {
        product_id: i64,
        available: i64,
        requested: i64,
    },

    /// Underlying store failure, not classified further by the core.
    #[error(transparent)]
    Store(#[from] DbError),
}

impl IntakeError {
    /// Returns the machine-checkable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IntakeError::Validation(_) => ErrorKind::Validation,
            IntakeError::ProductNotFound { .. } => ErrorKind::NotFound,
            IntakeError::OutOfStock { .. } | IntakeError::InsufficientStock { .. } => {
                ErrorKind::Conflict
            }
            IntakeError::Store(_) => ErrorKind::Store,
        }
    }
}

impl From<sqlx::Error> for IntakeError {
    fn from(err: sqlx::Error) -> Self {
        IntakeError::Store(DbError::from(err))
    }
}

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

// =============================================================================
// Unit Tests
// =============================================================================
