//! # almacen-db: Database Layer for the Almacén Order Service
//!
//! This crate provides database access for the order service. It uses SQLite
//! for storage with sqlx for async operations, and owns the one piece of the
//! system with real concurrency hazards: the order-intake transaction.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Almacén Data Flow                                 │
//! │                                                                         │
//! │  Service layer (create order / list orders)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    almacen-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  OrderIntake │  │   │
//! │  │   │   (pool.rs)   │    │ stock, price, │    │  (intake.rs) │  │   │
//! │  │   │               │    │ sequence,     │    │  one atomic  │  │   │
//! │  │   │ SqlitePool    │◄───│ order         │◄───│  transaction │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database (WAL mode, foreign keys on)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database and intake error types
//! - [`repository`] - Stock guard, price resolver, sequencer, order writer
//! - [`intake`] - The order-creation transaction coordinator
//!
//! ## Usage
//!
//! ```rust,ignore
//! use almacen_core::types::OrderRequest;
//! use almacen_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/almacen.db")).await?;
//!
//! let order = db
//!     .intake()
//!     .create_order(&OrderRequest {
//!         client_id: Some(1),
//!         product_id: Some(7),
//!         quantity: Some(2),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod intake;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, ErrorKind, IntakeError};
pub use intake::OrderIntake;
pub use pool::{Database, DbConfig};
pub use repository::order::OrderRepository;
