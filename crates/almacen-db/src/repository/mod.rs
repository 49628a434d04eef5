//! # Repository Module
//!
//! Database operations for the Almacén order service.
//!
//! ## Two Kinds of Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Transaction-scoped steps (take &mut SqliteConnection)                 │
//! │  ──────────────────────────────────────────────────────                │
//! │  stock::reserve          ← validate availability under the write lock  │
//! │  price::current_price    ← resolve the valid unit price                │
//! │  sequence::next_order_number ← bump the monotonic counter              │
//! │  order::insert / order::decrement_stock / order::fetch_details         │
//! │                                                                         │
//! │  These run only inside the intake transaction; the coordinator owns    │
//! │  the connection and the commit/rollback decision.                      │
//! │                                                                         │
//! │  Pool-scoped reads (hold a SqlitePool)                                 │
//! │  ──────────────────────────────────────                                │
//! │  OrderRepository::list / get_details                                   │
//! │                                                                         │
//! │  Plain filtered reads with no concurrency hazards.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod order;
pub mod price;
pub mod sequence;
pub mod stock;
