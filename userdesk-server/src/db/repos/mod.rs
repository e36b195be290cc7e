//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool; every method is one statement on one pooled connection
//! - Missing rows on lookup surface as `DbError::NotFound`
//! - Lists have an explicit ORDER BY

pub mod users;

pub use users::{DbError, UserRepo};
