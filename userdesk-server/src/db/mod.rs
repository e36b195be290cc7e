//! Database layer - connection pool, schema, seed data and repositories
//!
//! # Design Principles
//!
//! - One pool handle, built at startup and passed down through `AppState`
//! - Each repository call borrows one pooled connection for one statement
//! - Rely on DB constraints, handle conflicts - no check-then-insert

pub mod pool;
pub mod repos;
pub mod seed;

use std::path::Path;

use sqlx::SqlitePool;

pub use pool::{create_memory_pool, create_pool, ensure_schema};
pub use repos::*;
pub use seed::{seed_users, SEED_USERS};

/// Open the database file (creating it and its parent directory if needed)
/// and make sure the schema exists.
pub async fn open(path: &Path) -> Result<SqlitePool, DbError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let pool = create_pool(path).await?;
    ensure_schema(&pool).await?;
    tracing::debug!(path = %path.display(), "database ready");
    Ok(pool)
}
