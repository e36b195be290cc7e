//! Startup seed data

use chrono::NaiveDate;
use sqlx::SqlitePool;

use super::repos::DbError;

/// Seed rows as `(id, name, (year, month, day))`.
pub const SEED_USERS: [(i64, &str, (i32, u32, u32)); 4] = [
    (1, "John", (1990, 1, 1)),
    (2, "Jack", (1991, 1, 1)),
    (3, "Jill", (1992, 1, 1)),
    (4, "Jane", (1993, 1, 1)),
];

/// Insert each seed user whose id is not already taken.
///
/// Safe to run on every start: existing rows (seeded or not) are never
/// touched. Returns how many rows were inserted.
pub async fn seed_users(pool: &SqlitePool) -> Result<u64, DbError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for (id, name, (year, month, day)) in SEED_USERS {
        let Some(dob) = NaiveDate::from_ymd_opt(year, month, day) else {
            tracing::warn!(id, "skipping seed user with invalid date");
            continue;
        };

        let result = sqlx::query("INSERT OR IGNORE INTO users (id, name, dob) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(dob)
            .execute(&mut *tx)
            .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    tracing::info!(inserted, "seed users applied");
    Ok(inserted)
}
