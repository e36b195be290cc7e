//! User record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub dob: NaiveDate,
}

/// A user that has not been inserted yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub dob: NaiveDate,
}

impl NewUser {
    pub fn new(name: impl Into<String>, dob: NaiveDate) -> Self {
        Self {
            name: name.into(),
            dob,
        }
    }
}
