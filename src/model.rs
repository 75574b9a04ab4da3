//! Student record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub created_at: DateTime<Utc>,
}

/// The mutable part of a record, as submitted by clients on create and update.
/// Applied to an existing row by `Session::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub name: String,
    pub email: String,
    pub age: i64,
}
