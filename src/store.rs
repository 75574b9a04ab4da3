//! `users` table DDL and record persistence over SQLite.
//!
//! [`RecordStore`] owns the connection pool. Every request works through a
//! [`Session`], a transaction that is rolled back unless [`Session::commit`] is called.

use crate::error::AppError;
use crate::model::{Record, RecordFields};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use std::str::FromStr;
use std::time::Duration;

/// How long a writer waits for another connection's write lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const USERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        age INTEGER NOT NULL,
        created_at TEXT NOT NULL
    )
"#;

const USERS_NAME_INDEX: &str = "CREATE INDEX IF NOT EXISTS ix_users_name ON users (name)";

const RECORD_COLUMNS: &str = "id, name, email, age, created_at";

#[derive(Clone, Debug)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    /// Open a pool against `database_url`, creating the database file if it does not exist.
    /// Connections run in WAL mode and wait up to five seconds for the write lock.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(opts)
            .await?;
        Ok(Self { pool })
    }

    /// Private in-memory database with the schema already applied.
    ///
    /// A single connection that is never recycled, since the data lives only as long as it does.
    pub async fn in_memory() -> Result<Self, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let store = Self { pool };
        store.ensure_tables().await?;
        Ok(store)
    }

    /// Create the `users` table and its indexes if missing. Idempotent.
    pub async fn ensure_tables(&self) -> Result<(), AppError> {
        sqlx::query(USERS_DDL).execute(&self.pool).await?;
        sqlx::query(USERS_NAME_INDEX).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    /// Open a session. Dropping it without `commit` rolls back everything it did.
    ///
    /// Writes are single statements, so a session never upgrades a read snapshot to a write
    /// lock; concurrent writers queue on the busy timeout instead of failing.
    pub async fn begin(&self) -> Result<Session, AppError> {
        let tx = self.pool.begin().await?;
        Ok(Session { tx })
    }
}

pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    /// Insert a new record; the store assigns `id` and `created_at`.
    pub async fn insert(&mut self, fields: &RecordFields) -> Result<Record, AppError> {
        let sql = format!(
            "INSERT INTO users (name, email, age, created_at) VALUES (?, ?, ?, ?) RETURNING {}",
            RECORD_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Record>(&sql)
            .bind(&fields.name)
            .bind(&fields.email)
            .bind(fields.age)
            .bind(Utc::now())
            .fetch_one(&mut *self.tx)
            .await
            .map_err(|e| conflict_or_db(e, &fields.email))
    }

    pub async fn fetch(&mut self, id: i64) -> Result<Option<Record>, AppError> {
        let sql = format!("SELECT {} FROM users WHERE id = ?", RECORD_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Record>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(row)
    }

    /// Records in creation order, skipping `offset` and returning at most `limit`.
    pub async fn list(&mut self, offset: u32, limit: u32) -> Result<Vec<Record>, AppError> {
        let sql = format!(
            "SELECT {} FROM users ORDER BY id ASC LIMIT ? OFFSET ?",
            RECORD_COLUMNS
        );
        tracing::debug!(sql = %sql, offset, limit, "query");
        let rows = sqlx::query_as::<_, Record>(&sql)
            .bind(i64::from(limit))
            .bind(i64::from(offset))
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(rows)
    }

    /// Overwrite name, email and age of record `id`. Returns None if no such row exists.
    pub async fn update(
        &mut self,
        id: i64,
        fields: &RecordFields,
    ) -> Result<Option<Record>, AppError> {
        let sql = format!(
            "UPDATE users SET name = ?, email = ?, age = ? WHERE id = ? RETURNING {}",
            RECORD_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Record>(&sql)
            .bind(&fields.name)
            .bind(&fields.email)
            .bind(fields.age)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(|e| conflict_or_db(e, &fields.email))
    }

    /// Delete one record by id. Returns the deleted row or None.
    pub async fn delete(&mut self, id: i64) -> Result<Option<Record>, AppError> {
        let sql = format!("DELETE FROM users WHERE id = ? RETURNING {}", RECORD_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Record>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(row)
    }

    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }
}

fn conflict_or_db(err: sqlx::Error, email: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict(format!("email '{}' is already registered", email))
        }
        _ => AppError::Db(err),
    }
}
