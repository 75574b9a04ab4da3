//! Record operations. Each call opens one session and performs at most one mutation.

use crate::error::AppError;
use crate::model::{Record, RecordFields};
use crate::service::validation::Pagination;
use crate::store::RecordStore;

pub struct RecordService;

impl RecordService {
    /// Insert a validated record. Duplicate email surfaces as `AppError::Conflict`.
    pub async fn create(store: &RecordStore, fields: &RecordFields) -> Result<Record, AppError> {
        let mut session = store.begin().await?;
        let record = session.insert(fields).await.map_err(|e| {
            tracing::warn!(email = %fields.email, error = %e, "error creating user");
            e
        })?;
        session.commit().await?;
        tracing::info!(id = record.id, "created user: {}", record.name);
        Ok(record)
    }

    pub async fn list(store: &RecordStore, page: Pagination) -> Result<Vec<Record>, AppError> {
        let mut session = store.begin().await?;
        let rows = session.list(page.skip, page.limit).await?;
        session.commit().await?;
        Ok(rows)
    }

    pub async fn get(store: &RecordStore, id: i64) -> Result<Record, AppError> {
        let mut session = store.begin().await?;
        let record = session.fetch(id).await?.ok_or_else(AppError::user_not_found)?;
        session.commit().await?;
        Ok(record)
    }

    /// Overwrite name, email and age of an existing record. `id` and `created_at` never change.
    pub async fn update(
        store: &RecordStore,
        id: i64,
        fields: RecordFields,
    ) -> Result<Record, AppError> {
        let mut session = store.begin().await?;
        let updated = session
            .update(id, &fields)
            .await?
            .ok_or_else(AppError::user_not_found)?;
        session.commit().await?;
        tracing::info!(id = updated.id, "updated user: {}", updated.name);
        Ok(updated)
    }

    /// Remove a record. Returns the row as it was before deletion.
    pub async fn delete(store: &RecordStore, id: i64) -> Result<Record, AppError> {
        let mut session = store.begin().await?;
        let deleted = session
            .delete(id)
            .await?
            .ok_or_else(AppError::user_not_found)?;
        session.commit().await?;
        tracing::info!(id = deleted.id, "deleted user: {}", deleted.name);
        Ok(deleted)
    }
}
