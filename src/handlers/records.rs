//! Record CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::{RecordId, RecordPayload};
use crate::model::Record;
use crate::response::{message, MessageBody};
use crate::service::{Pagination, RecordService};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;

pub async fn create(
    State(state): State<AppState>,
    RecordPayload(fields): RecordPayload,
) -> Result<Json<Record>, AppError> {
    let record = RecordService::create(&state.store, &fields).await?;
    Ok(Json(record))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Record>>, AppError> {
    let page = Pagination::from_query(&params)?;
    let rows = RecordService::list(&state.store, page).await?;
    Ok(Json(rows))
}

pub async fn read(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Record>, AppError> {
    let record = RecordService::get(&state.store, id).await?;
    Ok(Json(record))
}

pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    RecordPayload(fields): RecordPayload,
) -> Result<Json<Record>, AppError> {
    let record = RecordService::update(&state.store, id, fields).await?;
    Ok(Json(record))
}

pub async fn delete(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<(StatusCode, Json<MessageBody>), AppError> {
    RecordService::delete(&state.store, id).await?;
    Ok(message("User deleted successfully"))
}
