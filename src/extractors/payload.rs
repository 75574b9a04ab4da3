//! Extract and validate a record JSON body.

use crate::error::AppError;
use crate::model::RecordFields;
use crate::service::RecordValidator;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// Validated `{name, email, age}` body. Any rejection other than an oversized body,
/// including malformed JSON, is a validation error.
#[derive(Clone, Debug)]
pub struct RecordPayload(pub RecordFields);

#[async_trait]
impl<S> FromRequest<S> for RecordPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        RecordValidator::validate(&body).map(RecordPayload)
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::Validation(rejection.body_text())
    }
}
