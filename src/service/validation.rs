//! Request validation for record payloads, path ids and pagination.

use crate::error::AppError;
use crate::model::RecordFields;
use serde_json::{Map, Value};
use std::collections::HashMap;

const DEFAULT_LIMIT: u32 = 100;
const MAX_LIMIT: u32 = 1000;

pub struct RecordValidator;

impl RecordValidator {
    /// Validate body against `{name: string, email: string, age: integer}`. All fields are required;
    /// unknown fields are ignored. `email` is any string; uniqueness is the store's job.
    pub fn validate(body: &Value) -> Result<RecordFields, AppError> {
        let obj = body
            .as_object()
            .ok_or_else(|| AppError::Validation("body must be a JSON object".into()))?;

        let name = required_str(obj, "name")?;
        if name.trim().is_empty() {
            return Err(AppError::Validation("name must not be empty".into()));
        }
        let email = required_str(obj, "email")?;
        let age = required(obj, "age")?
            .as_i64()
            .ok_or_else(|| AppError::Validation("age must be an integer".into()))?;

        Ok(RecordFields {
            name: name.to_string(),
            email: email.to_string(),
            age,
        })
    }
}

fn required<'a>(obj: &'a Map<String, Value>, col: &str) -> Result<&'a Value, AppError> {
    match obj.get(col) {
        None | Some(Value::Null) => Err(AppError::Validation(format!("{} is required", col))),
        Some(v) => Ok(v),
    }
}

fn required_str<'a>(obj: &'a Map<String, Value>, col: &str) -> Result<&'a str, AppError> {
    required(obj, col)?
        .as_str()
        .ok_or_else(|| AppError::Validation(format!("{} must be a string", col)))
}

/// Parse a record id path segment.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("invalid id '{}'", raw)))
}

/// `skip`/`limit` query parameters for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Read `skip` (default 0) and `limit` (default 100, at most 1000). Other keys are ignored.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let mut page = Pagination::default();
        for (k, v) in params {
            match k.as_str() {
                "skip" => page.skip = parse_count(k, v)?,
                "limit" => page.limit = parse_count(k, v)?.min(MAX_LIMIT),
                _ => {}
            }
        }
        Ok(page)
    }
}

fn parse_count(key: &str, value: &str) -> Result<u32, AppError> {
    value.trim().parse().map_err(|_| {
        AppError::Validation(format!("{} must be a non-negative integer", key))
    })
}
