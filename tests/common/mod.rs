//! Common test utilities.

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use student_records::{build_app, AppState, RecordStore};

pub const TEST_BODY_LIMIT: usize = 64 * 1024;

/// Create a test app backed by a fresh in-memory store.
pub async fn test_app() -> Router {
    test_app_with_limit(TEST_BODY_LIMIT).await
}

/// Like `test_app`, with a custom request body limit.
pub async fn test_app_with_limit(body_limit_bytes: usize) -> Router {
    let store = RecordStore::in_memory().await.unwrap();
    build_app(AppState::new(store), body_limit_bytes)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

/// Send one request through a clone of `app`. Empty bodies decode as `Value::Null`,
/// non-JSON bodies as a `Value::String` of the raw text.
pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    TestResponse {
        status,
        headers,
        json,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> TestResponse {
    send(app, json_request("POST", uri, body.to_string())).await
}

pub async fn put_json(app: &Router, uri: &str, body: &Value) -> TestResponse {
    send(app, json_request("PUT", uri, body.to_string())).await
}

pub fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap()
}
