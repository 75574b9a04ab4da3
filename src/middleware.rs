//! Per-request timing: tags every request with an id and reports elapsed time.

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Elapsed handler time in seconds.
pub const PROCESS_TIME_HEADER: &str = "x-process-time";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn process_time(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let span = tracing::info_span!("request", %request_id, %method, %path);

    let mut response = next.run(req).instrument(span.clone()).await;

    let elapsed = start.elapsed().as_secs_f64();
    let headers = response.headers_mut();
    if let Ok(v) = HeaderValue::from_str(&format!("{:.6}", elapsed)) {
        headers.insert(PROCESS_TIME_HEADER, v);
    }
    if let Ok(v) = HeaderValue::from_str(&request_id.to_string()) {
        headers.insert(REQUEST_ID_HEADER, v);
    }
    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            "request to {} took {:.4} seconds",
            path,
            elapsed
        );
    });
    response
}
