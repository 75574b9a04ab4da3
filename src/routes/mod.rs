//! Router assembly.

mod common;
mod records;

pub use common::common_routes;
pub use records::record_routes;

use crate::middleware::process_time;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

/// Full application: common and record routes, a request body limit, and per-request timing.
/// `body_limit_bytes` also replaces the `Json` extractor's built-in limit.
pub fn build_app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(record_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(process_time))
                .layer(RequestBodyLimitLayer::new(body_limit_bytes))
                .layer(DefaultBodyLimit::max(body_limit_bytes)),
        )
}
