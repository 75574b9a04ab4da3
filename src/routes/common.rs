//! Common routes: welcome, health, readiness, version.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: String,
    timestamp: f64,
    version: String,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

#[derive(Serialize)]
struct WelcomeBody {
    message: &'static str,
    docs: &'static str,
    health: &'static str,
}

async fn root() -> Json<WelcomeBody> {
    Json(WelcomeBody {
        message: "Welcome to Student Management API",
        docs: "/docs",
        health: "/health",
    })
}

async fn health() -> Json<HealthBody> {
    let now = Utc::now();
    Json(HealthBody {
        status: "healthy".into(),
        timestamp: now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1e6,
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /, /health, /ready and /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_crate_version() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert!(body.timestamp > 0.0);
    }
}
