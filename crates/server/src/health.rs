use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

use crate::backend::BackendClient;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// `reachable` when the RideShare API answered, `unreachable` otherwise.
    pub backend: String,
    pub uptime_seconds: u64,
    pub version: String,
}

pub async fn health_check(State(backend): State<BackendClient>) -> Json<HealthResponse> {
    let backend_status = if backend.ping().await {
        "reachable"
    } else {
        tracing::warn!(url = %backend.base_url(), "health check: backend unreachable");
        "unreachable"
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        backend: backend_status.to_string(),
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /health`, ready to merge into the app router.
pub fn health_router(backend: BackendClient) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(backend)
}
