//! Common routes: liveness, readiness, version.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

async fn health() -> Json<StatusBody> {
    Json(StatusBody {
        status: "ok",
        store: None,
        timestamp: Some(chrono::Utc::now().to_rfc3339()),
    })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<StatusBody>) {
    match state.content.store().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusBody { status: "ok", store: Some("ok"), timestamp: None }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusBody { status: "degraded", store: Some("unavailable"), timestamp: None }),
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

/// GET /health, GET /ready (store round-trip), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
