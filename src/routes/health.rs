use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Returns 200 OK once the catalog seed is in place
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    if state.store.list_recipes().is_empty() {
        tracing::error!("Readiness check failed: catalog not seeded");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "reason": "catalog_empty"
            })),
        );
    }
    (StatusCode::OK, Json(json!({"status": "ready"})))
}
