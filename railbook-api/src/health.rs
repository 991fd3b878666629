use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use crate::state::AppState;

/// Keep-alive and liveness endpoints, outside the `/api` prefix.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Railbook reference data API",
        "status": "running",
    }))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "UP",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime": format!("{}s", state.started_at.elapsed().as_secs()),
    }))
}
