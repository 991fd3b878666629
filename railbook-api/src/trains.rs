use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use railbook_shared::Train;
use serde::Deserialize;
use tracing::debug;
use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/trains", get(list_trains))
        .route("/trains/search", get(search_trains))
}

/// GET /api/trains
async fn list_trains(State(state): State<AppState>) -> Json<Vec<Train>> {
    Json(state.catalog.trains().to_vec())
}

/// GET /api/trains/search?from=<code>&to=<code>
async fn search_trains(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Train>>, AppError> {
    let from = required(params.from, "from")?;
    let to = required(params.to, "to")?;

    let results = state.catalog.search(&from, &to);
    debug!(%from, %to, count = results.len(), "Train search");
    Ok(Json(results))
}

fn required(value: Option<String>, name: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(AppError::BadRequest(format!("Missing query parameter: {}", name))),
    }
}
