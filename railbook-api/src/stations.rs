use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use railbook_shared::Station;
use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stations", get(list_stations))
        .route("/stations/{code}", get(get_station))
}

/// GET /api/stations
async fn list_stations(State(state): State<AppState>) -> Json<Vec<Station>> {
    Json(state.catalog.stations().to_vec())
}

/// GET /api/stations/{code}
async fn get_station(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Station>, AppError> {
    state
        .catalog
        .station(&code)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Station not found: {}", code)))
}
