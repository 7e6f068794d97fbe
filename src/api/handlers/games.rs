use axum::{extract::State, response::Json};
use std::sync::Arc;

use super::AppState;
use crate::domain::GameCatalogEntry;

pub async fn list_games(State(state): State<Arc<AppState>>) -> Json<Vec<GameCatalogEntry>> {
    Json(state.catalog.entries().to_vec())
}
