use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(actor_id): Path<String>,
) -> impl IntoResponse {
    match state.aggregator.compute_profile(&actor_id) {
        Ok(profile) => Json(profile).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_recommendation(
    State(state): State<Arc<AppState>>,
    Path(actor_id): Path<String>,
) -> impl IntoResponse {
    match state.aggregator.compute_recommendation(&actor_id) {
        Ok(recommendation) => Json(recommendation).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(actor_id): Path<String>,
) -> impl IntoResponse {
    match state.aggregator.compute_report(&actor_id) {
        Ok(report) => Json(report).into_response(),
        Err(e) => error_response(e),
    }
}
