use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::{AttemptHistoryResponse, RecordAttemptRequest};

pub async fn record_attempt(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecordAttemptRequest>,
) -> impl IntoResponse {
    match state.recorder.record(
        &request.actor_id,
        &request.game_id,
        request.score,
        request.elapsed_seconds,
    ) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_attempts(
    State(state): State<Arc<AppState>>,
    Path(actor_id): Path<String>,
) -> impl IntoResponse {
    match state.recorder.query_by_actor(&actor_id) {
        Ok(attempts) => Json(AttemptHistoryResponse {
            total: attempts.len(),
            actor_id,
            attempts,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}
