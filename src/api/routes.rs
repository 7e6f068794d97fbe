use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    attempts::{get_attempts, record_attempt},
    games::list_games,
    skills::{get_profile, get_recommendation, get_report},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/games", get(list_games))
        .route("/api/attempts", post(record_attempt))
        .route("/api/actors/:actor_id/attempts", get(get_attempts))
        .route("/api/actors/:actor_id/profile", get(get_profile))
        .route("/api/actors/:actor_id/recommendation", get(get_recommendation))
        .route("/api/actors/:actor_id/report", get(get_report))
        .with_state(state)
}
