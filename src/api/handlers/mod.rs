use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use crate::api::models::ErrorResponse;
use crate::domain::GameCatalog;
use crate::errors::PipelineError;
use crate::recorder::AttemptRecorder;
use crate::skills::SkillAggregator;

pub mod attempts;
pub mod games;
pub mod skills;

pub struct AppState {
    pub catalog: Arc<GameCatalog>,
    pub recorder: Arc<AttemptRecorder>,
    pub aggregator: SkillAggregator,
}

pub(crate) fn error_response(err: PipelineError) -> Response {
    let status = match &err {
        PipelineError::InvalidScore { .. } | PipelineError::UnknownGame { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PipelineError::StoreUnavailable(_) => {
            log::error!("Request failed: {err}");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}
