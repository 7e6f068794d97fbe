use serde::{Deserialize, Serialize};

use crate::domain::AttemptRecord;

/// Body sent by a mini-game when a session ends.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttemptRequest {
    pub actor_id: String,
    pub game_id: String,
    pub score: i64,
    pub elapsed_seconds: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptHistoryResponse {
    pub actor_id: String,
    pub total: usize,
    pub attempts: Vec<AttemptRecord>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
