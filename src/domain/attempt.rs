use chrono::NaiveDateTime;
use serde::Serialize;

/// One completed play-through of a mini-game. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub id: i64,
    pub actor_id: String,
    pub game_id: String,
    pub score: u8,
    pub elapsed_seconds: u32,
    pub created_at: NaiveDateTime,
}

/// A validated, timestamped attempt that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAttempt {
    pub actor_id: String,
    pub game_id: String,
    pub score: u8,
    pub elapsed_seconds: u32,
    pub created_at: NaiveDateTime,
}

impl PendingAttempt {
    pub fn into_record(self, id: i64) -> AttemptRecord {
        AttemptRecord {
            id,
            actor_id: self.actor_id,
            game_id: self.game_id,
            score: self.score,
            elapsed_seconds: self.elapsed_seconds,
            created_at: self.created_at,
        }
    }
}
