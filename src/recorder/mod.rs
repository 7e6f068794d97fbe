//! Attempt recording: validates finished game sessions and appends them to
//! the attempt log.

use chrono::{Duration, NaiveDateTime, Utc};
use log::debug;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{AttemptRecord, GameCatalog, PendingAttempt};
use crate::errors::PipelineError;
use crate::store::AttemptStore;

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

pub struct AttemptRecorder {
    store: Arc<dyn AttemptStore>,
    catalog: Arc<GameCatalog>,
    last_stamp: Mutex<Option<NaiveDateTime>>,
}

impl AttemptRecorder {
    pub fn new(store: Arc<dyn AttemptStore>, catalog: Arc<GameCatalog>) -> Self {
        Self {
            store,
            catalog,
            last_stamp: Mutex::new(None),
        }
    }

    /// Validate and append one finished game session.
    ///
    /// Nothing is written when validation or the store write fails.
    pub fn record(
        &self,
        actor_id: &str,
        game_id: &str,
        score: i64,
        elapsed_seconds: u32,
    ) -> Result<AttemptRecord, PipelineError> {
        let score = validate_score(score)?;
        if !self.catalog.contains(game_id) {
            return Err(PipelineError::UnknownGame {
                game_id: game_id.to_string(),
            });
        }

        let pending = PendingAttempt {
            actor_id: actor_id.to_string(),
            game_id: game_id.to_string(),
            score,
            elapsed_seconds,
            created_at: self.next_stamp(),
        };

        let record = self.store.append(pending).map_err(PipelineError::store)?;
        debug!(
            "Recorded attempt {} for actor {} on {} (score {}, {}s)",
            record.id, record.actor_id, record.game_id, record.score, record.elapsed_seconds
        );
        Ok(record)
    }

    /// Every attempt of `actor_id`, oldest first.
    pub fn query_by_actor(&self, actor_id: &str) -> Result<Vec<AttemptRecord>, PipelineError> {
        self.store
            .list_by_actor(actor_id)
            .map_err(PipelineError::store)
    }

    /// Current UTC time, bumped past the previously issued stamp so stamps
    /// strictly increase within this process.
    fn next_stamp(&self) -> NaiveDateTime {
        let mut last = self
            .last_stamp
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let now = Utc::now().naive_utc();
        let stamp = match *last {
            Some(previous) if now <= previous => previous + Duration::microseconds(1),
            _ => now,
        };
        *last = Some(stamp);
        stamp
    }
}

fn validate_score(score: i64) -> Result<u8, PipelineError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(PipelineError::InvalidScore { score });
    }
    Ok(score as u8)
}
