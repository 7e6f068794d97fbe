use anyhow::{anyhow, Result};
use std::sync::RwLock;

use super::AttemptStore;
use crate::domain::{AttemptRecord, PendingAttempt};

/// Process-local attempt log. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryAttemptStore {
    records: RwLock<Vec<AttemptRecord>>,
}

impl InMemoryAttemptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttemptStore for InMemoryAttemptStore {
    fn append(&self, attempt: PendingAttempt) -> Result<AttemptRecord> {
        let mut records = self
            .records
            .write()
            .map_err(|_| anyhow!("Attempt log lock poisoned"))?;

        let record = attempt.into_record(records.len() as i64 + 1);
        records.push(record.clone());
        Ok(record)
    }

    fn list_by_actor(&self, actor_id: &str) -> Result<Vec<AttemptRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| anyhow!("Attempt log lock poisoned"))?;

        let mut attempts: Vec<AttemptRecord> = records
            .iter()
            .filter(|record| record.actor_id == actor_id)
            .cloned()
            .collect();
        attempts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(attempts)
    }
}
