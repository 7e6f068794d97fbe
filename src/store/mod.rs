//! Persistence seam for the append-only attempt log.

mod memory;
mod sqlite;

pub use memory::InMemoryAttemptStore;
pub use sqlite::SqliteAttemptStore;

use anyhow::Result;

use crate::domain::{AttemptRecord, PendingAttempt};

/// Append-only storage for attempt records.
///
/// Implementations never update or delete a stored record.
pub trait AttemptStore: Send + Sync {
    /// Persist one attempt and return it with its store-assigned id.
    fn append(&self, attempt: PendingAttempt) -> Result<AttemptRecord>;

    /// All attempts of one actor, ordered by `created_at` then id.
    fn list_by_actor(&self, actor_id: &str) -> Result<Vec<AttemptRecord>>;
}
