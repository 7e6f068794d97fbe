use anyhow::Result;
use log::info;

use super::AttemptStore;
use crate::database::{self, DbPool};
use crate::domain::{AttemptRecord, PendingAttempt};

pub struct SqliteAttemptStore {
    pool: DbPool,
}

impl SqliteAttemptStore {
    /// Open the database file, creating the schema when missing.
    pub fn open(database_path: &str) -> Result<Self> {
        let pool = database::create_pool(database_path)?;
        let store = Self::from_pool(pool)?;
        info!("Attempt store ready at {}", database_path);
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        Self::from_pool(database::create_memory_pool()?)
    }

    pub fn from_pool(pool: DbPool) -> Result<Self> {
        let mut conn = database::get_connection(&pool)?;
        database::setup::ensure_schema(&mut conn)?;
        drop(conn);
        Ok(Self { pool })
    }

    pub fn reset(&self) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        database::setup::reset_database(&mut conn)
    }

    pub fn count(&self) -> Result<i64> {
        let mut conn = database::get_connection(&self.pool)?;
        database::attempts::count_attempts(&mut conn)
    }
}

impl AttemptStore for SqliteAttemptStore {
    fn append(&self, attempt: PendingAttempt) -> Result<AttemptRecord> {
        let mut conn = database::get_connection(&self.pool)?;
        database::attempts::insert_attempt(&mut conn, &attempt)
    }

    fn list_by_actor(&self, actor_id: &str) -> Result<Vec<AttemptRecord>> {
        let mut conn = database::get_connection(&self.pool)?;
        database::attempts::list_by_actor(&mut conn, actor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn at(seconds: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
            + Duration::seconds(seconds)
    }

    fn pending(actor: &str, game: &str, score: u8, created_at: NaiveDateTime) -> PendingAttempt {
        PendingAttempt {
            actor_id: actor.to_string(),
            game_id: game.to_string(),
            score,
            elapsed_seconds: 45,
            created_at,
        }
    }

    #[test]
    fn test_append_assigns_ids_and_round_trips_fields() {
        let store = SqliteAttemptStore::in_memory().unwrap();

        let first = store.append(pending("ada", "color-sorter", 90, at(0))).unwrap();
        let second = store.append(pending("ada", "color-sorter", 40, at(1))).unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.score, 90);
        assert_eq!(first.elapsed_seconds, 45);
        assert_eq!(first.created_at, at(0));
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_list_by_actor_filters_and_orders() {
        let store = SqliteAttemptStore::in_memory().unwrap();

        store.append(pending("ada", "g", 10, at(30))).unwrap();
        store.append(pending("bob", "g", 20, at(10))).unwrap();
        store.append(pending("ada", "g", 30, at(5))).unwrap();

        let attempts = store.list_by_actor("ada").unwrap();
        let scores: Vec<u8> = attempts.iter().map(|a| a.score).collect();
        assert_eq!(scores, vec![30, 10]);
        assert!(attempts.iter().all(|a| a.actor_id == "ada"));

        assert!(store.list_by_actor("nobody").unwrap().is_empty());
    }

    #[test]
    fn test_sub_second_timestamps_keep_order() {
        let store = SqliteAttemptStore::in_memory().unwrap();
        let base = at(0);

        store.append(pending("ada", "g", 2, base + Duration::microseconds(2))).unwrap();
        store.append(pending("ada", "g", 1, base + Duration::microseconds(1))).unwrap();

        let scores: Vec<u8> = store
            .list_by_actor("ada")
            .unwrap()
            .iter()
            .map(|a| a.score)
            .collect();
        assert_eq!(scores, vec![1, 2]);
    }

    #[test]
    fn test_reset_clears_attempts() {
        let store = SqliteAttemptStore::in_memory().unwrap();
        store.append(pending("ada", "g", 50, at(0))).unwrap();

        store.reset().unwrap();

        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_open_file_persists_between_stores() {
        let path = std::env::temp_dir().join(format!(
            "skill_radar_store_{}.db",
            std::process::id()
        ));
        let path_str = path.to_string_lossy().to_string();
        let _ = std::fs::remove_file(&path);

        {
            let store = SqliteAttemptStore::open(&path_str).unwrap();
            store.append(pending("ada", "g", 77, at(0))).unwrap();
        }

        let reopened = SqliteAttemptStore::open(&path_str).unwrap();
        let attempts = reopened.list_by_actor("ada").unwrap();
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].score, 77);

        drop(reopened);
        std::fs::remove_file(&path).unwrap();
    }
}
