use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use crate::domain::{AttemptRecord, PendingAttempt};

const ATTEMPT_COLUMNS: &str = "id, actor_id, game_id, score, elapsed_seconds, created_at";

pub fn insert_attempt(conn: &mut DbConn, attempt: &PendingAttempt) -> Result<AttemptRecord> {
    let sql = format!(
        "INSERT INTO attempts (actor_id, game_id, score, elapsed_seconds, created_at) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {ATTEMPT_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            attempt.actor_id,
            attempt.game_id,
            attempt.score,
            attempt.elapsed_seconds,
            attempt.created_at
        ],
        parse_attempt_row,
    )
    .context("Failed to insert attempt")
}

fn parse_attempt_row(row: &rusqlite::Row) -> rusqlite::Result<AttemptRecord> {
    Ok(AttemptRecord {
        id: row.get(0)?,
        actor_id: row.get(1)?,
        game_id: row.get(2)?,
        score: row.get(3)?,
        elapsed_seconds: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn list_by_actor(conn: &mut DbConn, actor_id: &str) -> Result<Vec<AttemptRecord>> {
    let sql = format!(
        "SELECT {ATTEMPT_COLUMNS} FROM attempts WHERE actor_id = ?1 ORDER BY created_at ASC, id ASC"
    );

    let mut stmt = conn
        .prepare(&sql)
        .context("Failed to prepare attempt query")?;
    let rows = stmt
        .query_map(params![actor_id], parse_attempt_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("Failed to list attempts for actor {actor_id}"))?;

    Ok(rows)
}

pub fn count_attempts(conn: &mut DbConn) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM attempts", [], |row| row.get(0))
        .context("Failed to count attempts")
}
