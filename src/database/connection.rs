use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

const BUSY_TIMEOUT_MS: u32 = 5_000;

pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = build_manager(database_path);
    build_pool(manager)
}

/// Single-connection pool over a private in-memory database. The connection
/// is never recycled, since closing it discards the data.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = SqliteConnectionManager::memory().with_init(configure_connection);
    r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .context("Failed to create in-memory connection pool")
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    SqliteConnectionManager::file(path).with_init(configure_connection)
}

fn configure_connection(conn: &mut rusqlite::Connection) -> rusqlite::Result<()> {
    conn.execute_batch(&format!(
        "PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}; PRAGMA foreign_keys = ON;"
    ))
}

fn build_pool(manager: SqliteConnectionManager) -> Result<DbPool> {
    r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
