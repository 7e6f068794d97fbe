use anyhow::{Context, Result};
use log::info;

use super::connection::DbConn;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Create the attempts table and its index when missing.
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    let statements = split_sql_statements(SCHEMA_SQL);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    Ok(())
}

/// Drop every recorded attempt and recreate the schema.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    execute_sql(conn, "DROP TABLE IF EXISTS attempts")?;
    ensure_schema(conn)?;

    info!("Database schema reset successfully");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sql_statements_drops_blanks() {
        let statements = split_sql_statements("CREATE TABLE a (x);\n\n;CREATE INDEX i ON a (x);  ");
        assert_eq!(statements, vec!["CREATE TABLE a (x)", "CREATE INDEX i ON a (x)"]);
    }

    #[test]
    fn test_schema_is_idempotent() {
        let pool = crate::database::create_memory_pool().unwrap();
        let mut conn = crate::database::get_connection(&pool).unwrap();

        ensure_schema(&mut conn).unwrap();
        ensure_schema(&mut conn).unwrap();
        reset_database(&mut conn).unwrap();
    }
}
