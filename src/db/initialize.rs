use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `shift` and `task` tables if they are missing.
/// Additive only: existing tables and rows are never altered or dropped.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS shift (
            id     INTEGER PRIMARY KEY,
            start  TEXT,
            end    TEXT
        );

        CREATE TABLE IF NOT EXISTS task (
            id              INTEGER PRIMARY KEY,
            description     TEXT,
            classification  INTEGER,
            start           TEXT,
            end             TEXT
        );
        "#,
    )?;
    Ok(())
}
