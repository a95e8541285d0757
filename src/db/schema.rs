use rusqlite::Connection;

use crate::error::Result;

const CREATE_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT 0
)";

/// Ensures the tasks table exists. Safe to call on every open.
pub fn bootstrap(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_TASKS)?;
    Ok(())
}
