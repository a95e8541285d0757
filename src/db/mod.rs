mod schema;

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::models::Task;

/// Capability contract over the task table.
///
/// The reconciler and the presentation layer depend on this trait rather
/// than a concrete storage engine, so either can be exercised against an
/// in-memory store in tests.
///
/// Every operation is an independent single-statement transaction; no
/// multi-row atomicity is guaranteed. Operations that target a row by id
/// are no-ops (not errors) when the id is absent and report that through
/// their `bool` return — callers that care should check [`exists`] first.
///
/// [`exists`]: TaskStore::exists
pub trait TaskStore {
    /// Ensures the schema exists. Idempotent.
    fn init(&self) -> Result<()>;

    /// Inserts a task with `completed = false` and returns the assigned id.
    ///
    /// Fails with [`Error::Validation`] when `name` is empty after trimming.
    fn create(&self, name: &str, category: &str) -> Result<i64>;

    /// Sets `completed = true`. Returns false when the id does not exist.
    fn mark_completed(&self, id: i64) -> Result<bool>;

    /// All rows in insertion order.
    fn list_all(&self) -> Result<Vec<Task>>;

    /// Rows whose category matches exactly.
    fn list_by_category(&self, category: &str) -> Result<Vec<Task>>;

    /// Whether a row with this id is present.
    fn exists(&self, id: i64) -> Result<bool>;

    /// Replaces all mutable fields of the row. Returns false when absent.
    fn update(&self, id: i64, name: &str, category: &str, completed: bool) -> Result<bool>;

    /// Removes the row. Returns false when absent.
    fn delete(&self, id: i64) -> Result<bool>;
}

/// SQLite-backed [`TaskStore`].
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) the database at an explicit path.
    pub fn open(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(&path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Opens the database in the platform data directory.
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "taskdeck").ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine data directory",
            ))
        })?;
        let db_path = dirs.data_dir().join("tasks.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

impl TaskStore for SqliteStore {
    fn init(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::bootstrap(&conn)
    }

    fn create(&self, name: &str, category: &str) -> Result<i64> {
        if name.trim().is_empty() {
            return Err(Error::Validation("task name must not be empty".into()));
        }

        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute(
            "INSERT INTO tasks (name, category, completed) VALUES (?, ?, 0)",
            (name, category),
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn mark_completed(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute("UPDATE tasks SET completed = 1 WHERE id = ?", [id])?;
        Ok(rows > 0)
    }

    fn list_all(&self) -> Result<Vec<Task>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt =
            conn.prepare("SELECT id, name, category, completed FROM tasks ORDER BY id")?;

        let tasks = stmt
            .query_map([], read_task)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    fn list_by_category(&self, category: &str) -> Result<Vec<Task>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, name, category, completed FROM tasks WHERE category = ? ORDER BY id",
        )?;

        let tasks = stmt
            .query_map([category], read_task)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    fn exists(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM tasks WHERE id = ?", [id], |row| {
            row.get(0)
        })?;
        Ok(count > 0)
    }

    fn update(&self, id: i64, name: &str, category: &str, completed: bool) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute(
            "UPDATE tasks SET name = ?, category = ?, completed = ? WHERE id = ?",
            (name, category, completed, id),
        )?;
        Ok(rows > 0)
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute("DELETE FROM tasks WHERE id = ?", [id])?;
        Ok(rows > 0)
    }
}

impl Clone for SqliteStore {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

fn read_task(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        completed: row.get(3)?,
    })
}
