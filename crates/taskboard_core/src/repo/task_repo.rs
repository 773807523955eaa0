//! Task store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide durable CRUD over the `tasks` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `insert` assigns the id; callers never supply one for new tasks.
//! - `update` has put-style upsert semantics: an absent id creates the row.
//! - `delete_by_id` on an absent id is a no-op, not an error.

use crate::db::migrations::latest_version;
use crate::model::task::{NewTask, Task, TaskId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TASK_SELECT_SQL: &str = "SELECT id, text, assignee, completed FROM tasks";

pub type StoreResult<T> = Result<T, StoreError>;

/// Task store failure, split by the operation class that hit it.
#[derive(Debug)]
pub enum StoreError {
    /// Listing tasks failed in the underlying engine.
    Read(rusqlite::Error),
    /// Insert, update or delete failed in the underlying engine.
    Write(rusqlite::Error),
    /// A persisted row does not decode into a valid task.
    InvalidData(String),
    /// The connection was never bootstrapped through `open_db`.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// The connection is migrated but the tasks table is missing.
    MissingTaskTable,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read tasks: {err}"),
            Self::Write(err) => write!(f, "failed to write task: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not bootstrapped: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingTaskTable => write!(f, "connection has no `tasks` table"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(err) | Self::Write(err) => Some(err),
            _ => None,
        }
    }
}

impl StoreError {
    fn read(err: rusqlite::Error) -> Self {
        Self::Read(err)
    }

    fn write(err: rusqlite::Error) -> Self {
        Self::Write(err)
    }
}

/// Store interface for task CRUD operations.
pub trait TaskRepository {
    /// Persists a draft task and returns the freshly assigned id.
    fn insert(&self, task: &NewTask) -> StoreResult<TaskId>;
    /// Returns every stored task. Callers must not rely on ordering.
    fn list_all(&self) -> StoreResult<Vec<Task>>;
    /// Replaces the stored record matching `task.id` with the given record,
    /// creating it when absent.
    fn update(&self, task: &Task) -> StoreResult<()>;
    /// Removes the record with the given id if present.
    fn delete_by_id(&self, id: TaskId) -> StoreResult<()>;
}

/// SQLite-backed task store.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Constructs a store from a migrated connection.
    ///
    /// Rejects connections that did not go through `open_db`, so callers
    /// cannot accidentally read or write through an un-bootstrapped handle.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn insert(&self, task: &NewTask) -> StoreResult<TaskId> {
        self.conn
            .execute(
                "INSERT INTO tasks (text, assignee, completed) VALUES (?1, ?2, ?3);",
                params![
                    task.text.as_str(),
                    task.assignee.as_str(),
                    bool_to_int(task.completed),
                ],
            )
            .map_err(StoreError::write)?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_all(&self) -> StoreResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(TASK_SELECT_SQL)
            .map_err(StoreError::read)?;
        let mut rows = stmt.query([]).map_err(StoreError::read)?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next().map_err(StoreError::read)? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn update(&self, task: &Task) -> StoreResult<()> {
        // Put-style replace: an id that is not present creates the row,
        // matching the behavior of the original object store.
        self.conn
            .execute(
                "INSERT INTO tasks (id, text, assignee, completed)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                    text = excluded.text,
                    assignee = excluded.assignee,
                    completed = excluded.completed;",
                params![
                    task.id,
                    task.text.as_str(),
                    task.assignee.as_str(),
                    bool_to_int(task.completed),
                ],
            )
            .map_err(StoreError::write)?;

        Ok(())
    }

    fn delete_by_id(&self, id: TaskId) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM tasks WHERE id = ?1;", [id])
            .map_err(StoreError::write)?;

        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .map_err(StoreError::read)?;

    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'tasks'
            );",
            [],
            |row| row.get(0),
        )
        .map_err(StoreError::read)?;

    if table_exists == 0 {
        return Err(StoreError::MissingTaskTable);
    }

    Ok(())
}

fn parse_task_row(row: &Row<'_>) -> StoreResult<Task> {
    let completed = match row.get::<_, i64>("completed").map_err(StoreError::read)? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid completed value `{other}` in tasks.completed"
            )));
        }
    };

    Ok(Task {
        id: row.get("id").map_err(StoreError::read)?,
        text: row.get("text").map_err(StoreError::read)?,
        assignee: row.get("assignee").map_err(StoreError::read)?,
        completed,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
