use std::sync::Arc;

use todolist_core::ServiceError;
use todolist_sql::{Row, SQLStore, Value};

use crate::model::{Task, TaskDraft, TaskState};

/// SQL schema for the tasks table.
///
/// The column set and the integer state encoding are a compatibility
/// contract with pre-existing data files; do not reorder or rename.
/// AUTOINCREMENT keeps ids monotonic for the store's lifetime; deleted
/// ids are never handed out again.
pub(crate) const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS tasks (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    priority    INTEGER NOT NULL,
    enddate     TEXT NOT NULL,
    description TEXT NOT NULL,
    state       INTEGER NOT NULL
);
";

/// Persistent storage for tasks, backed by SQLStore (SQLite).
///
/// The store is a trusting persistence layer: it accepts any well-typed
/// record and leaves shape validation to the service boundary. Every
/// operation is a single statement, atomic at record granularity.
pub struct TaskStore {
    db: Arc<dyn SQLStore>,
}

impl TaskStore {
    /// Create a new TaskStore and ensure the schema exists.
    pub fn new(db: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        db.exec_batch(SCHEMA)
            .map_err(|e| ServiceError::Storage(format!("task schema init: {e}")))?;
        Ok(Self { db })
    }

    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Insert a new record and return the store-assigned id.
    pub fn insert(&self, draft: &TaskDraft, state: TaskState) -> Result<i64, ServiceError> {
        self.db
            .insert(
                "INSERT INTO tasks (name, priority, enddate, description, state) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                &[
                    Value::Text(draft.name.clone()),
                    Value::Integer(draft.priority),
                    Value::Text(draft.end_date.clone()),
                    Value::Text(draft.description.clone()),
                    Value::Integer(state.code()),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }

    /// Full-record replace keyed by id.
    ///
    /// Zero rows affected means the id does not exist and is reported as
    /// `NotFound`, distinct from a write failure.
    pub fn update(&self, task: &Task) -> Result<(), ServiceError> {
        let affected = self
            .db
            .exec(
                "UPDATE tasks SET name = ?1, priority = ?2, enddate = ?3, \
                 description = ?4, state = ?5 WHERE id = ?6",
                &[
                    Value::Text(task.name.clone()),
                    Value::Integer(task.priority),
                    Value::Text(task.end_date.clone()),
                    Value::Text(task.description.clone()),
                    Value::Integer(task.state.code()),
                    Value::Integer(task.id),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(ServiceError::NotFound(format!("task {}", task.id)));
        }
        Ok(())
    }

    /// Delete a task by id. `NotFound` when no row matched.
    pub fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let affected = self
            .db
            .exec("DELETE FROM tasks WHERE id = ?1", &[Value::Integer(id)])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(ServiceError::NotFound(format!("task {id}")));
        }
        Ok(())
    }

    /// Point lookup. Absence is a normal outcome, not an error.
    pub fn get(&self, id: i64) -> Result<Option<Task>, ServiceError> {
        let rows = self
            .db
            .query(
                "SELECT id, name, priority, enddate, description, state \
                 FROM tasks WHERE id = ?1",
                &[Value::Integer(id)],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        rows.first().map(row_to_task).transpose()
    }

    /// Targeted update of only the `state` column.
    ///
    /// A single UPDATE statement, so a concurrent full edit of the other
    /// fields cannot be lost the way a read-modify-write toggle would
    /// lose it. `NotFound` when no row matched.
    pub fn set_state(&self, id: i64, state: TaskState) -> Result<(), ServiceError> {
        let affected = self
            .db
            .exec(
                "UPDATE tasks SET state = ?1 WHERE id = ?2",
                &[Value::Integer(state.code()), Value::Integer(id)],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        if affected == 0 {
            return Err(ServiceError::NotFound(format!("task {id}")));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Enumeration
    // -----------------------------------------------------------------------

    /// Every stored task, in id order (creation order).
    ///
    /// This is the sole read path the query layer uses; views are derived
    /// from this snapshot, never from ad-hoc store reads.
    pub fn all(&self) -> Result<Vec<Task>, ServiceError> {
        let rows = self
            .db
            .query(
                "SELECT id, name, priority, enddate, description, state \
                 FROM tasks ORDER BY id",
                &[],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        rows.iter().map(row_to_task).collect()
    }
}

/// Decode a task from its SQL columns.
///
/// A state code outside {0, 1} is data corruption and fails hard; it is
/// never coerced to a default.
fn row_to_task(row: &Row) -> Result<Task, ServiceError> {
    let id = row
        .get_i64("id")
        .ok_or_else(|| ServiceError::Storage("task row missing id".into()))?;

    let code = row
        .get_i64("state")
        .ok_or_else(|| ServiceError::Storage(format!("task {id} missing state")))?;
    let state = TaskState::from_code(code)
        .ok_or_else(|| ServiceError::Storage(format!("task {id} has corrupt state code {code}")))?;

    Ok(Task {
        id,
        name: row
            .get_str("name")
            .ok_or_else(|| ServiceError::Storage(format!("task {id} missing name")))?
            .to_string(),
        priority: row
            .get_i64("priority")
            .ok_or_else(|| ServiceError::Storage(format!("task {id} missing priority")))?,
        end_date: row
            .get_str("enddate")
            .ok_or_else(|| ServiceError::Storage(format!("task {id} missing enddate")))?
            .to_string(),
        description: row
            .get_str("description")
            .ok_or_else(|| ServiceError::Storage(format!("task {id} missing description")))?
            .to_string(),
        state,
    })
}
