use std::sync::Arc;

use tracing::debug;

use todolist_core::ServiceError;

use crate::model::{SortKey, Task, TaskDraft, TaskState};
use crate::query;
use crate::store::TaskStore;

/// Caller-facing operation surface for the task core.
///
/// This is the validation boundary: field shape checks happen here,
/// before any store access, so the store below stays a trusting
/// persistence layer. All methods may block on I/O; event-driven hosts
/// should dispatch them off the interaction thread and debounce duplicate
/// submissions while a write is in flight.
pub struct TaskService {
    store: Arc<TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    /// Create a task from the given fields. New tasks always start OPEN.
    /// Returns the store-assigned id.
    pub fn create_task(&self, draft: TaskDraft) -> Result<i64, ServiceError> {
        validate_draft(&draft)?;
        let id = self.store.insert(&draft, TaskState::Open)?;
        debug!(id, name = %draft.name, "created task");
        Ok(id)
    }

    /// Replace every caller-editable field of an existing task. The
    /// task's current state is preserved.
    pub fn edit_task(&self, id: i64, draft: TaskDraft) -> Result<(), ServiceError> {
        validate_draft(&draft)?;
        let current = self
            .store
            .get(id)?
            .ok_or_else(|| ServiceError::NotFound(format!("task {id}")))?;
        self.store.update(&draft.into_task(id, current.state))?;
        debug!(id, "edited task");
        Ok(())
    }

    /// Permanently remove a task.
    pub fn delete_task(&self, id: i64) -> Result<(), ServiceError> {
        self.store.delete(id)?;
        debug!(id, "deleted task");
        Ok(())
    }

    /// Mark a task completed or reopen it.
    ///
    /// Goes through the store's targeted state update (one UPDATE of the
    /// state column only), so no other field can be clobbered.
    pub fn set_completion(&self, id: i64, completed: bool) -> Result<(), ServiceError> {
        let state = if completed {
            TaskState::Completed
        } else {
            TaskState::Open
        };
        self.store.set_state(id, state)?;
        debug!(id, state = %state, "toggled task state");
        Ok(())
    }

    /// Point lookup. A missing id is `Ok(None)`, not an error.
    pub fn get_task(&self, id: i64) -> Result<Option<Task>, ServiceError> {
        self.store.get(id)
    }

    /// List tasks, optionally narrowed to one state, ordered by `sort`.
    ///
    /// Derives the view from a fresh enumeration snapshot on every call;
    /// the core keeps no cached lists.
    pub fn list_tasks(
        &self,
        filter: Option<TaskState>,
        sort: SortKey,
    ) -> Result<Vec<Task>, ServiceError> {
        let snapshot = self.store.all()?;
        Ok(query::list_all(&snapshot, filter, sort))
    }
}

/// Shape checks for caller-supplied fields. Runs before any store access.
fn validate_draft(draft: &TaskDraft) -> Result<(), ServiceError> {
    if draft.name.trim().is_empty() {
        return Err(ServiceError::Validation("task name must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use todolist_sql::SqliteStore;

    fn service() -> TaskService {
        let db = Arc::new(SqliteStore::open_in_memory().unwrap());
        TaskService::new(Arc::new(TaskStore::new(db).unwrap()))
    }

    fn draft(name: &str, priority: i64) -> TaskDraft {
        TaskDraft {
            name: name.into(),
            description: String::new(),
            priority,
            end_date: String::new(),
        }
    }

    #[test]
    fn create_assigns_id_and_starts_open() {
        let svc = service();
        let id = svc.create_task(draft("write report", 4)).unwrap();

        let task = svc.get_task(id).unwrap().unwrap();
        assert_eq!(task.name, "write report");
        assert_eq!(task.state, TaskState::Open);
    }

    #[test]
    fn empty_name_is_rejected_before_store_access() {
        let svc = service();
        for name in ["", "   ", "\t"] {
            let err = svc.create_task(draft(name, 1)).unwrap_err();
            assert_eq!(err.error_code(), "VALIDATION_FAILED");
        }
        // Nothing was persisted.
        assert!(svc.list_tasks(None, SortKey::Unsorted).unwrap().is_empty());
    }

    #[test]
    fn edit_preserves_state() {
        let svc = service();
        let id = svc.create_task(draft("old", 1)).unwrap();
        svc.set_completion(id, true).unwrap();

        svc.edit_task(id, draft("new", 2)).unwrap();

        let task = svc.get_task(id).unwrap().unwrap();
        assert_eq!(task.name, "new");
        assert_eq!(task.priority, 2);
        assert_eq!(task.state, TaskState::Completed);
    }

    #[test]
    fn edit_rejects_empty_name() {
        let svc = service();
        let id = svc.create_task(draft("keep me", 1)).unwrap();
        let err = svc.edit_task(id, draft("  ", 1)).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
        assert_eq!(svc.get_task(id).unwrap().unwrap().name, "keep me");
    }

    #[test]
    fn edit_missing_task_is_not_found() {
        let svc = service();
        let err = svc.edit_task(77, draft("x", 1)).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn completion_toggle_roundtrip() {
        let svc = service();
        let id = svc.create_task(draft("toggle me", 1)).unwrap();

        svc.set_completion(id, true).unwrap();
        assert_eq!(
            svc.get_task(id).unwrap().unwrap().state,
            TaskState::Completed
        );

        svc.set_completion(id, false).unwrap();
        assert_eq!(svc.get_task(id).unwrap().unwrap().state, TaskState::Open);
    }

    #[test]
    fn delete_then_absent() {
        let svc = service();
        let id = svc.create_task(draft("short-lived", 1)).unwrap();
        svc.delete_task(id).unwrap();
        assert!(svc.get_task(id).unwrap().is_none());
        assert_eq!(svc.delete_task(id).unwrap_err().error_code(), "NOT_FOUND");
    }

    #[test]
    fn list_filters_and_sorts() {
        let svc = service();
        let a = svc.create_task(draft("A", 3)).unwrap();
        let b = svc.create_task(draft("B", 5)).unwrap();
        let c = svc.create_task(draft("C", 5)).unwrap();
        svc.set_completion(a, true).unwrap();

        let open = svc
            .list_tasks(Some(TaskState::Open), SortKey::Priority)
            .unwrap();
        assert_eq!(open.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b, c]);

        let everything = svc.list_tasks(None, SortKey::Priority).unwrap();
        assert_eq!(
            everything.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![b, c, a]
        );
    }
}
