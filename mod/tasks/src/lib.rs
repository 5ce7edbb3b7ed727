pub mod bootstrap;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

use std::sync::Arc;

use todolist_core::{ServiceError, StoreConfig};
use todolist_sql::{SQLStore, SqliteStore};

pub use bootstrap::FirstRun;
pub use model::{SortKey, Task, TaskDraft, TaskState};
pub use service::TaskService;
pub use store::TaskStore;

/// The task module: persistence and query core of the to-do manager.
///
/// Embed this in a host application to get durable task storage plus the
/// list/create/edit/complete/delete operation surface. The host owns all
/// presentation; this module only returns typed results.
pub struct TodoModule {
    service: Arc<TaskService>,
}

impl TodoModule {
    /// Open the configured store file, running first-use initialization
    /// per `first_run` (see [`bootstrap::open_store`]).
    pub fn open(config: &StoreConfig, first_run: FirstRun) -> Result<Self, ServiceError> {
        let db = bootstrap::open_store(&config.resolve_db_path(), first_run)?;
        Self::with_db(Arc::new(db))
    }

    /// Fully in-memory module for tests and ephemeral use.
    pub fn in_memory() -> Result<Self, ServiceError> {
        let db = SqliteStore::open_in_memory()
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Self::with_db(Arc::new(db))
    }

    /// Build the module on an already-open backing store.
    pub fn with_db(db: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        let store = Arc::new(TaskStore::new(db)?);
        Ok(Self {
            service: Arc::new(TaskService::new(store)),
        })
    }

    /// The caller-facing operation surface.
    pub fn service(&self) -> &Arc<TaskService> {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_module_end_to_end() {
        let module = TodoModule::in_memory().unwrap();
        let svc = module.service();

        let id = svc
            .create_task(TaskDraft {
                name: "wire the module".into(),
                priority: 6,
                ..Default::default()
            })
            .unwrap();

        svc.set_completion(id, true).unwrap();
        let listed = svc
            .list_tasks(Some(TaskState::Completed), SortKey::from_key("priority"))
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
    }

    #[test]
    fn open_uses_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            data_dir: Some(dir.path().to_path_buf()),
            db_path: None,
        };

        let module = TodoModule::open(&config, FirstRun::Empty).unwrap();
        module
            .service()
            .create_task(TaskDraft {
                name: "persisted".into(),
                ..Default::default()
            })
            .unwrap();
        drop(module);

        assert!(dir.path().join("todo.db").exists());

        let module = TodoModule::open(&config, FirstRun::Empty).unwrap();
        let all = module.service().list_tasks(None, SortKey::Unsorted).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "persisted");
    }
}
