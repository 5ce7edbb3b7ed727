//! First-run initialization and schema-version policy.
//!
//! When the store file is missing it is initialized according to an
//! explicit [`FirstRun`] policy: seeded from the bundled baseline dataset
//! or created empty. An existing file is detected and reused untouched.
//! A schema-version bump discards the old file and reseeds; no row
//! migration is attempted. That destructive upgrade policy is deliberate
//! and logged loudly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use todolist_core::ServiceError;
use todolist_sql::{SQLStore, SqliteStore};

use crate::store::SCHEMA;

/// Version stamped into `PRAGMA user_version` on initialization. Bump on
/// any schema change; existing stores with a different stamp are
/// discarded and reseeded.
pub const SCHEMA_VERSION: i64 = 1;

/// Bundled baseline rows applied on a seeded first run.
const SEED_ROWS: &str = include_str!("seed.sql");

/// Policy for initializing a missing store file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstRun {
    /// Install the bundled seed dataset (the original ships a
    /// pre-populated baseline, not an empty store).
    Seed,
    /// Create the schema only.
    Empty,
}

/// Open the store file at `path`, initializing or reinitializing it as
/// the policy and schema version dictate.
pub fn open_store(path: &Path, first_run: FirstRun) -> Result<SqliteStore, ServiceError> {
    if path.exists() {
        let store = SqliteStore::open(path).map_err(storage)?;
        let version = store.user_version().map_err(storage)?;
        if version == SCHEMA_VERSION {
            info!(path = %path.display(), "reusing existing task store");
            return Ok(store);
        }

        warn!(
            path = %path.display(),
            found = version,
            expected = SCHEMA_VERSION,
            "schema version mismatch; discarding store and reinitializing"
        );
        drop(store);
        remove_store_files(path)?;
    }

    let store = SqliteStore::open(path).map_err(storage)?;
    store.exec_batch(SCHEMA).map_err(storage)?;
    if first_run == FirstRun::Seed {
        store.exec_batch(SEED_ROWS).map_err(storage)?;
    }
    store.set_user_version(SCHEMA_VERSION).map_err(storage)?;

    info!(
        path = %path.display(),
        policy = ?first_run,
        version = SCHEMA_VERSION,
        "initialized task store"
    );
    Ok(store)
}

fn storage(err: todolist_sql::SQLError) -> ServiceError {
    ServiceError::Storage(err.to_string())
}

/// Remove the database file and its WAL/SHM side files. A failed removal
/// is a storage error: silently keeping a mismatched store would mask the
/// upgrade.
fn remove_store_files(path: &Path) -> Result<(), ServiceError> {
    remove_if_present(path)?;
    remove_if_present(&side_file(path, "-wal"))?;
    remove_if_present(&side_file(path, "-shm"))?;
    Ok(())
}

fn remove_if_present(path: &Path) -> Result<(), ServiceError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ServiceError::Storage(format!(
            "removing {}: {e}",
            path.display()
        ))),
    }
}

fn side_file(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
