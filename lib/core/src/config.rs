use std::path::PathBuf;

/// Storage configuration for the task core.
///
/// A host binary parses these from command-line arguments or hard-codes
/// them, then hands the resolved path to bootstrap.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Directory holding the application's data files.
    pub data_dir: Option<PathBuf>,

    /// Path to the SQLite database file.
    /// Defaults to `{data_dir}/todo.db` if not specified.
    pub db_path: Option<PathBuf>,
}

impl StoreConfig {
    /// Parse configuration from command-line arguments.
    ///
    /// Supported flags:
    /// - `--data-dir=PATH`
    /// - `--db=PATH`
    pub fn from_args(args: &[String]) -> Self {
        let mut config = StoreConfig::default();

        for arg in args {
            if let Some(val) = arg.strip_prefix("--data-dir=") {
                config.data_dir = Some(PathBuf::from(val));
            } else if let Some(val) = arg.strip_prefix("--db=") {
                config.db_path = Some(PathBuf::from(val));
            }
        }

        config
    }

    /// Resolve the database path, falling back to `{data_dir}/todo.db`.
    pub fn resolve_db_path(&self) -> PathBuf {
        self.db_path.clone().unwrap_or_else(|| {
            self.data_dir
                .as_ref()
                .map(|d| d.join("todo.db"))
                .unwrap_or_else(|| PathBuf::from("todo.db"))
        })
    }
}
