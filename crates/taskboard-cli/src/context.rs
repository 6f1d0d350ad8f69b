use anyhow::Context;
use std::path::{Path, PathBuf};
use taskboard_core::AppConfig;
use taskboard_domain::TaskService;
use taskboard_persistence::{JsonDirStore, TaskStorage};

pub type BoardService = TaskService<TaskStorage<JsonDirStore>>;

/// Resolved configuration plus the task service backed by the data directory.
pub struct CliContext {
    pub config: AppConfig,
    pub data_dir: PathBuf,
    pub service: BoardService,
}

impl CliContext {
    pub fn load(data_dir: Option<&Path>, config_path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => AppConfig::load_or_default(path),
            None => AppConfig::load(),
        };
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => config.effective_data_dir()?,
        };
        std::fs::create_dir_all(&data_dir).with_context(|| {
            format!("Failed to create data directory {}", data_dir.display())
        })?;

        let key = config.effective_storage_key().to_string();
        tracing::info!("Using {} under {}", key, data_dir.display());
        let storage = TaskStorage::with_key(JsonDirStore::new(&data_dir), key);

        Ok(Self {
            service: TaskService::new(storage),
            config,
            data_dir,
        })
    }
}
