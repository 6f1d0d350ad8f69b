use crate::{BoardError, BoardResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_STORAGE_KEY: &str = "kanban-tasks-v1";

/// Edge auto-scroll tuning, in the units of the surface being scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoScrollSettings {
    /// Distance from a viewport edge that triggers scrolling.
    pub edge_threshold: f64,
    /// Offset applied per tick.
    pub step: f64,
    /// Tick period in milliseconds.
    pub interval_ms: u64,
}

impl AutoScrollSettings {
    /// Pixel defaults: 150px edge, 10px per tick, ~60Hz.
    pub const fn pixels() -> Self {
        Self {
            edge_threshold: 150.0,
            step: 10.0,
            interval_ms: 16,
        }
    }

    /// Cell defaults for terminal surfaces.
    pub const fn cells() -> Self {
        Self {
            edge_threshold: 2.0,
            step: 1.0,
            interval_ms: 60,
        }
    }
}

impl Default for AutoScrollSettings {
    fn default() -> Self {
        Self::pixels()
    }
}

fn default_terminal_scroll() -> AutoScrollSettings {
    AutoScrollSettings::cells()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub storage_key: Option<String>,
    #[serde(default = "default_terminal_scroll")]
    pub terminal_scroll: AutoScrollSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: None,
            terminal_scroll: AutoScrollSettings::cells(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the config from the platform path, falling back to defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Loads from `path`; a missing or unreadable file yields defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> BoardResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| BoardError::Config(e.to_string()))
    }

    pub fn effective_storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    pub fn effective_data_dir(&self) -> BoardResult<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|data| data.join("taskboard"))
            .ok_or_else(|| BoardError::Config("no data directory for this platform".to_string()))
    }
}
