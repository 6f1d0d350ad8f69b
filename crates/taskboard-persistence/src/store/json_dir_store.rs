use std::path::{Path, PathBuf};
use taskboard_core::BoardResult;

use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;

const EXTENSION: &str = "json";

/// Directory-backed key-value store, one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Characters outside `[A-Za-z0-9._-]` become `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.{}", file_stem, EXTENSION))
    }
}

impl KeyValueStore for JsonDirStore {
    fn get_item(&self, key: &str) -> BoardResult<Option<String>> {
        AtomicWriter::read_to_string(&self.path_for(key))
    }

    fn set_item(&self, key: &str, value: &str) -> BoardResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        AtomicWriter::write_atomic(&path, value.as_bytes())?;
        tracing::info!("Saved {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> BoardResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> BoardResult<()> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == EXTENSION) {
                std::fs::remove_file(&path)?;
                tracing::debug!("Removed {}", path.display());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_and_get() {
        let dir = tempdir().unwrap();
        let store = JsonDirStore::new(dir.path());

        store.set_item("kanban-tasks-v1", "[]").unwrap();

        assert!(dir.path().join("kanban-tasks-v1.json").exists());
        assert_eq!(
            store.get_item("kanban-tasks-v1").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_absent_key_and_missing_dir() {
        let dir = tempdir().unwrap();
        let store = JsonDirStore::new(dir.path().join("not-yet"));

        assert!(store.get_item("anything").unwrap().is_none());
        store.remove_item("anything").unwrap();
        store.clear().unwrap();

        store.set_item("anything", "1").unwrap();
        assert!(dir.path().join("not-yet/anything.json").exists());
    }

    #[test]
    fn test_key_sanitizing() {
        let store = JsonDirStore::new("/data");
        assert_eq!(
            store.path_for("../boards/main v2"),
            PathBuf::from("/data/.._boards_main_v2.json")
        );
    }

    #[test]
    fn test_clear_only_removes_json_files() {
        let dir = tempdir().unwrap();
        let store = JsonDirStore::new(dir.path());
        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

        store.clear().unwrap();

        assert!(store.get_item("a").unwrap().is_none());
        assert!(store.get_item("b").unwrap().is_none());
        assert!(dir.path().join("notes.txt").exists());
    }
}
