use std::io::Write;
use std::path::Path;
use taskboard_core::BoardResult;

/// Atomic file writer that prevents data corruption.
/// Uses write-to-temp-file then rename, so readers never see a partial value.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Writes `data` to `path`, replacing any previous content in one step.
    pub fn write_atomic(path: &Path, data: &[u8]) -> BoardResult<()> {
        // Same directory keeps the rename on one filesystem
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Reads a file as UTF-8; a missing file is `None`.
    pub fn read_to_string(path: &Path) -> BoardResult<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!("Read {} bytes from {}", content.len(), path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
