//! File-backed snapshot storage.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TallyError};

use super::SnapshotStorage;

/// On-disk key-value storage: one JSON file per key under a data directory.
///
/// The default data directory is `~/.tally`; tests and power users can point
/// it elsewhere via `--data-dir` or `TALLY_DATA_DIR`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage backend rooted at `dir`.
    ///
    /// The directory is created lazily on first write, so constructing a
    /// storage for a missing directory is not an error.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default data directory (`~/.tally`).
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".tally")
    }

    /// Get the storage root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SnapshotStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| TallyError::StorageRead {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(Some(content))
    }

    /// Write using the write-to-temp-then-rename pattern so a crash
    /// mid-write never leaves a partially written snapshot behind.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value).map_err(|e| TallyError::StorageWrite {
            path: temp_path.clone(),
            message: e.to_string(),
        })?;
        fs::rename(&temp_path, &path).map_err(|e| TallyError::StorageWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(())
    }
}
