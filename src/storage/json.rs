//! JSON file-based key-value backend.
//!
//! This module provides a human-readable storage implementation using JSON
//! serialization. It uses atomic file writes (write-to-temp + rename) so the file
//! is never left half-written.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "bookmarks": [
//!       { "id": "tt1375666", "title": "Inception", "Poster": "https://…", "rating": 8.8, "year": "2010" }
//!     ]
//!   }
//! }
//! ```

use crate::domain::error::{MovieHubError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const STORAGE_VERSION: u32 = 1;

/// Top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, Value>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file key-value backend.
///
/// The entire file is kept in memory and rewritten on every modification.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is owned by the persistence worker,
/// which is the only writer.
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the file, loaded on creation.
    data: StorageData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonFileStore {
    /// Creates or opens a JSON file store.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty; the file
    /// is created on the first write. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but cannot be read or is not valid JSON ([`MovieHubError::Storage`])
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no store file yet, starting empty");
            StorageData::default()
        };

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Opens the store, discarding unreadable contents instead of failing.
    ///
    /// A corrupt file is left in place until the next write replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error only if the parent directory cannot be created.
    pub fn open_or_reset(file_path: PathBuf) -> Result<Self> {
        match Self::new(file_path.clone()) {
            Ok(store) => Ok(store),
            Err(MovieHubError::Storage(reason)) => {
                tracing::warn!(path = ?file_path, reason = %reason, "store file unreadable, starting empty");
                Ok(Self {
                    file_path,
                    data: StorageData::default(),
                    dirty: false,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read(path)
            .map_err(|e| MovieHubError::Storage(format!("failed to read {}: {e}", path.display())))?;
        let data: StorageData = serde_json::from_slice(&contents)
            .map_err(|e| MovieHubError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version != STORAGE_VERSION {
            return Err(MovieHubError::Storage(format!(
                "unsupported store version {}",
                data.version
            )));
        }

        tracing::debug!(keys = data.entries.len(), "loaded store data");
        Ok(data)
    }

    /// Saves the data to disk using an atomic write.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| MovieHubError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key = %key).entered();

        self.data.entries.insert(key.to_string(), value);
        self.dirty = true;
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_remove", key = %key).entered();

        if self.data.entries.remove(key).is_some() {
            self.dirty = true;
            self.save_to_file()?;
        }
        Ok(())
    }
}

impl Drop for JsonFileStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
