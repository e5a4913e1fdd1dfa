//! Key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait the bookmark store persists
//! through. Values are whole JSON documents stored under string keys; a write
//! always replaces the previous value for that key.

use crate::domain::error::Result;
use serde_json::Value;

/// Abstraction over persistent key-value backends.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): a JSON file with atomic writes (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): process memory, for tests and `--ephemeral`
///
/// # Examples
///
/// ```no_run
/// use moviehub::storage::{JsonFileStore, KeyValueStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonFileStore::new(PathBuf::from("/tmp/moviehub.json"))?;
/// store.set("bookmarks", serde_json::json!([]))?;
/// assert!(store.get("bookmarks")?.is_some());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait KeyValueStore: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing was ever written for the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Replaces the value stored under `key` and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Deletes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;
}
