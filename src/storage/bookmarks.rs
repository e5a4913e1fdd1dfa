//! The bookmark store: the watchlist's in-memory state and its persistence.
//!
//! The store has a two-phase lifecycle:
//!
//! 1. **Init**: the persisted collection is read once from the key-value backend.
//!    Missing or unreadable data yields an empty collection.
//! 2. **Steady state**: every mutation updates memory under a lock, then queues a
//!    full snapshot for the [`PersistenceWorker`]. The snapshot is queued before
//!    the lock is released, so snapshots reach the worker in mutation order and
//!    the last mutation is the one persisted.
//!
//! Mutations that change nothing (a duplicate add, removing an absent id) queue
//! no write.

use crate::domain::error::{MovieHubError, Result};
use crate::domain::Bookmark;
use crate::storage::backend::KeyValueStore;
use crate::storage::models::BookmarkRecord;
use crate::worker::{PersistenceWorker, WorkerMessage};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Key the collection is stored under.
pub const BOOKMARKS_KEY: &str = "bookmarks";

struct Inner {
    bookmarks: Vec<Bookmark>,
    /// `None` once the store has been shut down.
    sender: Option<mpsc::UnboundedSender<WorkerMessage>>,
}

impl Inner {
    fn persist(&self) {
        let Some(sender) = &self.sender else {
            tracing::warn!("bookmark store is shut down, change kept in memory only");
            return;
        };

        let snapshot = self.bookmarks.iter().map(BookmarkRecord::from).collect();
        if sender.send(WorkerMessage::save_bookmarks(snapshot)).is_err() {
            tracing::warn!("persistence worker is gone, change kept in memory only");
        }
    }
}

/// Process-wide watchlist state.
///
/// Owned by [`AppState`](crate::app::AppState) and shared by reference; see
/// [`BookmarkStore::init`] and [`BookmarkStore::shutdown`].
pub struct BookmarkStore {
    inner: Mutex<Inner>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

/// Reads the persisted collection, treating every failure as "no bookmarks yet".
///
/// Duplicate identifiers in the stored data are dropped, keeping the first.
pub fn load_bookmarks(storage: &dyn KeyValueStore) -> Vec<Bookmark> {
    let value = match storage.get(BOOKMARKS_KEY) {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::debug!("no saved bookmarks");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read bookmarks, starting empty");
            return Vec::new();
        }
    };

    let records: Vec<BookmarkRecord> = match serde_json::from_value(value) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "saved bookmarks are malformed, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let bookmarks: Vec<Bookmark> = records
        .into_iter()
        .filter(|record| seen.insert(record.id.clone()))
        .map(Bookmark::from)
        .collect();

    tracing::debug!(count = bookmarks.len(), "bookmarks loaded");
    bookmarks
}

impl BookmarkStore {
    /// Loads the saved collection and starts the persistence worker.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn init(storage: Box<dyn KeyValueStore>) -> Self {
        let _span = tracing::debug_span!("bookmark_store_init").entered();

        let bookmarks = load_bookmarks(storage.as_ref());
        let (sender, worker) = PersistenceWorker::new(storage).spawn();

        Self {
            inner: Mutex::new(Inner {
                bookmarks,
                sender: Some(sender),
            }),
            worker: Mutex::new(Some(worker)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a bookmark unless one with the same id exists.
    ///
    /// Returns `true` if the collection changed.
    pub fn add(&self, bookmark: Bookmark) -> bool {
        let _span = tracing::debug_span!("bookmark_add", id = %bookmark.id).entered();

        let mut inner = self.lock();
        if inner.bookmarks.iter().any(|existing| existing.id == bookmark.id) {
            tracing::debug!("already bookmarked");
            return false;
        }

        inner.bookmarks.push(bookmark);
        inner.persist();
        true
    }

    /// Removes the bookmark with `id` if present.
    ///
    /// Returns `true` if the collection changed.
    pub fn remove(&self, id: &str) -> bool {
        let _span = tracing::debug_span!("bookmark_remove", id = %id).entered();

        let mut inner = self.lock();
        let before = inner.bookmarks.len();
        inner.bookmarks.retain(|bookmark| bookmark.id != id);

        if inner.bookmarks.len() == before {
            tracing::debug!("not bookmarked");
            return false;
        }

        inner.persist();
        true
    }

    #[must_use]
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.lock().bookmarks.iter().any(|bookmark| bookmark.id == id)
    }

    /// Returns the collection in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Bookmark> {
        self.lock().bookmarks.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().bookmarks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns bookmarks whose title fuzzy-matches `query`, best match first.
    ///
    /// A blank query returns the whole collection in insertion order.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<Bookmark> {
        let query = query.trim();
        let bookmarks = self.list();
        if query.is_empty() {
            return bookmarks;
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, Bookmark)> = bookmarks
            .into_iter()
            .filter_map(|bookmark| {
                matcher
                    .fuzzy_match(&bookmark.title, query)
                    .map(|score| (score, bookmark))
            })
            .collect();

        // Stable sort keeps insertion order among equal scores.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, bookmark)| bookmark).collect()
    }

    /// Waits until every write queued so far has been handled.
    ///
    /// # Errors
    ///
    /// Returns [`MovieHubError::Worker`] if the worker stopped unexpectedly.
    pub async fn flush(&self) -> Result<()> {
        let (done, waiter) = oneshot::channel();

        {
            let inner = self.lock();
            let Some(sender) = &inner.sender else {
                return Ok(());
            };
            sender
                .send(WorkerMessage::flush(done))
                .map_err(|_| MovieHubError::Worker("persistence worker is gone".to_string()))?;
        }

        waiter
            .await
            .map_err(|_| MovieHubError::Worker("persistence worker dropped flush".to_string()))
    }

    /// Stops accepting writes, drains the queue, and waits for the worker to exit.
    ///
    /// Later mutations still change the in-memory collection but are not persisted.
    ///
    /// # Errors
    ///
    /// Returns [`MovieHubError::Worker`] if the worker panicked.
    pub async fn shutdown(&self) -> Result<()> {
        drop(self.lock().sender.take());

        let worker = self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(worker) = worker {
            worker
                .await
                .map_err(|e| MovieHubError::Worker(format!("persistence worker failed: {e}")))?;
            tracing::debug!("bookmark store shut down");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn bookmark(id: &str, title: &str) -> Bookmark {
        Bookmark::new(id, title, "N/A", 7.0, "2010")
    }

    #[tokio::test]
    async fn duplicate_add_is_a_no_op() {
        let store = BookmarkStore::init(Box::new(MemoryStore::new()));

        assert!(store.add(bookmark("tt1", "First")));
        assert!(!store.add(bookmark("tt1", "Second")));

        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "First");
    }

    #[tokio::test]
    async fn removing_absent_id_changes_nothing() {
        let store = BookmarkStore::init(Box::new(MemoryStore::new()));
        store.add(bookmark("tt1", "One"));

        assert!(!store.remove("tt404"));
        assert_eq!(store.len(), 1);

        assert!(store.remove("tt1"));
        assert!(store.is_empty());
        assert!(!store.is_bookmarked("tt1"));
    }

    #[tokio::test]
    async fn keeps_insertion_order() {
        let store = BookmarkStore::init(Box::new(MemoryStore::new()));
        for id in ["tt3", "tt1", "tt2"] {
            store.add(bookmark(id, id));
        }

        let ids: Vec<String> = store.list().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["tt3", "tt1", "tt2"]);
    }

    #[tokio::test]
    async fn malformed_saved_data_starts_empty() {
        let mut memory = MemoryStore::new();
        memory.set(BOOKMARKS_KEY, json!({ "not": "an array" })).unwrap();

        let store = BookmarkStore::init(Box::new(memory));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn load_drops_duplicate_ids() {
        let mut memory = MemoryStore::new();
        memory
            .set(
                BOOKMARKS_KEY,
                json!([
                    { "id": "tt1", "title": "A", "Poster": "N/A", "rating": 1.0, "year": "2001" },
                    { "id": "tt1", "title": "B", "Poster": "N/A", "rating": 2.0, "year": "2002" }
                ]),
            )
            .unwrap();

        let store = BookmarkStore::init(Box::new(memory));
        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "A");
    }

    #[tokio::test]
    async fn mutations_are_persisted_after_flush() {
        let memory = MemoryStore::new();
        let store = BookmarkStore::init(Box::new(memory.clone()));

        store.add(bookmark("tt1", "One"));
        store.add(bookmark("tt2", "Two"));
        store.remove("tt1");
        store.flush().await.unwrap();

        let saved = memory.get(BOOKMARKS_KEY).unwrap().unwrap();
        assert_eq!(saved.as_array().map(Vec::len), Some(1));
        assert_eq!(saved[0]["id"], "tt2");
    }

    #[tokio::test]
    async fn shutdown_keeps_memory_but_stops_writes() {
        let memory = MemoryStore::new();
        let store = BookmarkStore::init(Box::new(memory.clone()));

        store.add(bookmark("tt1", "One"));
        store.shutdown().await.unwrap();
        store.add(bookmark("tt2", "Two"));

        assert_eq!(store.len(), 2);
        let saved = memory.get(BOOKMARKS_KEY).unwrap().unwrap();
        assert_eq!(saved.as_array().map(Vec::len), Some(1));

        store.flush().await.unwrap();
        store.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn filter_matches_titles_fuzzily() {
        let store = BookmarkStore::init(Box::new(MemoryStore::new()));
        store.add(bookmark("tt1", "The Dark Knight"));
        store.add(bookmark("tt2", "Inception"));
        store.add(bookmark("tt3", "Interstellar"));

        let found: Vec<String> = store.filter("incep").into_iter().map(|b| b.id).collect();
        assert_eq!(found, vec!["tt2"]);

        assert_eq!(store.filter("  ").len(), 3);
        assert!(store.filter("zzzz").is_empty());
    }
}
