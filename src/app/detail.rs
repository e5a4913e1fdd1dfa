//! The detail view: one movie's full metadata plus its bookmark state.

use crate::app::flow::{FlowStatus, Generation};
use crate::catalog::Catalog;
use crate::domain::{Bookmark, MovieDetail};
use crate::storage::BookmarkStore;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct DetailState {
    id: Option<String>,
    status: FlowStatus<MovieDetail>,
}

/// Detail flow state. A detail is fetched per view and never reused for
/// another identifier.
#[derive(Debug, Default)]
pub struct DetailFlow {
    state: Mutex<DetailState>,
    generation: Generation,
}

impl DetailFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, DetailState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Shows the detail for `id`, fetching it unless it is already loaded.
    ///
    /// Returns the resulting status, or the current one if a newer `open`
    /// overtook this call.
    pub async fn open(&self, catalog: &dyn Catalog, id: &str) -> FlowStatus<MovieDetail> {
        let id = id.trim();
        let ticket = {
            let mut state = self.lock();
            if state.id.as_deref() == Some(id) && state.status.ready().is_some() {
                return state.status.clone();
            }
            state.id = Some(id.to_string());
            state.status = FlowStatus::Loading;
            self.generation.next()
        };

        let result = catalog.get_detail(id).await;
        if let Err(e) = &result {
            if !e.is_not_found() {
                tracing::warn!(id = %id, error = %e, "detail lookup failed");
            }
        }

        let mut state = self.lock();
        if !self.generation.is_current(ticket) {
            tracing::debug!(id = %id, "stale detail discarded");
            return state.status.clone();
        }

        state.status = FlowStatus::from_result(result);
        state.status.clone()
    }

    #[must_use]
    pub fn status(&self) -> FlowStatus<MovieDetail> {
        self.lock().status.clone()
    }

    /// Identifier of the detail being shown, if any.
    #[must_use]
    pub fn current_id(&self) -> Option<String> {
        self.lock().id.clone()
    }

    /// Whether the loaded detail is in the watchlist. `false` when nothing is loaded.
    #[must_use]
    pub fn is_bookmarked(&self, store: &BookmarkStore) -> bool {
        self.lock()
            .status
            .ready()
            .is_some_and(|detail| store.is_bookmarked(&detail.id))
    }

    /// Adds the loaded detail to the watchlist, or removes it if already there.
    ///
    /// Returns the new bookmark state, or `None` when no detail is loaded.
    pub fn toggle_bookmark(&self, store: &BookmarkStore) -> Option<bool> {
        let Some(detail) = self.lock().status.ready().cloned() else {
            tracing::debug!("toggle ignored, no detail loaded");
            return None;
        };

        if store.is_bookmarked(&detail.id) {
            store.remove(&detail.id);
            Some(false)
        } else {
            store.add(Bookmark::from_detail(&detail));
            Some(true)
        }
    }
}
