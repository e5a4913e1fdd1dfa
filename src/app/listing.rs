//! Paged keyword listings.
//!
//! Each configured list keeps a page counter (starting at 1) and the movies
//! accumulated so far. `load_more` fetches the next page and appends it; the
//! counter advances even when the page is empty, so repeated calls walk past
//! the end of the results rather than refetching the last page.
//!
//! Loads of one list are serialized by a per-list async gate. Different lists
//! load independently.

use crate::app::flow::FlowStatus;
use crate::catalog::Catalog;
use crate::domain::MovieSummary;
use crate::ListConfig;
use futures_util::future::join_all;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::Instrument;

/// Point-in-time copy of one list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot {
    pub name: String,
    pub keyword: String,
    /// Last page fetched (or about to be fetched if nothing loaded yet).
    pub page: u32,
    pub movies: Vec<MovieSummary>,
    /// `Ready(n)` carries the size of the last fetched page.
    pub status: FlowStatus<usize>,
    /// An empty page has been seen.
    pub exhausted: bool,
}

#[derive(Debug)]
struct ListState {
    page: u32,
    movies: Vec<MovieSummary>,
    status: FlowStatus<usize>,
    exhausted: bool,
}

#[derive(Debug)]
struct ListSlot {
    config: ListConfig,
    gate: tokio::sync::Mutex<()>,
    state: Mutex<ListState>,
}

impl ListSlot {
    fn new(config: ListConfig) -> Self {
        Self {
            config,
            gate: tokio::sync::Mutex::new(()),
            state: Mutex::new(ListState {
                page: 1,
                movies: Vec::new(),
                status: FlowStatus::Idle,
                exhausted: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn snapshot(&self) -> ListSnapshot {
        let state = self.lock();
        ListSnapshot {
            name: self.config.name.clone(),
            keyword: self.config.keyword.clone(),
            page: state.page,
            movies: state.movies.clone(),
            status: state.status.clone(),
            exhausted: state.exhausted,
        }
    }

    /// Fetches page 1 and replaces the list contents.
    async fn load_first(&self, catalog: &dyn Catalog) -> ListSnapshot {
        let _gate = self.gate.lock().await;
        self.lock().status = FlowStatus::Loading;

        match catalog.search_by_keyword(&self.config.keyword, 1).await {
            Ok(movies) => {
                let mut state = self.lock();
                state.page = 1;
                state.exhausted = movies.is_empty();
                state.status = FlowStatus::Ready(movies.len());
                state.movies = movies;
            }
            Err(e) => {
                tracing::warn!(list = %self.config.name, error = %e, "initial page failed");
                self.lock().status = FlowStatus::Error(e.to_string());
            }
        }

        self.snapshot()
    }

    /// Fetches the page after the current one and appends it.
    async fn load_next(&self, catalog: &dyn Catalog, stop_at_end: bool) -> ListSnapshot {
        let _gate = self.gate.lock().await;

        let next_page = {
            let mut state = self.lock();
            if stop_at_end && state.exhausted {
                tracing::debug!(list = %self.config.name, page = state.page, "list exhausted, not paging");
                drop(state);
                return self.snapshot();
            }
            state.status = FlowStatus::Loading;
            state.page + 1
        };

        let fetch = catalog
            .search_by_keyword(&self.config.keyword, next_page)
            .instrument(tracing::debug_span!("load_more", list = %self.config.name, page = next_page));
        match fetch.await {
            Ok(movies) => {
                let mut state = self.lock();
                state.page = next_page;
                state.exhausted |= movies.is_empty();
                state.status = FlowStatus::Ready(movies.len());
                state.movies.extend(movies);
                tracing::debug!(list = %self.config.name, page = next_page, total = state.movies.len(), "page appended");
            }
            Err(e) => {
                tracing::warn!(list = %self.config.name, page = next_page, error = %e, "next page failed");
                self.lock().status = FlowStatus::Error(e.to_string());
            }
        }

        self.snapshot()
    }
}

/// The configured lists and their paging state.
#[derive(Debug)]
pub struct ListingFlow {
    lists: Vec<ListSlot>,
    stop_at_end: bool,
}

impl ListingFlow {
    /// Creates the flow. With `stop_at_end`, paging stops after the first empty page.
    #[must_use]
    pub fn new(lists: Vec<ListConfig>, stop_at_end: bool) -> Self {
        Self {
            lists: lists.into_iter().map(ListSlot::new).collect(),
            stop_at_end,
        }
    }

    fn slot(&self, name: &str) -> Option<&ListSlot> {
        self.lists
            .iter()
            .find(|slot| slot.config.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Names of the configured lists in display order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.lists.iter().map(|slot| slot.config.name.clone()).collect()
    }

    /// Fetches page 1 of every list concurrently.
    pub async fn load_initial(&self, catalog: &dyn Catalog) -> Vec<ListSnapshot> {
        tracing::debug!(lists = self.lists.len(), "loading initial pages");
        join_all(self.lists.iter().map(|slot| slot.load_first(catalog))).await
    }

    /// Appends the next page of the named list.
    ///
    /// Returns `None` for an unknown list name.
    pub async fn load_more(&self, catalog: &dyn Catalog, name: &str) -> Option<ListSnapshot> {
        let Some(slot) = self.slot(name) else {
            tracing::debug!(list = %name, "no such list");
            return None;
        };
        Some(slot.load_next(catalog, self.stop_at_end).await)
    }

    /// Current state of every list.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ListSnapshot> {
        self.lists.iter().map(ListSlot::snapshot).collect()
    }

    /// Current state of one list.
    #[must_use]
    pub fn list(&self, name: &str) -> Option<ListSnapshot> {
        self.slot(name).map(ListSlot::snapshot)
    }
}
