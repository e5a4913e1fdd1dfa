//! Central application state container.
//!
//! [`AppState`] owns the catalog client, the bookmark store and one instance
//! of every flow. It is built once per process by
//! [`initialize`](crate::initialize) (or [`AppState::new`] in tests) and torn
//! down with [`AppState::shutdown`], which drains pending watchlist writes.

use crate::app::detail::DetailFlow;
use crate::app::listing::ListingFlow;
use crate::app::modes::Screen;
use crate::app::search::SearchFlow;
use crate::catalog::Catalog;
use crate::domain::error::Result;
use crate::storage::BookmarkStore;
use crate::ui::{BrowseView, DetailView, SearchView, View, WatchlistView};
use crate::Config;
use std::sync::{Arc, Mutex, PoisonError};

/// Application state shared by every event.
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub bookmarks: Arc<BookmarkStore>,
    pub search: SearchFlow,
    pub listing: ListingFlow,
    pub detail: DetailFlow,
    screen: Mutex<Screen>,
}

impl AppState {
    /// Creates the state around an existing catalog and store.
    pub fn new(catalog: Arc<dyn Catalog>, bookmarks: Arc<BookmarkStore>, config: &Config) -> Self {
        Self {
            catalog,
            bookmarks,
            search: SearchFlow::new(),
            listing: ListingFlow::new(config.lists.clone(), config.stop_at_end),
            detail: DetailFlow::new(),
            screen: Mutex::new(Screen::default()),
        }
    }

    /// The screen shown last.
    #[must_use]
    pub fn screen(&self) -> Screen {
        *self.screen.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn set_screen(&self, screen: Screen) {
        *self.screen.lock().unwrap_or_else(PoisonError::into_inner) = screen;
    }

    #[must_use]
    pub fn search_view(&self) -> View {
        View::Search(SearchView {
            status: self.search.status(),
        })
    }

    #[must_use]
    pub fn browse_view(&self) -> View {
        View::Browse(BrowseView {
            lists: self.listing.snapshot(),
        })
    }

    #[must_use]
    pub fn detail_view(&self) -> View {
        View::Detail(DetailView {
            status: self.detail.status(),
            bookmarked: self.detail.is_bookmarked(&self.bookmarks),
        })
    }

    /// Watchlist view, fuzzy-filtered by `filter` when it is non-blank.
    #[must_use]
    pub fn watchlist_view(&self, filter: Option<&str>) -> View {
        let filter = filter.map(str::trim).filter(|query| !query.is_empty());
        View::Watchlist(WatchlistView {
            entries: self.bookmarks.filter(filter.unwrap_or_default()),
            total: self.bookmarks.len(),
            filter: filter.map(String::from),
        })
    }

    /// Waits for pending watchlist writes and stops the persistence worker.
    ///
    /// # Errors
    ///
    /// Returns [`MovieHubError::Worker`](crate::MovieHubError::Worker) if the
    /// worker failed.
    pub async fn shutdown(&self) -> Result<()> {
        tracing::debug!("shutting down");
        self.bookmarks.shutdown().await
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("bookmarks", &self.bookmarks.len())
            .field("screen", &self.screen())
            .finish_non_exhaustive()
    }
}
