//! View model types representing renderable UI state.
//!
//! View models are built by the event handler from flow and store state. They
//! contain no business logic, only display-ready data, and are consumed by
//! [`render`](crate::ui::render).

use crate::app::flow::FlowStatus;
use crate::app::listing::ListSnapshot;
use crate::app::Screen;
use crate::domain::{Bookmark, MovieDetail, MovieSummary};

/// A complete screen ready to render.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Search(SearchView),
    Browse(BrowseView),
    Detail(DetailView),
    Watchlist(WatchlistView),
}

impl View {
    /// Screen this view belongs to.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        match self {
            Self::Search(_) => Screen::Search,
            Self::Browse(_) => Screen::Browse,
            Self::Detail(_) => Screen::Detail,
            Self::Watchlist(_) => Screen::Watchlist,
        }
    }
}

/// The search screen: the last query's single best match.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub status: FlowStatus<MovieSummary>,
}

/// The home screen: every configured list with its accumulated movies.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseView {
    pub lists: Vec<ListSnapshot>,
}

/// One movie's detail with its watchlist state.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub status: FlowStatus<MovieDetail>,
    pub bookmarked: bool,
}

/// The saved movies, optionally narrowed by a filter query.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchlistView {
    /// Entries to show: insertion order, or best match first when filtered.
    pub entries: Vec<Bookmark>,
    /// Size of the whole watchlist, regardless of the filter.
    pub total: usize,
    pub filter: Option<String>,
}

impl WatchlistView {
    /// Saved-count line shown above the entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use moviehub::ui::WatchlistView;
    ///
    /// let view = WatchlistView { entries: vec![], total: 1, filter: None };
    /// assert_eq!(view.summary(), "1 movie saved");
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        let noun = if self.total == 1 { "movie" } else { "movies" };
        format!("{} {noun} saved", self.total)
    }
}
