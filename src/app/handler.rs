//! Event handling and state transition logic.
//!
//! The front end translates user input into [`Event`]s; [`handle_event`] runs
//! the matching flow against [`AppState`] and returns the [`Action`]s to
//! execute. Catalog and storage failures never surface as errors here: the
//! flows downgrade them into view state and the handler turns that into
//! notices.
//!
//! # Example
//!
//! ```rust,no_run
//! use moviehub::{handle_event, initialize, Action, Config, Event};
//!
//! # async fn run() -> moviehub::Result<()> {
//! let state = initialize(&Config::load(None)?)?;
//! for action in handle_event(&state, Event::Open("tt1375666".into())).await? {
//!     if let Action::Render(view) = action {
//!         print!("{}", moviehub::ui::render(&view));
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use crate::app::flow::FlowStatus;
use crate::app::modes::Screen;
use crate::app::search::{SearchOutcome, NOT_FOUND_NOTICE};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use futures_util::future::join_all;

/// User requests understood by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Search the catalog for a title.
    Search(String),
    /// Clear the search result.
    ClearSearch,

    /// Show the curated lists, loading their first page if nothing is loaded.
    Browse,
    /// Reload page 1 of every list.
    Refresh,
    /// Append the next page of one list, or of every list when `None`.
    LoadMore(Option<String>),

    /// Show the detail for an identifier.
    Open(String),
    /// Add the shown detail to the watchlist, or remove it.
    ToggleBookmark,

    /// Show the watchlist, optionally fuzzy-filtered by title.
    ShowWatchlist(Option<String>),
    /// Remove an entry from the watchlist by identifier.
    RemoveBookmark(String),

    /// Leave the interactive shell.
    Quit,
}

/// Processes an event and returns the actions to execute.
///
/// # Errors
///
/// Reserved for failures outside the flows; catalog and storage errors are
/// reported through [`Action::Notify`] instead.
pub async fn handle_event(state: &AppState, event: Event) -> Result<Vec<Action>> {
    tracing::debug!(event = ?event, "handling event");

    let actions = match event {
        Event::Search(query) => handle_search(state, &query).await,
        Event::ClearSearch => {
            state.search.clear();
            state.set_screen(Screen::Search);
            vec![Action::Render(state.search_view())]
        }

        Event::Browse => {
            let unloaded = state
                .listing
                .snapshot()
                .iter()
                .any(|list| list.status == FlowStatus::Idle);
            if unloaded {
                state.listing.load_initial(state.catalog.as_ref()).await;
            }
            state.set_screen(Screen::Browse);
            vec![Action::Render(state.browse_view())]
        }
        Event::Refresh => {
            state.listing.load_initial(state.catalog.as_ref()).await;
            state.set_screen(Screen::Browse);
            vec![Action::Render(state.browse_view())]
        }
        Event::LoadMore(list) => handle_load_more(state, list).await,

        Event::Open(id) => handle_open(state, &id).await,
        Event::ToggleBookmark => handle_toggle(state),

        Event::ShowWatchlist(filter) => {
            state.set_screen(Screen::Watchlist);
            vec![Action::Render(state.watchlist_view(filter.as_deref()))]
        }
        Event::RemoveBookmark(id) => {
            let id = id.trim();
            let notice = if state.bookmarks.remove(id) {
                format!("Removed {id} from the watchlist")
            } else {
                format!("{id} is not in the watchlist")
            };
            state.set_screen(Screen::Watchlist);
            vec![Action::notify(notice), Action::Render(state.watchlist_view(None))]
        }

        Event::Quit => vec![Action::Quit],
    };

    Ok(actions)
}

async fn handle_search(state: &AppState, query: &str) -> Vec<Action> {
    let outcome = state.search.submit(state.catalog.as_ref(), query).await;

    let mut actions: Vec<Action> = outcome.notice().into_iter().map(Action::Notify).collect();
    if outcome != SearchOutcome::EmptyQuery {
        state.set_screen(Screen::Search);
        actions.push(Action::Render(state.search_view()));
    }
    actions
}

async fn handle_load_more(state: &AppState, list: Option<String>) -> Vec<Action> {
    let catalog = state.catalog.as_ref();

    match list {
        Some(name) => {
            if state.listing.load_more(catalog, &name).await.is_none() {
                let known = state.listing.names().join(", ");
                return vec![Action::notify(format!("No list named \"{name}\" (lists: {known})"))];
            }
        }
        None => {
            let names = state.listing.names();
            join_all(names.iter().map(|name| state.listing.load_more(catalog, name))).await;
        }
    }

    state.set_screen(Screen::Browse);
    vec![Action::Render(state.browse_view())]
}

async fn handle_open(state: &AppState, id: &str) -> Vec<Action> {
    let status = state.detail.open(state.catalog.as_ref(), id).await;
    state.set_screen(Screen::Detail);

    let mut actions = Vec::new();
    match status {
        FlowStatus::NotFound => actions.push(Action::notify(NOT_FOUND_NOTICE)),
        FlowStatus::Error(message) => actions.push(Action::notify(format!("Could not load {id}: {message}"))),
        _ => {}
    }
    actions.push(Action::Render(state.detail_view()));
    actions
}

fn handle_toggle(state: &AppState) -> Vec<Action> {
    let notice = match state.detail.toggle_bookmark(&state.bookmarks) {
        None => return vec![Action::notify("Open a movie before bookmarking it")],
        Some(true) => "Added to watchlist",
        Some(false) => "Removed from watchlist",
    };

    state.set_screen(Screen::Detail);
    vec![Action::notify(notice), Action::Render(state.detail_view())]
}
