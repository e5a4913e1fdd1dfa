//! Single best-match title search.

use crate::app::flow::{FlowStatus, Generation};
use crate::catalog::Catalog;
use crate::domain::MovieSummary;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Shown when the search is submitted with nothing to search for.
pub const EMPTY_QUERY_NOTICE: &str = "Please enter a movie title";

/// Shown when the catalog has no match.
pub const NOT_FOUND_NOTICE: &str = "Movie not found";

/// What a submission did.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Input was blank; no request was made and the state is unchanged.
    EmptyQuery,
    /// The request finished and its result is now the flow state.
    Completed(FlowStatus<MovieSummary>),
    /// A newer submission started before this one finished; result discarded.
    Superseded,
}

impl SearchOutcome {
    /// User-facing notice for this outcome, if any.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::EmptyQuery => Some(EMPTY_QUERY_NOTICE.to_string()),
            Self::Completed(FlowStatus::NotFound) => Some(NOT_FOUND_NOTICE.to_string()),
            Self::Completed(FlowStatus::Error(message)) => Some(format!("Search failed: {message}")),
            _ => None,
        }
    }
}

/// Search state: at most one result, replaced wholesale by each search.
#[derive(Debug, Default)]
pub struct SearchFlow {
    status: Mutex<FlowStatus<MovieSummary>>,
    generation: Generation,
}

impl SearchFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FlowStatus<MovieSummary>> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn status(&self) -> FlowStatus<MovieSummary> {
        self.lock().clone()
    }

    /// Searches for `input` and records the result.
    ///
    /// Catalog errors never escape: not-found and failures become flow states.
    pub async fn submit(&self, catalog: &dyn Catalog, input: &str) -> SearchOutcome {
        let query = input.trim();
        if query.is_empty() {
            tracing::debug!("empty search ignored");
            return SearchOutcome::EmptyQuery;
        }

        let ticket = self.generation.next();
        *self.lock() = FlowStatus::Loading;

        let result = catalog.search_by_title(query).await;
        if let Err(e) = &result {
            if !e.is_not_found() {
                tracing::warn!(query = %query, error = %e, "title search failed");
            }
        }

        let mut status = self.lock();
        if !self.generation.is_current(ticket) {
            tracing::debug!(query = %query, "stale search result discarded");
            return SearchOutcome::Superseded;
        }

        *status = FlowStatus::from_result(result);
        SearchOutcome::Completed(status.clone())
    }

    /// Drops the current result and returns to `Idle`.
    pub fn clear(&self) {
        self.generation.next();
        *self.lock() = FlowStatus::Idle;
    }
}
