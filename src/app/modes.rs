//! Screen state for the interactive front end.
//!
//! The application remembers which screen was shown last; the shell shows it
//! in its prompt.

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Title search with its single result.
    Search,

    /// The curated keyword lists.
    #[default]
    Browse,

    /// One movie's detail. `toggle` adds or removes it from the watchlist.
    Detail,

    /// The saved movies.
    Watchlist,
}

impl Screen {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Browse => "Home",
            Self::Detail => "Detail",
            Self::Watchlist => "Watchlist",
        }
    }
}
