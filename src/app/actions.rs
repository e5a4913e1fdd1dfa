//! Actions representing side effects for the front end to execute.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! binary executes them in order: rendering views, printing notices, or
//! leaving the interactive loop.

use crate::ui::View;

/// Commands produced by [`handle_event`](crate::app::handle_event).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Show this view.
    Render(View),

    /// Show a short message, such as "Movie not found".
    Notify(String),

    /// Leave the interactive shell.
    Quit,
}

impl Action {
    pub fn notify(message: impl Into<String>) -> Self {
        Self::Notify(message.into())
    }
}
