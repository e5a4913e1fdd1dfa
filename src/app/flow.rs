//! State shared by the search, listing and detail flows.
//!
//! Every flow moves through the same states:
//!
//! ```text
//! Idle ──fetch──▶ Loading ──▶ Ready(T) | NotFound | Error
//!                    ▲                      │
//!                    └──── next fetch ──────┘
//! ```
//!
//! A flow takes a [`Ticket`] from its [`Generation`] when it starts a request
//! and applies the completion only while that ticket is still current. A newer
//! request therefore always wins over an older one that finishes late.

use crate::domain::error::MovieHubError;
use std::sync::atomic::{AtomicU64, Ordering};

/// Request state of a flow.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowStatus<T> {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Ready(T),
    /// The catalog had no match for the last request.
    NotFound,
    /// The last request failed; the message is for display.
    Error(String),
}

impl<T> Default for FlowStatus<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FlowStatus<T> {
    /// Maps a fetch result, downgrading errors into states.
    pub fn from_result(result: crate::domain::error::Result<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(MovieHubError::NotFound(_)) => Self::NotFound,
            Err(e) => Self::Error(e.to_string()),
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// A generation number handed out when a request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request counter of one flow.
#[derive(Debug, Default)]
pub struct Generation(AtomicU64);

impl Generation {
    /// Starts a new request, invalidating every earlier ticket.
    pub fn next(&self) -> Ticket {
        Ticket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_is_current() {
        let generation = Generation::default();
        let first = generation.next();
        assert!(generation.is_current(first));

        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn errors_downgrade_into_states() {
        assert_eq!(FlowStatus::from_result(Ok(3)), FlowStatus::Ready(3));
        assert_eq!(
            FlowStatus::<u8>::from_result(Err(MovieHubError::NotFound("x".into()))),
            FlowStatus::NotFound
        );
        assert!(matches!(
            FlowStatus::<u8>::from_result(Err(MovieHubError::Transport("timeout".into()))),
            FlowStatus::Error(message) if message.contains("timeout")
        ));
    }
}
