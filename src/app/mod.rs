//! Application layer coordinating flows, events, and actions.
//!
//! ```text
//! User Input → Event → handle_event → flows / bookmark store → Actions → front end
//! ```
//!
//! # Modules
//!
//! - [`flow`]: Request states and generation tickets shared by every flow
//! - [`search`]: Single best-match title search
//! - [`listing`]: Paged keyword lists with per-list serialization
//! - [`detail`]: Detail view composed with bookmark state
//! - [`state`]: The [`AppState`] container
//! - [`handler`]: Event processing
//! - [`actions`]: Side effects returned to the front end
//! - [`modes`]: The screen shown last

pub mod actions;
pub mod detail;
pub mod flow;
pub mod handler;
pub mod listing;
pub mod modes;
pub mod search;
pub mod state;

pub use actions::Action;
pub use detail::DetailFlow;
pub use flow::{FlowStatus, Generation, Ticket};
pub use handler::{handle_event, Event};
pub use listing::{ListSnapshot, ListingFlow};
pub use modes::Screen;
pub use search::{SearchFlow, SearchOutcome};
pub use state::AppState;
