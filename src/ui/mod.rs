//! Presentation layer: view models and their text rendering.
//!
//! ```text
//! flows + bookmark store → handle_event → View → render → String
//! ```
//!
//! - [`viewmodel`]: Display-ready view types, one per screen
//! - [`renderer`]: Plain-text rendering of views
//! - [`helpers`]: Rating and column formatting shared by the renderer

pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::render;
pub use viewmodel::{BrowseView, DetailView, SearchView, View, WatchlistView};
