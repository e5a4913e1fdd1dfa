//! Domain layer for MovieHub.
//!
//! This module contains the core record types and the error type shared by every
//! other layer. It has no knowledge of HTTP, files, or the terminal.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie summaries, details, and bookmarks
//!
//! # Examples
//!
//! ```
//! use moviehub::domain::{Bookmark, Result};
//!
//! fn save_for_later() -> Result<Bookmark> {
//!     Ok(Bookmark::new("tt1375666", "Inception", "N/A", 8.8, "2010"))
//! }
//! ```

pub mod error;
pub mod movie;

pub use error::{MovieHubError, Result};
pub use movie::{parse_rating, Bookmark, MovieDetail, MovieSummary, NO_POSTER};
