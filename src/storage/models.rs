//! Storage record models for the persistence layer.
//!
//! These types are the on-disk representation of domain values, kept separate so
//! the persisted field names can stay stable while domain types evolve.

use crate::domain::Bookmark;
use serde::{Deserialize, Serialize};

/// Persisted form of a [`Bookmark`].
///
/// Field names match collections written by earlier MovieHub releases, which
/// spelled the poster field `Poster`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "Poster")]
    pub poster: String,
    pub rating: f64,
    pub year: String,

    /// Absent in collections saved before timestamps were recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<i64>,
}

impl From<&Bookmark> for BookmarkRecord {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id.clone(),
            title: bookmark.title.clone(),
            poster: bookmark.poster.clone(),
            rating: bookmark.rating,
            year: bookmark.year.clone(),
            saved_at: bookmark.saved_at,
        }
    }
}

impl From<BookmarkRecord> for Bookmark {
    fn from(record: BookmarkRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            poster: record.poster,
            rating: record.rating,
            year: record.year,
            saved_at: record.saved_at,
        }
    }
}
