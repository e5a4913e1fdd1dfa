//! Movie domain models.
//!
//! Three record shapes flow through the crate:
//!
//! - [`MovieSummary`]: one search or listing result, built per fetch
//! - [`MovieDetail`]: the full metadata behind a detail view
//! - [`Bookmark`]: the persisted subset of a summary kept in the watchlist
//!
//! Summaries and details are never cached; only bookmarks outlive a request.

use serde::{Deserialize, Serialize};

/// Poster value the catalog uses when no image exists.
pub const NO_POSTER: &str = "N/A";

/// Separator the catalog uses inside the genre field.
const GENRE_SEPARATOR: &str = ", ";

/// Parses a catalog rating string into a non-negative decimal.
///
/// Missing, `"N/A"`, negative and non-numeric values all yield `0.0`.
///
/// # Examples
///
/// ```
/// use moviehub::domain::parse_rating;
///
/// assert_eq!(parse_rating(Some("8.8")), 8.8);
/// assert_eq!(parse_rating(Some("N/A")), 0.0);
/// assert_eq!(parse_rating(None), 0.0);
/// ```
#[must_use]
pub fn parse_rating(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|rating| rating.is_finite() && *rating >= 0.0)
        .unwrap_or(0.0)
}

/// One result of a title search or a listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Catalog identifier (an IMDb id such as `tt1375666`).
    pub id: Option<String>,
    pub title: String,
    /// Poster URL, or [`NO_POSTER`].
    pub poster: String,
    /// Rating out of ten, `0.0` when unknown.
    pub rating: f64,
    /// Release year; series carry a range such as `2010–2014`.
    pub year: String,
}

impl MovieSummary {
    /// Returns `true` when the catalog supplied a poster image.
    #[must_use]
    pub fn has_poster(&self) -> bool {
        !self.poster.is_empty() && self.poster != NO_POSTER
    }
}

/// Full metadata for a single movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub poster: String,
    pub rating: f64,
    pub year: String,
    pub plot: String,
    pub director: String,
    /// Comma-separated cast list as the catalog reports it.
    pub actors: String,
    /// Comma-separated genre list as the catalog reports it.
    pub genre: String,
    pub runtime: String,
    pub language: String,
}

impl MovieDetail {
    /// Splits the genre field into individual genres.
    ///
    /// # Examples
    ///
    /// ```
    /// # use moviehub::domain::MovieDetail;
    /// # let mut detail = MovieDetail {
    /// #     id: "tt1".into(), title: "T".into(), poster: "N/A".into(), rating: 0.0,
    /// #     year: "2010".into(), plot: String::new(), director: String::new(),
    /// #     actors: String::new(), genre: String::new(), runtime: String::new(),
    /// #     language: String::new(),
    /// # };
    /// detail.genre = "Action, Adventure, Sci-Fi".to_string();
    /// assert_eq!(detail.genres(), vec!["Action", "Adventure", "Sci-Fi"]);
    /// ```
    #[must_use]
    pub fn genres(&self) -> Vec<&str> {
        self.genre
            .split(GENRE_SEPARATOR)
            .map(str::trim)
            .filter(|genre| !genre.is_empty())
            .collect()
    }

    /// Returns the summary view of this detail.
    #[must_use]
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: Some(self.id.clone()),
            title: self.title.clone(),
            poster: self.poster.clone(),
            rating: self.rating,
            year: self.year.clone(),
        }
    }
}

/// A movie saved to the watchlist.
///
/// Identifiers are unique within a bookmark collection; see
/// [`BookmarkStore`](crate::storage::BookmarkStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub poster: String,
    pub rating: f64,
    pub year: String,
    /// Unix timestamp of when the bookmark was created, if known.
    pub saved_at: Option<i64>,
}

impl Bookmark {
    /// Creates a bookmark stamped with the current time.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        poster: impl Into<String>,
        rating: f64,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            poster: poster.into(),
            rating,
            year: year.into(),
            saved_at: Some(chrono::Utc::now().timestamp()),
        }
    }

    /// Derives a bookmark from a loaded detail view.
    #[must_use]
    pub fn from_detail(detail: &MovieDetail) -> Self {
        Self::new(
            detail.id.clone(),
            detail.title.clone(),
            detail.poster.clone(),
            detail.rating,
            detail.year.clone(),
        )
    }

    /// Derives a bookmark from a summary. Returns `None` when the summary has no id.
    #[must_use]
    pub fn from_summary(summary: &MovieSummary) -> Option<Self> {
        let id = summary.id.clone()?;
        Some(Self::new(
            id,
            summary.title.clone(),
            summary.poster.clone(),
            summary.rating,
            summary.year.clone(),
        ))
    }

    /// Returns `true` when a poster image is available.
    #[must_use]
    pub fn has_poster(&self) -> bool {
        !self.poster.is_empty() && self.poster != NO_POSTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> MovieDetail {
        MovieDetail {
            id: "tt1375666".to_string(),
            title: "Inception".to_string(),
            poster: "https://example.com/inception.jpg".to_string(),
            rating: 8.8,
            year: "2010".to_string(),
            plot: "A thief who steals corporate secrets.".to_string(),
            director: "Christopher Nolan".to_string(),
            actors: "Leonardo DiCaprio, Joseph Gordon-Levitt".to_string(),
            genre: "Action, Adventure, Sci-Fi".to_string(),
            runtime: "148 min".to_string(),
            language: "English, Japanese, French".to_string(),
        }
    }

    #[test]
    fn rating_falls_back_to_zero() {
        assert_eq!(parse_rating(Some(" 7.4 ")), 7.4);
        assert_eq!(parse_rating(Some("N/A")), 0.0);
        assert_eq!(parse_rating(Some("")), 0.0);
        assert_eq!(parse_rating(Some("-3")), 0.0);
        assert_eq!(parse_rating(Some("NaN")), 0.0);
        assert_eq!(parse_rating(None), 0.0);
    }

    #[test]
    fn genres_split_on_catalog_separator() {
        let mut detail = detail();
        assert_eq!(detail.genres(), vec!["Action", "Adventure", "Sci-Fi"]);

        detail.genre = "N/A".to_string();
        assert_eq!(detail.genres(), vec!["N/A"]);

        detail.genre.clear();
        assert!(detail.genres().is_empty());
    }

    #[test]
    fn bookmark_from_detail_keeps_summary_fields() {
        let bookmark = Bookmark::from_detail(&detail());
        assert_eq!(bookmark.id, "tt1375666");
        assert_eq!(bookmark.title, "Inception");
        assert_eq!(bookmark.rating, 8.8);
        assert!(bookmark.saved_at.is_some());
        assert!(bookmark.has_poster());
    }

    #[test]
    fn summary_without_id_cannot_be_bookmarked() {
        let mut summary = detail().summary();
        summary.id = None;
        assert!(Bookmark::from_summary(&summary).is_none());
    }

    #[test]
    fn poster_sentinel_means_no_image() {
        let mut summary = detail().summary();
        assert!(summary.has_poster());
        summary.poster = NO_POSTER.to_string();
        assert!(!summary.has_poster());
    }
}
