//! Raw OMDb response payloads and their mapping into domain records.
//!
//! OMDb answers every request with HTTP 200 and reports failures in-band:
//! `"Response": "False"` plus an `"Error"` message. A failed payload must never
//! be mapped into a record with blank fields.

use crate::domain::error::{MovieHubError, Result};
use crate::domain::{parse_rating, MovieDetail, MovieSummary, NO_POSTER};
use serde::Deserialize;

fn is_true(response: &str) -> bool {
    response.eq_ignore_ascii_case("true")
}

/// Payload of a title (`t=`) or identifier (`i=`) lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbTitle {
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
}

impl OmdbTitle {
    #[must_use]
    pub fn is_success(&self) -> bool {
        is_true(&self.response)
    }

    /// Checks the envelope and pulls out the two fields every record needs.
    fn require_identity(&mut self, query: &str) -> Result<(String, String)> {
        if !self.is_success() {
            let reason = self.error.as_deref().unwrap_or("no match");
            tracing::debug!(query = %query, reason = %reason, "catalog reported no match");
            return Err(MovieHubError::NotFound(query.to_string()));
        }

        let title = self
            .title
            .take()
            .filter(|title| !title.is_empty())
            .ok_or_else(|| MovieHubError::Parse(format!("payload for {query:?} has no Title")))?;
        let id = self
            .imdb_id
            .take()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| MovieHubError::Parse(format!("payload for {query:?} has no imdbID")))?;

        Ok((id, title))
    }

    /// Maps a lookup payload into a summary.
    ///
    /// # Errors
    ///
    /// [`MovieHubError::NotFound`] for a `"False"` response and
    /// [`MovieHubError::Parse`] when the title or identifier is missing.
    pub fn into_summary(mut self, query: &str) -> Result<MovieSummary> {
        let (id, title) = self.require_identity(query)?;
        Ok(MovieSummary {
            id: Some(id),
            title,
            poster: self.poster.unwrap_or_else(|| NO_POSTER.to_string()),
            rating: parse_rating(self.imdb_rating.as_deref()),
            year: self.year.unwrap_or_default(),
        })
    }

    /// Maps a lookup payload into a full detail record.
    ///
    /// # Errors
    ///
    /// Same as [`OmdbTitle::into_summary`].
    pub fn into_detail(mut self, query: &str) -> Result<MovieDetail> {
        let (id, title) = self.require_identity(query)?;
        Ok(MovieDetail {
            id,
            title,
            poster: self.poster.unwrap_or_else(|| NO_POSTER.to_string()),
            rating: parse_rating(self.imdb_rating.as_deref()),
            year: self.year.unwrap_or_default(),
            plot: self.plot.unwrap_or_default(),
            director: self.director.unwrap_or_default(),
            actors: self.actors.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            runtime: self.runtime.unwrap_or_default(),
            language: self.language.unwrap_or_default(),
        })
    }
}

/// Payload of a paged listing (`s=`) request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbSearchPage {
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
}

impl OmdbSearchPage {
    #[must_use]
    pub fn is_success(&self) -> bool {
        is_true(&self.response)
    }
}

/// One entry of a listing page. Listings carry no rating.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const INCEPTION: &str = r#"{
        "Title": "Inception", "Year": "2010", "Rated": "PG-13", "Runtime": "148 min",
        "Genre": "Action, Adventure, Sci-Fi", "Director": "Christopher Nolan",
        "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
        "Plot": "A thief who steals corporate secrets through the use of dream-sharing technology.",
        "Language": "English, Japanese, French",
        "Poster": "https://m.media-amazon.com/images/M/inception.jpg",
        "imdbRating": "8.8", "imdbID": "tt1375666", "Type": "movie", "Response": "True"
    }"#;

    #[test]
    fn maps_title_payload_to_summary() {
        let payload: OmdbTitle = serde_json::from_str(INCEPTION).unwrap();
        let summary = payload.into_summary("Inception").unwrap();

        assert_eq!(summary.id.as_deref(), Some("tt1375666"));
        assert_eq!(summary.title, "Inception");
        assert_eq!(summary.rating, 8.8);
        assert_eq!(summary.year, "2010");
    }

    #[test]
    fn maps_title_payload_to_detail() {
        let payload: OmdbTitle = serde_json::from_str(INCEPTION).unwrap();
        let detail = payload.into_detail("tt1375666").unwrap();

        assert_eq!(detail.director, "Christopher Nolan");
        assert_eq!(detail.runtime, "148 min");
        assert_eq!(detail.genres(), vec!["Action", "Adventure", "Sci-Fi"]);
    }

    #[test]
    fn false_response_is_not_found() {
        let payload: OmdbTitle =
            serde_json::from_str(r#"{"Response":"False","Error":"Movie not found!"}"#).unwrap();
        assert!(payload.into_summary("zzzz").unwrap_err().is_not_found());
    }

    #[test]
    fn success_without_title_is_a_parse_error() {
        let payload: OmdbTitle =
            serde_json::from_str(r#"{"Response":"True","imdbID":"tt1"}"#).unwrap();
        assert!(matches!(
            payload.into_detail("tt1"),
            Err(MovieHubError::Parse(_))
        ));
    }

    #[test]
    fn missing_poster_and_rating_use_sentinels() {
        let payload: OmdbTitle = serde_json::from_str(
            r#"{"Response":"True","Title":"Obscure","imdbID":"tt9","imdbRating":"N/A"}"#,
        )
        .unwrap();
        let summary = payload.into_summary("Obscure").unwrap();

        assert_eq!(summary.poster, NO_POSTER);
        assert_eq!(summary.rating, 0.0);
    }

    #[test]
    fn search_page_defaults_to_empty() {
        let page: OmdbSearchPage =
            serde_json::from_str(r#"{"Response":"False","Error":"Movie not found!"}"#).unwrap();
        assert!(!page.is_success());
        assert!(page.search.is_empty());
    }
}
