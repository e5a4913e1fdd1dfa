//! The catalog abstraction and its OMDb implementation.
//!
//! Every call hits the network; nothing is cached. Errors come back typed so
//! that each flow can decide how to downgrade them.

use crate::catalog::enrich::enrich_page;
use crate::catalog::models::{OmdbSearchPage, OmdbTitle};
use crate::domain::error::{MovieHubError, Result};
use crate::domain::{MovieDetail, MovieSummary};
use crate::Config;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::Instrument;

/// Remote movie metadata service.
///
/// The flows depend on this trait rather than on [`OmdbClient`], which keeps
/// them testable against an in-process fake.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Looks up the best match for a title.
    ///
    /// # Errors
    ///
    /// [`MovieHubError::NotFound`] when the service has no match or `title` is
    /// blank; [`MovieHubError::Transport`] or [`MovieHubError::Parse`] when the
    /// request fails.
    async fn search_by_title(&self, title: &str) -> Result<MovieSummary>;

    /// Fetches one page of a keyword listing with ratings filled in.
    ///
    /// A page the service has no results for is an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// [`MovieHubError::Transport`] or [`MovieHubError::Parse`] when the page
    /// request itself fails.
    async fn search_by_keyword(&self, keyword: &str, page: u32) -> Result<Vec<MovieSummary>>;

    /// Fetches full metadata for one identifier.
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::search_by_title`].
    async fn get_detail(&self, id: &str) -> Result<MovieDetail>;
}

/// HTTP client for the OMDb API.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Creates a client for `base_url` authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`MovieHubError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("moviehub/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MovieHubError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Creates a client from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MovieHubError::MissingApiKey`] when no key is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(MovieHubError::MissingApiKey)?;

        Self::new(
            config.api_url.clone(),
            api_key,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Issues one GET request and decodes the JSON body.
    async fn fetch<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| MovieHubError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MovieHubError::Transport(format!("catalog answered HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MovieHubError::Transport(e.to_string()))?;

        serde_json::from_str(&body)
            .map_err(|e| MovieHubError::Parse(format!("unexpected catalog payload: {e}")))
    }
}

#[async_trait]
impl Catalog for OmdbClient {
    async fn search_by_title(&self, title: &str) -> Result<MovieSummary> {
        let title = title.trim();
        if title.is_empty() {
            return Err(MovieHubError::NotFound(String::new()));
        }

        let payload: OmdbTitle = self
            .fetch(&[("t", title)])
            .instrument(tracing::debug_span!("catalog_search_by_title", title = %title))
            .await?;
        payload.into_summary(title)
    }

    async fn search_by_keyword(&self, keyword: &str, page: u32) -> Result<Vec<MovieSummary>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let page_number = page.to_string();
        let payload: OmdbSearchPage = self
            .fetch(&[("s", keyword), ("page", &page_number), ("type", "movie")])
            .instrument(tracing::debug_span!("catalog_search_by_keyword", keyword = %keyword, page = page))
            .await?;

        if !payload.is_success() {
            tracing::debug!(
                keyword = %keyword,
                page = page,
                reason = ?payload.error,
                "listing page has no results"
            );
            return Ok(Vec::new());
        }

        tracing::debug!(
            keyword = %keyword,
            page = page,
            items = payload.search.len(),
            total = ?payload.total_results,
            "listing page fetched"
        );

        Ok(enrich_page(payload.search, |id: String| async move { self.get_detail(&id).await }).await)
    }

    async fn get_detail(&self, id: &str) -> Result<MovieDetail> {
        let id = id.trim();
        if id.is_empty() {
            return Err(MovieHubError::NotFound(String::new()));
        }

        let payload: OmdbTitle = self
            .fetch(&[("i", id)])
            .instrument(tracing::debug_span!("catalog_get_detail", id = %id))
            .await?;
        payload.into_detail(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_fails_fast() {
        let config = Config {
            api_key: None,
            ..Config::default()
        };
        assert!(matches!(
            OmdbClient::from_config(&config),
            Err(MovieHubError::MissingApiKey)
        ));

        let blank = Config {
            api_key: Some("   ".to_string()),
            ..Config::default()
        };
        assert!(matches!(
            OmdbClient::from_config(&blank),
            Err(MovieHubError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn blank_input_issues_no_request() {
        // Port 9 (discard) is never served; any request would fail with Transport.
        let client = OmdbClient::new("http://127.0.0.1:9/", "key", Duration::from_millis(200)).unwrap();

        assert!(client.search_by_title("   ").await.unwrap_err().is_not_found());
        assert!(client.get_detail("").await.unwrap_err().is_not_found());
        assert!(client.search_by_keyword(" ", 1).await.unwrap().is_empty());
    }
}
