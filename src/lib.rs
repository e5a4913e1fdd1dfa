//! MovieHub: a terminal movie-discovery client.
//!
//! MovieHub searches the OMDb movie catalog, browses curated keyword lists
//! page by page, shows movie details, and keeps a persisted watchlist:
//! - Single best-match title search
//! - Paged keyword listings with per-item rating enrichment
//! - Detail views composed with bookmark state
//! - A watchlist saved to a local JSON key-value store on every change
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Front End (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │ Events ↓   ↑ Actions
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Search, listing and detail flows                 │
//! │  - Event handling and action dispatching            │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Catalog       │   │ Storage Layer │   │ Worker Layer  │
//! │ (catalog/)    │   │ (storage/)    │   │ (worker/)     │
//! │ - OMDb client │   │ - Bookmarks   │   │ - Persistence │
//! │ - Enrichment  │   │ - JSON file   │   │ - Trace links │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, UI, Observability          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Flows, application state, and the event/action model
//! - [`catalog`]: The [`Catalog`] trait and its OMDb client
//! - [`cli`]: Command-line arguments and shell command parsing
//! - [`domain`]: Movie records and the crate error type
//! - [`infrastructure`]: Platform paths
//! - [`storage`]: Key-value backends and the [`BookmarkStore`]
//! - [`worker`]: Background persistence worker
//! - [`ui`]: View models and text rendering
//! - [`observability`]: Tracing setup with optional OTLP file export
//!
//! # Configuration
//!
//! Configuration is read from `~/.config/moviehub/config.toml`:
//!
//! ```toml
//! api_key = "your-omdb-key"
//! request_timeout_secs = 10
//! trace_level = "info"
//! stop_at_end = true
//!
//! [[lists]]
//! name = "Now Playing"
//! keyword = "2024"
//!
//! [[lists]]
//! name = "Popular"
//! keyword = "comedy"
//! ```
//!
//! The `OMDB_API_KEY` environment variable overrides `api_key`.
//!
//! # Examples
//!
//! ```rust,no_run
//! use moviehub::{handle_event, initialize, Config, Event};
//!
//! # async fn run() -> moviehub::Result<()> {
//! let config = Config::load(None)?;
//! let state = initialize(&config)?;
//!
//! let actions = handle_event(&state, Event::Search("Inception".to_string())).await?;
//! for action in actions {
//!     println!("{action:?}");
//! }
//!
//! state.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, Screen};
pub use catalog::{Catalog, OmdbClient};
pub use domain::{Bookmark, MovieDetail, MovieHubError, MovieSummary, Result};
pub use storage::BookmarkStore;

use crate::infrastructure::{expand_tilde, get_data_dir, STORE_FILE_NAME};
use crate::storage::JsonFileStore;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable overriding the configured API key.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

const DEFAULT_API_URL: &str = "https://www.omdbapi.com/";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// A named keyword listing shown by the browse view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListConfig {
    /// Display name, also used to address the list.
    pub name: String,
    /// Search keyword sent to the catalog.
    pub keyword: String,
}

impl ListConfig {
    pub fn new(name: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keyword: keyword.into(),
        }
    }
}

/// Application configuration, deserialized from TOML.
///
/// Every key is optional; omitted keys take the [`Default`] values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OMDb API key. Required before any catalog request is made.
    pub api_key: Option<String>,

    /// Catalog endpoint. Default: `https://www.omdbapi.com/`
    pub api_url: String,

    /// Per-request timeout in seconds. Default: 10
    pub request_timeout_secs: u64,

    /// Directory holding the store and trace files. `~` is expanded.
    ///
    /// Default: the platform data directory, `~/.local/share/moviehub` on Linux.
    pub data_dir: Option<String>,

    /// Tracing filter directive such as `info` or `moviehub=debug`.
    ///
    /// `RUST_LOG` takes precedence. Default: `"warn"`
    pub trace_level: Option<String>,

    /// Export spans as OTLP JSON to `<data_dir>/moviehub-otlp.json`.
    pub trace_export: bool,

    /// Stop paging a list once the catalog returns an empty page.
    pub stop_at_end: bool,

    /// Lists shown by the browse view, in display order.
    pub lists: Vec<ListConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: None,
            trace_level: None,
            trace_export: false,
            stop_at_end: false,
            lists: vec![
                ListConfig::new("Now Playing", "2024"),
                ListConfig::new("Popular", "comedy"),
            ],
        }
    }
}

impl Config {
    /// Loads configuration and applies the `OMDB_API_KEY` override.
    ///
    /// With `path` set, that file must exist. Without it, the default location
    /// is tried and a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MovieHubError::Config`] if the file cannot be read or is not
    /// valid TOML for this schema.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match infrastructure::config_path().filter(|path| path.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    tracing::debug!("no config file, using defaults");
                    Self::default()
                }
            },
        };

        Ok(config.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            MovieHubError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`MovieHubError::Config`] on malformed TOML or mistyped keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use moviehub::Config;
    ///
    /// let config = Config::from_toml_str("api_key = \"abc\"\nstop_at_end = true").unwrap();
    /// assert_eq!(config.api_key.as_deref(), Some("abc"));
    /// assert!(config.stop_at_end);
    /// assert_eq!(config.lists.len(), 2);
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| MovieHubError::Config(e.to_string()))
    }

    /// Replaces the API key with `key` when it is present and non-blank.
    #[must_use]
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// Resolved data directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(get_data_dir, expand_tilde)
    }

    /// Path of the key-value store file.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir().join(STORE_FILE_NAME)
    }
}

/// Builds the application state from configuration.
///
/// Creates the OMDb client, opens the store file (an unreadable file is reset
/// to empty), loads the watchlist, and starts the persistence worker. Must be
/// called from within a Tokio runtime.
///
/// # Errors
///
/// - [`MovieHubError::MissingApiKey`] when no API key is configured
/// - [`MovieHubError::Io`] when the data directory cannot be created
pub fn initialize(config: &Config) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize").entered();

    let catalog = OmdbClient::from_config(config)?;
    let storage = JsonFileStore::open_or_reset(config.store_path())?;
    let bookmarks = BookmarkStore::init(Box::new(storage));

    tracing::debug!(bookmarks = bookmarks.len(), lists = config.lists.len(), "moviehub initialized");

    Ok(AppState::new(Arc::new(catalog), Arc::new(bookmarks), config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_lists() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://www.omdbapi.com/");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(
            config.lists,
            vec![ListConfig::new("Now Playing", "2024"), ListConfig::new("Popular", "comedy")]
        );
        assert!(!config.stop_at_end);
    }

    #[test]
    fn toml_lists_replace_the_defaults() {
        let config = Config::from_toml_str(
            r#"
            data_dir = "/tmp/moviehub-test"

            [[lists]]
            name = "Horror"
            keyword = "horror"
            "#,
        )
        .unwrap();

        assert_eq!(config.lists, vec![ListConfig::new("Horror", "horror")]);
        assert_eq!(config.store_path(), PathBuf::from("/tmp/moviehub-test/moviehub.json"));
    }

    #[test]
    fn mistyped_keys_are_config_errors() {
        assert!(matches!(
            Config::from_toml_str("request_timeout_secs = \"soon\""),
            Err(MovieHubError::Config(_))
        ));
    }

    #[test]
    fn environment_key_overrides_file_key() {
        let config = Config {
            api_key: Some("from-file".to_string()),
            ..Config::default()
        };

        let overridden = config.clone().with_api_key_override(Some("from-env".to_string()));
        assert_eq!(overridden.api_key.as_deref(), Some("from-env"));

        let blank = config.with_api_key_override(Some("  ".to_string()));
        assert_eq!(blank.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(Config::load(Some(&missing)), Err(MovieHubError::Config(_))));
    }
}
