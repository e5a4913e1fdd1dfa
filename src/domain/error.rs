//! Error types for MovieHub.
//!
//! This module defines the centralized error type [`MovieHubError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The first four variants form the taxonomy every flow downgrades into view
//! state: [`NotFound`](MovieHubError::NotFound), [`Transport`](MovieHubError::Transport),
//! [`Parse`](MovieHubError::Parse) and [`Storage`](MovieHubError::Storage). None of
//! them are allowed to escape a flow as a fatal error.

use thiserror::Error;

/// The main error type for MovieHub operations.
///
/// # Examples
///
/// ```
/// use moviehub::MovieHubError;
///
/// fn lookup() -> Result<(), MovieHubError> {
///     Err(MovieHubError::NotFound("tt0000000".to_string()))
/// }
///
/// assert!(lookup().unwrap_err().is_not_found());
/// ```
#[derive(Debug, Error)]
pub enum MovieHubError {
    /// The catalog reported no match for the request.
    ///
    /// The string carries the query or identifier that was looked up.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The HTTP request failed: connection, timeout, or a non-success status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The catalog answered with a payload of an unexpected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Reading or writing the persisted key-value data failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No OMDb API key was configured.
    #[error("No API key configured: set `api_key` in the config file or the OMDB_API_KEY environment variable")]
    MissingApiKey,

    /// Communication with the persistence worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

impl MovieHubError {
    /// Returns `true` for [`MovieHubError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// A specialized `Result` type for MovieHub operations.
pub type Result<T> = std::result::Result<T, MovieHubError>;
