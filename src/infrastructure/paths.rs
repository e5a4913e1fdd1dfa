//! Path resolution for configuration, data, and trace files.
//!
//! Locations follow the platform conventions reported by the `dirs` crate. On
//! Linux that is `~/.config/moviehub` for configuration and
//! `~/.local/share/moviehub` for data.

use std::path::PathBuf;

/// Application directory name under the platform config/data roots.
const APP_DIR: &str = "moviehub";

/// File holding the key-value store (and with it the watchlist).
pub const STORE_FILE_NAME: &str = "moviehub.json";

/// File receiving exported spans when trace export is enabled.
pub const TRACE_FILE_NAME: &str = "moviehub-otlp.json";

/// Returns the default data directory for MovieHub storage.
///
/// Falls back to a relative `.moviehub` directory when the platform reports no
/// data directory (for example a stripped-down container without `$HOME`).
///
/// # Examples
///
/// ```
/// use moviehub::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("moviehub") || data_dir.ends_with(".moviehub"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".moviehub"), |dir| dir.join(APP_DIR))
}

/// Returns the default configuration file path, if a config directory exists.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths on hosts without a home
/// directory, are returned unchanged.
///
/// # Examples
///
/// ```
/// use moviehub::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// if let Some(home) = dirs::home_dir() {
///     assert_eq!(expand_tilde("~/movies"), home.join("movies"));
///     assert_eq!(expand_tilde("~"), home);
/// }
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
