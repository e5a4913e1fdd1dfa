//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves where configuration and data live on the host and
//! expands user-supplied paths.

pub mod paths;

pub use paths::{config_path, expand_tilde, get_data_dir, STORE_FILE_NAME, TRACE_FILE_NAME};
