//! Storage layer for the persisted watchlist.
//!
//! This module provides the key-value abstraction the watchlist is saved
//! through, its two backends, and the [`BookmarkStore`] built on top.
//!
//! # Modules
//!
//! - `backend`: the [`KeyValueStore`] trait
//! - `json`: JSON file backend with atomic writes
//! - `memory`: in-process backend
//! - `models`: persisted record types, separate from domain models
//! - `bookmarks`: the bookmark store and its load/persist lifecycle

pub mod backend;
pub mod bookmarks;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::KeyValueStore;
pub use bookmarks::{load_bookmarks, BookmarkStore, BOOKMARKS_KEY};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use models::BookmarkRecord;
