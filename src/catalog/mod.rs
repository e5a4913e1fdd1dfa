//! Remote catalog access.
//!
//! - `client`: the [`Catalog`] trait and the OMDb HTTP client
//! - `enrich`: concurrent rating lookups for listing pages
//! - `models`: raw OMDb payloads

pub mod client;
pub mod enrich;
pub mod models;

pub use client::{Catalog, OmdbClient};
pub use enrich::enrich_page;
