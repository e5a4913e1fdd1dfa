//! Rating enrichment for listing pages.
//!
//! Listing pages carry no rating, so every item gets one detail lookup. The
//! lookups for a page run concurrently and are awaited together; the page is
//! returned only once all of them have settled.
//!
//! Partial failures are handled item by item:
//!
//! - lookup succeeds: the item takes the detail's rating
//! - lookup reports not-found: the item is kept with rating `0.0`
//! - lookup fails (transport or parse): the item is dropped with a warning
//!
//! Items without an identifier cannot be looked up and are kept with rating `0.0`.

use crate::catalog::models::OmdbSearchItem;
use crate::domain::error::Result;
use crate::domain::{MovieDetail, MovieSummary, NO_POSTER};
use futures_util::future::join_all;
use std::future::Future;

/// Enriches every item of a page, preserving page order.
pub async fn enrich_page<F, Fut>(items: Vec<OmdbSearchItem>, lookup: F) -> Vec<MovieSummary>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<MovieDetail>>,
{
    let requested = items.len();
    let lookup = &lookup;

    let enriched: Vec<MovieSummary> = join_all(items.into_iter().map(|item| enrich_item(item, lookup)))
        .await
        .into_iter()
        .flatten()
        .collect();

    if enriched.len() < requested {
        tracing::warn!(
            requested = requested,
            kept = enriched.len(),
            "dropped listing items whose rating lookup failed"
        );
    }

    enriched
}

async fn enrich_item<F, Fut>(item: OmdbSearchItem, lookup: &F) -> Option<MovieSummary>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<MovieDetail>>,
{
    let Some(title) = item.title.filter(|title| !title.is_empty()) else {
        tracing::warn!(id = ?item.imdb_id, "listing item has no title");
        return None;
    };

    let mut summary = MovieSummary {
        id: item.imdb_id.filter(|id| !id.is_empty()),
        title,
        poster: item.poster.unwrap_or_else(|| NO_POSTER.to_string()),
        rating: 0.0,
        year: item.year.unwrap_or_default(),
    };

    let Some(id) = summary.id.clone() else {
        return Some(summary);
    };

    match lookup(id.clone()).await {
        Ok(detail) => summary.rating = detail.rating,
        Err(e) if e.is_not_found() => {
            tracing::debug!(id = %id, "no detail for listing item, rating unknown");
        }
        Err(e) => {
            tracing::warn!(id = %id, error = %e, "rating lookup failed");
            return None;
        }
    }

    Some(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MovieHubError;
    use std::future::ready;

    fn item(id: &str, title: &str) -> OmdbSearchItem {
        OmdbSearchItem {
            title: Some(title.to_string()),
            year: Some("2024".to_string()),
            imdb_id: Some(id.to_string()),
            kind: Some("movie".to_string()),
            poster: None,
        }
    }

    fn detail(id: &str, rating: f64) -> MovieDetail {
        MovieDetail {
            id: id.to_string(),
            title: id.to_string(),
            poster: NO_POSTER.to_string(),
            rating,
            year: "2024".to_string(),
            plot: String::new(),
            director: String::new(),
            actors: String::new(),
            genre: String::new(),
            runtime: String::new(),
            language: String::new(),
        }
    }

    #[tokio::test]
    async fn ratings_come_from_detail_lookups() {
        let items = vec![item("tt1", "One"), item("tt2", "Two")];
        let page = enrich_page(items, |id| ready(Ok(detail(&id, if id == "tt1" { 6.5 } else { 7.5 })))).await;

        assert_eq!(page.len(), 2);
        assert_eq!(page[0].title, "One");
        assert_eq!(page[0].rating, 6.5);
        assert_eq!(page[1].rating, 7.5);
        assert_eq!(page[1].poster, NO_POSTER);
    }

    #[tokio::test]
    async fn failed_lookups_drop_only_their_item() {
        let items = vec![item("tt1", "One"), item("tt2", "Two"), item("tt3", "Three")];
        let page = enrich_page(items, |id| {
            ready(match id.as_str() {
                "tt2" => Err(MovieHubError::Transport("connection reset".to_string())),
                "tt3" => Err(MovieHubError::NotFound(id.clone())),
                _ => Ok(detail(&id, 8.0)),
            })
        })
        .await;

        let ids: Vec<_> = page.iter().filter_map(|m| m.id.as_deref()).collect();
        assert_eq!(ids, vec!["tt1", "tt3"]);
        assert_eq!(page[1].rating, 0.0);
    }

    #[tokio::test]
    async fn items_without_id_skip_the_lookup() {
        let mut anonymous = item("", "No Id");
        anonymous.imdb_id = None;

        let page = enrich_page(vec![anonymous], |_| {
            ready(Err(MovieHubError::Transport("must not be called".to_string())))
        })
        .await;

        assert_eq!(page.len(), 1);
        assert!(page[0].id.is_none());
        assert_eq!(page[0].rating, 0.0);
    }
}
