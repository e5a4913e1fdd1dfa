//! In-process catalog fake shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use moviehub::domain::{MovieDetail, MovieSummary, NO_POSTER};
use moviehub::{Catalog, MovieHubError, Result};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn summary(id: &str, title: &str, rating: f64) -> MovieSummary {
    MovieSummary {
        id: Some(id.to_string()),
        title: title.to_string(),
        poster: NO_POSTER.to_string(),
        rating,
        year: "2010".to_string(),
    }
}

pub fn detail(id: &str, title: &str, rating: f64) -> MovieDetail {
    MovieDetail {
        id: id.to_string(),
        title: title.to_string(),
        poster: NO_POSTER.to_string(),
        rating,
        year: "2010".to_string(),
        plot: format!("The plot of {title}."),
        director: "Someone".to_string(),
        actors: "A, B".to_string(),
        genre: "Drama, Comedy".to_string(),
        runtime: "100 min".to_string(),
        language: "English".to_string(),
    }
}

/// Builds `count` summaries with ids `<prefix>1..=count`.
pub fn page(prefix: &str, count: usize) -> Vec<MovieSummary> {
    (1..=count)
        .map(|n| summary(&format!("{prefix}{n}"), &format!("{prefix} movie {n}"), 5.0))
        .collect()
}

/// Scripted catalog that records every call.
#[derive(Default)]
pub struct FakeCatalog {
    titles: HashMap<String, MovieSummary>,
    details: HashMap<String, MovieDetail>,
    pages: HashMap<(String, u32), Vec<MovieSummary>>,
    failing_pages: HashSet<(String, u32)>,
    slow_titles: HashMap<String, Duration>,
    pub calls: AtomicUsize,
    pub page_requests: Mutex<Vec<(String, u32)>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, movie: MovieSummary) -> Self {
        self.titles.insert(movie.title.to_lowercase(), movie);
        self
    }

    pub fn with_slow_title(mut self, movie: MovieSummary, delay: Duration) -> Self {
        self.slow_titles.insert(movie.title.to_lowercase(), delay);
        self.with_title(movie)
    }

    pub fn with_detail(mut self, detail: MovieDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    pub fn with_page(mut self, keyword: &str, page: u32, movies: Vec<MovieSummary>) -> Self {
        self.pages.insert((keyword.to_string(), page), movies);
        self
    }

    pub fn with_failing_page(mut self, keyword: &str, page: u32) -> Self {
        self.failing_pages.insert((keyword.to_string(), page));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_pages(&self, keyword: &str) -> Vec<u32> {
        self.page_requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| k == keyword)
            .map(|(_, page)| *page)
            .collect()
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn search_by_title(&self, title: &str) -> Result<MovieSummary> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = title.trim().to_lowercase();

        if let Some(delay) = self.slow_titles.get(&key) {
            tokio::time::sleep(*delay).await;
        }

        self.titles
            .get(&key)
            .cloned()
            .ok_or_else(|| MovieHubError::NotFound(title.to_string()))
    }

    async fn search_by_keyword(&self, keyword: &str, page: u32) -> Result<Vec<MovieSummary>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.page_requests
            .lock()
            .unwrap()
            .push((keyword.to_string(), page));

        // Give concurrent callers a chance to interleave.
        tokio::task::yield_now().await;

        let key = (keyword.to_string(), page);
        if self.failing_pages.contains(&key) {
            return Err(MovieHubError::Transport("connection reset".to_string()));
        }
        Ok(self.pages.get(&key).cloned().unwrap_or_default())
    }

    async fn get_detail(&self, id: &str) -> Result<MovieDetail> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.details
            .get(id.trim())
            .cloned()
            .ok_or_else(|| MovieHubError::NotFound(id.to_string()))
    }
}
