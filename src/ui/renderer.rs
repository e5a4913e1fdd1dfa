//! Text renderer for view models.
//!
//! Each view renders to a plain `String` so the caller decides where it goes
//! (stdout for the CLI, a buffer in tests).

use crate::app::flow::FlowStatus;
use crate::ui::helpers::{format_rating, movie_row};
use crate::ui::viewmodel::{BrowseView, DetailView, SearchView, View, WatchlistView};
use std::fmt::Write;

const RULE: &str = "────────────────────────────────────────────────────────────────────";

/// Renders a view to text.
#[must_use]
pub fn render(view: &View) -> String {
    let mut out = String::new();
    match view {
        View::Search(search) => render_search(&mut out, search),
        View::Browse(browse) => render_browse(&mut out, browse),
        View::Detail(detail) => render_detail(&mut out, detail),
        View::Watchlist(watchlist) => render_watchlist(&mut out, watchlist),
    }
    out
}

fn header(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{RULE}");
}

fn render_status_line<T>(out: &mut String, status: &FlowStatus<T>) -> bool {
    let line = match status {
        FlowStatus::Idle => "Nothing to show yet.",
        FlowStatus::Loading => "Loading…",
        FlowStatus::NotFound => "Movie not found.",
        FlowStatus::Error(message) => {
            let _ = writeln!(out, "Error: {message}");
            return false;
        }
        FlowStatus::Ready(_) => return true,
    };
    let _ = writeln!(out, "{line}");
    false
}

fn render_search(out: &mut String, view: &SearchView) {
    header(out, "Search");
    if !render_status_line(out, &view.status) {
        return;
    }
    if let FlowStatus::Ready(movie) = &view.status {
        let _ = writeln!(out, "{}", movie_row(movie.id.as_deref(), &movie.title, &movie.year, movie.rating));
        if movie.has_poster() {
            let _ = writeln!(out, "Poster: {}", movie.poster);
        }
    }
}

fn render_browse(out: &mut String, view: &BrowseView) {
    for list in &view.lists {
        header(out, &format!("{} (page {}, {} movies)", list.name, list.page, list.movies.len()));
        for movie in &list.movies {
            let _ = writeln!(out, "{}", movie_row(movie.id.as_deref(), &movie.title, &movie.year, movie.rating));
        }
        match &list.status {
            FlowStatus::Error(message) => {
                let _ = writeln!(out, "Last page failed: {message}");
            }
            FlowStatus::Ready(0) if list.exhausted => {
                let _ = writeln!(out, "No more results.");
            }
            FlowStatus::Idle => {
                let _ = writeln!(out, "Not loaded.");
            }
            _ => {}
        }
        let _ = writeln!(out);
    }
}

fn render_detail(out: &mut String, view: &DetailView) {
    let FlowStatus::Ready(detail) = &view.status else {
        header(out, "Detail");
        render_status_line(out, &view.status);
        return;
    };

    let marker = if view.bookmarked { "★ in watchlist" } else { "☆ not saved" };
    header(out, &format!("{} ({})  {marker}", detail.title, detail.year));

    let _ = writeln!(out, "Rating:    {}", format_rating(detail.rating));
    let _ = writeln!(out, "Genres:    {}", detail.genres().join(" · "));
    for (label, value) in [
        ("Runtime", &detail.runtime),
        ("Language", &detail.language),
        ("Director", &detail.director),
        ("Cast", &detail.actors),
    ] {
        if !value.is_empty() {
            let _ = writeln!(out, "{:<10} {value}", format!("{label}:"));
        }
    }
    if !detail.plot.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", detail.plot);
    }
}

fn render_watchlist(out: &mut String, view: &WatchlistView) {
    header(out, &format!("Watchlist: {}", view.summary()));
    if let Some(filter) = &view.filter {
        let _ = writeln!(out, "Filter: {filter} ({} shown)", view.entries.len());
    }
    if view.total == 0 {
        let _ = writeln!(out, "Bookmark a movie from its detail view to save it here.");
        return;
    }
    for bookmark in &view.entries {
        let _ = writeln!(out, "{}", movie_row(Some(&bookmark.id), &bookmark.title, &bookmark.year, bookmark.rating));
    }
}
