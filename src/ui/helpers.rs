//! Shared formatting utilities for the text renderer.

/// Formats a rating with one decimal, or `-` when unknown.
///
/// # Examples
///
/// ```
/// use moviehub::ui::helpers::format_rating;
///
/// assert_eq!(format_rating(8.8), "8.8");
/// assert_eq!(format_rating(7.0), "7.0");
/// assert_eq!(format_rating(0.0), "-");
/// ```
#[must_use]
pub fn format_rating(rating: f64) -> String {
    if rating > 0.0 {
        format!("{rating:.1}")
    } else {
        "-".to_string()
    }
}

/// Shortens `text` to at most `max` characters, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Formats one movie row: padded title, year and rating columns.
#[must_use]
pub fn movie_row(id: Option<&str>, title: &str, year: &str, rating: f64) -> String {
    format!(
        "{:<11} {:<40} {:<11} {:>4}",
        id.unwrap_or("-"),
        truncate(title, 40),
        year,
        format_rating(rating)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate("Amélie", 10), "Amélie");
        assert_eq!(truncate("Amélie Poulain", 4), "Amé…");
    }

    #[test]
    fn rows_keep_columns_aligned() {
        let row = movie_row(Some("tt1375666"), "Inception", "2010", 8.8);
        assert!(row.starts_with("tt1375666   Inception"));
        assert!(row.ends_with(" 8.8"));

        let anonymous = movie_row(None, "Unknown", "", 0.0);
        assert!(anonymous.starts_with("-           Unknown"));
        assert!(anonymous.ends_with("   -"));
    }
}
