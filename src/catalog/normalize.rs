//! Field normalization used while loading a catalog.
//!
//! The scraped source marks unknown values in several ways ("N/A", "nan",
//! empty strings); everything here maps those to `None` or drops them.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("year pattern is valid"));

static REVIEW_COUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*(k)?").expect("review count pattern is valid")
});

/// Category assigned to records scraped without one
pub const DEFAULT_CATEGORY: &str = "General";

/// Oldest publication year accepted as plausible
pub const MIN_PUBLICATION_YEAR: i32 = 1900;

/// Whether a raw value is one of the source's "unknown" markers
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") || trimmed.eq_ignore_ascii_case("nan")
}

/// Parse a review count display string.
///
/// `"3500+"` → 3500, `"1.2K reviews"` → 1200, `"12,000+"` → 12000, `"N/A"` → `None`.
pub fn parse_review_count(display: &str) -> Option<u64> {
    if is_missing(display) {
        return None;
    }

    let cleaned = display.trim().replace([',', '+'], "");
    let captures = REVIEW_COUNT.captures(&cleaned)?;
    let number = captures[1].parse::<f64>().ok()?;
    let multiplier = if captures.get(2).is_some() { 1000.0 } else { 1.0 };

    Some((number * multiplier).round() as u64)
}

/// Parse a rating, rejecting values outside [0, 5]
pub fn parse_rating(raw: &str) -> Option<f64> {
    if is_missing(raw) {
        return None;
    }

    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|rating| (0.0..=5.0).contains(rating))
}

/// Extract a plausible year from a free-form date string.
///
/// Handles "October 27 2009", "Oct 2009", "10/27/2009", "2020-03-15" and
/// bare years; the first 19xx/20xx token must lie in
/// [`MIN_PUBLICATION_YEAR`, `max_year`].
pub fn parse_publication_year(date: &str, max_year: i32) -> Option<i32> {
    if is_missing(date) {
        return None;
    }

    let year = YEAR_PATTERN.find(date)?.as_str().parse::<i32>().ok()?;
    (MIN_PUBLICATION_YEAR..=max_year).contains(&year).then_some(year)
}

/// Trim labels, drop unknown markers, and de-duplicate keeping first-seen order
pub fn clean_labels(labels: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    labels
        .iter()
        .map(|label| label.trim())
        .filter(|label| !is_missing(label))
        .filter(|label| seen.insert(label.to_string()))
        .map(str::to_string)
        .collect()
}
