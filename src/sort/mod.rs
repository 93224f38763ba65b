//! Sort engine.
//!
//! All orderings are stable: books with equal keys keep their incoming order,
//! so identical inputs always render identically. Missing numeric fields
//! count as zero and sink to the bottom of descending orders.

mod collation;
mod popularity;

pub use collation::{compare_titles, TitleCollator};
pub use popularity::{popularity_score, rating_points, recency_points, review_points};

use crate::models::{BookRecord, ScoredBook, SortOption};
use chrono::Datelike;
use std::cmp::Reverse;

/// Inputs to the sort beyond the results themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortContext {
    /// Whether the scores come from an active text query
    pub active_query: bool,

    /// Reference year for the recency bucket
    pub current_year: i32,
}

impl SortContext {
    pub fn new(active_query: bool) -> Self {
        Self {
            active_query,
            current_year: chrono::Utc::now().year(),
        }
    }

    /// Pin the reference year, e.g. for reproducible output
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }
}

/// Order `results` by `option` and drop the scores
pub fn sort_books<'a>(
    mut results: Vec<ScoredBook<'a>>,
    option: SortOption,
    context: &SortContext,
) -> Vec<&'a BookRecord> {
    match option {
        SortOption::Relevance if context.active_query => {
            results.sort_by(|a, b| a.score.total_cmp(&b.score));
        }
        SortOption::Relevance => {
            let year = context.current_year;
            results.sort_by_cached_key(|r| Reverse(popularity_score(r.book, year)));
        }
        SortOption::RatingDesc => {
            results.sort_by(|a, b| b.book.rating_or_zero().total_cmp(&a.book.rating_or_zero()));
        }
        SortOption::ReviewsDesc => {
            results.sort_by_key(|r| Reverse(r.book.review_count_or_zero()));
        }
        SortOption::Newest => {
            results.sort_by_key(|r| Reverse(r.book.publication_year_or_zero()));
        }
        SortOption::TitleAsc => {
            let collator = TitleCollator::new();
            results.sort_by(|a, b| collator.compare(&a.book.title, &b.book.title));
        }
    }

    results.into_iter().map(|r| r.book).collect()
}

/// Sort plain books, e.g. a filtered list with no search scores
pub fn sort_plain<'a>(
    books: &[&'a BookRecord],
    option: SortOption,
    context: &SortContext,
) -> Vec<&'a BookRecord> {
    let scored = books.iter().copied().map(ScoredBook::neutral).collect();
    sort_books(scored, option, context)
}
