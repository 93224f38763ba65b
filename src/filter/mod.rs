//! Filter engine: conjunction of per-field disjunctions over a book set.
//!
//! Every facet selection is an OR across its values; the facets, rating floor
//! and year range are combined with AND. An empty selection places no
//! constraint. A rating floor rejects unrated books, while a year range lets
//! books of unknown year through.

use crate::models::{BookRecord, FilterState, ScoredBook};

/// Whether `book` satisfies every constraint in `state`
pub fn matches(book: &BookRecord, state: &FilterState) -> bool {
    if !state.categories.is_empty() && !state.categories.iter().any(|c| *c == book.category) {
        return false;
    }

    if !intersects(&book.topics, &state.topics)
        || !intersects(&book.players_mentioned, &state.players)
        || !intersects(&book.teams_mentioned, &state.teams)
        || !intersects(&book.formats, &state.formats)
    {
        return false;
    }

    if let Some(floor) = state.min_rating {
        match book.rating {
            Some(rating) if rating >= floor => {}
            _ => return false,
        }
    }

    match book.publication_year {
        Some(year) => state.year_range.contains(year),
        None => true,
    }
}

/// Empty selection matches everything; otherwise at least one shared value
fn intersects(values: &[String], selected: &[String]) -> bool {
    selected.is_empty() || values.iter().any(|v| selected.contains(v))
}

/// Books matching `state`, in input order
pub fn filter_books<'a>(books: &[&'a BookRecord], state: &FilterState) -> Vec<&'a BookRecord> {
    books
        .iter()
        .copied()
        .filter(|book| matches(book, state))
        .collect()
}

/// Scored books matching `state`, in input order with their scores kept
pub fn filter_scored<'a>(books: Vec<ScoredBook<'a>>, state: &FilterState) -> Vec<ScoredBook<'a>> {
    if state.is_empty() {
        return books;
    }

    books
        .into_iter()
        .filter(|scored| matches(scored.book, state))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books() -> Vec<BookRecord> {
        vec![
            BookRecord::new("a", "a", "Legacy", "Author A", "Biography")
                .with_topics(vec!["Leadership"])
                .with_players(vec!["Michael Jordan"])
                .with_formats(vec!["Hardcover", "Kindle"])
                .with_rating(4.8)
                .with_publication_year(2020),
            BookRecord::new("b", "b", "Sideline", "Author B", "Biography")
                .with_topics(vec!["Leadership", "Coaching"])
                .with_teams(vec!["Chicago Bulls"])
                .with_formats(vec!["Paperback"])
                .with_rating(4.0)
                .with_publication_year(2005),
            BookRecord::new("c", "c", "Old Times", "Author C", "History"),
        ]
    }

    fn ids(books: &[&BookRecord]) -> Vec<String> {
        books.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn test_empty_state_is_neutral() {
        let books = books();
        let refs: Vec<&BookRecord> = books.iter().collect();
        assert_eq!(ids(&filter_books(&refs, &FilterState::default())), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_category_selection() {
        let books = books();
        let refs: Vec<&BookRecord> = books.iter().collect();
        let state = FilterState::new().with_categories(vec!["Biography"]);
        assert_eq!(ids(&filter_books(&refs, &state)), vec!["a", "b"]);
    }

    #[test]
    fn test_multi_valued_selection_is_any_of() {
        let books = books();
        let refs: Vec<&BookRecord> = books.iter().collect();

        let state = FilterState::new().with_topics(vec!["Coaching", "Nutrition"]);
        assert_eq!(ids(&filter_books(&refs, &state)), vec!["b"]);

        let state = FilterState::new().with_formats(vec!["Kindle", "Paperback"]);
        assert_eq!(ids(&filter_books(&refs, &state)), vec!["a", "b"]);

        let state = FilterState::new().with_players(vec!["Michael Jordan"]);
        assert_eq!(ids(&filter_books(&refs, &state)), vec!["a"]);

        let state = FilterState::new().with_teams(vec!["Chicago Bulls"]);
        assert_eq!(ids(&filter_books(&refs, &state)), vec!["b"]);
    }

    #[test]
    fn test_rating_floor_excludes_unrated() {
        let books = books();
        let refs: Vec<&BookRecord> = books.iter().collect();

        let state = FilterState::new().with_min_rating(4.5);
        assert_eq!(ids(&filter_books(&refs, &state)), vec!["a"]);

        let state = FilterState::new().with_min_rating(0.0);
        assert_eq!(ids(&filter_books(&refs, &state)), vec!["a", "b"]);
    }

    #[test]
    fn test_year_range_lets_unknown_years_through() {
        let books = books();
        let refs: Vec<&BookRecord> = books.iter().collect();

        let state = FilterState::new().with_year_range(Some(2010), None);
        assert_eq!(ids(&filter_books(&refs, &state)), vec!["a", "c"]);

        let state = FilterState::new().with_year_range(None, Some(2005));
        assert_eq!(ids(&filter_books(&refs, &state)), vec!["b", "c"]);

        let state = FilterState::new().with_year_range(Some(2005), Some(2005));
        assert_eq!(ids(&filter_books(&refs, &state)), vec!["b", "c"]);
    }

    #[test]
    fn test_fields_combine_with_and() {
        let books = books();
        let refs: Vec<&BookRecord> = books.iter().collect();

        let state = FilterState::new()
            .with_categories(vec!["Biography"])
            .with_topics(vec!["Leadership"])
            .with_min_rating(4.5);
        assert_eq!(ids(&filter_books(&refs, &state)), vec!["a"]);
    }

    #[test]
    fn test_empty_input() {
        let state = FilterState::new().with_categories(vec!["Biography"]);
        assert!(filter_books(&[], &state).is_empty());
        assert!(filter_scored(Vec::new(), &state).is_empty());
    }

    #[test]
    fn test_scored_filter_keeps_scores_and_order() {
        let books = books();
        let scored = vec![
            ScoredBook::new(&books[2], 0.0),
            ScoredBook::new(&books[1], 0.3),
            ScoredBook::new(&books[0], 0.6),
        ];
        let state = FilterState::new().with_categories(vec!["Biography"]);

        let kept = filter_scored(scored, &state);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].book.id, "b");
        assert_eq!(kept[0].score, 0.3);
        assert_eq!(kept[1].book.id, "a");
    }
}
