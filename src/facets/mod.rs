//! Facet aggregation over a book set

use crate::models::{BookRecord, FacetCounts};
use std::collections::HashMap;

/// Count categories, labels and years across `books` in a single pass.
///
/// Pass the full catalog for stable counts or a filtered subset for
/// narrowing counts. Books without a category or year contribute nothing
/// to those facets.
pub fn compute_facets<'a, I>(books: I) -> FacetCounts
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    let mut facets = FacetCounts::default();

    for book in books {
        if !book.category.is_empty() {
            bump(&mut facets.categories, &book.category);
        }
        for topic in &book.topics {
            bump(&mut facets.topics, topic);
        }
        for format in &book.formats {
            bump(&mut facets.formats, format);
        }
        for player in &book.players_mentioned {
            bump(&mut facets.players, player);
        }
        for team in &book.teams_mentioned {
            bump(&mut facets.teams, team);
        }
        if let Some(year) = book.publication_year {
            *facets.years.entry(year).or_insert(0) += 1;
        }
    }

    facets
}

fn bump(counts: &mut HashMap<String, usize>, value: &str) {
    match counts.get_mut(value) {
        Some(count) => *count += 1,
        None => {
            counts.insert(value.to_string(), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FacetField;

    fn books() -> Vec<BookRecord> {
        vec![
            BookRecord::new("a", "a", "Legacy", "Author A", "Biography")
                .with_topics(vec!["Leadership"])
                .with_formats(vec!["Hardcover", "Kindle"])
                .with_publication_year(2020),
            BookRecord::new("b", "b", "Sideline", "Author B", "Biography")
                .with_topics(vec!["Leadership", "Coaching"])
                .with_players(vec!["Michael Jordan"])
                .with_publication_year(2020),
            BookRecord::new("c", "c", "Old Times", "Author C", "History")
                .with_teams(vec!["Boston Celtics"]),
        ]
    }

    #[test]
    fn test_counts_every_occurrence() {
        let books = books();
        let facets = compute_facets(&books);

        assert_eq!(facets.count(FacetField::Categories, "Biography"), 2);
        assert_eq!(facets.count(FacetField::Topics, "Leadership"), 2);
        assert_eq!(facets.count(FacetField::Topics, "Coaching"), 1);
        assert_eq!(facets.count(FacetField::Formats, "Kindle"), 1);
        assert_eq!(facets.count(FacetField::Players, "Michael Jordan"), 1);
        assert_eq!(facets.count(FacetField::Teams, "Boston Celtics"), 1);
        assert_eq!(facets.years.get(&2020), Some(&2));
        assert_eq!(facets.years.len(), 1);
    }

    #[test]
    fn test_category_counts_sum_to_book_count() {
        let books = books();
        let facets = compute_facets(&books);
        assert_eq!(facets.total(FacetField::Categories), books.len());
    }

    #[test]
    fn test_subset_narrows_counts() {
        let books = books();
        let facets = compute_facets(books.iter().filter(|b| b.category == "History"));

        assert_eq!(facets.count(FacetField::Categories, "Biography"), 0);
        assert_eq!(facets.total(FacetField::Categories), 1);
        assert!(facets.topics.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compute_facets(&Vec::<BookRecord>::new()), FacetCounts::default());
    }
}
