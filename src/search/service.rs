//! Search service: ranked text search over a catalog

use crate::catalog::Catalog;
use crate::models::ScoredBook;
use crate::search::config::SearchConfig;
use crate::search::error::SearchResult;
use crate::search::index::{IndexManager, TextIndex, TextMatch};
use crate::search::query::sanitize;
use std::time::Instant;

/// Fuzzy search over one catalog's book set.
///
/// The index is immutable once built; [`SearchService::rebuild`] replaces it
/// wholesale when the book set changes.
pub struct SearchService {
    index: Box<dyn TextIndex>,
    config: SearchConfig,
}

impl SearchService {
    /// Build the tantivy index for every book in `catalog`
    pub fn build(catalog: &Catalog, config: SearchConfig) -> SearchResult<Self> {
        let index = IndexManager::build(catalog.all(), &config)?;
        Ok(Self::with_index(Box::new(index), config))
    }

    /// Use an already built index, e.g. an alternative matcher
    pub fn with_index(index: Box<dyn TextIndex>, config: SearchConfig) -> Self {
        Self { index, config }
    }

    /// Replace the index with one built over `catalog`
    pub fn rebuild(&mut self, catalog: &Catalog) -> SearchResult<()> {
        self.index = Box::new(IndexManager::build(catalog.all(), &self.config)?);
        Ok(())
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of indexed documents
    pub fn indexed(&self) -> usize {
        self.index.len()
    }

    /// Whether `query` has enough searchable text to narrow the catalog.
    ///
    /// Query-syntax characters do not count, so malformed input such as
    /// `"+-"` browses everything.
    pub fn is_active_query(&self, query: &str) -> bool {
        sanitize(query).chars().count() >= self.config.min_query_chars
    }

    /// Ranked books for `query`, best first, scored so that 0 is the best match.
    ///
    /// Inactive queries return the whole catalog in order with neutral scores.
    /// Index failures are logged and degrade the same way, so this never fails.
    pub fn search<'a>(&self, catalog: &'a Catalog, query: &str) -> Vec<ScoredBook<'a>> {
        if !self.is_active_query(query) {
            return pass_through(catalog);
        }

        let start = Instant::now();
        let matches = match self.index.query(query.trim()) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(query, error = %e, "Text search failed, returning full catalog");
                return pass_through(catalog);
            }
        };

        let results = rank(catalog, matches);

        tracing::debug!(
            query,
            hits = results.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Text search executed"
        );

        results
    }

    /// Raw index matches, without mapping back to catalog records
    pub fn raw_matches(&self, query: &str) -> SearchResult<Vec<TextMatch>> {
        self.index.query(query.trim())
    }
}

fn pass_through(catalog: &Catalog) -> Vec<ScoredBook<'_>> {
    catalog.iter().map(ScoredBook::neutral).collect()
}

/// Resolve matches to catalog records and normalize scores to `1 - raw/best`.
///
/// Ordering is by raw score desc, then catalog order, so equal scores are
/// deterministic. Matches whose id is not in the catalog are skipped.
fn rank(catalog: &Catalog, matches: Vec<TextMatch>) -> Vec<ScoredBook<'_>> {
    let mut resolved: Vec<(usize, f32)> = matches
        .into_iter()
        .filter_map(|m| catalog.position(&m.id).map(|position| (position, m.score)))
        .collect();

    resolved.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let best = resolved.first().map(|&(_, score)| score).unwrap_or(0.0);
    let books = catalog.all();

    resolved
        .into_iter()
        .map(|(position, raw)| {
            let score = if best > 0.0 { (1.0 - raw / best).clamp(0.0, 1.0) } else { 0.0 };
            ScoredBook::new(&books[position], score)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookRecord;
    use crate::search::error::SearchError;

    fn catalog() -> Catalog {
        Catalog::load(vec![
            BookRecord::new("1", "eleven-rings", "Eleven Rings", "Phil Jackson", "Coaching"),
            BookRecord::new("2", "jordan-rules", "The Jordan Rules", "Sam Smith", "Biography"),
            BookRecord::new("3", "moneyball", "Moneyball", "Michael Lewis", "Baseball"),
        ])
    }

    /// Index stub returning canned matches
    struct FixedIndex(Vec<TextMatch>);

    impl TextIndex for FixedIndex {
        fn query(&self, _text: &str) -> SearchResult<Vec<TextMatch>> {
            Ok(self.0.clone())
        }

        fn len(&self) -> usize {
            self.0.len()
        }
    }

    struct BrokenIndex;

    impl TextIndex for BrokenIndex {
        fn query(&self, _text: &str) -> SearchResult<Vec<TextMatch>> {
            Err(SearchError::SearchFailed("index unavailable".to_string()))
        }

        fn len(&self) -> usize {
            0
        }
    }

    fn hit(id: &str, score: f32) -> TextMatch {
        TextMatch {
            id: id.to_string(),
            score,
        }
    }

    #[test]
    fn test_short_query_passes_through() {
        let catalog = catalog();
        let service = SearchService::build(&catalog, SearchConfig::default()).unwrap();

        for query in ["", "  ", "a", " j ", "+-!?"] {
            let results = service.search(&catalog, query);
            let ids: Vec<&str> = results.iter().map(|r| r.book.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2", "3"]);
            assert!(results.iter().all(|r| r.score == 0.0));
        }
    }

    #[test]
    fn test_scores_are_normalized() {
        let catalog = catalog();
        let index = FixedIndex(vec![hit("3", 2.0), hit("1", 8.0), hit("2", 4.0)]);
        let service = SearchService::with_index(Box::new(index), SearchConfig::default());

        let results = service.search(&catalog, "anything");
        let ids: Vec<&str> = results.iter().map(|r| r.book.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(results[0].score, 0.0);
        assert!((results[1].score - 0.5).abs() < 1e-6);
        assert!((results[2].score - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let catalog = catalog();
        let index = FixedIndex(vec![hit("3", 1.0), hit("1", 1.0)]);
        let service = SearchService::with_index(Box::new(index), SearchConfig::default());

        let results = service.search(&catalog, "tie");
        let ids: Vec<&str> = results.iter().map(|r| r.book.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let catalog = catalog();
        let index = FixedIndex(vec![hit("gone", 9.0), hit("2", 3.0)]);
        let service = SearchService::with_index(Box::new(index), SearchConfig::default());

        let results = service.search(&catalog, "jordan");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].book.id, "2");
        assert_eq!(results[0].score, 0.0);
    }

    #[test]
    fn test_index_failure_degrades_to_full_catalog() {
        let catalog = catalog();
        let service = SearchService::with_index(Box::new(BrokenIndex), SearchConfig::default());

        let results = service.search(&catalog, "jordan");
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_rebuild_for_new_book_set() {
        let first = catalog();
        let mut service = SearchService::build(&first, SearchConfig::default()).unwrap();
        assert_eq!(service.indexed(), 3);

        let second = Catalog::load(vec![BookRecord::new(
            "9",
            "shoe-dog",
            "Shoe Dog",
            "Phil Knight",
            "Business",
        )]);
        service.rebuild(&second).unwrap();

        assert_eq!(service.indexed(), 1);
        let results = service.search(&second, "shoe dog");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].book.id, "9");
    }
}
