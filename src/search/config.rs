//! Search configuration

use serde::{Deserialize, Serialize};

/// Relative influence of each indexed field on the match score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub title: f32,
    pub author: f32,
    pub players: f32,
    pub teams: f32,
    pub description: f32,
    pub topics: f32,
    pub category: f32,
    /// Trigram matches inside title and author words
    pub infix: f32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 2.0,
            author: 1.5,
            players: 1.0,
            teams: 1.0,
            description: 0.8,
            topics: 0.7,
            category: 0.6,
            infix: 0.5,
        }
    }
}

/// Fuzzy text index configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Field weights applied as query boosts
    pub weights: FieldWeights,

    /// Queries shorter than this (after trimming) return the whole catalog
    pub min_query_chars: usize,

    /// Upper bound on Levenshtein distance per term (tantivy supports 0..=2)
    pub max_edit_distance: u8,

    /// Treat the last query term as a prefix, for search-as-you-type
    pub prefix_last_term: bool,

    /// Count a transposition as a single edit
    pub transposition_cost_one: bool,

    /// Index writer heap size in bytes (default: 50MB)
    pub writer_heap_size: usize,

    /// Number of threads for indexing
    pub indexing_threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            min_query_chars: 2,
            max_edit_distance: 2,
            prefix_last_term: true,
            transposition_cost_one: true,
            writer_heap_size: 50_000_000, // 50MB
            indexing_threads: 1,
        }
    }
}

/// Builder for SearchConfig
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn weights(mut self, weights: FieldWeights) -> Self {
        self.config.weights = weights;
        self
    }

    pub fn min_query_chars(mut self, chars: usize) -> Self {
        self.config.min_query_chars = chars;
        self
    }

    pub fn max_edit_distance(mut self, distance: u8) -> Self {
        self.config.max_edit_distance = distance;
        self
    }

    pub fn prefix_last_term(mut self, enabled: bool) -> Self {
        self.config.prefix_last_term = enabled;
        self
    }

    pub fn transposition_cost_one(mut self, enabled: bool) -> Self {
        self.config.transposition_cost_one = enabled;
        self
    }

    pub fn writer_heap_size(mut self, size: usize) -> Self {
        self.config.writer_heap_size = size;
        self
    }

    pub fn indexing_threads(mut self, threads: usize) -> Self {
        self.config.indexing_threads = threads;
        self
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weight_ordering() {
        let w = FieldWeights::default();
        assert!(w.title > w.author);
        assert!(w.author > w.players);
        assert_eq!(w.players, w.teams);
        assert!(w.teams > w.topics);
        assert!((w.topics - w.description).abs() < 0.2);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SearchConfigBuilder::new()
            .min_query_chars(3)
            .max_edit_distance(1)
            .prefix_last_term(false)
            .build();

        assert_eq!(config.min_query_chars, 3);
        assert_eq!(config.max_edit_distance, 1);
        assert!(!config.prefix_last_term);
        assert_eq!(config.writer_heap_size, SearchConfig::default().writer_heap_size);
    }
}
