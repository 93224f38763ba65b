//! Content-based "similar books" recommender.
//!
//! A candidate scores the sum of independent signals against the reference
//! book: same category, each shared topic, player and team, and the same
//! author. Results are ordered by score desc, then rating desc.

use crate::models::BookRecord;
use serde::{Deserialize, Serialize};

/// Points per matching signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityWeights {
    pub category: u32,
    /// Per shared topic
    pub topic: u32,
    /// Per shared player
    pub player: u32,
    /// Per shared team
    pub team: u32,
    /// Case-insensitive author match
    pub author: u32,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            category: 10,
            topic: 3,
            player: 5,
            team: 4,
            author: 8,
        }
    }
}

/// Recommender configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    pub weights: SimilarityWeights,

    /// Number of recommendations when the caller does not ask for a count
    pub default_limit: usize,

    /// Drop candidates that share nothing with the reference
    pub require_positive_score: bool,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            weights: SimilarityWeights::default(),
            default_limit: 6,
            require_positive_score: true,
        }
    }
}

/// A recommended book with its similarity score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarBook<'a> {
    pub book: &'a BookRecord,
    pub score: u32,
}

fn shared(reference: &[String], candidate: &[String]) -> u32 {
    reference.iter().filter(|v| candidate.contains(v)).count() as u32
}

/// Similarity of `candidate` to `reference`
pub fn similarity_score(
    reference: &BookRecord,
    candidate: &BookRecord,
    weights: &SimilarityWeights,
) -> u32 {
    let mut score = 0;

    if !reference.category.is_empty() && candidate.category == reference.category {
        score += weights.category;
    }

    score += shared(&reference.topics, &candidate.topics) * weights.topic;
    score += shared(&reference.players_mentioned, &candidate.players_mentioned) * weights.player;
    score += shared(&reference.teams_mentioned, &candidate.teams_mentioned) * weights.team;

    if candidate.author.to_lowercase() == reference.author.to_lowercase() {
        score += weights.author;
    }

    score
}

/// Scored recommendations for `reference`, at most `limit`, never the reference itself
pub fn similar_scored<'a, I>(
    reference: &BookRecord,
    books: I,
    limit: usize,
    config: &SimilarityConfig,
) -> Vec<SimilarBook<'a>>
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    let mut scored: Vec<SimilarBook<'a>> = books
        .into_iter()
        .filter(|candidate| candidate.id != reference.id)
        .map(|candidate| SimilarBook {
            book: candidate,
            score: similarity_score(reference, candidate, &config.weights),
        })
        .filter(|s| !config.require_positive_score || s.score > 0)
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.book.rating_or_zero().total_cmp(&a.book.rating_or_zero()))
    });
    scored.truncate(limit);

    tracing::debug!(
        reference = %reference.id,
        returned = scored.len(),
        limit,
        "Similar books computed"
    );

    scored
}

/// Recommended books for `reference`, best first
pub fn similar_to<'a, I>(
    reference: &BookRecord,
    books: I,
    limit: usize,
    config: &SimilarityConfig,
) -> Vec<&'a BookRecord>
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    similar_scored(reference, books, limit, config)
        .into_iter()
        .map(|s| s.book)
        .collect()
}
