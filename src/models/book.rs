use serde::{Deserialize, Serialize};
use validator::Validate;

/// A normalized catalog entry.
///
/// Records are immutable once a [`Catalog`](crate::catalog::Catalog) has been
/// loaded; every engine output is a fresh view that borrows from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Stable opaque identifier
    #[validate(length(min = 1))]
    pub id: String,

    /// URL-safe identifier, 1:1 with `id`
    #[validate(length(min = 1))]
    pub slug: String,

    #[validate(length(min = 1))]
    pub title: String,

    #[validate(length(min = 1))]
    pub author: String,

    /// Average rating in [0, 5]
    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,

    /// Numeric review count, derived from `review_count_display` when absent
    #[serde(default)]
    pub review_count: Option<u64>,

    /// Review count as shown to readers, e.g. "3500+" or "N/A"
    #[serde(default = "default_review_count_display")]
    pub review_count_display: String,

    /// Raw publication date as scraped, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,

    #[serde(default)]
    pub publication_year: Option<i32>,

    /// Exactly one category per record
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub topics: Vec<String>,

    #[serde(default)]
    pub players_mentioned: Vec<String>,

    #[serde(default)]
    pub teams_mentioned: Vec<String>,

    #[serde(default)]
    pub formats: Vec<String>,

    #[serde(default)]
    pub description: String,

    /// Outbound store link; not used by the engine
    #[serde(default)]
    pub amazon_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
}

fn default_review_count_display() -> String {
    "N/A".to_string()
}

impl BookRecord {
    /// Create a record with the required fields set and everything else empty
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            author: author.into(),
            rating: None,
            review_count: None,
            review_count_display: default_review_count_display(),
            publication_date: None,
            publication_year: None,
            category: category.into(),
            topics: Vec::new(),
            players_mentioned: Vec::new(),
            teams_mentioned: Vec::new(),
            formats: Vec::new(),
            description: String::new(),
            amazon_url: String::new(),
            asin: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_review_count(mut self, count: u64) -> Self {
        self.review_count = Some(count);
        self.review_count_display = count.to_string();
        self
    }

    pub fn with_publication_year(mut self, year: i32) -> Self {
        self.publication_year = Some(year);
        self
    }

    pub fn with_topics(mut self, topics: Vec<impl Into<String>>) -> Self {
        self.topics = topics.into_iter().map(|t| t.into()).collect();
        self
    }

    pub fn with_players(mut self, players: Vec<impl Into<String>>) -> Self {
        self.players_mentioned = players.into_iter().map(|p| p.into()).collect();
        self
    }

    pub fn with_teams(mut self, teams: Vec<impl Into<String>>) -> Self {
        self.teams_mentioned = teams.into_iter().map(|t| t.into()).collect();
        self
    }

    pub fn with_formats(mut self, formats: Vec<impl Into<String>>) -> Self {
        self.formats = formats.into_iter().map(|f| f.into()).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Rating with absent treated as zero, as every comparator does
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    pub fn review_count_or_zero(&self) -> u64 {
        self.review_count.unwrap_or(0)
    }

    pub fn publication_year_or_zero(&self) -> i32 {
        self.publication_year.unwrap_or(0)
    }
}

/// A book paired with its text-match score (lower is better, 0 is best)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredBook<'a> {
    pub book: &'a BookRecord,
    pub score: f32,
}

impl<'a> ScoredBook<'a> {
    pub fn new(book: &'a BookRecord, score: f32) -> Self {
        Self { book, score }
    }

    /// Neutral score used when search is a pass-through
    pub fn neutral(book: &'a BookRecord) -> Self {
        Self { book, score: 0.0 }
    }
}
