use crate::models::facets::FacetField;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Result ordering offered to readers
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortOption {
    /// Best text match, or composite popularity when no query is active
    #[default]
    Relevance,
    RatingDesc,
    ReviewsDesc,
    Newest,
    TitleAsc,
}

impl SortOption {
    /// Label shown in sort pickers
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Best Match",
            SortOption::RatingDesc => "Highest Rated",
            SortOption::ReviewsDesc => "Most Reviewed",
            SortOption::Newest => "Newest First",
            SortOption::TitleAsc => "Title A-Z",
        }
    }
}

/// Inclusive publication year bounds; either side may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

impl YearRange {
    pub fn new(start: Option<i32>, end: Option<i32>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether a known year lies within the set bounds
    pub fn contains(&self, year: i32) -> bool {
        self.start.map_or(true, |start| year >= start) && self.end.map_or(true, |end| year <= end)
    }
}

/// Declarative browse query: free text plus per-facet selections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Free-text query for the fuzzy index
    pub search: String,

    pub categories: Vec<String>,
    pub topics: Vec<String>,
    pub players: Vec<String>,
    pub teams: Vec<String>,
    pub formats: Vec<String>,

    /// Books without a rating never pass a floor
    pub min_rating: Option<f64>,

    /// Books without a year always pass
    pub year_range: YearRange,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_categories(mut self, categories: Vec<impl Into<String>>) -> Self {
        self.categories = categories.into_iter().map(|c| c.into()).collect();
        self
    }

    pub fn with_topics(mut self, topics: Vec<impl Into<String>>) -> Self {
        self.topics = topics.into_iter().map(|t| t.into()).collect();
        self
    }

    pub fn with_players(mut self, players: Vec<impl Into<String>>) -> Self {
        self.players = players.into_iter().map(|p| p.into()).collect();
        self
    }

    pub fn with_teams(mut self, teams: Vec<impl Into<String>>) -> Self {
        self.teams = teams.into_iter().map(|t| t.into()).collect();
        self
    }

    pub fn with_formats(mut self, formats: Vec<impl Into<String>>) -> Self {
        self.formats = formats.into_iter().map(|f| f.into()).collect();
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_year_range(mut self, start: Option<i32>, end: Option<i32>) -> Self {
        self.year_range = YearRange::new(start, end);
        self
    }

    /// True when the text query is long enough to narrow results
    pub fn has_query(&self, min_chars: usize) -> bool {
        self.search.trim().chars().count() >= min_chars
    }

    /// True when no facet, rating, or year constraint is set
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.topics.is_empty()
            && self.players.is_empty()
            && self.teams.is_empty()
            && self.formats.is_empty()
            && self.min_rating.is_none()
            && self.year_range.is_unbounded()
    }

    /// Number of active constraints, as shown on a filter badge
    pub fn active_filter_count(&self) -> usize {
        self.categories.len()
            + self.topics.len()
            + self.players.len()
            + self.teams.len()
            + self.formats.len()
            + usize::from(self.min_rating.is_some())
            + usize::from(!self.year_range.is_unbounded())
    }

    /// Selected values for a facet, `None` for facets without a selection set
    pub fn selection(&self, field: FacetField) -> Option<&[String]> {
        match field {
            FacetField::Categories => Some(&self.categories),
            FacetField::Topics => Some(&self.topics),
            FacetField::Players => Some(&self.players),
            FacetField::Teams => Some(&self.teams),
            FacetField::Formats => Some(&self.formats),
            FacetField::Years => None,
        }
    }

    fn selection_mut(&mut self, field: FacetField) -> Option<&mut Vec<String>> {
        match field {
            FacetField::Categories => Some(&mut self.categories),
            FacetField::Topics => Some(&mut self.topics),
            FacetField::Players => Some(&mut self.players),
            FacetField::Teams => Some(&mut self.teams),
            FacetField::Formats => Some(&mut self.formats),
            FacetField::Years => None,
        }
    }

    /// Add `value` to the facet selection, or remove it if already selected.
    ///
    /// Returns whether the value is selected afterwards. Years are selected
    /// through [`YearRange`] and are left untouched here.
    pub fn toggle(&mut self, field: FacetField, value: &str) -> bool {
        let Some(selection) = self.selection_mut(field) else {
            return false;
        };

        if let Some(pos) = selection.iter().position(|v| v == value) {
            selection.remove(pos);
            false
        } else {
            selection.push(value.to_string());
            true
        }
    }
}
