use crate::catalog::Catalog;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Year range reported when the catalog knows no publication year
const FALLBACK_FIRST_YEAR: i32 = 1980;

/// Distinct values available to filter pickers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub topics: Vec<String>,
    pub players: Vec<String>,
    pub teams: Vec<String>,
    pub formats: Vec<String>,
    /// Earliest and latest known publication year
    pub year_range: (i32, i32),
}

impl Catalog {
    /// Sorted distinct facet values plus the known year range
    pub fn filter_options(&self) -> FilterOptions {
        let mut categories = BTreeSet::new();
        let mut topics = BTreeSet::new();
        let mut players = BTreeSet::new();
        let mut teams = BTreeSet::new();
        let mut formats = BTreeSet::new();
        let mut years: Option<(i32, i32)> = None;

        for book in self.iter() {
            if !book.category.is_empty() {
                categories.insert(book.category.as_str());
            }
            topics.extend(book.topics.iter().map(String::as_str));
            players.extend(book.players_mentioned.iter().map(String::as_str));
            teams.extend(book.teams_mentioned.iter().map(String::as_str));
            formats.extend(book.formats.iter().map(String::as_str));

            if let Some(year) = book.publication_year {
                years = Some(match years {
                    Some((min, max)) => (min.min(year), max.max(year)),
                    None => (year, year),
                });
            }
        }

        fn collect(set: BTreeSet<&str>) -> Vec<String> {
            set.into_iter().map(str::to_string).collect()
        }

        FilterOptions {
            categories: collect(categories),
            topics: collect(topics),
            players: collect(players),
            teams: collect(teams),
            formats: collect(formats),
            year_range: years
                .unwrap_or_else(|| (FALLBACK_FIRST_YEAR, chrono::Utc::now().year())),
        }
    }
}
