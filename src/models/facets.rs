use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumIter, EnumString};

/// Categorical dimension over which books are filtered and counted
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FacetField {
    Categories,
    Topics,
    Formats,
    Players,
    Teams,
    Years,
}

/// Facet count result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub name: String,
    pub count: usize,
}

/// Per-facet value counts over one evaluated book set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    pub categories: HashMap<String, usize>,
    pub topics: HashMap<String, usize>,
    pub formats: HashMap<String, usize>,
    pub players: HashMap<String, usize>,
    pub teams: HashMap<String, usize>,
    pub years: HashMap<i32, usize>,
}

impl FacetCounts {
    /// Value counts for one facet; years are keyed by their decimal string
    pub fn get(&self, field: FacetField) -> HashMap<String, usize> {
        match field {
            FacetField::Categories => self.categories.clone(),
            FacetField::Topics => self.topics.clone(),
            FacetField::Formats => self.formats.clone(),
            FacetField::Players => self.players.clone(),
            FacetField::Teams => self.teams.clone(),
            FacetField::Years => self
                .years
                .iter()
                .map(|(year, count)| (year.to_string(), *count))
                .collect(),
        }
    }

    /// Count for a single value, zero when unseen
    pub fn count(&self, field: FacetField, value: &str) -> usize {
        match field {
            FacetField::Categories => self.categories.get(value).copied().unwrap_or(0),
            FacetField::Topics => self.topics.get(value).copied().unwrap_or(0),
            FacetField::Formats => self.formats.get(value).copied().unwrap_or(0),
            FacetField::Players => self.players.get(value).copied().unwrap_or(0),
            FacetField::Teams => self.teams.get(value).copied().unwrap_or(0),
            FacetField::Years => value
                .parse::<i32>()
                .ok()
                .and_then(|year| self.years.get(&year).copied())
                .unwrap_or(0),
        }
    }

    /// Sum of all counts of a facet
    pub fn total(&self, field: FacetField) -> usize {
        match field {
            FacetField::Years => self.years.values().sum(),
            _ => self.get(field).values().sum(),
        }
    }

    /// The `n` most frequent values, by count desc then name asc
    pub fn top(&self, field: FacetField, n: usize) -> Vec<FacetCount> {
        let mut counts: Vec<FacetCount> = self
            .get(field)
            .into_iter()
            .map(|(name, count)| FacetCount { name, count })
            .collect();

        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        counts.truncate(n);
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> FacetCounts {
        let mut facets = FacetCounts::default();
        facets.players.insert("Michael Jordan".to_string(), 4);
        facets.players.insert("Kobe Bryant".to_string(), 4);
        facets.players.insert("Larry Bird".to_string(), 1);
        facets.years.insert(2020, 3);
        facets
    }

    #[test]
    fn test_top_orders_by_count_then_name() {
        let top = sample().top(FacetField::Players, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Kobe Bryant");
        assert_eq!(top[1].name, "Michael Jordan");
    }

    #[test]
    fn test_years_are_stringified() {
        let facets = sample();
        assert_eq!(facets.get(FacetField::Years).get("2020"), Some(&3));
        assert_eq!(facets.count(FacetField::Years, "2020"), 3);
        assert_eq!(facets.count(FacetField::Years, "not-a-year"), 0);
        assert_eq!(facets.total(FacetField::Players), 9);
    }

    #[test]
    fn test_facet_field_names() {
        assert_eq!(FacetField::from_str("players").unwrap(), FacetField::Players);
        assert_eq!(FacetField::Years.to_string(), "years");
    }
}
