use crate::catalog::normalize;
use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::models::BookRecord;
use chrono::Datelike;
use std::path::Path;
use validator::Validate;

impl Catalog {
    /// Load a catalog from the normalized JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<BookRecord> = serde_json::from_str(json)?;
        Ok(Self::load(records))
    }

    /// Load a catalog from a normalized JSON file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::NotFound(format!("catalog file {}", path.display()))
            } else {
                AppError::Io(e)
            }
        })?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "Read catalog file");
        Self::from_json_str(&contents)
    }
}

/// Latest publication year considered plausible (next calendar year)
pub(crate) fn max_plausible_year() -> i32 {
    chrono::Utc::now().year() + 1
}

/// Repair a record so it satisfies the catalog invariants, or drop it
pub(crate) fn prepare_record(mut record: BookRecord, max_year: i32) -> Option<BookRecord> {
    record.id = record.id.trim().to_string();
    record.slug = record.slug.trim().to_string();
    record.title = record.title.trim().to_string();
    record.author = record.author.trim().to_string();
    record.category = record.category.trim().to_string();

    if normalize::is_missing(&record.category) {
        tracing::debug!(id = %record.id, "Defaulting blank category");
        record.category = normalize::DEFAULT_CATEGORY.to_string();
    }

    if let Some(rating) = record.rating {
        if !(0.0..=5.0).contains(&rating) {
            tracing::warn!(id = %record.id, rating, "Clearing out-of-range rating");
            record.rating = None;
        }
    }

    if let Err(e) = record.validate() {
        tracing::warn!(id = %record.id, error = %e, "Dropping invalid record");
        return None;
    }

    record.topics = normalize::clean_labels(&record.topics);
    record.players_mentioned = normalize::clean_labels(&record.players_mentioned);
    record.teams_mentioned = normalize::clean_labels(&record.teams_mentioned);
    record.formats = normalize::clean_labels(&record.formats);

    if record.review_count.is_none() {
        record.review_count = normalize::parse_review_count(&record.review_count_display);
    }
    if record.review_count_display.trim().is_empty() {
        record.review_count_display = match record.review_count {
            Some(count) => count.to_string(),
            None => "N/A".to_string(),
        };
    }

    match record.publication_year {
        Some(year) if !(normalize::MIN_PUBLICATION_YEAR..=max_year).contains(&year) => {
            tracing::warn!(id = %record.id, year, "Clearing implausible publication year");
            record.publication_year = None;
        }
        None => {
            record.publication_year = record
                .publication_date
                .as_deref()
                .and_then(|date| normalize::parse_publication_year(date, max_year));
        }
        Some(_) => {}
    }

    Some(record)
}
