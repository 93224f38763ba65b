//! Search, filter, sort and recommendation engine for a book directory.
//!
//! The catalog is loaded once into an immutable [`catalog::Catalog`]; a
//! tantivy-backed fuzzy index is built over it, and every query is a pure
//! function producing a fresh, borrowed view of the catalog:
//!
//! ```text
//! Catalog ──► search ──► filter ──► sort ──► books
//!                           └──► facets
//! Catalog + reference book ──► similarity ──► books
//! ```

pub mod browse;
pub mod catalog;
pub mod config;
pub mod error;
pub mod facets;
pub mod filter;
pub mod models;
pub mod search;
pub mod similarity;
pub mod sort;

pub use browse::{BrowseEngine, BrowseResponse};
pub use catalog::Catalog;
pub use config::Config;
pub use error::{AppError, Result};
pub use models::{BookRecord, FacetCounts, FacetField, FilterState, ScoredBook, SortOption, YearRange};
