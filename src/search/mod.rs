//! Typo-tolerant, multi-field text search powered by Tantivy
//!
//! This module provides the fuzzy text index behind catalog search:
//!
//! - **Weighted Fields**: title > author > players/teams > topics ≈ description
//! - **Fuzzy Matching**: Levenshtein distance scaled to term length
//! - **Search-as-you-type**: the last query term matches as a prefix
//! - **Normalized Scores**: 0 is the best match, higher is worse
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │           Search Service                         │
//! ├─────────────────────────────────────────────────┤
//! │  - search()  - rebuild()  - is_active_query()   │
//! └─────────────────────────────────────────────────┘
//!                      │  TextIndex
//!                      ▼
//! ┌─────────────────────────────────────────────────┐
//! │           Index Manager                          │
//! ├─────────────────────────────────────────────────┤
//! │  - Schema + in-RAM index                         │
//! │  - QueryBuilder (boosted exact + fuzzy clauses) │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use book_directory::catalog::Catalog;
//! use book_directory::search::{SearchConfig, SearchService};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::from_path("data/books.json")?;
//!     let search = SearchService::build(&catalog, SearchConfig::default())?;
//!
//!     for hit in search.search(&catalog, "jordn").iter().take(5) {
//!         println!("{:.3} {}", hit.score, hit.book.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod service;

pub use config::{FieldWeights, SearchConfig, SearchConfigBuilder};
pub use document::{build_book_schema, BookFields, SearchDocument};
pub use error::{SearchError, SearchResult};
pub use index::{IndexManager, IndexStats, TextIndex, TextMatch};
pub use query::QueryBuilder;
pub use service::SearchService;
