//! Query pipeline over a loaded catalog: search → filter → sort.
//!
//! [`BrowseEngine`] owns the catalog and the text index built from it. It is
//! read-only while answering queries; [`BrowseEngine::reload`] swaps in a new
//! catalog and rebuilds the index explicitly.

use crate::catalog::{Catalog, FilterOptions};
use crate::config::Config;
use crate::error::Result;
use crate::facets::compute_facets;
use crate::filter::filter_scored;
use crate::models::{BookRecord, FacetCounts, FilterState, SortOption};
use crate::search::SearchService;
use crate::similarity::{similar_to, SimilarityConfig};
use crate::sort::{sort_books, SortContext};
use serde::Serialize;
use std::time::Instant;

/// Result of one browse query
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResponse<'a> {
    /// Matching books in display order
    pub books: Vec<&'a BookRecord>,

    /// Number of matching books
    pub total: usize,

    /// Size of the whole catalog
    pub catalog_size: usize,

    /// Facet counts over the matching books
    pub facets: FacetCounts,

    /// Execution time in milliseconds
    pub took_ms: u64,
}

/// Catalog plus the indexes needed to browse it
pub struct BrowseEngine {
    catalog: Catalog,
    search: SearchService,
    similarity: SimilarityConfig,
}

impl BrowseEngine {
    /// Build the text index for `catalog`
    pub fn new(catalog: Catalog, config: &Config) -> Result<Self> {
        let search = SearchService::build(&catalog, config.search.clone())?;

        Ok(Self {
            catalog,
            search,
            similarity: config.similarity.clone(),
        })
    }

    /// Replace the catalog and rebuild the text index for it.
    ///
    /// On failure the previous catalog and index stay in place.
    pub fn reload(&mut self, catalog: Catalog) -> Result<()> {
        self.search.rebuild(&catalog)?;
        self.catalog = catalog;

        tracing::info!(books = self.catalog.len(), "Catalog reloaded");
        Ok(())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run search, filter and sort for one query
    pub fn browse(&self, state: &FilterState, sort: SortOption) -> BrowseResponse<'_> {
        self.browse_at(state, sort, SortContext::new(self.search.is_active_query(&state.search)))
    }

    /// Like [`BrowseEngine::browse`] with an explicit sort context
    pub fn browse_at(
        &self,
        state: &FilterState,
        sort: SortOption,
        context: SortContext,
    ) -> BrowseResponse<'_> {
        let start = Instant::now();

        let searched = self.search.search(&self.catalog, &state.search);
        let filtered = filter_scored(searched, state);
        let books = sort_books(filtered, sort, &context);
        let facets = compute_facets(books.iter().copied());

        let response = BrowseResponse {
            total: books.len(),
            catalog_size: self.catalog.len(),
            books,
            facets,
            took_ms: start.elapsed().as_millis() as u64,
        };

        tracing::debug!(
            query = %state.search,
            active_query = context.active_query,
            filters = state.active_filter_count(),
            sort = %sort,
            total = response.total,
            took_ms = response.took_ms,
            "Browse query executed"
        );

        response
    }

    /// Look a book up by id or slug
    pub fn get(&self, id_or_slug: &str) -> Option<&BookRecord> {
        self.catalog.get(id_or_slug)
    }

    /// Books similar to `reference`; `None` uses the configured default limit
    pub fn similar(&self, reference: &BookRecord, limit: Option<usize>) -> Vec<&BookRecord> {
        let limit = limit.unwrap_or(self.similarity.default_limit);
        similar_to(reference, &self.catalog, limit, &self.similarity)
    }

    /// Facet counts over the full catalog
    pub fn catalog_facets(&self) -> FacetCounts {
        compute_facets(&self.catalog)
    }

    pub fn filter_options(&self) -> FilterOptions {
        self.catalog.filter_options()
    }
}
