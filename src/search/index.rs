//! Text index management

use crate::models::BookRecord;
use crate::search::config::SearchConfig;
use crate::search::document::{build_book_schema, register_tokenizers, BookFields, SearchDocument};
use crate::search::error::{SearchError, SearchResult};
use crate::search::query::{QueryBuilder, MAX_SUPPORTED_DISTANCE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tantivy::collector::TopDocs;
use tantivy::schema::Value;
use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy, TantivyDocument};

/// A raw match from a text index; higher scores are better matches
#[derive(Debug, Clone, PartialEq)]
pub struct TextMatch {
    pub id: String,
    pub score: f32,
}

/// Narrow interface over a fuzzy matcher so the backing engine can be swapped
pub trait TextIndex: Send + Sync {
    /// Ranked matches for `text`, best first
    fn query(&self, text: &str) -> SearchResult<Vec<TextMatch>>;

    /// Number of indexed documents
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Index statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Total number of documents in the index
    pub total_documents: u64,

    /// Number of segments
    pub num_segments: usize,

    /// Time spent building the index
    pub build_time_ms: u64,

    /// When the index was built
    pub built_at: DateTime<Utc>,
}

/// In-memory tantivy index over one book set.
///
/// The index is written once in [`IndexManager::build`] and is read-only
/// afterwards; a changed book set needs a new `IndexManager`.
pub struct IndexManager {
    fields: BookFields,

    /// Index reader
    reader: IndexReader,

    query_builder: QueryBuilder,

    stats: IndexStats,
}

impl IndexManager {
    /// Build an index over `books` with the configured field weights
    pub fn build(books: &[BookRecord], config: &SearchConfig) -> SearchResult<Self> {
        let start = std::time::Instant::now();

        if config.max_edit_distance > MAX_SUPPORTED_DISTANCE {
            return Err(SearchError::InvalidConfiguration(format!(
                "max_edit_distance must be at most {}, got {}",
                MAX_SUPPORTED_DISTANCE, config.max_edit_distance
            )));
        }
        if config.indexing_threads == 0 {
            return Err(SearchError::InvalidConfiguration(
                "indexing_threads must be at least 1".to_string(),
            ));
        }

        let (schema, fields) = build_book_schema();
        let index = Index::create_in_ram(schema);
        register_tokenizers(&index)
            .map_err(|e| SearchError::IndexInitFailed(format!("Failed to register tokenizers: {}", e)))?;

        let mut writer: IndexWriter = index
            .writer_with_num_threads(config.indexing_threads, config.writer_heap_size)
            .map_err(|e| SearchError::IndexInitFailed(format!("Failed to create writer: {}", e)))?;

        for (position, book) in books.iter().enumerate() {
            writer.add_document(book.to_tantivy_doc(&fields)).map_err(|e| {
                SearchError::IndexingFailed(format!("Failed to add document {}: {}", position, e))
            })?;
        }

        writer
            .commit()
            .map_err(|e| SearchError::IndexingFailed(format!("Failed to commit batch: {}", e)))?;

        // Manual reload: the reader sees exactly the committed book set
        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()
            .map_err(|e| SearchError::IndexInitFailed(format!("Failed to create reader: {}", e)))?;

        let query_builder = QueryBuilder::new(
            index.clone(),
            fields.weighted(&config.weights),
            (fields.infix, config.weights.infix),
            config.clone(),
        );

        let searcher = reader.searcher();
        let stats = IndexStats {
            total_documents: searcher.num_docs(),
            num_segments: searcher.segment_readers().len(),
            build_time_ms: start.elapsed().as_millis() as u64,
            built_at: Utc::now(),
        };

        tracing::info!(
            documents = stats.total_documents,
            segments = stats.num_segments,
            elapsed_ms = stats.build_time_ms,
            "Text index built"
        );

        Ok(Self {
            fields,
            reader,
            query_builder,
            stats,
        })
    }

    /// Get index statistics
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}

impl TextIndex for IndexManager {
    fn query(&self, text: &str) -> SearchResult<Vec<TextMatch>> {
        let Some(query) = self.query_builder.build(text)? else {
            return Ok(Vec::new());
        };

        let searcher = self.reader.searcher();
        let limit = (self.stats.total_documents as usize).max(1);

        let top_docs = searcher
            .search(&*query, &TopDocs::with_limit(limit))
            .map_err(|e| SearchError::SearchFailed(format!("Search execution failed: {}", e)))?;

        let mut matches = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher
                .doc(doc_address)
                .map_err(|e| SearchError::SearchFailed(format!("Failed to retrieve doc: {}", e)))?;

            if let Some(id) = doc.get_first(self.fields.id).and_then(|v| v.as_str()) {
                matches.push(TextMatch {
                    id: id.to_string(),
                    score,
                });
            }
        }

        Ok(matches)
    }

    fn len(&self) -> usize {
        self.stats.total_documents as usize
    }
}
