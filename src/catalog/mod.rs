//! Catalog store: the immutable in-memory book collection and its lookups.
//!
//! A [`Catalog`] is built once from normalized records and never mutated.
//! Lookups by id and slug are backed by hash indexes built eagerly at load
//! time; unknown keys return `None`, since stale links are expected.

mod loader;
pub mod normalize;
mod options;

pub use options::FilterOptions;

use crate::models::BookRecord;
use std::collections::HashMap;

/// Immutable book collection with O(1) id/slug lookup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<BookRecord>,
    by_id: HashMap<String, usize>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from normalized records.
    ///
    /// Records are repaired or dropped so that ids and slugs are unique and
    /// multi-valued fields are clean. Later duplicates of an id or slug are
    /// dropped.
    pub fn load(records: Vec<BookRecord>) -> Self {
        let start = std::time::Instant::now();
        let received = records.len();
        let max_year = loader::max_plausible_year();

        let mut books = Vec::with_capacity(received);
        let mut by_id = HashMap::with_capacity(received);
        let mut by_slug = HashMap::with_capacity(received);

        for record in records {
            let Some(book) = loader::prepare_record(record, max_year) else {
                continue;
            };

            if by_id.contains_key(&book.id) {
                tracing::warn!(id = %book.id, title = %book.title, "Dropping record with duplicate id");
                continue;
            }
            if by_slug.contains_key(&book.slug) {
                tracing::warn!(slug = %book.slug, title = %book.title, "Dropping record with duplicate slug");
                continue;
            }

            let position = books.len();
            by_id.insert(book.id.clone(), position);
            by_slug.insert(book.slug.clone(), position);
            books.push(book);
        }

        tracing::info!(
            received,
            loaded = books.len(),
            dropped = received - books.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Catalog loaded"
        );

        Self {
            books,
            by_id,
            by_slug,
        }
    }

    /// All books in catalog order
    pub fn all(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookRecord> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&BookRecord> {
        self.by_id.get(id).map(|&position| &self.books[position])
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&BookRecord> {
        self.by_slug.get(slug).map(|&position| &self.books[position])
    }

    /// Look a book up by id, falling back to slug
    pub fn get(&self, id_or_slug: &str) -> Option<&BookRecord> {
        self.get_by_id(id_or_slug)
            .or_else(|| self.get_by_slug(id_or_slug))
    }

    /// Position of a book in catalog order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Borrowed view of every book, the usual input to filter and facets
    pub fn refs(&self) -> Vec<&BookRecord> {
        self.books.iter().collect()
    }

    /// All slugs in catalog order, e.g. for static page generation
    pub fn slugs(&self) -> Vec<&str> {
        self.books.iter().map(|book| book.slug.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
