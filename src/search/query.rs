//! Fuzzy query construction

use crate::search::config::SearchConfig;
use crate::search::document::INFIX_GRAM;
use crate::search::error::{SearchError, SearchResult};
use std::collections::HashSet;
use tantivy::query::{BooleanQuery, BoostQuery, FuzzyTermQuery, Occur, Query, TermQuery};
use tantivy::schema::{Field, IndexRecordOption};
use tantivy::tokenizer::{Token, TokenStream};
use tantivy::{Index, Term};

/// Tantivy hard limit on Levenshtein distance
pub const MAX_SUPPORTED_DISTANCE: u8 = 2;

/// Replace query-syntax characters with spaces so user input is always plain words
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Edit distance allowed for a term of `len` characters
pub fn edit_distance_for(len: usize, max: u8) -> u8 {
    let distance = match len {
        0..=2 => 0,
        3..=5 => 1,
        _ => 2,
    };
    distance.min(max).min(MAX_SUPPORTED_DISTANCE)
}

/// Distinct character trigrams of `term`, in order of first appearance
pub fn grams(term: &str) -> Vec<String> {
    let chars: Vec<char> = term.chars().collect();
    let mut seen = HashSet::new();
    chars
        .windows(INFIX_GRAM)
        .map(|window| window.iter().collect::<String>())
        .filter(|gram| seen.insert(gram.clone()))
        .collect()
}

/// Builds boosted exact + fuzzy queries over the weighted book fields
pub struct QueryBuilder {
    index: Index,
    fields: Vec<(Field, f32)>,
    infix: (Field, f32),
    config: SearchConfig,
}

impl QueryBuilder {
    /// Create a new query builder
    pub fn new(
        index: Index,
        fields: Vec<(Field, f32)>,
        infix: (Field, f32),
        config: SearchConfig,
    ) -> Self {
        Self {
            index,
            fields,
            infix,
            config,
        }
    }

    /// Clause requiring every trigram of `text` in the infix field
    fn infix_clause(&self, text: &str) -> Option<Box<dyn Query>> {
        let (field, weight) = self.infix;
        if weight <= 0.0 {
            return None;
        }

        let required: Vec<(Occur, Box<dyn Query>)> = grams(text)
            .into_iter()
            .map(|gram| {
                let term = Term::from_field_text(field, &gram);
                let query: Box<dyn Query> = Box::new(TermQuery::new(term, IndexRecordOption::WithFreqs));
                (Occur::Must, query)
            })
            .collect();

        if required.is_empty() {
            return None;
        }

        Some(Box::new(BoostQuery::new(Box::new(BooleanQuery::new(required)), weight)))
    }

    /// Split text into index terms using the same analyzer as the title field
    pub fn terms(&self, text: &str) -> SearchResult<Vec<String>> {
        let Some(&(field, _)) = self.fields.first() else {
            return Ok(Vec::new());
        };

        let mut analyzer = self
            .index
            .tokenizer_for_field(field)
            .map_err(|e| SearchError::QueryFailed(format!("No tokenizer for field: {}", e)))?;

        let mut seen = HashSet::new();
        let mut terms = Vec::new();
        let mut stream = analyzer.token_stream(text);
        stream.process(&mut |token: &Token| {
            if seen.insert(token.text.clone()) {
                terms.push(token.text.clone());
            }
        });

        Ok(terms)
    }

    /// Build the query for `text`, or `None` when it yields no terms.
    ///
    /// Every term contributes, per field, an exact clause scored with BM25
    /// and a Levenshtein clause; both are boosted by the field weight and
    /// combined as optional clauses, so documents matching more terms in
    /// heavier fields rank higher regardless of where the match occurs.
    /// Terms of at least three characters also match inside title and
    /// author words through the trigram field.
    pub fn build(&self, text: &str) -> SearchResult<Option<Box<dyn Query>>> {
        let terms = self.terms(&sanitize(text))?;
        if terms.is_empty() {
            return Ok(None);
        }

        let last = terms.len() - 1;
        let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();

        for (i, text) in terms.iter().enumerate() {
            let distance = edit_distance_for(text.chars().count(), self.config.max_edit_distance);
            let as_prefix = self.config.prefix_last_term && i == last;

            for &(field, weight) in &self.fields {
                if weight <= 0.0 {
                    continue;
                }

                let term = Term::from_field_text(field, text);
                let exact = TermQuery::new(term.clone(), IndexRecordOption::WithFreqs);
                clauses.push((Occur::Should, Box::new(BoostQuery::new(Box::new(exact), weight))));

                let fuzzy = if as_prefix {
                    FuzzyTermQuery::new_prefix(term, distance, self.config.transposition_cost_one)
                } else if distance > 0 {
                    FuzzyTermQuery::new(term, distance, self.config.transposition_cost_one)
                } else {
                    continue;
                };
                clauses.push((Occur::Should, Box::new(BoostQuery::new(Box::new(fuzzy), weight))));
            }

            if let Some(infix) = self.infix_clause(text) {
                clauses.push((Occur::Should, infix));
            }
        }

        if clauses.is_empty() {
            return Ok(None);
        }

        Ok(Some(Box::new(BooleanQuery::new(clauses))))
    }
}
