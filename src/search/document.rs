//! Search document structures and schema

use crate::models::BookRecord;
use crate::search::config::FieldWeights;
use tantivy::schema::*;
use tantivy::tokenizer::{LowerCaser, NgramTokenizer, TextAnalyzer};
use tantivy::{Index, TantivyDocument};

/// Tokenizer name for the substring field
pub const INFIX_TOKENIZER: &str = "infix_ngram";

/// Gram length of the substring field
pub const INFIX_GRAM: usize = 3;

/// Trait for records that can be indexed and searched
pub trait SearchDocument {
    /// Convert to Tantivy document
    fn to_tantivy_doc(&self, fields: &BookFields) -> TantivyDocument;
}

/// Handles to the fields of the book schema
#[derive(Debug, Clone, Copy)]
pub struct BookFields {
    pub id: Field,
    pub title: Field,
    pub author: Field,
    pub description: Field,
    pub players: Field,
    pub teams: Field,
    pub topics: Field,
    pub category: Field,
    /// Title and author as lowercase trigrams, for matches inside words
    pub infix: Field,
}

impl BookFields {
    /// Text fields paired with their query boost
    pub fn weighted(&self, weights: &FieldWeights) -> Vec<(Field, f32)> {
        vec![
            (self.title, weights.title),
            (self.author, weights.author),
            (self.players, weights.players),
            (self.teams, weights.teams),
            (self.description, weights.description),
            (self.topics, weights.topics),
            (self.category, weights.category),
        ]
    }
}

impl SearchDocument for BookRecord {
    fn to_tantivy_doc(&self, fields: &BookFields) -> TantivyDocument {
        let mut doc = TantivyDocument::new();

        doc.add_text(fields.id, &self.id);
        doc.add_text(fields.title, &self.title);
        doc.add_text(fields.author, &self.author);
        doc.add_text(fields.category, &self.category);
        doc.add_text(fields.infix, &self.title);
        doc.add_text(fields.infix, &self.author);

        if !self.description.is_empty() {
            doc.add_text(fields.description, &self.description);
        }

        // Multi-valued fields: one value per label so any entry can match
        for player in &self.players_mentioned {
            doc.add_text(fields.players, player);
        }
        for team in &self.teams_mentioned {
            doc.add_text(fields.teams, team);
        }
        for topic in &self.topics {
            doc.add_text(fields.topics, topic);
        }

        doc
    }
}

/// Register the trigram analyzer used by the `infix` field
pub fn register_tokenizers(index: &Index) -> tantivy::Result<()> {
    let ngrams = NgramTokenizer::new(INFIX_GRAM, INFIX_GRAM, false)?;
    let analyzer = TextAnalyzer::builder(ngrams).filter(LowerCaser).build();
    index.tokenizers().register(INFIX_TOKENIZER, analyzer);
    Ok(())
}

/// Build the search schema for books
pub fn build_book_schema() -> (Schema, BookFields) {
    let mut schema_builder = Schema::builder();

    // ID - stored, indexed as a single token
    let id = schema_builder.add_text_field("id", STRING | STORED);

    // Full-text fields; only the id is needed back from the index
    let title = schema_builder.add_text_field("title", TEXT);
    let author = schema_builder.add_text_field("author", TEXT);
    let description = schema_builder.add_text_field("description", TEXT);
    let players = schema_builder.add_text_field("players", TEXT);
    let teams = schema_builder.add_text_field("teams", TEXT);
    let topics = schema_builder.add_text_field("topics", TEXT);
    let category = schema_builder.add_text_field("category", TEXT);

    let infix_indexing = TextFieldIndexing::default()
        .set_tokenizer(INFIX_TOKENIZER)
        .set_index_option(IndexRecordOption::WithFreqs);
    let infix = schema_builder.add_text_field(
        "infix",
        TextOptions::default().set_indexing_options(infix_indexing),
    );

    let fields = BookFields {
        id,
        title,
        author,
        description,
        players,
        teams,
        topics,
        category,
        infix,
    };

    (schema_builder.build(), fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tantivy::schema::Value;

    #[test]
    fn test_schema_building() {
        let (schema, _) = build_book_schema();
        assert!(schema.get_field("id").is_ok());
        assert!(schema.get_field("title").is_ok());
        assert!(schema.get_field("players").is_ok());
        assert!(schema.get_field("category").is_ok());
        assert!(schema.get_field("infix").is_ok());
    }

    #[test]
    fn test_book_to_document() {
        let (_, fields) = build_book_schema();
        let book = BookRecord::new("b1", "b1", "Eleven Rings", "Phil Jackson", "Coaching")
            .with_players(vec!["Michael Jordan", "Kobe Bryant"]);

        let doc = book.to_tantivy_doc(&fields);
        assert_eq!(doc.get_first(fields.id).and_then(|v| v.as_str()), Some("b1"));
        assert_eq!(doc.get_all(fields.players).count(), 2);
        assert_eq!(doc.get_all(fields.description).count(), 0);
        assert_eq!(doc.get_all(fields.infix).count(), 2);
    }

    #[test]
    fn test_weighted_fields_follow_config() {
        let (_, fields) = build_book_schema();
        let weighted = fields.weighted(&FieldWeights::default());
        assert_eq!(weighted.len(), 7);
        assert_eq!(weighted[0], (fields.title, 2.0));
    }
}
