//! Common test fixtures for catalog, search and browse tests
//!
//! Provides the small three-book catalog used for property checks and a
//! larger basketball/baseball catalog for search ranking tests.

#![allow(dead_code)]

use book_directory::models::BookRecord;
use book_directory::Catalog;

/// Year pinned for popularity scoring in tests
pub const CURRENT_YEAR: i32 = 2024;

/// Book A: recent, highly rated, heavily reviewed biography
pub fn book_a() -> BookRecord {
    BookRecord::new("A", "book-a", "Legacy of a Champion", "Dana Author", "Biography")
        .with_topics(vec!["Leadership"])
        .with_rating(4.8)
        .with_review_count(12_000)
        .with_publication_year(2020)
}

/// Book B: older biography sharing a topic with A
pub fn book_b() -> BookRecord {
    BookRecord::new("B", "book-b", "Voices from the Bench", "Robin Writer", "Biography")
        .with_topics(vec!["Leadership", "Coaching"])
        .with_rating(4.0)
        .with_review_count(300)
        .with_publication_year(2005)
}

/// Book C: unrated history with no topics
pub fn book_c() -> BookRecord {
    BookRecord::new("C", "book-c", "Ballparks Lost", "Casey Historian", "History").with_publication_year(1995)
}

pub fn abc() -> Vec<BookRecord> {
    vec![book_a(), book_b(), book_c()]
}

pub fn abc_catalog() -> Catalog {
    Catalog::load(abc())
}

/// A larger catalog with overlapping players, teams and authors
pub fn sports_books() -> Vec<BookRecord> {
    vec![
        BookRecord::new("1", "eleven-rings", "Eleven Rings", "Phil Jackson", "Coaching")
            .with_topics(vec!["Leadership", "Championships"])
            .with_players(vec!["Michael Jordan", "Kobe Bryant", "Shaquille O'Neal"])
            .with_teams(vec!["Chicago Bulls", "Los Angeles Lakers"])
            .with_formats(vec!["Hardcover", "Kindle", "Audiobook"])
            .with_rating(4.6)
            .with_review_count(4_200)
            .with_publication_year(2013)
            .with_description("The story of a coach who won eleven championships."),
        BookRecord::new("2", "sacred-hoops", "Sacred Hoops", "Phil Jackson", "Coaching")
            .with_topics(vec!["Leadership", "Mindfulness"])
            .with_players(vec!["Michael Jordan", "Scottie Pippen"])
            .with_teams(vec!["Chicago Bulls"])
            .with_formats(vec!["Paperback", "Kindle"])
            .with_rating(4.7)
            .with_review_count(1_900)
            .with_publication_year(1995),
        BookRecord::new("3", "the-jordan-rules", "The Jordan Rules", "Sam Smith", "Biography")
            .with_topics(vec!["Championships"])
            .with_players(vec!["Michael Jordan"])
            .with_teams(vec!["Chicago Bulls"])
            .with_formats(vec!["Paperback"])
            .with_rating(4.4)
            .with_review_count(800)
            .with_publication_year(1992),
        BookRecord::new("4", "moneyball", "Moneyball", "Michael Lewis", "Baseball")
            .with_topics(vec!["Analytics", "Management"])
            .with_teams(vec!["Oakland Athletics"])
            .with_formats(vec!["Paperback", "Kindle", "Audiobook"])
            .with_rating(4.7)
            .with_review_count(15_000)
            .with_publication_year(2003)
            .with_description("How a small-market team used statistics to compete."),
        BookRecord::new("5", "mamba-mentality", "The Mamba Mentality", "Kobe Bryant", "Biography")
            .with_topics(vec!["Training", "Mindset"])
            .with_players(vec!["Kobe Bryant"])
            .with_teams(vec!["Los Angeles Lakers"])
            .with_formats(vec!["Hardcover"])
            .with_rating(4.8)
            .with_review_count(6_500)
            .with_publication_year(2018),
        BookRecord::new("6", "the-blind-side", "The Blind Side", "Michael Lewis", "Football")
            .with_topics(vec!["Family"])
            .with_formats(vec!["Paperback"])
            .with_rating(4.5)
            .with_review_count(3_100)
            .with_publication_year(2006),
        BookRecord::new("7", "untitled-draft", "Draft Day Notes", "Anonymous", "Basketball"),
    ]
}

pub fn sports_catalog() -> Catalog {
    Catalog::load(sports_books())
}

pub fn ids(books: &[&BookRecord]) -> Vec<String> {
    books.iter().map(|b| b.id.clone()).collect()
}
