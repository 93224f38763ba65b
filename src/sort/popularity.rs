//! Composite popularity score used when no text query ranks the results

use crate::models::BookRecord;

/// Points for how recently the book was published
pub fn recency_points(publication_year: Option<i32>, current_year: i32) -> u32 {
    let Some(year) = publication_year else {
        return 0;
    };

    match current_year - year {
        age if age <= 1 => 30,
        age if age <= 3 => 25,
        age if age <= 5 => 20,
        age if age <= 10 => 10,
        age if age <= 20 => 5,
        _ => 0,
    }
}

/// Points for review volume
pub fn review_points(review_count: Option<u64>) -> u32 {
    match review_count.unwrap_or(0) {
        n if n >= 10_000 => 40,
        n if n >= 5_000 => 35,
        n if n >= 1_000 => 30,
        n if n >= 500 => 25,
        n if n >= 100 => 20,
        n if n >= 50 => 15,
        n if n > 0 => 10,
        _ => 0,
    }
}

/// Points for average rating; any rating earns at least 5
pub fn rating_points(rating: Option<f64>) -> u32 {
    match rating {
        None => 0,
        Some(r) if r >= 4.8 => 30,
        Some(r) if r >= 4.5 => 25,
        Some(r) if r >= 4.2 => 20,
        Some(r) if r >= 4.0 => 15,
        Some(r) if r >= 3.5 => 10,
        Some(_) => 5,
    }
}

/// Sum of the recency, review and rating buckets
pub fn popularity_score(book: &BookRecord, current_year: i32) -> u32 {
    recency_points(book.publication_year, current_year)
        + review_points(book.review_count)
        + rating_points(book.rating)
}
