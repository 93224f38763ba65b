//! Title collation

use icu_collator::{AlternateHandling, Collator, CollatorOptions};
use std::cmp::Ordering;

/// Compares titles with the Unicode Collation Algorithm (root locale).
///
/// Accents and case differ only at the secondary and tertiary levels, with
/// lowercase first. Punctuation and spaces are shifted out of the primary
/// comparison, so `"Quiet" Strength` files under Q.
pub struct TitleCollator {
    collator: Option<Collator>,
}

impl TitleCollator {
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.alternate_handling = Some(AlternateHandling::Shifted);

        let collator = match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!(error = %e, "Collation data unavailable, comparing lowercase titles");
                None
            }
        };

        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a)),
        }
    }
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two titles by collation order
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TitleCollator::new().compare(a, b)
}
