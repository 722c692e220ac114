//! Word n-gram tokenizer.
use hashbrown::HashSet;

use crate::ngram::{NgramIter, NgramOrder};
use crate::text;

/// Tokenizer extracting word n-grams of a fixed order.
///
/// Input texts are lower-cased, newlines and apostrophes are replaced by spaces,
/// and ASCII punctuation is removed before splitting on whitespace.
#[derive(Clone, Copy, Debug)]
pub struct Tokenizer {
    order: NgramOrder,
}

impl Tokenizer {
    /// Creates an instance for n-grams of the given order.
    pub const fn new(order: NgramOrder) -> Self {
        Self { order }
    }

    /// Gets the n-gram order.
    pub const fn order(&self) -> NgramOrder {
        self.order
    }

    /// Extracts all n-grams in order of appearance, including duplicates.
    pub fn ngrams<S>(&self, text: S) -> Vec<String>
    where
        S: AsRef<str>,
    {
        let cleaned = text::strip_punctuation(text::normalize(text));
        let words: Vec<_> = text::words(&cleaned).collect();
        NgramIter::new(&words, self.order).collect()
    }

    /// Extracts the set of distinct n-grams.
    ///
    /// The set is returned as a vector in order of first appearance,
    /// which gives a stable ordering within one run but carries no meaning.
    pub fn unique_ngrams<S>(&self, text: S) -> Vec<String>
    where
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        self.ngrams(text)
            .into_iter()
            .filter(|ngram| seen.insert(ngram.clone()))
            .collect()
    }
}
