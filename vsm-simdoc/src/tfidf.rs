//! Term statistics: document frequency, inverse document frequency, and term frequency.
use std::fmt;
use std::str::FromStr;

use hashbrown::HashMap;
use rayon::prelude::*;

use crate::errors::{Result, SimdocError};
use crate::ngram::NgramOrder;
use crate::text;
use crate::tokenizer::Tokenizer;
use crate::vocabulary::Vocabulary;

/// How occurrences of a term in a document are recognized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TermMatching {
    /// A term occurs wherever its rendered string appears as a substring of
    /// the normalized document text. Short terms may match inside longer words.
    #[default]
    Substring,
    /// A term occurs wherever it appears as one of the document's own n-grams.
    Exact,
}

impl FromStr for TermMatching {
    type Err = &'static str;
    fn from_str(m: &str) -> Result<Self, Self::Err> {
        match m {
            "substring" => Ok(Self::Substring),
            "exact" => Ok(Self::Exact),
            _ => Err("Could not parse a term-matching value"),
        }
    }
}

impl fmt::Display for TermMatching {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Substring => f.write_str("substring"),
            Self::Exact => f.write_str("exact"),
        }
    }
}

/// Counter of term occurrences in one document.
///
/// The document is normalized once on construction and reused for every term.
#[derive(Clone, Debug)]
pub struct TermCounter {
    order: NgramOrder,
    num_words: usize,
    occurrences: Occurrences,
}

#[derive(Clone, Debug)]
enum Occurrences {
    Substring(String),
    Exact(HashMap<String, usize>),
}

impl TermCounter {
    /// Creates a counter of a raw document.
    pub fn new<S>(document: S, tokenizer: &Tokenizer, matching: TermMatching) -> Self
    where
        S: AsRef<str>,
    {
        let order = tokenizer.order();
        match matching {
            TermMatching::Substring => {
                let normalized = text::normalize(document);
                Self {
                    order,
                    num_words: text::num_words(&normalized),
                    occurrences: Occurrences::Substring(normalized),
                }
            }
            TermMatching::Exact => {
                let cleaned = text::strip_punctuation(text::normalize(document));
                let num_words = text::num_words(&cleaned);
                let ngrams = tokenizer.ngrams(&cleaned);
                let mut counter = HashMap::new();
                for ngram in ngrams {
                    *counter.entry(ngram).or_insert(0) += 1;
                }
                Self {
                    order,
                    num_words,
                    occurrences: Occurrences::Exact(counter),
                }
            }
        }
    }

    /// Checks if the term occurs in the document.
    pub fn contains(&self, term: &str) -> bool {
        match &self.occurrences {
            Occurrences::Substring(text) => text.contains(term),
            Occurrences::Exact(counter) => counter.contains_key(term),
        }
    }

    /// Counts non-overlapping occurrences of the term.
    pub fn count(&self, term: &str) -> usize {
        match &self.occurrences {
            Occurrences::Substring(text) => text.matches(term).count(),
            Occurrences::Exact(counter) => counter.get(term).copied().unwrap_or(0),
        }
    }

    /// Gets the number of words in the document.
    pub const fn num_words(&self) -> usize {
        self.num_words
    }

    /// Gets the number of n-grams derivable from the document.
    pub const fn num_ngrams(&self) -> usize {
        self.order.num_ngrams(self.num_words)
    }
}

/// Computes `1 + log10(num_docs / df)`, or exactly `1` if `df` is zero.
pub fn idf_weight(num_docs: usize, df: usize) -> f64 {
    if df == 0 {
        1.
    } else {
        (num_docs as f64 / df as f64).log10() + 1.
    }
}

/// Document frequencies and inverse document frequencies of vocabulary terms.
#[derive(Clone, Debug, Default)]
pub struct Idf {
    dfs: Vec<usize>,
    idfs: Vec<f64>,
    num_docs: usize,
}

impl Idf {
    /// Builds the table for every term of the vocabulary, in vocabulary order.
    pub fn build(vocabulary: &Vocabulary, documents: &[TermCounter]) -> Self {
        let dfs = vocabulary
            .iter()
            .map(|term| documents.iter().filter(|d| d.contains(term)).count())
            .collect();
        Self::from_dfs(dfs, documents.len())
    }

    /// Builds the table in parallel over terms.
    pub fn build_in_parallel(vocabulary: &Vocabulary, documents: &[TermCounter]) -> Self {
        let dfs = vocabulary
            .terms()
            .par_iter()
            .map(|term| documents.iter().filter(|d| d.contains(term)).count())
            .collect();
        Self::from_dfs(dfs, documents.len())
    }

    fn from_dfs(dfs: Vec<usize>, num_docs: usize) -> Self {
        let idfs = dfs.iter().map(|&df| idf_weight(num_docs, df)).collect();
        Self {
            dfs,
            idfs,
            num_docs,
        }
    }

    /// Gets the number of documents.
    pub const fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// Gets the number of terms.
    pub fn len(&self) -> usize {
        self.dfs.len()
    }

    /// Checks if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.dfs.is_empty()
    }

    /// Gets the document frequency of the `i`-th vocabulary term.
    pub fn df(&self, i: usize) -> usize {
        self.dfs[i]
    }

    /// Gets the inverse document frequency of the `i`-th vocabulary term.
    pub fn idf(&self, i: usize) -> f64 {
        self.idfs[i]
    }

    /// Gets all inverse document frequencies in vocabulary order.
    pub fn idfs(&self) -> &[f64] {
        &self.idfs
    }
}

/// Term frequencies of one document.
pub struct Tf<'a> {
    counter: &'a TermCounter,
    num_ngrams: f64,
}

impl<'a> Tf<'a> {
    /// Creates an instance, failing if the document has too few words to form an n-gram.
    pub fn new(counter: &'a TermCounter) -> Result<Self> {
        let num_ngrams = counter.num_ngrams();
        if num_ngrams == 0 {
            return Err(SimdocError::insufficient_ngrams(
                counter.num_words(),
                counter.order.size(),
            ));
        }
        Ok(Self {
            counter,
            num_ngrams: num_ngrams as f64,
        })
    }

    /// Computes the number of occurrences of the term divided by the number of n-grams.
    pub fn tf(&self, term: &str) -> f64 {
        self.counter.count(term) as f64 / self.num_ngrams
    }
}
