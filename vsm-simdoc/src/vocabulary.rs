//! Corpus-wide vocabulary of n-gram terms.
use std::ops::Index;

use hashbrown::HashSet;

use crate::stopwords::StopwordFilter;
use crate::tokenizer::Tokenizer;

/// Ordered sequence of distinct terms shared by all weight vectors of a run.
///
/// The `i`-th dimension of every weight vector corresponds to the `i`-th term.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Builds the vocabulary of a corpus.
    ///
    /// All documents are concatenated into one text (separated by newlines),
    /// its distinct n-grams are extracted, and n-grams containing a stopword are removed.
    pub fn build<I, D>(documents: I, tokenizer: &Tokenizer, stopwords: &StopwordFilter) -> Self
    where
        I: IntoIterator<Item = D>,
        D: AsRef<str>,
    {
        let mut combined = String::new();
        for doc in documents {
            combined.push_str(doc.as_ref());
            combined.push('\n');
        }
        Self {
            terms: stopwords.filter(tokenizer.unique_ngrams(&combined)),
        }
    }

    /// Creates a vocabulary from given terms, dropping repeated ones.
    pub fn from_terms<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| seen.insert(t.clone()))
            .collect();
        Self { terms }
    }

    /// Gets the terms in dimension order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Gets the term of the `i`-th dimension.
    pub fn get(&self, i: usize) -> Option<&str> {
        self.terms.get(i).map(String::as_str)
    }

    /// Gets the number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Checks if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Creates an iterator over the terms.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl Index<usize> for Vocabulary {
    type Output = str;

    fn index(&self, i: usize) -> &str {
        &self.terms[i]
    }
}
