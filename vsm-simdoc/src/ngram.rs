//! Word n-grams.
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, SimdocError};

/// Order of word n-grams used as terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NgramOrder {
    /// Single words.
    Unigram,
    /// Pairs of adjacent words.
    Bigram,
    /// Triples of adjacent words.
    #[default]
    Trigram,
}

impl NgramOrder {
    /// Gets the number of words in an n-gram.
    pub const fn size(self) -> usize {
        match self {
            Self::Unigram => 1,
            Self::Bigram => 2,
            Self::Trigram => 3,
        }
    }

    /// Gets the number of n-grams derivable from `num_words` words,
    /// i.e., `max(0, num_words - (n - 1))`.
    pub const fn num_ngrams(self, num_words: usize) -> usize {
        num_words.saturating_sub(self.size() - 1)
    }
}

impl TryFrom<usize> for NgramOrder {
    type Error = SimdocError;

    fn try_from(n: usize) -> Result<Self> {
        match n {
            1 => Ok(Self::Unigram),
            2 => Ok(Self::Bigram),
            3 => Ok(Self::Trigram),
            _ => Err(SimdocError::input(format!(
                "N-gram order must be 1, 2, or 3, but got {n}."
            ))),
        }
    }
}

impl FromStr for NgramOrder {
    type Err = &'static str;
    fn from_str(order: &str) -> Result<Self, Self::Err> {
        match order {
            "unigram" | "1" => Ok(Self::Unigram),
            "bigram" | "2" => Ok(Self::Bigram),
            "trigram" | "3" => Ok(Self::Trigram),
            _ => Err("Could not parse an n-gram order"),
        }
    }
}

impl fmt::Display for NgramOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Unigram => "unigram",
            Self::Bigram => "bigram",
            Self::Trigram => "trigram",
        };
        f.write_str(name)
    }
}

/// Iterator over the contiguous n-grams of a word sequence,
/// each rendered by joining its words with a single space.
pub(crate) struct NgramIter<'a, 'w> {
    words: &'a [&'w str],
    order: usize,
    position: usize,
}

impl<'a, 'w> NgramIter<'a, 'w> {
    pub(crate) const fn new(words: &'a [&'w str], order: NgramOrder) -> Self {
        Self {
            words,
            order: order.size(),
            position: 0,
        }
    }
}

impl<'a, 'w> Iterator for NgramIter<'a, 'w> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.words.len() < self.position + self.order {
            return None;
        }
        let ngram = self.words[self.position..self.position + self.order].join(" ");
        self.position += 1;
        Some(ngram)
    }
}
