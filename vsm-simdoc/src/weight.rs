//! TF-IDF weight vectors.
use std::ops::Deref;

use crate::errors::Result;
use crate::tfidf::{Idf, TermCounter, Tf};
use crate::vocabulary::Vocabulary;

/// TF-IDF profile of a document, one weight per vocabulary term.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates an all-zero vector of `dim` dimensions.
    pub fn zeros(dim: usize) -> Self {
        Self(vec![0.; dim])
    }

    /// Checks if every weight is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0.)
    }

    /// Gets the number of dimensions with a positive weight.
    pub fn num_positives(&self) -> usize {
        self.0.iter().filter(|&&w| w > 0.).count()
    }
}

impl From<Vec<f64>> for WeightVector {
    fn from(weights: Vec<f64>) -> Self {
        Self(weights)
    }
}

impl Deref for WeightVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

/// Builder of weight vectors against a fixed vocabulary and IDF table.
pub struct WeightBuilder<'a> {
    vocabulary: &'a Vocabulary,
    idf: &'a Idf,
}

impl<'a> WeightBuilder<'a> {
    /// Creates an instance.
    ///
    /// # Panics
    ///
    /// If the IDF table was not built for the vocabulary.
    pub fn new(vocabulary: &'a Vocabulary, idf: &'a Idf) -> Self {
        assert_eq!(vocabulary.len(), idf.len());
        Self { vocabulary, idf }
    }

    /// Builds the vector whose `i`-th weight is `tf(term_i) * idf(term_i)`.
    ///
    /// Fails with [`crate::errors::SimdocError::InsufficientNgrams`]
    /// if the document is too short to have a term frequency.
    pub fn build(&self, document: &TermCounter) -> Result<WeightVector> {
        let tf = Tf::new(document)?;
        let weights = self
            .vocabulary
            .iter()
            .zip(self.idf.idfs())
            .map(|(term, &idf)| tf.tf(term) * idf)
            .collect();
        Ok(WeightVector(weights))
    }

    /// Gets the number of dimensions of built vectors.
    pub fn dim(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngram::NgramOrder;
    use crate::tfidf::TermMatching;
    use crate::tokenizer::Tokenizer;

    #[test]
    fn test_build() {
        let tokenizer = Tokenizer::new(NgramOrder::Unigram);
        let docs: Vec<_> = ["cat cat dog", "dog bird"]
            .iter()
            .map(|d| TermCounter::new(d, &tokenizer, TermMatching::Substring))
            .collect();
        let vocab = Vocabulary::from_terms(["cat", "dog", "bird", "fish"]);
        let idf = Idf::build(&vocab, &docs);
        let builder = WeightBuilder::new(&vocab, &idf);

        let v = builder.build(&docs[0]).unwrap();
        assert_eq!(v.len(), builder.dim());
        assert_eq!(v[0], 2. / 3. * ((2f64 / 1f64).log10() + 1.));
        assert_eq!(v[1], 1. / 3.);
        assert_eq!(v[2], 0.);
        assert_eq!(v[3], 0.);
        assert_eq!(v.num_positives(), 2);

        let v = builder.build(&docs[1]).unwrap();
        assert_eq!(v.len(), 4);
        assert_eq!(v[0], 0.);
        assert_eq!(v[1], 1. / 2.);
    }

    #[test]
    fn test_build_short_document() {
        let tokenizer = Tokenizer::new(NgramOrder::Trigram);
        let docs: Vec<_> = ["one two three", "one two"]
            .iter()
            .map(|d| TermCounter::new(d, &tokenizer, TermMatching::Substring))
            .collect();
        let vocab = Vocabulary::from_terms(["one two three"]);
        let idf = Idf::build(&vocab, &docs);
        let builder = WeightBuilder::new(&vocab, &idf);
        assert!(builder.build(&docs[0]).is_ok());
        assert!(builder.build(&docs[1]).is_err());
    }

    #[test]
    fn test_zeros() {
        let v = WeightVector::zeros(3);
        assert_eq!(v.len(), 3);
        assert!(v.is_zero());
        assert!(!WeightVector::from(vec![0., 0.5]).is_zero());
        assert!(WeightVector::default().is_zero());
    }
}
