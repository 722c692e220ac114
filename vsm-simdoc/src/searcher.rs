//! All-pair similarity search over TF-IDF weight vectors.
use rayon::prelude::*;

use crate::config::SimdocConfig;
use crate::errors::{Result, SimdocError};
use crate::similarity::{self, Measure};
use crate::stopwords::StopwordFilter;
use crate::tfidf::{Idf, TermCounter};
use crate::tokenizer::Tokenizer;
use crate::vocabulary::Vocabulary;
use crate::weight::{WeightBuilder, WeightVector};

/// Similarity of a document pair `(i, j)` with `i < j`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimilarityResult {
    /// Index of the left-side document.
    pub i: usize,
    /// Index of the right-side document.
    pub j: usize,
    /// Similarity score.
    pub score: f64,
    /// Number of terms weighted positively in both documents, reported for cosine similarity.
    pub shared_tokens: Option<usize>,
}

/// Searcher of similar document pairs in the vector space model.
pub struct SimilaritySearcher {
    config: SimdocConfig,
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    shows_progress: bool,
    vocabulary: Vocabulary,
    idf: Idf,
    vectors: Vec<WeightVector>,
}

impl SimilaritySearcher {
    /// Creates an instance with the English stopword list.
    pub fn new(config: SimdocConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tokenizer: Tokenizer::new(config.order),
            stopwords: StopwordFilter::english(),
            shows_progress: false,
            vocabulary: Vocabulary::default(),
            idf: Idf::default(),
            vectors: vec![],
        })
    }

    /// Replaces the stopword list.
    pub fn stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Shows the progress via the standard error output?
    pub const fn shows_progress(mut self, yes: bool) -> Self {
        self.shows_progress = yes;
        self
    }

    /// Builds the vocabulary, the IDF table, and the weight vectors of input documents.
    ///
    /// A document too short to form a single n-gram gets an all-zero vector.
    pub fn build_vectors<I, D>(self, documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<str>,
    {
        self.build(documents, false)
    }

    /// Builds the vocabulary, the IDF table, and the weight vectors in parallel.
    /// The results are the same as [`Self::build_vectors`].
    pub fn build_vectors_in_parallel<I, D>(self, documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<str>,
    {
        self.build(documents, true)
    }

    fn build<I, D>(mut self, documents: I, in_parallel: bool) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<str>,
    {
        let documents: Vec<D> = documents.into_iter().collect();

        self.vocabulary = Vocabulary::build(&documents, &self.tokenizer, &self.stopwords);
        if self.shows_progress {
            eprintln!(
                "[SimilaritySearcher::build] #documents={}, #terms={}",
                documents.len(),
                self.vocabulary.len()
            );
        }

        let counters: Vec<_> = documents
            .iter()
            .map(|doc| TermCounter::new(doc, &self.tokenizer, self.config.matching))
            .collect();

        self.idf = if in_parallel {
            Idf::build_in_parallel(&self.vocabulary, &counters)
        } else {
            Idf::build(&self.vocabulary, &counters)
        };

        let builder = WeightBuilder::new(&self.vocabulary, &self.idf);
        let vectors: Vec<_> = if in_parallel {
            counters.par_iter().map(|c| builder.build(c)).collect()
        } else {
            counters.iter().map(|c| builder.build(c)).collect()
        };

        let mut weights = Vec::with_capacity(vectors.len());
        for (i, vector) in vectors.into_iter().enumerate() {
            match vector {
                Ok(vector) => weights.push(vector),
                Err(SimdocError::InsufficientNgrams(e)) => {
                    if self.shows_progress {
                        eprintln!("[SimilaritySearcher::build] Document {i} is zeroed. {e}");
                    }
                    weights.push(WeightVector::zeros(builder.dim()));
                }
                Err(e) => return Err(e),
            }
            if self.shows_progress && (i + 1) % 1000 == 0 {
                eprintln!("[SimilaritySearcher::build] Processed {} documents...", i + 1);
            }
        }
        self.vectors = weights;
        Ok(self)
    }

    /// Compares two documents, returning `None` if an index is out of range.
    pub fn compare(&self, i: usize, j: usize) -> Option<SimilarityResult> {
        let lhs = self.vectors.get(i)?;
        let rhs = self.vectors.get(j)?;
        let result = match self.config.measure {
            Measure::Cosine => {
                let c = similarity::cosine(lhs, rhs);
                SimilarityResult {
                    i,
                    j,
                    score: c.score,
                    shared_tokens: Some(c.shared_tokens),
                }
            }
            Measure::Jaccard => SimilarityResult {
                i,
                j,
                score: similarity::jaccard(lhs, rhs, self.config.jaccard),
                shared_tokens: None,
            },
        };
        Some(result)
    }

    /// Compares every pair `(i, j)` with `i < j` exactly once, in lexicographic order,
    /// returning the results accepted by the configured threshold.
    pub fn search_similar_pairs(&self) -> Vec<SimilarityResult> {
        let mut results = vec![];
        for i in 0..self.len() {
            if self.shows_progress && (i + 1) % 1000 == 0 {
                eprintln!(
                    "[SimilaritySearcher::search_similar_pairs] Processed {}/{}...",
                    i + 1,
                    self.len()
                );
            }
            for j in i + 1..self.len() {
                if let Some(result) = self.compare(i, j) {
                    if self.config.accepts(result.score) {
                        results.push(result);
                    }
                }
            }
        }
        results
    }

    /// Gets the vocabulary.
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Gets the IDF table.
    pub const fn idf(&self) -> &Idf {
        &self.idf
    }

    /// Gets the weight vectors in document order.
    pub fn weight_vectors(&self) -> &[WeightVector] {
        &self.vectors
    }

    /// Gets the number of input documents.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Checks if no documents are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the configuration.
    pub const fn config(&self) -> SimdocConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngram::NgramOrder;
    use crate::similarity::JaccardVariant;
    use crate::tfidf::TermMatching;

    const EPS: f64 = 1e-9;

    fn config(order: NgramOrder, measure: Measure) -> SimdocConfig {
        SimdocConfig {
            order,
            measure,
            ..Default::default()
        }
    }

    #[test]
    fn test_identical_and_disjoint() {
        let documents = [
            "Curry shops line every street near bookstores.",
            "Curry shops line every street near bookstores.",
            "Quantum physicists measure entangled photons carefully.",
        ];
        for order in [NgramOrder::Unigram, NgramOrder::Bigram, NgramOrder::Trigram] {
            let searcher = SimilaritySearcher::new(config(order, Measure::Cosine))
                .unwrap()
                .build_vectors(documents)
                .unwrap();
            let results = searcher.search_similar_pairs();
            assert_eq!(results.len(), 3);
            assert_eq!((results[0].i, results[0].j), (0, 1));
            assert!((results[0].score - 1.).abs() < EPS);
            assert!(results[0].shared_tokens.unwrap() > 0);
            assert_eq!((results[1].i, results[1].j), (0, 2));
            assert!(results[1].score.abs() < EPS);
            assert_eq!(results[1].shared_tokens, Some(0));
            assert_eq!((results[2].i, results[2].j), (1, 2));
            assert!(results[2].score.abs() < EPS);
        }
    }

    #[test]
    fn test_vector_dimensions() {
        let documents = ["a black cat naps", "the black dog barks", "cats and dogs"];
        let searcher = SimilaritySearcher::new(config(NgramOrder::Unigram, Measure::Cosine))
            .unwrap()
            .build_vectors(documents)
            .unwrap();
        assert_eq!(searcher.len(), 3);
        assert_eq!(searcher.idf().num_docs(), 3);
        for v in searcher.weight_vectors() {
            assert_eq!(v.len(), searcher.vocabulary().len());
        }
    }

    #[test]
    fn test_pair_count() {
        let documents: Vec<_> = (0..7).map(|i| format!("document number {i} here")).collect();
        let searcher = SimilaritySearcher::new(config(NgramOrder::Unigram, Measure::Jaccard))
            .unwrap()
            .build_vectors(&documents)
            .unwrap();
        let results = searcher.search_similar_pairs();
        assert_eq!(results.len(), 7 * 6 / 2);
        let mut pairs: Vec<_> = results.iter().map(|r| (r.i, r.j)).collect();
        assert!(pairs.iter().all(|&(i, j)| i < j));
        pairs.dedup();
        assert_eq!(pairs.len(), 21);
        assert!(results.iter().all(|r| r.shared_tokens.is_none()));
    }

    #[test]
    fn test_jaccard_variants() {
        let documents = ["green apples grow", "green apples grow", "green pears fall"];
        let set = SimilaritySearcher::new(config(NgramOrder::Unigram, Measure::Jaccard))
            .unwrap()
            .build_vectors(documents)
            .unwrap();
        let results = set.search_similar_pairs();
        assert_eq!(results[0].score, 1.);
        assert_eq!(results[1].score, 1. / 5.);

        let first = SimilaritySearcher::new(SimdocConfig {
            jaccard: JaccardVariant::FirstMatch,
            ..config(NgramOrder::Unigram, Measure::Jaccard)
        })
        .unwrap()
        .build_vectors(documents)
        .unwrap();
        let results = first.search_similar_pairs();
        // Both vectors hold the three distinct values {1/3, 1/3 * idf("apples"), 0}.
        assert_eq!(results[0].score, 1. / 3.);
        assert!(results.iter().all(|r| (0. ..=1.).contains(&r.score)));
    }

    #[test]
    fn test_short_document() {
        let documents = ["tiny", "a long enough sentence about rivers", "rivers run long"];
        let searcher = SimilaritySearcher::new(config(NgramOrder::Bigram, Measure::Cosine))
            .unwrap()
            .build_vectors(documents)
            .unwrap();
        assert!(searcher.weight_vectors()[0].is_zero());
        let results = searcher.search_similar_pairs();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].score, 0.);
        assert_eq!(results[1].score, 0.);
    }

    #[test]
    fn test_threshold() {
        let documents = [
            "Curry shops line every street.",
            "Curry shops line every street.",
            "Quantum physicists measure photons.",
        ];
        let searcher = SimilaritySearcher::new(SimdocConfig {
            threshold: Some(0.5),
            ..config(NgramOrder::Unigram, Measure::Cosine)
        })
        .unwrap()
        .build_vectors(documents)
        .unwrap();
        let results = searcher.search_similar_pairs();
        assert_eq!(results.len(), 1);
        assert_eq!((results[0].i, results[0].j), (0, 1));
    }

    #[test]
    fn test_parallel() {
        let documents = [
            "rivers run long through valleys",
            "long rivers run through green valleys",
            "mountains stand tall above valleys",
            "x",
        ];
        for matching in [TermMatching::Substring, TermMatching::Exact] {
            let config = SimdocConfig {
                matching,
                ..config(NgramOrder::Bigram, Measure::Cosine)
            };
            let seq = SimilaritySearcher::new(config)
                .unwrap()
                .build_vectors(documents)
                .unwrap();
            let par = SimilaritySearcher::new(config)
                .unwrap()
                .build_vectors_in_parallel(documents)
                .unwrap();
            assert_eq!(seq.weight_vectors(), par.weight_vectors());
            assert_eq!(seq.search_similar_pairs(), par.search_similar_pairs());
        }
    }

    #[test]
    fn test_custom_stopwords() {
        let documents = ["red fox", "red hen"];
        let searcher = SimilaritySearcher::new(config(NgramOrder::Unigram, Measure::Cosine))
            .unwrap()
            .stopwords(StopwordFilter::from_words(["red"]))
            .build_vectors(documents)
            .unwrap();
        assert_eq!(searcher.vocabulary().terms(), &["fox", "hen"]);
        assert_eq!(searcher.search_similar_pairs()[0].score, 0.);
    }

    #[test]
    fn test_empty() {
        let documents: [&str; 0] = [];
        let searcher = SimilaritySearcher::new(SimdocConfig::default())
            .unwrap()
            .build_vectors(documents)
            .unwrap();
        assert!(searcher.is_empty());
        assert!(searcher.search_similar_pairs().is_empty());
        assert!(searcher.compare(0, 1).is_none());

        let searcher = SimilaritySearcher::new(config(NgramOrder::Unigram, Measure::Jaccard))
            .unwrap()
            .build_vectors(["the", "of"])
            .unwrap();
        assert!(searcher.vocabulary().is_empty());
        let results = searcher.search_similar_pairs();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 0.);
    }

    #[test]
    fn test_crlf_line_endings() {
        let lf = ["black cat\nnaps daily", "black cat\nnaps daily", "red hen\n"];
        let crlf = ["black cat\r\nnaps daily", "black cat\r\nnaps daily", "red hen\r\n"];
        let config = config(NgramOrder::Bigram, Measure::Cosine);
        let lf = SimilaritySearcher::new(config)
            .unwrap()
            .build_vectors(lf)
            .unwrap();
        let crlf = SimilaritySearcher::new(config)
            .unwrap()
            .build_vectors(crlf)
            .unwrap();

        assert_eq!(lf.vocabulary(), crlf.vocabulary());
        let k = lf
            .vocabulary()
            .iter()
            .position(|t| t == "cat naps")
            .unwrap();
        assert_eq!(crlf.idf().df(k), 2);
        assert!(crlf.weight_vectors()[0][k] > 0.);
        assert_eq!(lf.weight_vectors(), crlf.weight_vectors());
        assert_eq!(lf.search_similar_pairs(), crlf.search_similar_pairs());
    }

    #[test]
    fn test_mixed_case_stopwords() {
        let searcher = SimilaritySearcher::new(config(NgramOrder::Unigram, Measure::Cosine))
            .unwrap()
            .stopwords(StopwordFilter::from_words(["Red"]))
            .build_vectors(["Red fox", "red hen"])
            .unwrap();
        assert_eq!(searcher.vocabulary().terms(), &["fox", "hen"]);
        assert_eq!(searcher.config().order, NgramOrder::Unigram);
    }
}
