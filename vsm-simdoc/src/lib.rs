//! All-pair document similarity in the vector space model.
//!
//! Documents are split into word n-grams, weighted with TF-IDF against a corpus-wide vocabulary,
//! and compared pairwise with the cosine similarity or the Jaccard coefficient.
//!
//! ```
//! use vsm_simdoc::{NgramOrder, SimdocConfig, SimilaritySearcher};
//!
//! let documents = [
//!     "Welcome to Jimbocho, the town of books and curry!",
//!     "Welcome to Jimbocho, the town of books and curry!",
//!     "Quantum physicists measure entangled photons.",
//! ];
//! let config = SimdocConfig {
//!     order: NgramOrder::Unigram,
//!     ..Default::default()
//! };
//! let searcher = SimilaritySearcher::new(config)
//!     .unwrap()
//!     .build_vectors(documents)
//!     .unwrap();
//! let results = searcher.search_similar_pairs();
//! assert_eq!(results.len(), 3);
//! assert!((results[0].score - 1.).abs() < 1e-9);
//! ```
#![deny(missing_docs)]

pub mod config;
pub mod errors;
pub mod ngram;
pub mod searcher;
pub mod similarity;
pub mod stopwords;
pub mod text;
pub mod tfidf;
pub mod tokenizer;
pub mod vocabulary;
pub mod weight;

pub use config::SimdocConfig;
pub use ngram::NgramOrder;
pub use searcher::{SimilarityResult, SimilaritySearcher};
pub use similarity::{JaccardVariant, Measure};
pub use stopwords::StopwordFilter;
pub use tfidf::TermMatching;
