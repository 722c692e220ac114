use vsm_simdoc::{Measure, NgramOrder, SimdocConfig, SimilaritySearcher};

fn main() {
    let documents = vec![
        "Welcome to Jimbocho, the town of books and curry!",
        "Welcome to Jimbocho, the city of books and curry!",
        "We welcome you to Jimbocho, the town of books and curry.",
        "Welcome to the town of books and curry, Jimbocho!",
    ];

    // Compares documents with word unigrams in the cosine space.
    let config = SimdocConfig {
        order: NgramOrder::Unigram,
        measure: Measure::Cosine,
        ..Default::default()
    };
    // Builds TF-IDF weight vectors of the documents.
    let searcher = SimilaritySearcher::new(config)
        .unwrap()
        .build_vectors(documents.iter())
        .unwrap();

    // The vocabulary excludes stopwords such as "the" and "of".
    assert_eq!(
        searcher.vocabulary().terms(),
        &["welcome", "jimbocho", "town", "books", "curry", "city"]
    );

    // Compares all the pairs.
    let results = searcher.search_similar_pairs();
    assert_eq!(results.len(), 6);
    for r in &results {
        println!(
            "[i={},j={},similarity={},tokens={}]",
            r.i,
            r.j,
            r.score,
            r.shared_tokens.unwrap_or(0)
        );
    }

    // Unigrams ignore the word order, so documents 0, 2, and 3 have parallel vectors.
    for (i, j) in [(0, 2), (0, 3), (2, 3)] {
        let r = searcher.compare(i, j).unwrap();
        assert!((r.score - 1.).abs() < 1e-9);
        assert_eq!(r.shared_tokens, Some(5));
    }
    // "town" and "city" differ.
    let r = searcher.compare(0, 1).unwrap();
    assert!(r.score < 0.9);
    assert_eq!(r.shared_tokens, Some(4));
}
