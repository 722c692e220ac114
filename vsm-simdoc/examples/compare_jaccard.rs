use vsm_simdoc::{JaccardVariant, Measure, NgramOrder, SimdocConfig, SimilaritySearcher};

fn main() {
    let documents = vec![
        "Welcome to Jimbocho, the town of books and curry!",
        "Welcome to Jimbocho, the city of books and curry!",
        "We welcome you to Jimbocho, the town of books and curry.",
        "Welcome to the town of books and curry, Jimbocho!",
    ];

    // Searches pairs whose Jaccard index over word unigrams is at least 0.9.
    let config = SimdocConfig {
        order: NgramOrder::Unigram,
        measure: Measure::Jaccard,
        jaccard: JaccardVariant::Set,
        threshold: Some(0.9),
        ..Default::default()
    };
    let searcher = SimilaritySearcher::new(config)
        .unwrap()
        .build_vectors(documents.iter())
        .unwrap();

    let results: Vec<_> = searcher
        .search_similar_pairs()
        .into_iter()
        .map(|r| (r.i, r.j, r.score))
        .collect();
    assert_eq!(results, vec![(0, 2, 1.), (0, 3, 1.), (2, 3, 1.)]);

    // Documents 0 and 1 share four of six terms.
    assert_eq!(searcher.compare(0, 1).unwrap().score, 4. / 6.);
}
