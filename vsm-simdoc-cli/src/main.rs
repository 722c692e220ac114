mod corpus;
mod report;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use vsm_simdoc::{
    JaccardVariant, Measure, NgramOrder, SimdocConfig, SimilaritySearcher, StopwordFilter,
    TermMatching,
};

use corpus::Corpus;
use report::Format;

#[derive(Parser, Debug)]
#[clap(
    name = "vsm-simdoc",
    about = "A program to compare all pairs of documents in the vector space model."
)]
struct Args {
    /// Directory of plain-text documents, one document per file.
    /// Files are indexed in order of their names.
    #[clap(short = 'i', long)]
    input_dir: PathBuf,

    /// Order of word n-grams: "unigram", "bigram", or "trigram" (or 1, 2, 3).
    #[clap(short = 'n', long, default_value = "trigram")]
    order: NgramOrder,

    /// Similarity measure: "cosine" or "jaccard".
    #[clap(short = 'm', long, default_value = "cosine")]
    measure: Measure,

    /// Variant of the Jaccard coefficient.
    /// "set" is the Jaccard index over positively weighted terms.
    /// "first-match" caps the intersection at the first shared weight value.
    #[clap(short = 'j', long, default_value = "set")]
    jaccard: JaccardVariant,

    /// Recognition of terms in documents.
    /// "substring" counts substrings of the normalized text.
    /// "exact" counts the document's own n-grams.
    #[clap(short = 't', long, default_value = "substring")]
    matching: TermMatching,

    /// Reports only pairs whose similarity is at least this value.
    #[clap(short = 'r', long)]
    threshold: Option<f64>,

    /// File of stopwords, one per line, replacing the English list.
    #[clap(short = 's', long)]
    stopwords: Option<PathBuf>,

    /// Output format: "csv" or "json" (one object per line).
    #[clap(short = 'f', long, default_value = "csv")]
    format: Format,

    /// Output file. If None, results are written to stdout.
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,

    /// Builds weight vectors in parallel.
    #[clap(short = 'p', long)]
    parallel: bool,

    /// Suppresses the progress output.
    #[clap(short = 'q', long)]
    quiet: bool,

    /// Prints the vocabulary to stderr.
    #[clap(long)]
    show_vocabulary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let shows_progress = !args.quiet;
    let config = SimdocConfig {
        order: args.order,
        measure: args.measure,
        jaccard: args.jaccard,
        matching: args.matching,
        threshold: args.threshold,
    };

    let mut searcher = SimilaritySearcher::new(config)?.shows_progress(shows_progress);
    if let Some(path) = &args.stopwords {
        let words = corpus::load_stopwords(path)?;
        searcher = searcher.stopwords(StopwordFilter::from_words(words));
    }

    let corpus = {
        if shows_progress {
            eprintln!("Loading documents from {}...", args.input_dir.display());
        }
        let start = Instant::now();
        let corpus = Corpus::load_dir(&args.input_dir)?;
        if shows_progress {
            eprintln!(
                "Loaded {} documents in {} sec",
                corpus.len(),
                start.elapsed().as_secs_f64()
            );
        }
        corpus
    };

    {
        if shows_progress {
            eprintln!("Building {} TF-IDF weight vectors...", searcher.config().order);
        }
        let start = Instant::now();
        searcher = if args.parallel {
            searcher.build_vectors_in_parallel(&corpus.texts)?
        } else {
            searcher.build_vectors(&corpus.texts)?
        };
        if shows_progress {
            eprintln!(
                "Produced {} vectors of {} dimensions in {} sec",
                searcher.len(),
                searcher.vocabulary().len(),
                start.elapsed().as_secs_f64()
            );
        }
    }

    if args.show_vocabulary {
        for term in searcher.vocabulary().iter() {
            eprintln!("{term}");
        }
    }

    if shows_progress {
        eprintln!(
            "Comparing all pairs with {} similarity...",
            searcher.config().measure
        );
    }
    let start = Instant::now();
    let results = searcher.search_similar_pairs();
    if shows_progress {
        eprintln!(
            "Found {} pairs in {} sec",
            results.len(),
            start.elapsed().as_secs_f64()
        );
    }

    let wtr: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    report::write_results(wtr, args.format, &results, &corpus.names)?;

    Ok(())
}
