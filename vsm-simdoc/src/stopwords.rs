//! Stopword filtering of n-gram terms.
//!
//! Entries with an apostrophe (e.g., `"don't"`) never match, because apostrophes are
//! replaced by spaces before tokenization; their halves (`"don"`, `"t"`) are listed separately.
use hashbrown::HashSet;

/// The English stopword list distributed with NLTK.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Filter removing every n-gram that contains at least one stopword.
#[derive(Clone, Debug)]
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Creates a filter with [`ENGLISH_STOPWORDS`].
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOPWORDS)
    }

    /// Creates a filter from a custom word list.
    /// Words are trimmed and lower-cased, and empty entries are ignored.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Checks if a single word is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Checks if any word of a space-joined n-gram is a stopword.
    pub fn contains_stopword(&self, ngram: &str) -> bool {
        ngram.split(' ').any(|w| self.is_stopword(w))
    }

    /// Removes n-grams containing a stopword, keeping the order of the others.
    pub fn filter<I>(&self, ngrams: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        ngrams
            .into_iter()
            .filter(|ngram| !self.contains_stopword(ngram))
            .collect()
    }

    /// Gets the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
