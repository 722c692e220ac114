//! Text normalization shared by vocabulary construction and term statistics.

/// Normalizes a raw document for term statistics.
///
/// The text is lower-cased, and every line break (`\n`, `\r\n`, or `\r`) and apostrophe
/// is replaced by a single space.
/// Other punctuation is kept, so that substring matching sees the document as written.
pub fn normalize<S>(text: S) -> String
where
    S: AsRef<str>,
{
    let lowered = text.as_ref().to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());
    let mut chars = lowered.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                normalized.push(' ');
            }
            '\n' | '\'' => normalized.push(' '),
            _ => normalized.push(c),
        }
    }
    normalized
}

/// Removes ASCII punctuation, i.e., ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``.
pub fn strip_punctuation<S>(text: S) -> String
where
    S: AsRef<str>,
{
    text.as_ref()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// Splits a text into whitespace-delimited words.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Counts whitespace-delimited words.
pub fn num_words(text: &str) -> usize {
    words(text).count()
}
