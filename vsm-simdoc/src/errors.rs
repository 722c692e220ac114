//! Error definitions.
use std::error::Error;
use std::{fmt, result};

/// A specialized Result type for this library.
pub type Result<T, E = SimdocError> = result::Result<T, E>;

/// Errors in vsm-simdoc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimdocError {
    /// Contains [`InputError`].
    Input(InputError),
    /// Contains [`InsufficientNgramsError`].
    InsufficientNgrams(InsufficientNgramsError),
}

impl fmt::Display for SimdocError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Input(e) => e.fmt(f),
            Self::InsufficientNgrams(e) => e.fmt(f),
        }
    }
}

impl Error for SimdocError {}

impl SimdocError {
    pub(crate) fn input<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Input(InputError { msg: msg.into() })
    }

    pub(crate) const fn insufficient_ngrams(num_words: usize, order: usize) -> Self {
        Self::InsufficientNgrams(InsufficientNgramsError { num_words, order })
    }
}

/// Error used when the input argument is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    msg: String,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InputError: {}", self.msg)
    }
}

/// Error used when a document has too few words to form a single n-gram,
/// so that its term frequencies have no denominator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsufficientNgramsError {
    num_words: usize,
    order: usize,
}

impl InsufficientNgramsError {
    /// Number of words in the offending document.
    pub const fn num_words(&self) -> usize {
        self.num_words
    }

    /// N-gram order that could not be formed.
    pub const fn order(&self) -> usize {
        self.order
    }
}

impl fmt::Display for InsufficientNgramsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "InsufficientNgramsError: {} word(s) cannot form a {}-gram",
            self.num_words, self.order
        )
    }
}
