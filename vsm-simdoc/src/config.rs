//! Pipeline configuration.
use crate::errors::{Result, SimdocError};
use crate::ngram::NgramOrder;
use crate::similarity::{JaccardVariant, Measure};
use crate::tfidf::TermMatching;

/// Parameters of a similarity run.
///
/// ```
/// use vsm_simdoc::{Measure, NgramOrder, SimdocConfig};
///
/// let config = SimdocConfig {
///     order: NgramOrder::Unigram,
///     measure: Measure::Jaccard,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimdocConfig {
    /// Order of word n-grams used as terms.
    pub order: NgramOrder,
    /// Similarity measure between weight vectors.
    pub measure: Measure,
    /// Variant of the Jaccard coefficient, used when `measure` is [`Measure::Jaccard`].
    pub jaccard: JaccardVariant,
    /// Recognition of term occurrences for DF and TF.
    pub matching: TermMatching,
    /// If set, only pairs whose score is at least this value are reported.
    pub threshold: Option<f64>,
}

impl SimdocConfig {
    /// Checks the parameters.
    pub fn validate(&self) -> Result<()> {
        if let Some(threshold) = self.threshold {
            if !threshold.is_finite() {
                return Err(SimdocError::input("Threshold must be a finite number."));
            }
        }
        Ok(())
    }

    /// Checks if a score should be reported.
    pub fn accepts(&self, score: f64) -> bool {
        self.threshold.map_or(true, |t| score >= t)
    }
}
