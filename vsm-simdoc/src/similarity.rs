//! Similarity measures between weight vectors.
use std::fmt;
use std::str::FromStr;

use hashbrown::HashSet;

/// Value substituted for a squared magnitude of exactly zero in [`cosine`].
pub const MAGNITUDE_EPSILON: f64 = 1e-6;

/// Similarity measure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Measure {
    /// Cosine similarity.
    #[default]
    Cosine,
    /// Jaccard coefficient.
    Jaccard,
}

impl FromStr for Measure {
    type Err = &'static str;
    fn from_str(measure: &str) -> Result<Self, Self::Err> {
        match measure {
            "cosine" | "cos" => Ok(Self::Cosine),
            "jaccard" | "jac" => Ok(Self::Jaccard),
            _ => Err("Could not parse a similarity measure"),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Cosine => f.write_str("cosine"),
            Self::Jaccard => f.write_str("jaccard"),
        }
    }
}

/// Variant of the Jaccard coefficient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JaccardVariant {
    /// Jaccard index over the sets of terms with a positive weight.
    #[default]
    Set,
    /// Intersection of at most the first weight value of the left vector found in the right one,
    /// over the union of distinct weight values of both vectors.
    FirstMatch,
}

impl FromStr for JaccardVariant {
    type Err = &'static str;
    fn from_str(variant: &str) -> Result<Self, Self::Err> {
        match variant {
            "set" => Ok(Self::Set),
            "first-match" => Ok(Self::FirstMatch),
            _ => Err("Could not parse a jaccard variant"),
        }
    }
}

impl fmt::Display for JaccardVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Set => f.write_str("set"),
            Self::FirstMatch => f.write_str("first-match"),
        }
    }
}

/// Result of [`cosine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cosine {
    /// Cosine similarity.
    pub score: f64,
    /// Number of dimensions where both weights are positive.
    pub shared_tokens: usize,
}

/// Computes the cosine similarity of two vectors of the same dimension.
///
/// A zero squared magnitude is replaced with [`MAGNITUDE_EPSILON`],
/// so an all-zero vector has a similarity of zero with anything.
pub fn cosine(lhs: &[f64], rhs: &[f64]) -> Cosine {
    debug_assert_eq!(lhs.len(), rhs.len());

    let mut dot = 0.;
    let mut shared_tokens = 0;
    for (&x, &y) in lhs.iter().zip(rhs) {
        if x > 0. && y > 0. {
            shared_tokens += 1;
        }
        dot += x * y;
    }

    let mut sq1: f64 = lhs.iter().map(|x| x * x).sum();
    let mut sq2: f64 = rhs.iter().map(|x| x * x).sum();
    if sq1 == 0. {
        sq1 = MAGNITUDE_EPSILON;
    }
    if sq2 == 0. {
        sq2 = MAGNITUDE_EPSILON;
    }

    Cosine {
        score: dot / (sq1.sqrt() * sq2.sqrt()),
        shared_tokens,
    }
}

/// Computes the Jaccard coefficient of the given variant.
pub fn jaccard(lhs: &[f64], rhs: &[f64], variant: JaccardVariant) -> f64 {
    match variant {
        JaccardVariant::Set => jaccard_set(lhs, rhs),
        JaccardVariant::FirstMatch => jaccard_first_match(lhs, rhs),
    }
}

/// Computes the Jaccard index of the positive dimensions of two vectors.
/// Returns 0 if neither vector has a positive weight.
pub fn jaccard_set(lhs: &[f64], rhs: &[f64]) -> f64 {
    debug_assert_eq!(lhs.len(), rhs.len());

    let mut intersection = 0usize;
    let mut union = 0usize;
    for (&x, &y) in lhs.iter().zip(rhs) {
        match (x > 0., y > 0.) {
            (true, true) => {
                intersection += 1;
                union += 1;
            }
            (true, false) | (false, true) => union += 1,
            (false, false) => {}
        }
    }
    if union == 0 {
        return 0.;
    }
    intersection as f64 / union as f64
}

/// Computes the first-match Jaccard coefficient of two weight sequences.
///
/// The intersection stops growing at the first value of `lhs` that also occurs in `rhs`,
/// so its size is zero or one. The union is the set of distinct values in both sequences.
/// Returns 0 if both sequences are empty.
pub fn jaccard_first_match(lhs: &[f64], rhs: &[f64]) -> f64 {
    let intersection = usize::from(lhs.iter().any(|x| rhs.contains(x)));
    let union = lhs
        .iter()
        .chain(rhs)
        .map(|&x| value_key(x))
        .collect::<HashSet<_>>()
        .len();
    if union == 0 {
        return 0.;
    }
    intersection as f64 / union as f64
}

// Hash key of a weight value, identifying 0.0 with -0.0.
fn value_key(x: f64) -> u64 {
    if x == 0. {
        0
    } else {
        x.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_cosine_self() {
        let v = [0.5, 0., 1.25, 0.1];
        let c = cosine(&v, &v);
        assert!((c.score - 1.).abs() < EPS);
        assert_eq!(c.shared_tokens, 3);
    }

    #[test]
    fn test_cosine_symmetric() {
        let a = [0.3, 0.2, 0., 0.7];
        let b = [0.1, 0., 0.9, 0.4];
        let ab = cosine(&a, &b);
        let ba = cosine(&b, &a);
        assert!((ab.score - ba.score).abs() < EPS);
        assert_eq!(ab.shared_tokens, 2);
        assert_eq!(ba.shared_tokens, 2);
        assert!((0. ..=1.).contains(&ab.score));

        let expected = (0.03 + 0.28) / ((0.62f64).sqrt() * (0.98f64).sqrt());
        assert!((ab.score - expected).abs() < EPS);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let c = cosine(&[1., 0.], &[0., 2.]);
        assert_eq!(c.score, 0.);
        assert_eq!(c.shared_tokens, 0);
    }

    #[test]
    fn test_cosine_zero_vector() {
        let c = cosine(&[0., 0.], &[0.5, 0.5]);
        assert_eq!(c.score, 0.);
        assert_eq!(c.shared_tokens, 0);

        let c = cosine(&[], &[]);
        assert_eq!(c.score, 0.);
        assert!(!c.score.is_nan());
    }

    #[test]
    fn test_jaccard_set() {
        let a = [0.3, 0.2, 0., 0.7, 0.];
        let b = [0.1, 0., 0.9, 0.4, 0.];
        assert_eq!(jaccard_set(&a, &b), 2. / 4.);
        assert_eq!(jaccard_set(&a, &a), 1.);
        assert_eq!(jaccard_set(&[0., 0.], &[0., 0.]), 0.);
    }

    #[test]
    fn test_jaccard_first_match() {
        // Distinct values: {0.3, 0.2, 0, 0.7, 0.1, 0.9} and the first match is 0.3.
        let a = [0.3, 0.2, 0., 0.7];
        let b = [0.1, 0.3, 0.9, 0.7];
        assert_eq!(jaccard_first_match(&a, &b), 1. / 6.);

        // Even identical vectors share at most one value.
        assert_eq!(jaccard_first_match(&a, &a), 1. / 4.);

        assert_eq!(jaccard_first_match(&[0.5], &[0.25]), 0.);
        assert_eq!(jaccard_first_match(&[], &[]), 0.);
        assert_eq!(jaccard_first_match(&[0.], &[-0.]), 1.);
    }

    #[test]
    fn test_jaccard_range() {
        let a = [0.3, 0.2, 0., 0.7];
        let b = [0., 0.2, 0.2, 0.];
        for variant in [JaccardVariant::Set, JaccardVariant::FirstMatch] {
            let s = jaccard(&a, &b, variant);
            assert!((0. ..=1.).contains(&s));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("cosine".parse::<Measure>(), Ok(Measure::Cosine));
        assert_eq!("jac".parse::<Measure>(), Ok(Measure::Jaccard));
        assert!("euclid".parse::<Measure>().is_err());
        assert_eq!(
            "first-match".parse::<JaccardVariant>(),
            Ok(JaccardVariant::FirstMatch)
        );
        assert!("bag".parse::<JaccardVariant>().is_err());
    }
}
