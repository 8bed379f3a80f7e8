//! Unordered index pairs and their scores.
use std::fmt;
use std::hash::{Hash, Hasher};

use num_traits::NumCast;

use crate::score::Score;

/// An unordered pair of distinct item indices.
///
/// `(i, j)` and `(j, i)` are the same key: equality and hashing ignore the order,
/// while [`Self::first()`] and [`Self::second()`] keep the order given on creation.
#[derive(Clone, Copy, Debug)]
pub struct PairKey {
    first: usize,
    second: usize,
}

impl PairKey {
    /// Creates a key, or returns `None` if both indices are the same.
    pub const fn new(first: usize, second: usize) -> Option<Self> {
        if first == second {
            None
        } else {
            Some(Self { first, second })
        }
    }

    /// Creates a key without checking `first != second`.
    pub(crate) const fn new_unchecked(first: usize, second: usize) -> Self {
        debug_assert!(first != second);
        Self { first, second }
    }

    /// Gets the first index.
    pub const fn first(&self) -> usize {
        self.first
    }

    /// Gets the second index.
    pub const fn second(&self) -> usize {
        self.second
    }

    /// Gets the indices in ascending order.
    pub const fn sorted(&self) -> (usize, usize) {
        if self.first < self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }
}

impl PartialEq for PairKey {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for PairKey {}

impl Hash for PairKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// A [`PairKey`] with the score computed for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredPair<F> {
    key: PairKey,
    score: F,
}

impl<F> ScoredPair<F>
where
    F: Copy,
{
    /// Creates an instance.
    pub const fn new(key: PairKey, score: F) -> Self {
        Self { key, score }
    }

    /// Gets the pair.
    pub const fn key(&self) -> PairKey {
        self.key
    }

    /// Gets the score.
    pub fn score(&self) -> F {
        self.score
    }
}

/// Renders as `(i, j) -> score`.
///
/// Scores in `[1e-3, 1e7)` (and zeros) are written in decimal with at least one
/// fractional digit (`2.0`), the others in scientific notation (`1.0E7`, `5.0E-4`).
/// Non-finite scores are written as `NaN`, `Infinity` or `-Infinity`.
impl<F> fmt::Display for ScoredPair<F>
where
    F: Score + fmt::LowerExp,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> ", self.key)?;
        write_score(f, self.score)
    }
}

fn write_score<F>(f: &mut fmt::Formatter, score: F) -> fmt::Result
where
    F: Score + fmt::LowerExp,
{
    if score.is_nan() {
        return f.write_str("NaN");
    }
    if score.is_infinite() {
        return f.write_str(if score.is_sign_negative() {
            "-Infinity"
        } else {
            "Infinity"
        });
    }
    let abs = score.abs();
    let decimal = score == F::zero()
        || <F as NumCast>::from(1e-3)
            .zip(<F as NumCast>::from(1e7))
            .map_or(false, |(lower, upper)| lower <= abs && abs < upper);
    if decimal {
        return write!(f, "{score:?}");
    }
    let exp = format!("{score:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            write!(f, "{mantissa}E{exponent}")
        }
        Some((mantissa, exponent)) => write!(f, "{mantissa}.0E{exponent}"),
        None => f.write_str(&exp),
    }
}
