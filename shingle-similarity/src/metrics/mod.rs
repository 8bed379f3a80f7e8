//! Similarity and distance measures over shingle profiles.
mod cosine;
mod qgram;
mod set_based;

use std::fmt;
use std::str::FromStr;

use crate::errors::Result;
use crate::profile::{ShingleProfile, ShingleProfiler};

pub use cosine::{cosine_distance, cosine_similarity};
pub use qgram::qgram_distance;
pub use set_based::{
    intersection_size, jaccard_similarity, sorensen_dice_similarity,
    szymkiewicz_simpson_similarity, tversky_similarity,
};

/// Default weight of `|A−B|` in the Tversky index.
pub const DEFAULT_TVERSKY_ALPHA: f64 = 1.;
/// Default weight of `|B−A|` in the Tversky index.
pub const DEFAULT_TVERSKY_BETA: f64 = 1.;

/// Measure used to score a pair of profiles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Metric {
    /// Q-gram distance in `[0, ∞)`.
    QGram,
    /// Cosine similarity of the count vectors.
    Cosine,
    /// Sørensen–Dice coefficient of the shingle sets.
    SorensenDice,
    /// Jaccard index of the shingle sets.
    Jaccard,
    /// Tversky index of the shingle sets.
    Tversky {
        /// Weight of the shingles only in the first profile.
        alpha: f64,
        /// Weight of the shingles only in the second profile.
        beta: f64,
    },
    /// Szymkiewicz–Simpson overlap coefficient of the shingle sets.
    SzymkiewiczSimpson,
}

impl Metric {
    /// All the metrics in report order, with the default Tversky weights.
    pub const ALL: [Self; 6] = [
        Self::QGram,
        Self::Cosine,
        Self::SorensenDice,
        Self::Jaccard,
        Self::tversky(),
        Self::SzymkiewiczSimpson,
    ];

    /// Tversky index with the default weights.
    pub const fn tversky() -> Self {
        Self::Tversky {
            alpha: DEFAULT_TVERSKY_ALPHA,
            beta: DEFAULT_TVERSKY_BETA,
        }
    }

    /// Gets the key naming the metric in a report.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::QGram => "qgram",
            Self::Cosine => "cosine",
            Self::SorensenDice => "sorensenDice",
            Self::Jaccard => "jaccard",
            Self::Tversky { .. } => "tversky",
            Self::SzymkiewiczSimpson => "szymkiewiczSimpson",
        }
    }

    /// Checks if scores are normalized similarities in `[0, 1]`.
    /// Only [`Self::QGram`] is not; it is a pure distance.
    pub const fn is_normalized(&self) -> bool {
        !matches!(self, Self::QGram)
    }

    /// Scores a pair of profiles: the distance for [`Self::QGram`], or the similarity
    /// for the others. Pairs are ranked ascending by this value.
    pub fn score(&self, p1: &ShingleProfile, p2: &ShingleProfile) -> f64 {
        match *self {
            Self::QGram => qgram_distance(p1, p2),
            Self::Cosine => cosine_similarity(p1, p2),
            Self::SorensenDice => sorensen_dice_similarity(p1, p2),
            Self::Jaccard => jaccard_similarity(p1, p2),
            Self::Tversky { alpha, beta } => tversky_similarity(p1, p2, alpha, beta),
            Self::SzymkiewiczSimpson => szymkiewicz_simpson_similarity(p1, p2),
        }
    }

    /// Computes the similarity in `[0, 1]`, or `None` for [`Self::QGram`].
    pub fn similarity(&self, p1: &ShingleProfile, p2: &ShingleProfile) -> Option<f64> {
        self.is_normalized().then(|| self.score(p1, p2))
    }

    /// Computes the distance, i.e., `1 - similarity` for the normalized metrics.
    pub fn distance(&self, p1: &ShingleProfile, p2: &ShingleProfile) -> f64 {
        let score = self.score(p1, p2);
        if self.is_normalized() {
            1. - score
        } else {
            score
        }
    }

    /// Scores a pair of strings with `window_size`-shingles.
    ///
    /// Equal strings are resolved without profiling: similarity 1 for the normalized
    /// metrics, distance 0 for [`Self::QGram`].
    ///
    /// # Errors
    ///
    /// [`SimilarityError::InvalidArgument`](crate::SimilarityError::InvalidArgument)
    /// is returned if `window_size` is 0 and the strings differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use shingle_similarity::Metric;
    ///
    /// assert_eq!(Metric::Jaccard.score_strs("ABCDE", "ABCDF", 2).unwrap(), 0.6);
    /// assert_eq!(Metric::Cosine.score_strs("same", "same", 3).unwrap(), 1.0);
    /// assert_eq!(Metric::QGram.score_strs("same", "same", 3).unwrap(), 0.0);
    /// ```
    pub fn score_strs(&self, s1: &str, s2: &str, window_size: usize) -> Result<f64> {
        if s1 == s2 {
            return Ok(if self.is_normalized() { 1. } else { 0. });
        }
        let mut profiler = ShingleProfiler::new(window_size)?;
        let p1 = profiler.profile(s1);
        let p2 = profiler.profile(s2);
        Ok(self.score(&p1, &p2))
    }

    /// Computes the distance of a pair of strings with `window_size`-shingles,
    /// i.e., `1 - similarity` for the normalized metrics.
    ///
    /// # Errors
    ///
    /// See [`Self::score_strs()`].
    pub fn distance_strs(&self, s1: &str, s2: &str, window_size: usize) -> Result<f64> {
        let score = self.score_strs(s1, s2, window_size)?;
        Ok(if self.is_normalized() { 1. - score } else { score })
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = &'static str;
    fn from_str(metric: &str) -> Result<Self, Self::Err> {
        match metric {
            "qgram" => Ok(Self::QGram),
            "cosine" | "cos" => Ok(Self::Cosine),
            "sorensenDice" | "sorensen-dice" | "dice" => Ok(Self::SorensenDice),
            "jaccard" | "jac" => Ok(Self::Jaccard),
            "tversky" => Ok(Self::tversky()),
            "szymkiewiczSimpson" | "szymkiewicz-simpson" | "overlap" => {
                Ok(Self::SzymkiewiczSimpson)
            }
            _ => Err("Could not parse a metric option"),
        }
    }
}
