//! Shingle-frequency profiles of texts.
use std::sync::Arc;

use hashbrown::HashMap;

use crate::errors::{Result, SimilarityError};
use crate::interner::ShingleInterner;
use crate::shingling::{char_offsets, ShingleIter};

/// Default window size (the `k` of k-shingling).
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Immutable mapping from a shingle to its number of occurrences in a text.
///
/// Profiles are built by [`ShingleProfiler::profile()`] and offer queries only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShingleProfile {
    counts: HashMap<Arc<str>, usize>,
}

impl ShingleProfile {
    /// Gets the number of occurrences of `shingle`, or 0 if it does not appear.
    pub fn count(&self, shingle: &str) -> usize {
        self.counts.get(shingle).copied().unwrap_or(0)
    }

    /// Checks if `shingle` appears at least once.
    pub fn contains(&self, shingle: &str) -> bool {
        self.counts.contains_key(shingle)
    }

    /// Iterates over the distinct shingles, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(|s| s.as_ref())
    }

    /// Iterates over pairs of a distinct shingle and its count, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(s, &c)| (s.as_ref(), c))
    }

    /// Gets the number of distinct shingles.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Checks if the profile has no shingle.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Gets the total number of shingle occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Builder of [`ShingleProfile`]s that shares shingle strings among the profiles it builds.
#[derive(Debug)]
pub struct ShingleProfiler {
    window_size: usize,
    interner: ShingleInterner,
    normalized: String,
    offsets: Vec<usize>,
}

impl Default for ShingleProfiler {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            interner: ShingleInterner::new(),
            normalized: String::new(),
            offsets: vec![],
        }
    }
}

impl ShingleProfiler {
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `window_size` - Number of characters in a shingle (must be more than 0).
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(SimilarityError::invalid_argument("Window size must not be 0."));
        }
        Ok(Self {
            window_size,
            ..Self::default()
        })
    }

    /// Builds the profile of `text`.
    ///
    /// Space characters (`' '` only, not other whitespace) are removed first, and then
    /// every window of [`Self::window_size()`] characters is counted. A text shorter
    /// than the window yields an empty profile.
    ///
    /// # Examples
    ///
    /// ```
    /// use shingle_similarity::ShingleProfiler;
    ///
    /// let mut profiler = ShingleProfiler::new(2).unwrap();
    /// let profile = profiler.profile("ab ab");
    /// assert_eq!(profile.count("ab"), 2);
    /// assert_eq!(profile.count("ba"), 1);
    /// assert_eq!(profile.count("b a"), 0);
    /// assert_eq!(profile.len(), 2);
    /// ```
    pub fn profile<S>(&mut self, text: S) -> ShingleProfile
    where
        S: AsRef<str>,
    {
        self.normalized.clear();
        self.normalized.extend(text.as_ref().chars().filter(|&c| c != ' '));
        char_offsets(&self.normalized, &mut self.offsets);

        let mut counts = HashMap::new();
        for shingle in ShingleIter::new(&self.normalized, &self.offsets, self.window_size) {
            let shingle = self.interner.intern(shingle);
            *counts.entry(shingle).or_insert(0) += 1;
        }
        ShingleProfile { counts }
    }

    /// Gets the window size.
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Gets the interner shared by the built profiles.
    pub const fn interner(&self) -> &ShingleInterner {
        &self.interner
    }
}
