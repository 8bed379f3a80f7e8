//! An exhaustive approach of all-pair scoring.
use log::debug;

use crate::pair::{PairKey, ScoredPair};
use crate::score::Score;

/// An exhaustive approach of all-pair scoring over stored items.
pub struct ExhaustiveRanker<T> {
    items: Vec<T>,
}

impl<T> Default for ExhaustiveRanker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ExhaustiveRanker<T> {
    /// Creates an empty instance.
    pub const fn new() -> Self {
        Self { items: vec![] }
    }

    /// Appends an item. Its index is the number of items added before it.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Gets the number of stored items.
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Gets the stored items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Scores all unordered pairs of the stored items with `metric`,
    /// returning them sorted ascending by score. See [`rank_pairs`].
    pub fn ranked_pairs<F, M>(&self, metric: M) -> Vec<ScoredPair<F>>
    where
        F: Score,
        M: FnMut(&T, &T) -> F,
    {
        rank_pairs(&self.items, metric)
    }
}

impl<T> FromIterator<T> for ExhaustiveRanker<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Scores every unordered pair `(i, j)` with `i < j` exactly once and sorts the
/// results ascending by score.
///
/// The sort is stable, so equal scores keep the generation order, i.e., `i` ascending
/// and then `j` ascending. NaN scores are placed after all the numbers.
///
/// # Examples
///
/// ```
/// use all_pairs_rank::rank_pairs;
///
/// let items = [1.0f64, 5.0, 2.0];
/// let ranked = rank_pairs(&items, |a, b| (a - b).abs());
/// let rendered: Vec<_> = ranked.iter().map(|p| p.to_string()).collect();
/// assert_eq!(rendered, ["(0, 2) -> 1.0", "(1, 2) -> 3.0", "(0, 1) -> 4.0"]);
/// ```
pub fn rank_pairs<T, F, M>(items: &[T], mut metric: M) -> Vec<ScoredPair<F>>
where
    F: Score,
    M: FnMut(&T, &T) -> F,
{
    let n = items.len();
    let mut scored = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for i in 0..n {
        if (i + 1) % 10000 == 0 {
            debug!("[rank_pairs] Processed {}/{}...", i + 1, n);
        }
        for j in i + 1..n {
            let score = metric(&items[i], &items[j]);
            scored.push(ScoredPair::new(PairKey::new_unchecked(i, j), score));
        }
    }

    scored.sort_by(|x, y| x.score().nan_last_cmp(y.score()));
    debug!("[rank_pairs] #items={n}, #pairs={}", scored.len());
    scored
}
