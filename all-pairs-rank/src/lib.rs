//! This library provides an exhaustive all-pair scoring (or *similarity self-join*)
//! over arbitrary items, ranking every unordered pair by a caller-given metric.
//!
//! Each pair `(i, j)` with `i < j` is scored exactly once, and the results are sorted
//! ascending with a stable sort in which NaN is greater than every number.
#![deny(missing_docs)]

pub mod exhaustive;
pub mod pair;
pub mod score;

pub use exhaustive::{rank_pairs, ExhaustiveRanker};
pub use pair::{PairKey, ScoredPair};
pub use score::Score;
