//! All-pair text similarity rankings over character shingle profiles.
//!
//! Texts are turned into [`ShingleProfile`]s, i.e., counts of their `k`-character
//! shingles after removing spaces, and every unordered pair of texts is then scored
//! under six measures: q-gram distance, cosine, Sørensen–Dice, Jaccard, Tversky and
//! Szymkiewicz–Simpson. [`SimilarityService`] returns one ranked list per measure.
//!
//! # Examples
//!
//! ```
//! use shingle_similarity::{Metric, SimilarityService};
//!
//! let service = SimilarityService::new(3).unwrap();
//! let report = service
//!     .compare(["hello world", "hello there", "goodbye"])
//!     .unwrap();
//!
//! // Ascending by similarity: the pairs with "goodbye" share nothing.
//! assert_eq!(
//!     report.ranked(Metric::Jaccard),
//!     ["(0, 2) -> 0.0", "(1, 2) -> 0.0", "(0, 1) -> 0.23076923076923078"]
//! );
//! ```
#![deny(missing_docs)]

pub mod errors;
pub mod interner;
pub mod metrics;
pub mod profile;
pub mod report;
pub mod service;

pub(crate) mod shingling;

pub use errors::{Result, SimilarityError};
pub use interner::ShingleInterner;
pub use metrics::Metric;
pub use profile::{ShingleProfile, ShingleProfiler, DEFAULT_WINDOW_SIZE};
pub use report::{SimilarityReport, SimilarityRequest};
pub use service::SimilarityService;
