//! Request and report types exchanged with callers.
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SimilarityError};
use crate::metrics::Metric;

/// Texts to be compared, as received from a caller.
///
/// Both the list and its entries are optional so that absent values surface as
/// errors in [`Self::into_texts()`] instead of failing deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityRequest {
    /// Texts in input order; their positions are the indices of reported pairs.
    pub texts: Option<Vec<Option<String>>>,
}

impl SimilarityRequest {
    /// Creates a request from texts that are all present.
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: Some(texts.into_iter().map(|s| Some(s.into())).collect()),
        }
    }

    /// Validates the request and extracts its texts.
    ///
    /// # Errors
    ///
    /// [`SimilarityError::MissingTexts`] if there is no text list, and
    /// [`SimilarityError::NullInput`] if an entry of the list is absent.
    pub fn into_texts(self) -> Result<Vec<String>> {
        let texts = self.texts.ok_or(SimilarityError::MissingTexts)?;
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                text.ok_or_else(|| {
                    SimilarityError::null_input(format!("Text at index {i} must not be null."))
                })
            })
            .collect()
    }
}

/// Ranked pairs for every metric together with the elapsed computation time.
///
/// Each list holds `"(i, j) -> score"` strings sorted ascending by score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityReport {
    /// Pairs ranked by q-gram distance.
    pub qgram: Vec<String>,
    /// Pairs ranked by cosine similarity.
    pub cosine: Vec<String>,
    /// Pairs ranked by Sørensen–Dice coefficient.
    pub sorensen_dice: Vec<String>,
    /// Pairs ranked by Jaccard index.
    pub jaccard: Vec<String>,
    /// Pairs ranked by Tversky index.
    pub tversky: Vec<String>,
    /// Pairs ranked by Szymkiewicz–Simpson overlap coefficient.
    pub szymkiewicz_simpson: Vec<String>,
    /// Elapsed time in nanoseconds.
    pub time: u64,
}

impl SimilarityReport {
    /// Gets the ranked pairs of `metric`.
    pub fn ranked(&self, metric: Metric) -> &[String] {
        match metric {
            Metric::QGram => &self.qgram,
            Metric::Cosine => &self.cosine,
            Metric::SorensenDice => &self.sorensen_dice,
            Metric::Jaccard => &self.jaccard,
            Metric::Tversky { .. } => &self.tversky,
            Metric::SzymkiewiczSimpson => &self.szymkiewicz_simpson,
        }
    }

    /// Gets the elapsed time.
    pub const fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.time)
    }
}
