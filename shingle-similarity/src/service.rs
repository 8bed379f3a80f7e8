//! All-pair comparison of a text set under every metric.
use std::time::Instant;

use all_pairs_rank::rank_pairs;
use log::{debug, info};
use rayon::prelude::*;

use crate::errors::{Result, SimilarityError};
use crate::metrics::{Metric, DEFAULT_TVERSKY_ALPHA, DEFAULT_TVERSKY_BETA};
use crate::profile::{ShingleProfile, ShingleProfiler, DEFAULT_WINDOW_SIZE};
use crate::report::{SimilarityReport, SimilarityRequest};

/// Ranks all pairs of input texts under the six metrics.
///
/// Profiles are built once per call and shared by the six metric passes.
#[derive(Clone, Debug)]
pub struct SimilarityService {
    window_size: usize,
    tversky_alpha: f64,
    tversky_beta: f64,
    parallel: bool,
}

impl Default for SimilarityService {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            tversky_alpha: DEFAULT_TVERSKY_ALPHA,
            tversky_beta: DEFAULT_TVERSKY_BETA,
            parallel: false,
        }
    }
}

impl SimilarityService {
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

    /// Sets the weights of the Tversky index (both 1 by default).
    pub const fn tversky(mut self, alpha: f64, beta: f64) -> Self {
        self.tversky_alpha = alpha;
        self.tversky_beta = beta;
        self
    }

    /// Runs the six metric passes in parallel?
    pub const fn parallel(mut self, yes: bool) -> Self {
        self.parallel = yes;
        self
    }

    /// Gets the window size.
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Gets the metrics in report order, with the configured Tversky weights.
    pub const fn metrics(&self) -> [Metric; 6] {
        [
            Metric::QGram,
            Metric::Cosine,
            Metric::SorensenDice,
            Metric::Jaccard,
            Metric::Tversky {
                alpha: self.tversky_alpha,
                beta: self.tversky_beta,
            },
            Metric::SzymkiewiczSimpson,
        ]
    }

    /// Builds the profiles of input texts with a single profiler,
    /// so equal shingles are shared among them.
    pub fn profiles<I, S>(&self, texts: I) -> Result<Vec<ShingleProfile>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut profiler = ShingleProfiler::new(self.window_size)?;
        let mut profiles = vec![];
        for (i, text) in texts.into_iter().enumerate() {
            if (i + 1) % 1000 == 0 {
                debug!("Processed {} texts...", i + 1);
            }
            profiles.push(profiler.profile(text));
        }
        debug!(
            "Produced {} profiles sharing {} distinct shingles",
            profiles.len(),
            profiler.interner().len()
        );
        Ok(profiles)
    }

    /// Ranks the pairs of `profiles` under `metric`, rendered as `"(i, j) -> score"`.
    pub fn rank(&self, profiles: &[ShingleProfile], metric: Metric) -> Vec<String> {
        let start = Instant::now();
        let ranked: Vec<_> = rank_pairs(profiles, |p1, p2| metric.score(p1, p2))
            .iter()
            .map(|pair| pair.to_string())
            .collect();
        debug!(
            "Ranked {} pairs by {metric} in {} sec",
            ranked.len(),
            start.elapsed().as_secs_f64()
        );
        ranked
    }

    /// Compares all pairs of input texts under the six metrics.
    ///
    /// # Examples
    ///
    /// ```
    /// use shingle_similarity::SimilarityService;
    ///
    /// let service = SimilarityService::new(3).unwrap();
    /// let report = service.compare(["hello world", "hello there", "goodbye"]).unwrap();
    /// assert_eq!(report.cosine.len(), 3);
    /// assert!(report.cosine[2].starts_with("(0, 1) -> "));
    /// ```
    pub fn compare<I, S>(&self, texts: I) -> Result<SimilarityReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let profiles = self.profiles(texts)?;
        let metrics = self.metrics();

        let mut lists: [Vec<String>; 6] = Default::default();
        if self.parallel {
            lists[..]
                .par_iter_mut()
                .zip(&metrics[..])
                .for_each(|(list, &metric)| *list = self.rank(&profiles, metric));
        } else {
            for (list, &metric) in lists.iter_mut().zip(&metrics) {
                *list = self.rank(&profiles, metric);
            }
        }
        let [qgram, cosine, sorensen_dice, jaccard, tversky, szymkiewicz_simpson] = lists;

        let elapsed = start.elapsed();
        info!(
            "Compared {} texts ({} pairs per metric) in {} sec",
            profiles.len(),
            qgram.len(),
            elapsed.as_secs_f64()
        );
        Ok(SimilarityReport {
            qgram,
            cosine,
            sorensen_dice,
            jaccard,
            tversky,
            szymkiewicz_simpson,
            time: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        })
    }

    /// Validates a request and compares its texts.
    ///
    /// # Errors
    ///
    /// See [`SimilarityRequest::into_texts()`].
    pub fn handle(&self, request: SimilarityRequest) -> Result<SimilarityReport> {
        let texts = request.into_texts()?;
        self.compare(&texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of(rendered: &str) -> &str {
        rendered.split(" -> ").next().unwrap()
    }

    fn score_of(rendered: &str) -> f64 {
        rendered.split(" -> ").nth(1).unwrap().parse().unwrap()
    }

    #[test]
    fn test_zero_window() {
        assert!(matches!(
            SimilarityService::new(0),
            Err(SimilarityError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_hello_scenario() {
        let service = SimilarityService::default();
        let report = service
            .compare(["hello world", "hello there", "goodbye"])
            .unwrap();

        for metric in service.metrics() {
            assert_eq!(report.ranked(metric).len(), 3);
        }
        // The two greetings share "hel", "ell" and "llo"; "goodbye" shares nothing.
        let cosine: Vec<_> = report.cosine.iter().map(|s| key_of(s)).collect();
        assert_eq!(cosine, vec!["(0, 2)", "(1, 2)", "(0, 1)"]);
        assert_eq!(report.cosine[0], "(0, 2) -> 0.0");
        assert_eq!(report.jaccard[2], "(0, 1) -> 0.23076923076923078");
        assert_eq!(key_of(&report.qgram[0]), "(0, 1)");
        assert_eq!(report.qgram[0], "(0, 1) -> 10.0");
    }

    #[test]
    fn test_sorted_ascending() {
        let texts = [
            "Welcome to Jimbocho, the town of books and curry!",
            "Welcome to Jimbocho, the city of books and curry!",
            "We welcome you to Jimbocho, the town of books and curry.",
            "Welcome to the town of books and curry, Jimbocho!",
            "ab",
        ];
        let report = SimilarityService::default().compare(texts).unwrap();
        for metric in Metric::ALL {
            let list = report.ranked(metric);
            assert_eq!(list.len(), 10);
            let scores: Vec<_> = list.iter().map(|s| score_of(s)).collect();
            let reals: Vec<_> = scores.iter().filter(|x| !x.is_nan()).collect();
            assert!(reals.windows(2).all(|w| w[0] <= w[1]), "{metric}");
            // NaN scores, if any, are all placed after the numbers.
            let first_nan = scores.iter().position(|x| x.is_nan()).unwrap_or(scores.len());
            assert!(scores[first_nan..].iter().all(|x| x.is_nan()), "{metric}");
        }
    }

    #[test]
    fn test_empty_profile_pair_is_last() {
        let report = SimilarityService::default()
            .compare(["ab", "a b", "abcd", "abce"])
            .unwrap();
        // "ab" and "a b" have no trigram, so every pair with them is 0/0.
        assert_eq!(key_of(&report.cosine[0]), "(2, 3)");
        assert!((score_of(&report.cosine[0]) - 0.5).abs() < 1e-12);
        let nan_keys: Vec<_> = report.cosine[1..]
            .iter()
            .map(|s| {
                assert!(s.ends_with(" -> NaN"));
                key_of(s)
            })
            .collect();
        assert_eq!(nan_keys, vec!["(0, 1)", "(0, 2)", "(0, 3)", "(1, 2)", "(1, 3)"]);
    }

    #[test]
    fn test_too_few_texts() {
        let service = SimilarityService::default();
        let report = service.compare(Vec::<String>::new()).unwrap();
        assert_eq!(report.ranked(Metric::QGram).len(), 0);
        let report = service.compare(["only one"]).unwrap();
        for metric in service.metrics() {
            assert!(report.ranked(metric).is_empty());
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let texts: Vec<_> = (0..12)
            .map(|i| format!("text number {} with {}", i % 5, "x".repeat(i)))
            .collect();
        let sequential = SimilarityService::default().compare(&texts).unwrap();
        let parallel = SimilarityService::default()
            .parallel(true)
            .compare(&texts)
            .unwrap();
        for metric in Metric::ALL {
            assert_eq!(sequential.ranked(metric), parallel.ranked(metric));
        }
    }

    #[test]
    fn test_tversky_weights() {
        let texts = ["abcdef", "abcdx"];
        let report = SimilarityService::default()
            .tversky(1., 0.)
            .compare(texts)
            .unwrap();
        assert_eq!(report.tversky, vec!["(0, 1) -> 0.5"]);
    }

    #[test]
    fn test_handle() {
        let service = SimilarityService::default();
        assert_eq!(
            service.handle(SimilarityRequest::default()),
            Err(SimilarityError::MissingTexts)
        );
        let report = service
            .handle(SimilarityRequest::new(["abcd", "abce"]))
            .unwrap();
        assert_eq!(report.jaccard, vec!["(0, 1) -> 0.3333333333333333"]);
    }
}
