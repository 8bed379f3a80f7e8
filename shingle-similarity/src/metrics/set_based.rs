//! Similarities over the shingle *sets* of profiles.
//!
//! Only the presence of a shingle matters here; its count is ignored.
//! When both sets are empty the ratios are 0/0 and evaluate to NaN.
use crate::profile::ShingleProfile;

/// Counts the shingles present in both profiles.
pub fn intersection_size(p1: &ShingleProfile, p2: &ShingleProfile) -> usize {
    let (small, large) = if p1.len() <= p2.len() {
        (p1, p2)
    } else {
        (p2, p1)
    };
    small.keys().filter(|&shingle| large.contains(shingle)).count()
}

/// Computes the Sørensen–Dice coefficient `2|A∩B| / (|A|+|B|)`.
pub fn sorensen_dice_similarity(p1: &ShingleProfile, p2: &ShingleProfile) -> f64 {
    let inter = intersection_size(p1, p2) as f64;
    2. * inter / (p1.len() + p2.len()) as f64
}

/// Computes the Jaccard index `|A∩B| / |A∪B|`.
///
/// # Examples
///
/// ```
/// use shingle_similarity::ShingleProfiler;
/// use shingle_similarity::metrics::jaccard_similarity;
///
/// let mut profiler = ShingleProfiler::new(2).unwrap();
/// let p1 = profiler.profile("ABCDE");
/// let p2 = profiler.profile("ABCDF");
/// assert_eq!(jaccard_similarity(&p1, &p2), 0.6);
/// ```
pub fn jaccard_similarity(p1: &ShingleProfile, p2: &ShingleProfile) -> f64 {
    let inter = intersection_size(p1, p2);
    let union = p1.len() + p2.len() - inter;
    inter as f64 / union as f64
}

/// Computes the Tversky index `|A∩B| / (|A∩B| + α|A−B| + β|B−A|)`.
///
/// With `alpha = beta = 1` this equals the Jaccard index, and with `alpha = beta = 0.5`
/// the Sørensen–Dice coefficient. The index is symmetric only when `alpha == beta`.
pub fn tversky_similarity(
    p1: &ShingleProfile,
    p2: &ShingleProfile,
    alpha: f64,
    beta: f64,
) -> f64 {
    let inter = intersection_size(p1, p2);
    let only1 = (p1.len() - inter) as f64;
    let only2 = (p2.len() - inter) as f64;
    let inter = inter as f64;
    inter / (inter + alpha * only1 + beta * only2)
}

/// Computes the Szymkiewicz–Simpson overlap coefficient `|A∩B| / min(|A|,|B|)`.
pub fn szymkiewicz_simpson_similarity(p1: &ShingleProfile, p2: &ShingleProfile) -> f64 {
    let inter = intersection_size(p1, p2) as f64;
    inter / p1.len().min(p2.len()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::profile::ShingleProfiler;

    fn profiles(s1: &str, s2: &str) -> (ShingleProfile, ShingleProfile) {
        let mut profiler = ShingleProfiler::new(3).unwrap();
        (profiler.profile(s1), profiler.profile(s2))
    }

    #[test]
    fn test_set_metrics() {
        // A = {abc, bcd, cde, def}, B = {abc, bcd, cdx}
        let (p1, p2) = profiles("abcdef", "abcdx");
        assert_eq!(intersection_size(&p1, &p2), 2);
        assert_eq!(sorensen_dice_similarity(&p1, &p2), 4. / 7.);
        assert_eq!(jaccard_similarity(&p1, &p2), 2. / 5.);
        assert_eq!(tversky_similarity(&p1, &p2, 1., 1.), 2. / 5.);
        assert_eq!(tversky_similarity(&p1, &p2, 0.5, 0.5), 2. / 3.5);
        assert_eq!(tversky_similarity(&p1, &p2, 1., 0.), 2. / 4.);
        assert_eq!(tversky_similarity(&p2, &p1, 1., 0.), 2. / 3.);
        assert_eq!(szymkiewicz_simpson_similarity(&p1, &p2), 2. / 3.);
    }

    #[test]
    fn test_counts_ignored() {
        let (p1, p2) = profiles("aaaaaa", "aaa");
        assert_eq!(jaccard_similarity(&p1, &p2), 1.);
        assert_eq!(sorensen_dice_similarity(&p1, &p2), 1.);
        assert_eq!(szymkiewicz_simpson_similarity(&p1, &p2), 1.);
    }

    #[test]
    fn test_subset_overlap() {
        let (p1, p2) = profiles("abcd", "xxabcdyy");
        assert_eq!(szymkiewicz_simpson_similarity(&p1, &p2), 1.);
        assert!(jaccard_similarity(&p1, &p2) < 1.);
    }

    #[test]
    fn test_disjoint_overlap() {
        // 5 and 7 distinct shingles without any in common.
        let (p1, p2) = profiles("abcdefg", "hijklmnop");
        assert_eq!((p1.len(), p2.len()), (5, 7));
        assert_eq!(szymkiewicz_simpson_similarity(&p1, &p2), 0.0);
        assert_eq!(jaccard_similarity(&p1, &p2), 0.0);
    }

    #[test]
    fn test_empty_sets() {
        let (empty, p) = profiles("ab", "abcd");
        assert!(jaccard_similarity(&empty, &empty).is_nan());
        assert!(sorensen_dice_similarity(&empty, &empty).is_nan());
        assert!(tversky_similarity(&empty, &empty, 1., 1.).is_nan());
        assert!(szymkiewicz_simpson_similarity(&empty, &p).is_nan());
        assert_eq!(jaccard_similarity(&empty, &p), 0.);
    }
}
