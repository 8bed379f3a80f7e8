use crate::profile::ShingleProfile;

/// Computes the cosine similarity of the two profiles seen as count vectors.
///
/// Dot products and norms are accumulated as integers, so the result is exactly
/// symmetric. An empty profile has norm 0 and makes the result NaN.
///
/// # Examples
///
/// ```
/// use shingle_similarity::ShingleProfiler;
/// use shingle_similarity::metrics::cosine_similarity;
///
/// let mut profiler = ShingleProfiler::new(2).unwrap();
/// let p1 = profiler.profile("ABC");
/// let p2 = profiler.profile("ABD");
/// assert!((cosine_similarity(&p1, &p2) - 0.5).abs() < 1e-12);
/// ```
pub fn cosine_similarity(p1: &ShingleProfile, p2: &ShingleProfile) -> f64 {
    let dot = dot_product(p1, p2) as f64;
    dot / (norm(p1) * norm(p2))
}

/// Computes `1 - cosine_similarity(p1, p2)`.
pub fn cosine_distance(p1: &ShingleProfile, p2: &ShingleProfile) -> f64 {
    1. - cosine_similarity(p1, p2)
}

fn dot_product(p1: &ShingleProfile, p2: &ShingleProfile) -> u64 {
    // Iterates over the smaller one.
    let (small, large) = if p1.len() <= p2.len() {
        (p1, p2)
    } else {
        (p2, p1)
    };
    small
        .iter()
        .map(|(shingle, c)| c as u64 * large.count(shingle) as u64)
        .sum()
}

fn norm(p: &ShingleProfile) -> f64 {
    let sq: u64 = p.iter().map(|(_, c)| c as u64 * c as u64).sum();
    (sq as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::profile::ShingleProfiler;

    #[test]
    fn test_cosine_similarity() {
        let mut profiler = ShingleProfiler::new(3).unwrap();
        let p1 = profiler.profile("abcabc");
        let p2 = profiler.profile("abcd");
        // p1 = {abc: 2, bca: 1, cab: 1}, p2 = {abc: 1, bcd: 1}
        let expected = 2. / (6f64.sqrt() * 2f64.sqrt());
        assert!((cosine_similarity(&p1, &p2) - expected).abs() < 1e-12);
        assert_eq!(cosine_similarity(&p1, &p2), cosine_similarity(&p2, &p1));
    }

    #[test]
    fn test_self_similarity() {
        let mut profiler = ShingleProfiler::new(3).unwrap();
        let p = profiler.profile("the quick brown fox jumps over the lazy dog");
        assert!((cosine_similarity(&p, &p) - 1.).abs() < 1e-12);
        assert!(cosine_distance(&p, &p).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint() {
        let mut profiler = ShingleProfiler::new(3).unwrap();
        let p1 = profiler.profile("aaaa");
        let p2 = profiler.profile("bbbb");
        assert_eq!(cosine_similarity(&p1, &p2), 0.);
        assert_eq!(cosine_distance(&p1, &p2), 1.);
    }

    #[test]
    fn test_empty_is_nan() {
        let mut profiler = ShingleProfiler::new(3).unwrap();
        let empty = profiler.profile("ab");
        let p = profiler.profile("abcd");
        assert!(cosine_similarity(&empty, &empty).is_nan());
        assert!(cosine_similarity(&empty, &p).is_nan());
    }
}
