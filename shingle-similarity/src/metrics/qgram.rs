use crate::profile::ShingleProfile;

/// Computes the q-gram distance of Ukkonen, i.e., the L1 distance of the two profiles.
///
/// The value is not normalized: it lies in `[0, ∞)` and grows with the difference.
///
/// # Examples
///
/// ```
/// use shingle_similarity::ShingleProfiler;
/// use shingle_similarity::metrics::qgram_distance;
///
/// let mut profiler = ShingleProfiler::new(2).unwrap();
/// let p1 = profiler.profile("ABCD");
/// let p2 = profiler.profile("ABCE");
/// assert_eq!(qgram_distance(&p1, &p2), 2.0);
/// ```
pub fn qgram_distance(p1: &ShingleProfile, p2: &ShingleProfile) -> f64 {
    let mut dist = 0;
    for (shingle, c1) in p1.iter() {
        let c2 = p2.count(shingle);
        dist += c1.abs_diff(c2);
    }
    // Shingles only in `p2`.
    for (shingle, c2) in p2.iter() {
        if !p1.contains(shingle) {
            dist += c2;
        }
    }
    dist as f64
}
