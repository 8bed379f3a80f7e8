//! Traits of pair scores of primitive floating-point types.
use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::Float;

/// Trait of a pair score from a primitive floating-point type.
pub trait Score: Float + Debug {
    /// Compares two scores in a total order where NaN is greater than every number
    /// and equal to any other NaN.
    fn nan_last_cmp(self, rhs: Self) -> Ordering;
}

impl<F> Score for F
where
    F: Float + Debug,
{
    #[inline(always)]
    fn nan_last_cmp(self, rhs: Self) -> Ordering {
        match (self.is_nan(), rhs.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Two non-NaN floats are always comparable.
            (false, false) => self.partial_cmp(&rhs).unwrap_or(Ordering::Equal),
        }
    }
}

/// Compares two scores, placing NaN after every number.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use all_pairs_rank::score::nan_last_cmp;
///
/// assert_eq!(nan_last_cmp(f64::NAN, 1e300), Ordering::Greater);
/// assert_eq!(nan_last_cmp(f64::NAN, f64::NAN), Ordering::Equal);
/// assert_eq!(nan_last_cmp(0.25, 0.5), Ordering::Less);
/// ```
pub fn nan_last_cmp<F>(lhs: F, rhs: F) -> Ordering
where
    F: Score,
{
    lhs.nan_last_cmp(rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_last_f64() {
        assert_eq!(f64::NAN.nan_last_cmp(f64::INFINITY), Ordering::Greater);
        assert_eq!(f64::INFINITY.nan_last_cmp(f64::NAN), Ordering::Less);
        assert_eq!(f64::NAN.nan_last_cmp(-f64::NAN), Ordering::Equal);
        assert_eq!(1.0f64.nan_last_cmp(1.0), Ordering::Equal);
        assert_eq!((-3.0f64).nan_last_cmp(2.0), Ordering::Less);
    }

    #[test]
    fn test_nan_last_f32() {
        let mut xs = vec![f32::NAN, 0.5, f32::NAN, -1.0, 0.0];
        xs.sort_by(|a, b| a.nan_last_cmp(*b));
        assert_eq!(&xs[..3], &[-1.0, 0.0, 0.5]);
        assert!(xs[3].is_nan());
        assert!(xs[4].is_nan());
    }
}
