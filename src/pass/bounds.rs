//! Count bounds for a class and the clamping that keeps them valid.

use super::charset::Class;

/// Inclusive range of characters drawn from one class.
///
/// Always satisfies `min <= max <= alphabet length` once built by [`Bounds::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    /// Normalize requested bounds against a class and its alphabet size.
    ///
    /// Missing or negative values fall back to the class defaults, then
    /// `min` is pulled down to `max`, both are clamped to `len`, and `min` is
    /// pulled down to `max` once more since the two clamps are independent.
    pub fn resolve(class: Class, min: Option<i64>, max: Option<i64>, len: usize) -> Self {
        let mut min = min
            .filter(|&v| v >= 0)
            .unwrap_or_else(|| class.default_min());
        let mut max = max
            .filter(|&v| v >= 0)
            .unwrap_or_else(|| class.default_max());

        if min > max {
            min = max;
        }

        let count = i64::try_from(len).unwrap_or(i64::MAX);
        min = min.min(count);
        max = max.min(count);

        if min > max {
            min = max;
        }

        // Both are in 0..=len here.
        Bounds {
            min: min as usize,
            max: max as usize,
        }
    }

    /// Fixed count shorthand, `n..=n` before clamping.
    pub fn fixed(class: Class, n: i64, len: usize) -> Self {
        Self::resolve(class, Some(n), Some(n), len)
    }
}
