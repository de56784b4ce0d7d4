//! Interpolation: expanding samples into longer runs.

use core::iter;

/// Repeat every sample `n` times in a row (sample-and-hold upsampling).
///
/// Lazy; finite exactly when `samples` is. `n == 0` yields nothing.
///
/// ```rust
/// use int_harmony::interpolate_constant;
///
/// let out: Vec<i64> = interpolate_constant(3, [1, -1]).collect();
/// assert_eq!(out, vec![1, 1, 1, -1, -1, -1]);
/// ```
pub fn interpolate_constant<I>(n: usize, samples: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    samples
        .into_iter()
        .flat_map(move |sample| iter::repeat(sample).take(n))
}
