//! Integer helpers: greatest common divisor and least common multiple.

use crate::Sample;

/// Greatest common divisor of the magnitudes of `a` and `b`.
///
/// Returned as `u64` so that `gcd(i64::MIN, 0)` is representable.
/// `gcd(0, 0) == 0`.
#[inline]
pub fn gcd(a: Sample, b: Sample) -> u64 {
    gcd_u64(a.unsigned_abs(), b.unsigned_abs())
}

/// Greatest common divisor of every value in `values`.
///
/// Zeros do not contribute, so the result is the gcd of the nonzero members.
/// Returns 0 when `values` is empty or all zero.
pub fn gcd_all(values: &[Sample]) -> u64 {
    values.iter().fold(0, |acc, &value| {
        // Nothing divides further once the gcd reaches 1
        if acc == 1 {
            1
        } else {
            gcd_u64(acc, value.unsigned_abs())
        }
    })
}

/// Least common multiple of two periods, or `None` if it overflows `usize`.
///
/// `lcm(0, n) == 0`.
#[inline]
pub fn lcm(a: usize, b: usize) -> Option<usize> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd_usize(a, b)).checked_mul(b)
}

/// Least common multiple of every period, or `None` on overflow.
///
/// An empty set of periods has lcm 1, the identity.
pub fn lcm_all<I>(periods: I) -> Option<usize>
where
    I: IntoIterator<Item = usize>,
{
    periods
        .into_iter()
        .try_fold(1usize, |acc, period| lcm(acc, period))
}

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

fn gcd_usize(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
