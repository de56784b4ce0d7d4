//! Factoring of periodic signals.

use alloc::vec;
use alloc::vec::Vec;

/// Split a waveform period into sub-periods whose combination reproduces it.
///
/// Not decomposed yet: a non-empty period comes back as its only factor, and an
/// empty period has no factors.
pub fn factor<T: Clone>(period: &[T]) -> Vec<Vec<T>> {
    if period.is_empty() {
        return Vec::new();
    }
    vec![period.to_vec()]
}
