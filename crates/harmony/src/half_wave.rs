//! Half-wave symmetry.
//!
//! A waveform `f` with period `P` has half-wave symmetry when the second half
//! cycle is the negated first half: `f(t + P/2) = -f(t)`. Such a waveform has
//! only odd harmonics.

use alloc::vec::Vec;
use core::ops::Neg;

/// Build a half-wave symmetric cycle from a half cycle.
///
/// The result is `half` followed by the negation of every value in `half`.
pub fn half_wave<T>(half: &[T]) -> Vec<T>
where
    T: Clone + Neg<Output = T>,
{
    let mut cycle = Vec::with_capacity(half.len() * 2);
    cycle.extend_from_slice(half);
    cycle.extend(half.iter().cloned().map(Neg::neg));
    cycle
}

/// Build an odd-length half-wave symmetric cycle from a half cycle.
///
/// A single zero (`T::default()`) sits between the two halves.
pub fn half_wave_odd<T>(half: &[T]) -> Vec<T>
where
    T: Clone + Default + Neg<Output = T>,
{
    let mut cycle = Vec::with_capacity(half.len() * 2 + 1);
    cycle.extend_from_slice(half);
    cycle.push(T::default());
    cycle.extend(half.iter().cloned().map(Neg::neg));
    cycle
}

/// Whether `cycle` is the output of [`half_wave`] or [`half_wave_odd`].
///
/// Even lengths need the second half to negate the first; odd lengths also
/// need a zero in the middle. The empty cycle counts as symmetric.
pub fn is_half_wave<T>(cycle: &[T]) -> bool
where
    T: Clone + Default + PartialEq + Neg<Output = T>,
{
    let half = cycle.len() / 2;
    let (first, rest) = cycle.split_at(half);
    let second = if cycle.len() % 2 == 1 {
        match rest.split_first() {
            Some((middle, tail)) if *middle == T::default() => tail,
            _ => return false,
        }
    } else {
        rest
    };
    first
        .iter()
        .zip(second)
        .all(|(a, b)| -(a.clone()) == *b)
}
