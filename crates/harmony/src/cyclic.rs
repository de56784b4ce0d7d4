//! Cyclic sequences and their pointwise combination.
//!
//! A cycle is one period of a signal that repeats forever. Combining cycles of
//! different periods aligns them over the least common multiple of the
//! periods, which is the true period of the combined signal.
//!
//! [`CyclicSequence`] only holds the finite period. It has no unbounded
//! iterator: membership tests, `len` or `collect` on an endless repetition
//! would never terminate, so every materialization here takes a bound.

use crate::arith::{lcm, lcm_all};
use crate::error::{HarmonyError, Result};
use crate::Sample;
use alloc::vec::Vec;
use core::iter::{Product, Sum};

/// One period of a repeating sequence.
///
/// Invariant: the period is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CyclicSequence<T> {
    values: Vec<T>,
}

impl<T> CyclicSequence<T> {
    /// Wrap one period of values.
    ///
    /// # Errors
    ///
    /// Returns [`HarmonyError::EmptyInput`] if `values` is empty.
    pub fn new(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(HarmonyError::EmptyInput {
                operation: "CyclicSequence::new",
            });
        }
        Ok(Self { values })
    }

    /// Draw exactly `period` items from `source`.
    ///
    /// Strict counterpart of [`get_cycle`].
    ///
    /// # Errors
    ///
    /// - [`HarmonyError::EmptyInput`] if `period` is 0.
    /// - [`HarmonyError::ShortSource`] if `source` ends early.
    pub fn from_source<I>(source: I, period: usize) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        if period == 0 {
            return Err(HarmonyError::EmptyInput {
                operation: "CyclicSequence::from_source",
            });
        }
        let values = get_cycle(source, period);
        if values.len() < period {
            return Err(HarmonyError::ShortSource {
                expected: period,
                actual: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Length of one repetition.
    #[inline]
    pub fn period(&self) -> usize {
        self.values.len()
    }

    /// The values of one period, index 0 first.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Unwrap into the underlying period.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Value at position `index` of the infinite repetition.
    #[inline]
    pub fn at(&self, index: usize) -> &T {
        &self.values[index % self.values.len()]
    }
}

impl<T: Clone> CyclicSequence<T> {
    /// Materialize the first `len` items of the repetition.
    pub fn repeat_to(&self, len: usize) -> Vec<T> {
        (0..len).map(|index| self.at(index).clone()).collect()
    }
}

impl<T> TryFrom<Vec<T>> for CyclicSequence<T> {
    type Error = HarmonyError;

    fn try_from(values: Vec<T>) -> Result<Self> {
        Self::new(values)
    }
}

impl<T> AsRef<[T]> for CyclicSequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

/// Take a cycle of `period` items from the front of `source`.
///
/// `source` may be infinite; at most `period` items are pulled from it. A
/// source that ends early produces a shorter vector, so callers that need a
/// full cycle must check the length (or use [`CyclicSequence::from_source`]).
pub fn get_cycle<I>(source: I, period: usize) -> Vec<I::Item>
where
    I: IntoIterator,
{
    source.into_iter().take(period).collect()
}

/// Period of the pointwise combination of `cycles`.
///
/// Returns `None` for an empty set of cycles, or when the least common
/// multiple of the periods does not fit in `usize`.
pub fn combined_period<S>(cycles: &[CyclicSequence<S>]) -> Option<usize> {
    if cycles.is_empty() {
        return None;
    }
    lcm_all(cycles.iter().map(CyclicSequence::period))
}

fn aligned_period<S>(cycles: &[CyclicSequence<S>]) -> usize {
    match combined_period(cycles) {
        Some(period) => period,
        None => panic!(
            "combined period of {} cycles overflows usize",
            cycles.len()
        ),
    }
}

/// Pointwise reduction of cycles with independent periods.
///
/// For every index `i` of the combined period `L = lcm(periods)`, `reduction`
/// receives `[cycles[0].at(i), cycles[1].at(i), ..]` in the order the cycles
/// were supplied. The result has exactly `L` values.
///
/// An empty `cycles` yields an empty vector without calling `reduction`.
///
/// # Panics
///
/// Panics if the combined period overflows `usize`.
///
/// # Example
///
/// ```rust
/// use int_harmony::{reduce_cycles, CyclicSequence};
///
/// let a = CyclicSequence::new(vec![1, 5]).unwrap();
/// let b = CyclicSequence::new(vec![3, 2, 4]).unwrap();
/// let max = reduce_cycles(|v: &[i32]| *v.iter().max().unwrap(), &[a, b]);
/// assert_eq!(max, vec![3, 5, 4, 5, 2, 5]);
/// ```
pub fn reduce_cycles<S, T, F>(mut reduction: F, cycles: &[CyclicSequence<S>]) -> Vec<T>
where
    S: Clone,
    F: FnMut(&[S]) -> T,
{
    if cycles.is_empty() {
        return Vec::new();
    }
    let period = aligned_period(cycles);

    let mut column: Vec<S> = Vec::with_capacity(cycles.len());
    (0..period)
        .map(|index| {
            column.clear();
            column.extend(cycles.iter().map(|cycle| cycle.at(index).clone()));
            reduction(&column)
        })
        .collect()
}

/// Fixed-arity form of [`reduce_cycles`].
///
/// `reduction` takes exactly `N` values, one per cycle.
///
/// # Errors
///
/// Returns [`HarmonyError::ShapeMismatch`] when `cycles.len() != N`. The check
/// happens before any value is read.
pub fn reduce_cycles_exact<const N: usize, S, T, F>(
    mut reduction: F,
    cycles: &[CyclicSequence<S>],
) -> Result<Vec<T>>
where
    S: Clone,
    F: FnMut([S; N]) -> T,
{
    if cycles.len() != N {
        return Err(HarmonyError::ShapeMismatch {
            expected: N,
            actual: cycles.len(),
        });
    }
    if cycles.is_empty() {
        return Ok(Vec::new());
    }
    let period = aligned_period(cycles);

    Ok((0..period)
        .map(|index| reduction(core::array::from_fn(|k| cycles[k].at(index).clone())))
        .collect())
}

/// Pointwise sum of the cycles (superposition of periodic signals).
///
/// Overflow behaves like `T`'s own addition; [`checked_add_cycles`] reports it
/// for `i64` samples.
pub fn add_cycles<T>(cycles: &[CyclicSequence<T>]) -> Vec<T>
where
    T: Copy + Sum<T>,
{
    reduce_cycles(|values: &[T]| values.iter().copied().sum(), cycles)
}

/// Pointwise product of the cycles.
///
/// Overflow behaves like `T`'s own multiplication; [`checked_mul_cycles`]
/// reports it for `i64` samples.
pub fn mul_cycles<T>(cycles: &[CyclicSequence<T>]) -> Vec<T>
where
    T: Copy + Product<T>,
{
    reduce_cycles(|values: &[T]| values.iter().copied().product(), cycles)
}

/// Pointwise sum of sample cycles, failing instead of overflowing.
///
/// # Errors
///
/// Returns [`HarmonyError::Overflow`] if any sum leaves the `i64` range.
pub fn checked_add_cycles(cycles: &[CyclicSequence<Sample>]) -> Result<Vec<Sample>> {
    let sums = reduce_cycles(
        |values: &[Sample]| {
            values
                .iter()
                .try_fold(0 as Sample, |acc, &value| acc.checked_add(value))
        },
        cycles,
    );
    sums.into_iter()
        .map(|sum| sum.ok_or(HarmonyError::Overflow { operation: "add_cycles" }))
        .collect()
}

/// Pointwise product of sample cycles, failing instead of overflowing.
///
/// # Errors
///
/// Returns [`HarmonyError::Overflow`] if any product leaves the `i64` range.
pub fn checked_mul_cycles(cycles: &[CyclicSequence<Sample>]) -> Result<Vec<Sample>> {
    let products = reduce_cycles(
        |values: &[Sample]| {
            values
                .iter()
                .try_fold(1 as Sample, |acc, &value| acc.checked_mul(value))
        },
        cycles,
    );
    products
        .into_iter()
        .map(|product| product.ok_or(HarmonyError::Overflow { operation: "mul_cycles" }))
        .collect()
}

/// Pair up two cycles of unrelated element types over their combined period.
///
/// # Panics
///
/// Panics if the combined period overflows `usize`.
pub fn zip_cycles<A, B>(a: &CyclicSequence<A>, b: &CyclicSequence<B>) -> Vec<(A, B)>
where
    A: Clone,
    B: Clone,
{
    let Some(period) = lcm(a.period(), b.period()) else {
        panic!(
            "combined period of {} and {} overflows usize",
            a.period(),
            b.period()
        );
    };
    // Each side repeats whole, period / own_period times
    a.repeat_to(period)
        .into_iter()
        .zip(b.repeat_to(period))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn cycle(values: &[i64]) -> CyclicSequence<i64> {
        CyclicSequence::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_new_rejects_empty() {
        let result = CyclicSequence::<i64>::new(Vec::new());
        assert_eq!(
            result,
            Err(HarmonyError::EmptyInput {
                operation: "CyclicSequence::new"
            })
        );
    }

    #[test]
    fn test_at_wraps_around() {
        let c = cycle(&[4, 5, 6]);
        assert_eq!(*c.at(0), 4);
        assert_eq!(*c.at(3), 4);
        assert_eq!(*c.at(7), 5);
    }

    #[test]
    fn test_repeat_to_is_bounded() {
        let c = cycle(&[1, 2]);
        assert_eq!(c.repeat_to(5), vec![1, 2, 1, 2, 1]);
        assert!(c.repeat_to(0).is_empty());
    }

    #[test]
    fn test_get_cycle_from_infinite_source() {
        assert_eq!(get_cycle(0.., 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_get_cycle_short_source() {
        assert_eq!(get_cycle([7, 8], 5), vec![7, 8]);
    }

    #[test]
    fn test_from_source_strict() {
        assert_eq!(
            CyclicSequence::from_source([7, 8], 5),
            Err(HarmonyError::ShortSource {
                expected: 5,
                actual: 2
            })
        );
        assert!(matches!(
            CyclicSequence::from_source(0.., 0),
            Err(HarmonyError::EmptyInput { .. })
        ));
        assert_eq!(
            CyclicSequence::from_source(1.., 3).unwrap().values(),
            &[1, 2, 3]
        );
    }

    #[test]
    fn test_combined_period() {
        assert_eq!(combined_period::<i64>(&[]), None);
        assert_eq!(combined_period(&[cycle(&[1, 2]), cycle(&[1, 2, 3])]), Some(6));
        assert_eq!(
            combined_period(&[cycle(&[0; 4]), cycle(&[0; 6]), cycle(&[0])]),
            Some(12)
        );
    }

    #[test]
    fn test_reduce_cycles_empty_never_calls_reduction() {
        let mut calls = 0;
        let result: Vec<i64> = reduce_cycles(
            |_: &[i64]| {
                calls += 1;
                0
            },
            &[],
        );
        assert!(result.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_reduce_cycles_passes_values_in_order() {
        let a = cycle(&[1, 2]);
        let b = cycle(&[10, 20, 30]);
        let pairs = reduce_cycles(|v: &[i64]| (v[0], v[1]), &[a, b]);
        assert_eq!(
            pairs,
            vec![(1, 10), (2, 20), (1, 30), (2, 10), (1, 20), (2, 30)]
        );
    }

    #[test]
    fn test_add_cycles_scenario() {
        let result = add_cycles(&[cycle(&[1, 2]), cycle(&[10, 20, 30])]);
        assert_eq!(result, vec![11, 22, 31, 12, 21, 32]);
    }

    #[test]
    fn test_mul_cycles_single_is_identity() {
        assert_eq!(mul_cycles(&[cycle(&[2, 3])]), vec![2, 3]);
    }

    #[test]
    fn test_checked_cycles_match_unchecked() {
        let cycles = [cycle(&[1, 2]), cycle(&[10, 20, 30])];
        assert_eq!(checked_add_cycles(&cycles).unwrap(), add_cycles(&cycles));
        assert_eq!(checked_mul_cycles(&cycles).unwrap(), mul_cycles(&cycles));
        assert!(checked_add_cycles(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_checked_cycles_report_overflow() {
        let cycles = [cycle(&[i64::MAX, 1]), cycle(&[2])];
        assert_eq!(
            checked_mul_cycles(&cycles),
            Err(HarmonyError::Overflow {
                operation: "mul_cycles"
            })
        );
        assert_eq!(
            checked_add_cycles(&cycles),
            Err(HarmonyError::Overflow {
                operation: "add_cycles"
            })
        );
    }

    #[test]
    fn test_reduce_cycles_exact_shape_mismatch() {
        let result = reduce_cycles_exact(|[a, b]: [i64; 2]| a - b, &[cycle(&[1])]);
        assert_eq!(
            result,
            Err(HarmonyError::ShapeMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_reduce_cycles_exact_subtracts() {
        let result =
            reduce_cycles_exact(|[a, b]: [i64; 2]| a - b, &[cycle(&[10, 20]), cycle(&[1, 2, 3, 4])])
                .unwrap();
        assert_eq!(result, vec![9, 18, 7, 16]);
    }

    #[test]
    fn test_zip_cycles_mixed_types() {
        let notes = CyclicSequence::new(vec!['a', 'b', 'c']).unwrap();
        let steps = cycle(&[0, 1]);
        assert_eq!(
            zip_cycles(&notes, &steps),
            vec![('a', 0), ('b', 1), ('c', 0), ('a', 1), ('b', 0), ('c', 1)]
        );
    }
}
