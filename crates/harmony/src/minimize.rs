//! Minimization and centering of waveform samples.
//!
//! Division is generally unavailable for integer waveforms, so it pays to
//! store them with the smallest coefficients possible: divide the samples by
//! their gcd. The gcd depends on where the waveform sits relative to zero, so
//! centering and minimization go together.
//!
//! Three natural ways to center an integer waveform:
//!
//! | Convention | Function | Properties |
//! |------------|----------|------------|
//! | Unsigned (lowest sample at 0) | [`shift_zero`], [`minimize`] | smallest amplitude, no negative values |
//! | Equal distance (min and max symmetric) | [`center`], [`mincenter`] | maps onto signed output formats, amplitude up to 2x |
//! | Equal weight (mean at 0) | [`average_zero`] | stays near zero when summed, amplitude up to `len`x |
//!
//! Every function returns a fresh vector and never needs a fraction: where an
//! exact center would fall between integers, the samples are scaled instead.
//! Arithmetic is checked, so a result that leaves the `i64` range is an
//! [`HarmonyError::Overflow`] rather than a wrapped value.

use crate::arith::{gcd, gcd_all};
use crate::error::{HarmonyError, Result};
use crate::Sample;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

fn bounds(samples: &[Sample], operation: &'static str) -> Result<(Sample, Sample)> {
    let mut iter = samples.iter().copied();
    let first = iter.next().ok_or(HarmonyError::EmptyInput { operation })?;
    Ok(iter.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s))))
}

fn map_checked<F>(samples: &[Sample], operation: &'static str, f: F) -> Result<Vec<Sample>>
where
    F: Fn(Sample) -> Option<Sample>,
{
    samples
        .iter()
        .map(|&sample| f(sample).ok_or(HarmonyError::Overflow { operation }))
        .collect()
}

/// Shift the samples so the smallest is 0.
///
/// # Errors
///
/// - [`HarmonyError::EmptyInput`] if `samples` is empty.
/// - [`HarmonyError::Overflow`] if the span exceeds `i64::MAX`.
pub fn shift_zero(samples: &[Sample]) -> Result<Vec<Sample>> {
    let (smallest, _) = bounds(samples, "shift_zero")?;
    map_checked(samples, "shift_zero", |sample| sample.checked_sub(smallest))
}

/// Center the samples around zero (equal distance convention).
///
/// With `d = max - min`:
/// - `d` odd: every sample becomes `sample - d / 2`.
/// - `d` even: every sample becomes `2 * sample - d`.
///
/// The two branches produce values at different scales. Both stay integral.
///
/// # Errors
///
/// - [`HarmonyError::EmptyInput`] if `samples` is empty.
/// - [`HarmonyError::Overflow`] if the span or a doubled sample exceeds `i64`.
pub fn center(samples: &[Sample]) -> Result<Vec<Sample>> {
    const OP: &str = "center";
    let (smallest, largest) = bounds(samples, OP)?;
    let difference = largest
        .checked_sub(smallest)
        .ok_or(HarmonyError::Overflow { operation: OP })?;

    // difference >= 0, so `/` is floor division here
    if difference & 1 == 1 {
        let half = difference / 2;
        map_checked(samples, OP, |sample| sample.checked_sub(half))
    } else {
        map_checked(samples, OP, |sample| {
            sample.checked_mul(2)?.checked_sub(difference)
        })
    }
}

/// Divide out the greatest common divisor of the samples.
///
/// Zeros do not affect the gcd. An all-zero input has gcd 0 and is returned
/// unchanged.
///
/// # Errors
///
/// Returns [`HarmonyError::EmptyInput`] if `samples` is empty.
pub fn simplify(samples: &[Sample]) -> Result<Vec<Sample>> {
    if samples.is_empty() {
        return Err(HarmonyError::EmptyInput {
            operation: "simplify",
        });
    }
    let divisor = gcd_all(samples);
    if divisor <= 1 {
        return Ok(samples.to_vec());
    }
    // The divisor can be 2^63 (samples drawn from {0, i64::MIN}), which only
    // fits in i128. The quotient always fits back in i64.
    let divisor = i128::from(divisor);
    Ok(samples
        .iter()
        .map(|&sample| (i128::from(sample) / divisor) as Sample)
        .collect())
}

/// Minimize a waveform: lowest sample 0, no common divisor above 1.
///
/// An all-zero input is its own minimal form.
///
/// # Errors
///
/// Same as [`shift_zero`].
pub fn minimize(samples: &[Sample]) -> Result<Vec<Sample>> {
    simplify(&shift_zero(samples)?)
}

/// Minimize, then center the minimized samples around zero.
///
/// After minimizing, the lowest sample is 0, so only the largest value `m`
/// matters:
/// - `m` odd: every sample becomes `2 * sample - m`.
/// - `m` even: every sample becomes `sample - m / 2`.
///
/// The branch polarity is the reverse of [`center`]. Either way the result
/// runs from `-k` to `k` for some `k`.
///
/// # Errors
///
/// Same as [`minimize`], plus [`HarmonyError::Overflow`] if doubling fails.
pub fn mincenter(samples: &[Sample]) -> Result<Vec<Sample>> {
    const OP: &str = "mincenter";
    let minimal = minimize(samples)?;
    let (_, largest) = bounds(&minimal, OP)?;

    if largest & 1 == 1 {
        map_checked(&minimal, OP, |sample| {
            sample.checked_mul(2)?.checked_sub(largest)
        })
    } else {
        let half = largest / 2;
        map_checked(&minimal, OP, |sample| sample.checked_sub(half))
    }
}

/// Center the samples so their mean is exactly zero.
///
/// The mean is `sum / n`. Only the common part `g = gcd(sum, n)` can be divided
/// out; the samples are scaled by the remaining `n / g` instead:
/// `sample * (n / g) - sum / g`. The result always sums to zero.
///
/// # Errors
///
/// - [`HarmonyError::EmptyInput`] if `samples` is empty.
/// - [`HarmonyError::Overflow`] if the sum or a scaled sample exceeds `i64`.
pub fn average_zero(samples: &[Sample]) -> Result<Vec<Sample>> {
    const OP: &str = "average_zero";
    if samples.is_empty() {
        return Err(HarmonyError::EmptyInput { operation: OP });
    }
    let overflow = HarmonyError::Overflow { operation: OP };

    let total = samples
        .iter()
        .try_fold(0 as Sample, |acc, &sample| acc.checked_add(sample))
        .ok_or(overflow)?;
    let count = Sample::try_from(samples.len()).map_err(|_| overflow)?;

    // count > 0, so the divisor is at least 1 and at most count
    let divisor = gcd(total, count) as Sample;
    let average = total / divisor;
    let scale = count / divisor;

    map_checked(samples, OP, |sample| {
        sample.checked_mul(scale)?.checked_sub(average)
    })
}

/// Selects one of the canonical forms by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Normalization {
    /// [`shift_zero`]
    ShiftZero,
    /// [`center`]
    Center,
    /// [`simplify`]
    Simplify,
    /// [`minimize`]
    #[default]
    Minimize,
    /// [`mincenter`]
    MinCenter,
    /// [`average_zero`]
    AverageZero,
}

impl Normalization {
    /// Every normalization, in declaration order.
    pub const ALL: [Normalization; 6] = [
        Self::ShiftZero,
        Self::Center,
        Self::Simplify,
        Self::Minimize,
        Self::MinCenter,
        Self::AverageZero,
    ];

    /// Apply this normalization to `samples`.
    pub fn apply(self, samples: &[Sample]) -> Result<Vec<Sample>> {
        match self {
            Self::ShiftZero => shift_zero(samples),
            Self::Center => center(samples),
            Self::Simplify => simplify(samples),
            Self::Minimize => minimize(samples),
            Self::MinCenter => mincenter(samples),
            Self::AverageZero => average_zero(samples),
        }
    }

    /// Function name of this normalization.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShiftZero => "shift_zero",
            Self::Center => "center",
            Self::Simplify => "simplify",
            Self::Minimize => "minimize",
            Self::MinCenter => "mincenter",
            Self::AverageZero => "average_zero",
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error for an unrecognised [`Normalization`] name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownNormalization;

impl fmt::Display for UnknownNormalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown normalization, expected one of: ")?;
        for (i, mode) in Normalization::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(mode.name())?;
        }
        Ok(())
    }
}

impl core::error::Error for UnknownNormalization {}

impl FromStr for Normalization {
    type Err = UnknownNormalization;

    /// Accepts the function name, with `-` allowed in place of `_`.
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| {
                let name = mode.name();
                name.len() == s.len()
                    && name
                        .bytes()
                        .zip(s.bytes())
                        .all(|(a, b)| a == b || (a == b'_' && b == b'-'))
            })
            .ok_or(UnknownNormalization)
    }
}
