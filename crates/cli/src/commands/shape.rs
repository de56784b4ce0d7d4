//! Shaping subcommands: half-wave, interpolate, windowed-sum and factor.

use super::{format_samples, Samples};
use anyhow::Result;
use int_harmony::{
    factor as factor_period, half_wave_odd, interpolate_constant, windowed_sum as running_sum,
};
use std::num::NonZeroUsize;

/// Print a half-wave symmetric cycle built from `samples`.
pub fn half_wave(samples: &Samples, odd: bool) -> Result<()> {
    let cycle = if odd {
        half_wave_odd(samples.as_slice())
    } else {
        int_harmony::half_wave(samples.as_slice())
    };
    println!("{}", format_samples(&cycle));
    Ok(())
}

/// Print every sample repeated `n` times.
pub fn interpolate(n: usize, samples: &Samples) -> Result<()> {
    let expanded: Vec<i64> = interpolate_constant(n, samples.as_slice().iter().copied()).collect();
    println!("{}", format_samples(&expanded));
    Ok(())
}

/// Print the running sums over a trailing window.
pub fn windowed_sum(window: NonZeroUsize, samples: &Samples) -> Result<()> {
    let sums: Vec<i64> = running_sum(window, samples.as_slice().iter().copied()).collect();
    println!("{}", format_samples(&sums));
    Ok(())
}

/// Print each factor of the period on its own line.
pub fn factor(samples: &Samples) -> Result<()> {
    for part in factor_period(samples.as_slice()) {
        println!("{}", format_samples(&part));
    }
    Ok(())
}
