//! `harmony normalize`: canonical forms of one waveform period.

use super::{format_samples, Samples};
use anyhow::{Context, Result};
use int_harmony::arith::gcd_all;
use int_harmony::Normalization;

/// Normalize the samples and print the result.
pub fn execute(normalization: Normalization, samples: &Samples, verbose: bool) -> Result<()> {
    let samples = samples.as_slice();

    if verbose {
        print_stats(samples);
    }

    let result = normalization
        .apply(samples)
        .with_context(|| format!("Failed to apply {}", normalization))?;

    println!("{}", format_samples(&result));
    Ok(())
}

/// Print period, span and gcd of the input.
fn print_stats(samples: &[i64]) {
    println!("Period: {}", samples.len());
    if let (Some(lo), Some(hi)) = (samples.iter().min(), samples.iter().max()) {
        println!("Range: {}..={}", lo, hi);
    }
    println!("GCD: {}", gcd_all(samples));
}
