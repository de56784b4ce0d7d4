//! `harmony combine`: pointwise combination of cycles.

use super::{format_samples, Samples};
use anyhow::{Context, Result};
use clap::ValueEnum;
use int_harmony::{
    checked_add_cycles, checked_mul_cycles, combined_period, CyclicSequence, Normalization,
};

/// Pointwise operation applied across cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CombineOp {
    /// Elementwise sum (superposition)
    Add,
    /// Elementwise product (ring modulation)
    Mul,
}

/// Combine the cycles and print one period of the result.
pub fn execute(
    op: CombineOp,
    normalize: Option<Normalization>,
    cycles: &[Samples],
    verbose: bool,
) -> Result<()> {
    let cycles = cycles
        .iter()
        .enumerate()
        .map(|(i, samples)| {
            CyclicSequence::new(samples.as_slice().to_vec())
                .with_context(|| format!("Cycle {} is not a valid cycle", i + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    if verbose {
        let periods: Vec<usize> = cycles.iter().map(CyclicSequence::period).collect();
        println!("Periods: {:?}", periods);
        if let Some(period) = combined_period(&cycles) {
            println!("Combined Period: {}", period);
        }
    }

    let combined = match op {
        CombineOp::Add => checked_add_cycles(&cycles),
        CombineOp::Mul => checked_mul_cycles(&cycles),
    }
    .with_context(|| format!("Failed to combine {} cycles", cycles.len()))?;

    let output = match normalize {
        Some(normalization) => normalization
            .apply(&combined)
            .with_context(|| format!("Failed to {} the combined cycle", normalization))?,
        None => combined,
    };

    println!("{}", format_samples(&output));
    Ok(())
}
