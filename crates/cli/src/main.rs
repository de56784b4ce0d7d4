//! # Harmony CLI
//!
//! Command-line interface for experimenting with the int-harmony library.
//! Combines cycles, normalizes waveform periods and applies the shaping
//! helpers, printing each result as one comma-separated line.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{combine, normalize, shape, Samples};
use int_harmony::Normalization;
use std::num::NonZeroUsize;

/// CLI tool for exact-integer waveform cycles
#[derive(Parser)]
#[command(name = "harmony")]
#[command(about = "Combine and normalize integer waveform cycles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine cycles pointwise over their least common period
    Combine {
        /// Pointwise operation
        #[arg(short, long, value_enum, default_value_t = combine::CombineOp::Add)]
        op: combine::CombineOp,

        /// Normalize the combined cycle afterwards (same names as `normalize --mode`)
        #[arg(short, long)]
        normalize: Option<Normalization>,

        /// Show periods before the result
        #[arg(short, long)]
        verbose: bool,

        /// Cycles as comma-separated integers (e.g. 1,2 10,20,30)
        #[arg(required = true, allow_hyphen_values = true)]
        cycles: Vec<Samples>,
    },

    /// Put one waveform period into a canonical form
    Normalize {
        /// Canonical form: shift-zero, center, simplify, minimize, mincenter or average-zero
        #[arg(short, long, default_value_t = Normalization::Minimize)]
        mode: Normalization,

        /// Show span and gcd before the result
        #[arg(short, long)]
        verbose: bool,

        /// Samples as comma-separated integers
        #[arg(allow_hyphen_values = true)]
        samples: Samples,
    },

    /// Build a half-wave symmetric cycle from a half cycle
    HalfWave {
        /// Insert a zero between the halves (odd-length cycle)
        #[arg(long)]
        odd: bool,

        /// Half cycle as comma-separated integers
        #[arg(allow_hyphen_values = true)]
        samples: Samples,
    },

    /// Repeat every sample n times
    Interpolate {
        /// Repetitions per sample
        #[arg(short = 'n', long = "repeat", default_value = "2")]
        n: usize,

        /// Samples as comma-separated integers
        #[arg(allow_hyphen_values = true)]
        samples: Samples,
    },

    /// Running sum over a trailing window
    WindowedSum {
        /// Window size in samples
        #[arg(short, long, default_value = "2")]
        window: NonZeroUsize,

        /// Samples as comma-separated integers
        #[arg(allow_hyphen_values = true)]
        samples: Samples,
    },

    /// Split a period into factors
    Factor {
        /// Period as comma-separated integers
        #[arg(allow_hyphen_values = true)]
        samples: Samples,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Combine {
            op,
            normalize,
            verbose,
            cycles,
        } => combine::execute(op, normalize, &cycles, verbose),

        Commands::Normalize {
            mode,
            verbose,
            samples,
        } => normalize::execute(mode, &samples, verbose),

        Commands::HalfWave { odd, samples } => shape::half_wave(&samples, odd),

        Commands::Interpolate { n, samples } => shape::interpolate(n, &samples),

        Commands::WindowedSum { window, samples } => shape::windowed_sum(window, &samples),

        Commands::Factor { samples } => shape::factor(&samples),
    }
}
