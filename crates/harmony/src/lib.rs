#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! # int-harmony
//!
//! Exact-integer operations on periodic (cyclic) sequences representing
//! discrete waveforms.
//!
//! This crate provides two components:
//!
//! - **Cycle combination** ([`reduce_cycles`], [`add_cycles`], [`mul_cycles`]):
//!   pointwise reduction of cycles with different periods, aligned over the
//!   least common multiple of their periods.
//! - **Sample normalization** ([`shift_zero`], [`center`], [`simplify`],
//!   [`minimize`], [`mincenter`], [`average_zero`]): canonical forms of a
//!   waveform period, computed without fractions.
//!
//! plus the small shaping helpers that usually sit around them
//! ([`windowed_sum`], [`interpolate_constant`], [`half_wave`], [`factor`]).
//!
//! Everything is a pure function of its input. Nothing allocates beyond the
//! returned vectors, nothing logs, and no floating point is involved.
//!
//! ## Example
//!
//! ```rust
//! use int_harmony::{add_cycles, minimize, CyclicSequence};
//!
//! let a = CyclicSequence::new(vec![1, 2]).unwrap();
//! let b = CyclicSequence::new(vec![10, 20, 30]).unwrap();
//!
//! // lcm(2, 3) = 6
//! let sum = add_cycles(&[a, b]);
//! assert_eq!(sum, vec![11, 22, 31, 12, 21, 32]);
//!
//! // Lowest sample at 0, no common divisor
//! assert_eq!(minimize(&[4, 8, 6]).unwrap(), vec![0, 2, 1]);
//! ```
//!
//! ## Infinite cycles
//!
//! A cycle stands for an endlessly repeating signal, but [`CyclicSequence`]
//! never exposes that repetition as an iterator. Every materialization takes an
//! explicit bound ([`CyclicSequence::repeat_to`], [`get_cycle`]) or is bounded by
//! the combined period inside [`reduce_cycles`].

extern crate alloc;

pub mod arith;
pub mod cyclic;
pub mod error;
pub mod factor;
pub mod filter;
pub mod half_wave;
pub mod interpolate;
pub mod minimize;

// Re-export main types for convenience
pub use cyclic::{
    add_cycles, checked_add_cycles, checked_mul_cycles, combined_period, get_cycle, mul_cycles,
    reduce_cycles, reduce_cycles_exact, zip_cycles, CyclicSequence,
};
pub use error::{HarmonyError, HarmonyErrorCode, Result};
pub use factor::factor;
pub use filter::{windowed_sum, WindowedSum};
pub use half_wave::{half_wave, half_wave_odd, is_half_wave};
pub use interpolate::interpolate_constant;
pub use minimize::{
    average_zero, center, mincenter, minimize, shift_zero, simplify, Normalization,
};

/// Integer type used for waveform samples by the normalizer.
pub type Sample = i64;
