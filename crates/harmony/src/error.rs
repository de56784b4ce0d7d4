//! Error type shared by every fallible operation in the crate.
//!
//! # Error Codes
//!
//! | Code | Description |
//! |------|-------------|
//! | H001 | Empty input where a min, max, sum or gcd is needed |
//! | H002 | Reduction arity does not match the number of cycles |
//! | H003 | Exact result does not fit in the sample type |
//! | H004 | Source ran out before a full cycle was drawn |

use core::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, HarmonyError>;

/// Stable codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonyErrorCode {
    /// H001: Operation needs at least one value
    EmptyInput,
    /// H002: Reduction arity differs from the number of cycles
    ShapeMismatch,
    /// H003: Result left the representable integer range
    Overflow,
    /// H004: Source exhausted before `period` items were produced
    ShortSource,
}

impl HarmonyErrorCode {
    /// Get the error code string (e.g., "H001").
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "H001",
            Self::ShapeMismatch => "H002",
            Self::Overflow => "H003",
            Self::ShortSource => "H004",
        }
    }

    /// Get guidance on how to fix this error.
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::EmptyInput => {
                "Supply at least one sample. A cycle always has a period of 1 or more."
            }
            Self::ShapeMismatch => {
                "Pass exactly one cycle per argument of the reduction, in the order it expects them."
            }
            Self::Overflow => {
                "Reduce the sample magnitudes (e.g. minimize first) so scaled values fit in 64 bits."
            }
            Self::ShortSource => {
                "Provide a source with at least `period` items, or use get_cycle and check the length."
            }
        }
    }
}

impl fmt::Display for HarmonyErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned by the fallible operations of this crate.
///
/// Every error is terminal for the call that produced it; no partial result
/// is ever returned alongside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonyError {
    /// An operation that needs a minimum, maximum, sum or gcd got no values.
    EmptyInput {
        /// Name of the operation that rejected the input.
        operation: &'static str,
    },
    /// A fixed-arity reduction was given the wrong number of cycles.
    ShapeMismatch {
        /// Number of values the reduction accepts.
        expected: usize,
        /// Number of cycles supplied.
        actual: usize,
    },
    /// An intermediate or final value does not fit in the sample type.
    Overflow {
        /// Name of the operation that overflowed.
        operation: &'static str,
    },
    /// A strict cycle extraction ran out of input.
    ShortSource {
        /// Requested period.
        expected: usize,
        /// Items actually produced by the source.
        actual: usize,
    },
}

impl HarmonyError {
    /// The stable code for this error.
    pub fn code(&self) -> HarmonyErrorCode {
        match self {
            Self::EmptyInput { .. } => HarmonyErrorCode::EmptyInput,
            Self::ShapeMismatch { .. } => HarmonyErrorCode::ShapeMismatch,
            Self::Overflow { .. } => HarmonyErrorCode::Overflow,
            Self::ShortSource { .. } => HarmonyErrorCode::ShortSource,
        }
    }

    /// Get guidance on how to fix this error.
    pub fn guidance(&self) -> &'static str {
        self.code().guidance()
    }

    /// Format the error with its guidance line appended.
    pub fn detailed_message(&self) -> alloc::string::String {
        alloc::format!("{}\n  Guidance: {}", self, self.guidance())
    }
}

impl fmt::Display for HarmonyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.code();
        match self {
            Self::EmptyInput { operation } => {
                write!(f, "[{}] {}: input sequence is empty", code, operation)
            }
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "[{}] reduction takes {} values but {} cycles were supplied",
                code, expected, actual
            ),
            Self::Overflow { operation } => {
                write!(f, "[{}] {}: result does not fit in i64", code, operation)
            }
            Self::ShortSource { expected, actual } => write!(
                f,
                "[{}] source produced {} of {} requested items",
                code, actual, expected
            ),
        }
    }
}

impl core::error::Error for HarmonyError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(HarmonyErrorCode::EmptyInput.code(), "H001");
        assert_eq!(HarmonyErrorCode::ShapeMismatch.code(), "H002");
        assert_eq!(HarmonyErrorCode::Overflow.code(), "H003");
        assert_eq!(HarmonyErrorCode::ShortSource.code(), "H004");
    }

    #[test]
    fn test_error_guidance() {
        let codes = [
            HarmonyErrorCode::EmptyInput,
            HarmonyErrorCode::ShapeMismatch,
            HarmonyErrorCode::Overflow,
            HarmonyErrorCode::ShortSource,
        ];

        for code in codes {
            assert!(
                !code.guidance().is_empty(),
                "Error code {:?} should have guidance",
                code
            );
        }
    }

    #[test]
    fn test_display_includes_code_and_operation() {
        let error = HarmonyError::EmptyInput {
            operation: "shift_zero",
        };
        let message = error.to_string();
        assert!(message.contains("[H001]"));
        assert!(message.contains("shift_zero"));
    }

    #[test]
    fn test_detailed_message_format() {
        let error = HarmonyError::ShapeMismatch {
            expected: 2,
            actual: 3,
        };

        let detailed = error.detailed_message();
        assert!(detailed.contains("[H002]"));
        assert!(detailed.contains("takes 2 values but 3 cycles"));
        assert!(detailed.contains("Guidance:"));
    }
}
