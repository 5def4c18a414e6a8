//! Error types for font compilation.

use std::fmt;

/// Errors reported by [`compile`][crate::compile::compile] and the decoding
/// helpers of [`CompiledFont`][crate::compile::CompiledFont].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The minimized cover does not reproduce the source table.
    ///
    /// This is an internal fault in the minimizer; the compiled output must
    /// not be used.
    ReconstructionMismatch {
        /// The character code whose glyph differs
        code: usize,
        /// The glyph word in the source table
        expected: u64,
        /// The glyph word decoded from the packed records
        actual: u64,
    },
    /// The reserved input mask overlaps the bits of the character code.
    InvalidReservedMask {
        /// The rejected mask
        mask: u8,
    },
    /// A character code outside the table was requested.
    CodeOutOfRange {
        /// The requested code
        code: usize,
        /// Number of codes in the table
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ReconstructionMismatch {
                code,
                expected,
                actual,
            } => write!(
                f,
                "Reconstructed glyph {:#04x} is {:#018x}, expected {:#018x} (diff {:#018x})",
                code,
                actual,
                expected,
                actual ^ expected
            ),
            Error::InvalidReservedMask { mask } => write!(
                f,
                "Reserved mask {:#04x} overlaps the character code bits",
                mask
            ),
            Error::CodeOutOfRange { code, len } => write!(
                f,
                "Character code {:#x} out of range (valid range: 0..{:#x})",
                code, len
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
