use num_bigint::BigUint;
use thiserror::Error;

use crate::radix::{MAX_RADIX, MIN_RADIX};

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Radix(#[from] RadixError),
    #[error("modulus {0} is too small: a prime field needs p >= 2")]
    InvalidModulus(BigUint),
    #[error("Mersenne exponent {exponent} exceeds the maximum of {max}")]
    ExponentTooLarge { exponent: u32, max: u32 },
}

pub type Error = MathError;

/// Errors returned while reading or writing integers in a positional radix.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum RadixError {
    #[error(
        "radix {0} is outside the supported range {min}..={max}",
        min = MIN_RADIX,
        max = MAX_RADIX
    )]
    OutOfRange(i64),
    #[error("radix {0:?} is not a decimal integer")]
    Unparsable(String),
    #[error("empty literal")]
    Empty,
    #[error("invalid digit {digit:?} at position {position} for radix {radix}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },
}
