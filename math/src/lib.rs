//! Arbitrary-precision prime field arithmetic and radix conversion.

pub mod error;
pub mod field;
pub mod prelude;
pub mod radix;

pub use field::PrimeField;
