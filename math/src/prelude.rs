pub use crate::{
    error::{MathError, RadixError},
    field::PrimeField,
    radix::{MAX_RADIX, MIN_RADIX},
};
pub use num_bigint::BigUint;
