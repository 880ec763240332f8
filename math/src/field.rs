use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::One;
use num_traits::Zero;

use serde::Serialize;
use serde::Serializer;

use crate::error::{MathError, Result};
use crate::radix;

/// Prime field ℤ_p over an arbitrary-precision modulus.
///
/// Elements are plain [`BigUint`]s. Every operation accepts any non-negative
/// integer and returns the canonical residue in `[0, p)`, so callers never see
/// an unreduced or negative intermediate.
///
/// Primality of the modulus is not verified; with a composite modulus
/// [`PrimeField::inverse`] may return `None` for a non-zero element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: BigUint,
}

impl Serialize for PrimeField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.modulus)
    }
}

impl PrimeField {
    /// Exponent of the Mersenne prime `2^521 - 1`.
    pub const MERSENNE_521_EXPONENT: u32 = 521;
    /// Largest exponent accepted by [`PrimeField::mersenne`].
    pub const MAX_MERSENNE_EXPONENT: u32 = 4423;

    /// Construct a field over `modulus`, rejecting moduli below 2.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u8) {
            return Err(MathError::InvalidModulus(modulus));
        }
        Ok(Self { modulus })
    }

    /// Field over `2^exponent - 1`.
    ///
    /// Only a handful of exponents (2, 3, 5, 7, 13, ..., 521, ...) give a
    /// prime; the caller is responsible for picking one. Exponents above
    /// [`PrimeField::MAX_MERSENNE_EXPONENT`] are rejected before any
    /// allocation.
    pub fn mersenne(exponent: u32) -> Result<Self> {
        if exponent > Self::MAX_MERSENNE_EXPONENT {
            return Err(MathError::ExponentTooLarge {
                exponent,
                max: Self::MAX_MERSENNE_EXPONENT,
            });
        }
        Self::new((BigUint::one() << exponent) - 1u32)
    }

    /// Field over the Mersenne prime `2^521 - 1`.
    pub fn mersenne_521() -> Self {
        Self {
            modulus: (BigUint::one() << Self::MERSENNE_521_EXPONENT) - 1u32,
        }
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Whether `value` is already a canonical residue.
    #[inline]
    pub fn is_canonical(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    #[inline]
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    pub fn add(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        (lhs + rhs) % &self.modulus
    }

    /// `lhs - rhs` normalized into `[0, p)`.
    pub fn sub(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        let lhs = self.reduce(lhs);
        let rhs = self.reduce(rhs);
        if lhs >= rhs {
            lhs - rhs
        } else {
            &self.modulus - rhs + lhs
        }
    }

    pub fn neg(&self, value: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), value)
    }

    pub fn mul(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        (lhs * rhs) % &self.modulus
    }

    /// Multiplicative inverse of `value`, or `None` when `value ≡ 0` or the
    /// modulus shares a factor with it.
    pub fn inverse(&self, value: &BigUint) -> Option<BigUint> {
        let value = self.reduce(value);
        if value.is_zero() {
            return None;
        }
        value.modinv(&self.modulus)
    }
}

impl FromStr for PrimeField {
    type Err = MathError;

    /// Parse a decimal modulus.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let modulus = radix::decode(s, 10)?;
        Self::new(modulus)
    }
}
