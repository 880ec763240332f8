use math::PrimeField;

use crate::error::{RecoverError, Result};

/// Share files read by the CLI when none are given on the command line.
pub const DEFAULT_INPUT_FILES: [&str; 2] = ["testcase1.json", "testcase2.json"];

/// Exponent of the Mersenne prime used as the default field modulus.
pub const DEFAULT_PRIME_EXPONENT: u32 = PrimeField::MERSENNE_521_EXPONENT;

/// Field used when no modulus is configured: ℤ_{2^521 - 1}.
///
/// Large enough for any secret an input file can encode in practice; the
/// modulus must exceed every possible secret for reconstruction to be unique.
pub fn default_field() -> PrimeField {
    PrimeField::mersenne_521()
}

/// Validate a declared threshold descriptor of `participants` shares of
/// which `threshold` are needed.
///
/// Runs before any share is decoded so an impossible configuration is
/// rejected without touching the share data.
pub fn validate_threshold_config(
    threshold: usize,
    participants: usize,
) -> Result<()> {
    if threshold == 0 || participants == 0 {
        return Err(RecoverError::InvalidThreshold {
            n: participants,
            k: threshold,
        });
    }
    if participants < threshold {
        return Err(RecoverError::InsufficientShares {
            required: threshold,
            available: participants,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_field_is_mersenne_521() {
        let field = default_field();
        assert_eq!(u64::from(DEFAULT_PRIME_EXPONENT), field.modulus().bits());
        assert_eq!(
            field,
            PrimeField::mersenne(DEFAULT_PRIME_EXPONENT).unwrap()
        );
    }

    #[test]
    fn validate_threshold_config_accepts_expected_inputs() {
        assert!(validate_threshold_config(1, 1).is_ok());
        assert!(validate_threshold_config(2, 2).is_ok());
        assert!(validate_threshold_config(3, 4).is_ok());
        assert!(validate_threshold_config(5, 10).is_ok());
        assert!(validate_threshold_config(100, 100).is_ok());
    }

    #[test]
    fn validate_threshold_config_rejects_zero() {
        assert!(matches!(
            validate_threshold_config(0, 5),
            Err(RecoverError::InvalidThreshold { n: 5, k: 0 })
        ));
        assert!(matches!(
            validate_threshold_config(2, 0),
            Err(RecoverError::InvalidThreshold { n: 0, k: 2 })
        ));
        assert!(matches!(
            validate_threshold_config(0, 0),
            Err(RecoverError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn validate_threshold_config_rejects_threshold_above_participants() {
        assert!(matches!(
            validate_threshold_config(3, 2),
            Err(RecoverError::InsufficientShares {
                required: 3,
                available: 2
            })
        ));
        assert!(validate_threshold_config(11, 10).is_err());
        assert!(validate_threshold_config(101, 100).is_err());
    }
}
