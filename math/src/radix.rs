//! Positional notation for arbitrary-precision integers.
//!
//! Literals use the digits `0-9` followed by the letters `a-z` (either case),
//! so the supported radices are `2..=36`. No sign, prefix, separator or
//! surrounding whitespace is accepted.

use num_bigint::BigUint;

use crate::error::RadixError;

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

/// Return `radix` as a `u32` if it lies in `MIN_RADIX..=MAX_RADIX`.
///
/// Accepts any signed value so that negative or oversized radices read from
/// untrusted input are reported as [`RadixError::OutOfRange`].
#[inline]
pub fn check_radix(radix: impl Into<i64>) -> Result<u32, RadixError> {
    let radix = radix.into();
    match u32::try_from(radix) {
        Ok(value) if (MIN_RADIX..=MAX_RADIX).contains(&value) => Ok(value),
        _ => Err(RadixError::OutOfRange(radix)),
    }
}

/// Parse a radix written as a decimal string, e.g. `"16"` or `"-1"`.
pub fn parse_radix(text: &str) -> Result<u32, RadixError> {
    let radix = text
        .parse::<i64>()
        .map_err(|_| RadixError::Unparsable(text.to_owned()))?;
    check_radix(radix)
}

/// Decode `text` as a non-negative integer written in `radix`.
///
/// # Examples
///
/// ```
/// use field_math::radix::decode;
/// use num_bigint::BigUint;
///
/// assert_eq!(decode("ff", 16).unwrap(), BigUint::from(255u32));
/// assert_eq!(decode("111", 2).unwrap(), BigUint::from(7u32));
/// assert!(decode("G", 10).is_err());
/// ```
pub fn decode(text: &str, radix: u32) -> Result<BigUint, RadixError> {
    let radix = check_radix(radix)?;
    if text.is_empty() {
        return Err(RadixError::Empty);
    }

    let digits = text
        .chars()
        .enumerate()
        .map(|(position, digit)| {
            digit
                .to_digit(radix)
                .map(|value| value as u8)
                .ok_or(RadixError::InvalidDigit {
                    digit,
                    position,
                    radix,
                })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    // every digit was checked against `radix` above
    BigUint::from_radix_be(&digits, radix)
        .ok_or(RadixError::OutOfRange(radix.into()))
}

/// Encode `value` in `radix` using lowercase letters.
pub fn encode(value: &BigUint, radix: u32) -> Result<String, RadixError> {
    let radix = check_radix(radix)?;
    Ok(value.to_str_radix(radix))
}
