use math::error::RadixError;
use math::radix;
use num_bigint::BigUint;

use crate::error::{RecoverError, Result};

/// A point `(x, y)` on the sharing polynomial.
///
/// Coordinates are exact integers; they are only reduced modulo the field
/// prime during interpolation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: BigUint,
    pub y: BigUint,
}

impl Point {
    pub fn new(x: impl Into<BigUint>, y: impl Into<BigUint>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl<X: Into<BigUint>, Y: Into<BigUint>> From<(X, Y)> for Point {
    fn from((x, y): (X, Y)) -> Self {
        Point::new(x, y)
    }
}

/// Decode one share: `identifier` is the decimal x-coordinate and
/// `value` is the y-coordinate written in `radix`.
///
/// When both coordinates are malformed, both faults are returned inside
/// [`RecoverError::MalformedShares`].
pub fn decode(identifier: &str, value: &str, radix: u32) -> Result<Point> {
    let y = radix::decode(value, radix)
        .map_err(|reason| malformed_value(identifier, value, reason));
    join_coordinates(decode_identifier(identifier), y)
}

pub(crate) fn malformed_value(
    identifier: &str,
    value: &str,
    reason: RadixError,
) -> RecoverError {
    RecoverError::MalformedValue {
        identifier: identifier.to_owned(),
        value: value.to_owned(),
        reason,
    }
}

/// Combine separately decoded coordinates, keeping every fault.
pub(crate) fn join_coordinates(
    x: Result<BigUint>,
    y: Result<BigUint>,
) -> Result<Point> {
    match (x, y) {
        (Ok(x), Ok(y)) => Ok(Point { x, y }),
        (Err(fault), Ok(_)) | (Ok(_), Err(fault)) => Err(fault),
        (Err(x_fault), Err(y_fault)) => {
            Err(RecoverError::MalformedShares(vec![x_fault, y_fault]))
        }
    }
}

/// Parse a share identifier into its x-coordinate.
pub fn decode_identifier(identifier: &str) -> Result<BigUint> {
    radix::decode(identifier, 10).map_err(|reason| {
        RecoverError::MalformedIdentifier {
            identifier: identifier.to_owned(),
            reason,
        }
    })
}
