use math::PrimeField;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{RecoverError, Result};
use crate::points::Point;

/// Evaluate at `x = 0` the unique polynomial of degree `< points.len()`
/// passing through `points`, with all arithmetic in `field`.
///
/// Uses the Lagrange form
///
/// ```text
/// f(0) = Σ_i y_i · Π_{j≠i} x_j / (x_j - x_i)   (mod p)
/// ```
///
/// Numerator and denominator both take `x_j` first, which is `(0 - x_j) /
/// (x_i - x_j)` with the sign cancelled on both sides. The result is the
/// canonical residue in `[0, p)`.
///
/// # Errors
/// - [`RecoverError::InsufficientShares`] for an empty point set.
/// - [`RecoverError::DegenerateField`] if two x-coordinates are congruent
///   modulo the prime.
/// - [`RecoverError::NoModularInverse`] if a denominator is not invertible,
///   which only happens with a composite modulus.
pub fn interpolate(points: &[Point], field: &PrimeField) -> Result<BigUint> {
    if points.is_empty() {
        return Err(RecoverError::InsufficientShares {
            required: 1,
            available: 0,
        });
    }

    let mut secret = BigUint::zero();
    for (i, point) in points.iter().enumerate() {
        let (numerator, denominator) = basis_at_zero(points, i, field)?;
        let inverse = field.inverse(&denominator).ok_or_else(|| {
            RecoverError::NoModularInverse {
                x: point.x.clone(),
                denominator: denominator.clone(),
            }
        })?;

        let term = field.mul(&field.mul(&point.y, &numerator), &inverse);
        secret = field.add(&secret, &term);
    }

    Ok(secret)
}

/// Numerator and denominator of the `i`-th Lagrange basis polynomial at zero.
fn basis_at_zero(
    points: &[Point],
    i: usize,
    field: &PrimeField,
) -> Result<(BigUint, BigUint)> {
    let x_i = &points[i].x;

    points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .try_fold(
            (BigUint::one(), BigUint::one()),
            |(numerator, denominator), (_, other)| {
                let diff = field.sub(&other.x, x_i);
                if diff.is_zero() {
                    return Err(RecoverError::DegenerateField {
                        x_i: x_i.clone(),
                        x_j: other.x.clone(),
                    });
                }
                Ok((
                    field.mul(&numerator, &other.x),
                    field.mul(&denominator, &diff),
                ))
            },
        )
}
