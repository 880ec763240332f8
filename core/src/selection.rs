use crate::error::{RecoverError, Result};
use crate::points::Point;

/// Choose the `threshold` points used for reconstruction.
///
/// Points are ordered by ascending x-coordinate (exact integer order, not
/// modular) and the first `threshold` are kept, so the same input always
/// yields the same selection. Any exact duplicate x-coordinate in the input
/// is rejected with [`RecoverError::DuplicateShare`]; collisions that only
/// appear modulo the prime are left to the interpolator.
pub fn select(mut points: Vec<Point>, threshold: usize) -> Result<Vec<Point>> {
    if threshold == 0 {
        return Err(RecoverError::InvalidThreshold {
            n: points.len(),
            k: threshold,
        });
    }
    if points.len() < threshold {
        return Err(RecoverError::InsufficientShares {
            required: threshold,
            available: points.len(),
        });
    }

    points.sort_by(|a, b| a.x.cmp(&b.x));

    if let Some(pair) = points.windows(2).find(|pair| pair[0].x == pair[1].x) {
        return Err(RecoverError::DuplicateShare {
            x: pair[0].x.clone(),
        });
    }

    points.truncate(threshold);
    Ok(points)
}
