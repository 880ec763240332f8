use std::path::PathBuf;

use math::error::{MathError, RadixError};
use num_bigint::BigUint;
use thiserror::Error;

/// Result type specialized for secret reconstruction.
pub type Result<T> = std::result::Result<T, RecoverError>;

/// Errors that can arise while decoding shares and reconstructing a secret.
///
/// Every variant is terminal for the reconstruction attempt that produced it.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoverError {
    #[error("Invalid threshold: n = {n}, k = {k} (both must be at least 1)")]
    InvalidThreshold { n: usize, k: usize },
    #[error("Insufficient shares: need {required}, got {available}")]
    InsufficientShares { required: usize, available: usize },
    #[error("Share `{identifier}`: malformed identifier: {reason}")]
    MalformedIdentifier {
        identifier: String,
        reason: RadixError,
    },
    #[error("Share `{identifier}`: malformed value {value:?}: {reason}")]
    MalformedValue {
        identifier: String,
        value: String,
        reason: RadixError,
    },
    #[error("{} malformed share(s): {}", .0.len(), join_faults(.0))]
    MalformedShares(Vec<RecoverError>),
    #[error("Duplicate share: x = {x} appears more than once")]
    DuplicateShare { x: BigUint },
    #[error("Degenerate field: x = {x_i} and x = {x_j} coincide mod p")]
    DegenerateField { x_i: BigUint, x_j: BigUint },
    #[error(
        "Modular inverse does not exist for denominator {denominator} \
         of share x = {x}"
    )]
    NoModularInverse { x: BigUint, denominator: BigUint },
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RecoverError {
    /// Individual per-share faults, flattening
    /// [`RecoverError::MalformedShares`].
    pub fn share_faults(&self) -> &[RecoverError] {
        match self {
            RecoverError::MalformedShares(faults) => faults,
            other => std::slice::from_ref(other),
        }
    }

    /// Owned variant of [`RecoverError::share_faults`].
    pub fn into_share_faults(self) -> Vec<RecoverError> {
        match self {
            RecoverError::MalformedShares(faults) => faults,
            other => vec![other],
        }
    }
}

fn join_faults(faults: &[RecoverError]) -> String {
    faults
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
