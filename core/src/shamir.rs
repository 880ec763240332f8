use std::path::{Path, PathBuf};

use math::PrimeField;
use num_bigint::BigUint;
use serde::Serialize;

use crate::error::Result;
use crate::input::TestCase;
use crate::interpolation::interpolate;
use crate::params::default_field;
use crate::points::Point;
use crate::selection::select;

/// Reconstructs Shamir secrets over a fixed prime field.
///
/// The field is read-only configuration; one `Reconstructor` can serve any
/// number of independent reconstructions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconstructor {
    field: PrimeField,
}

impl Default for Reconstructor {
    fn default() -> Self {
        Self::new(default_field())
    }
}

impl Reconstructor {
    pub fn new(field: PrimeField) -> Self {
        Reconstructor { field }
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Reconstruct the secret of one test case.
    ///
    /// The declared threshold is checked before any share is decoded, then
    /// every share is decoded (all malformed shares are reported together),
    /// the lowest `k` x-coordinates are selected and interpolated at zero.
    pub fn reconstruct(&self, case: &TestCase) -> Result<BigUint> {
        case.keys.validate()?;
        let points = case.decode_shares()?;
        self.reconstruct_points(points, case.keys.k)
    }

    /// Reconstruct from already decoded points.
    pub fn reconstruct_points(
        &self,
        points: Vec<Point>,
        threshold: usize,
    ) -> Result<BigUint> {
        let selected = select(points, threshold)?;
        interpolate(&selected, &self.field)
    }

    pub fn reconstruct_file(&self, path: impl AsRef<Path>) -> Result<BigUint> {
        let case = TestCase::load(path)?;
        self.reconstruct(&case)
    }

    /// Reconstruct each file independently; a failure in one file never
    /// affects the others.
    pub fn reconstruct_files<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Vec<Outcome> {
        paths
            .iter()
            .map(|path| Outcome {
                source: path.as_ref().to_path_buf(),
                result: self.reconstruct_file(path),
            })
            .collect()
    }
}

/// Result of reconstructing one input file.
#[derive(Debug)]
pub struct Outcome {
    pub source: PathBuf,
    pub result: Result<BigUint>,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Summarize this outcome, naming the field it was reconstructed in.
    pub fn to_report(&self, field: &PrimeField) -> Report {
        let (secret, error) = match &self.result {
            Ok(secret) => (Some(secret.to_string()), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Report {
            source: self.source.display().to_string(),
            modulus: field.clone(),
            secret,
            error,
        }
    }
}

/// Serializable summary of an [`Outcome`]; the modulus and the secret are
/// decimal strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub source: String,
    pub modulus: PrimeField,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::error::RecoverError;

    use super::*;

    fn case(json: &str) -> TestCase {
        TestCase::from_json_str(json).unwrap()
    }

    #[test]
    fn reconstructs_quadratic_secret() {
        let case = case(
            r#"{
                "keys": { "n": 4, "k": 3 },
                "1": { "base": "10", "value": "4" },
                "2": { "base": "2", "value": "111" },
                "3": { "base": "10", "value": "12" },
                "6": { "base": "4", "value": "213" }
            }"#,
        );
        let secret = Reconstructor::default().reconstruct(&case).unwrap();
        assert_eq!(BigUint::from(3u32), secret);
    }

    #[test]
    fn identifiers_are_ordered_numerically_not_lexically() {
        // f(x) = 2x + 1; lexical order would pick "10" and "2"
        let case = case(
            r#"{
                "keys": { "n": 3, "k": 2 },
                "10": { "base": "10", "value": "99" },
                "2": { "base": "10", "value": "5" },
                "3": { "base": "10", "value": "7" }
            }"#,
        );
        let secret = Reconstructor::default().reconstruct(&case).unwrap();
        assert_eq!(BigUint::from(1u32), secret);
    }

    #[test]
    fn threshold_is_checked_before_decoding() {
        let case = case(
            r#"{
                "keys": { "n": 1, "k": 2 },
                "1": { "base": "10", "value": "G" },
                "2": { "base": "10", "value": "H" }
            }"#,
        );
        assert!(matches!(
            Reconstructor::default().reconstruct(&case),
            Err(RecoverError::InsufficientShares {
                required: 2,
                available: 1
            })
        ));
    }

    #[test]
    fn fewer_shares_than_declared_is_insufficient() {
        let case = case(
            r#"{
                "keys": { "n": 3, "k": 3 },
                "1": { "base": "10", "value": "3" },
                "2": { "base": "10", "value": "5" }
            }"#,
        );
        assert!(matches!(
            Reconstructor::default().reconstruct(&case),
            Err(RecoverError::InsufficientShares {
                required: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let case = case(
            r#"{
                "keys": { "n": 3, "k": 2 },
                "1": { "base": "10", "value": "3" },
                "01": { "base": "10", "value": "3" },
                "2": { "base": "10", "value": "5" }
            }"#,
        );
        assert!(matches!(
            Reconstructor::default().reconstruct(&case),
            Err(RecoverError::DuplicateShare { .. })
        ));
    }

    #[test]
    fn small_field_collision_is_degenerate() {
        let reconstructor =
            Reconstructor::new(PrimeField::new(BigUint::from(7u32)).unwrap());
        let points = vec![Point::new(1u32, 3u32), Point::new(8u32, 17u32)];
        assert!(matches!(
            reconstructor.reconstruct_points(points, 2),
            Err(RecoverError::DegenerateField { .. })
        ));
    }

    #[test]
    fn repeated_reconstruction_is_identical() {
        let reconstructor = Reconstructor::default();
        let points = || {
            vec![
                Point::new(3u32, 7u32),
                Point::new(1u32, 3u32),
                Point::new(2u32, 5u32),
            ]
        };
        let first = reconstructor.reconstruct_points(points(), 2).unwrap();
        let second = reconstructor.reconstruct_points(points(), 2).unwrap();
        assert_eq!(first, second);
        assert_eq!(BigUint::from(1u32), first);
    }

    #[test]
    fn report_carries_secret_or_error() {
        let reconstructor =
            Reconstructor::new(PrimeField::new(BigUint::from(97u32)).unwrap());
        let ok = Outcome {
            source: PathBuf::from("a.json"),
            result: Ok(BigUint::from(42u32)),
        };
        assert_eq!(
            r#"{"source":"a.json","modulus":"97","secret":"42"}"#,
            serde_json::to_string(&ok.to_report(reconstructor.field()))
                .unwrap()
        );

        let failed = Outcome {
            source: PathBuf::from("b.json"),
            result: Err(RecoverError::InsufficientShares {
                required: 3,
                available: 2,
            }),
        };
        let report = failed.to_report(reconstructor.field());
        assert!(!failed.is_ok());
        assert_eq!(None, report.secret);
        assert_eq!(
            Some("Insufficient shares: need 3, got 2".to_owned()),
            report.error
        );
    }
}
