//! Typed schema for share collections.
//!
//! A test case is a single JSON object whose `keys` entry holds the threshold
//! descriptor and whose every other entry is one share keyed by its decimal
//! identifier:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use math::error::RadixError;
use math::radix;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{RecoverError, Result};
use crate::params::validate_threshold_config;
use crate::points::{self, Point};

/// Threshold descriptor: `n` shares were issued, `k` are needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

impl Keys {
    pub fn validate(&self) -> Result<()> {
        validate_threshold_config(self.k, self.n)
    }
}

/// Radix of a share value, written either as a JSON number or a string.
///
/// Any other JSON value is kept as-is so that a bad base is reported against
/// its share instead of failing the whole file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Radix {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl Radix {
    pub fn resolve(&self) -> std::result::Result<u32, RadixError> {
        match self {
            Radix::Number(value) => radix::check_radix(*value),
            Radix::Text(text) => radix::parse_radix(text),
            Radix::Other(value) => {
                Err(RadixError::Unparsable(value.to_string()))
            }
        }
    }
}

impl From<u32> for Radix {
    fn from(value: u32) -> Self {
        Radix::Number(value.into())
    }
}

/// One share as stored on disk: its value and the radix it is written in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRecord {
    pub base: Radix,
    pub value: String,
}

impl ShareRecord {
    pub fn new(base: impl Into<Radix>, value: impl Into<String>) -> Self {
        ShareRecord {
            base: base.into(),
            value: value.into(),
        }
    }

    /// Decode this record into the point it represents.
    ///
    /// The identifier and the value are checked independently; a share with
    /// both malformed reports both faults.
    pub fn decode(&self, identifier: &str) -> Result<Point> {
        let y = self
            .base
            .resolve()
            .and_then(|radix| radix::decode(&self.value, radix))
            .map_err(|reason| {
                points::malformed_value(identifier, &self.value, reason)
            });
        points::join_coordinates(points::decode_identifier(identifier), y)
    }
}

const KEYS_FIELD: &str = "keys";

/// A complete share collection for one secret.
///
/// Deserialization rejects a share identifier that appears twice in the same
/// object; a later entry never silently replaces an earlier one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, ShareRecord>,
}

impl<'de> Deserialize<'de> for TestCase {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TestCaseVisitor)
    }
}

struct TestCaseVisitor;

impl<'de> Visitor<'de> for TestCaseVisitor {
    type Value = TestCase;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with `keys` and shares keyed by identifier")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<TestCase, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut keys = None;
        let mut shares = BTreeMap::new();

        while let Some(name) = map.next_key::<String>()? {
            if name == KEYS_FIELD {
                if keys.is_some() {
                    return Err(de::Error::duplicate_field(KEYS_FIELD));
                }
                keys = Some(map.next_value()?);
                continue;
            }
            match shares.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(de::Error::custom(format!(
                        "duplicate share identifier `{}`",
                        entry.key()
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(map.next_value()?);
                }
            }
        }

        let keys = keys.ok_or_else(|| de::Error::missing_field(KEYS_FIELD))?;
        Ok(TestCase { keys, shares })
    }
}

impl TestCase {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read and parse a test case from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|source| RecoverError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_str(&contents).map_err(|source| RecoverError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Decode every share, reporting all malformed ones together.
    ///
    /// Points come back in identifier order of the underlying map, which is
    /// lexicographic on the identifier text; selection reorders them anyway.
    pub fn decode_shares(&self) -> Result<Vec<Point>> {
        let mut points = Vec::with_capacity(self.shares.len());
        let mut faults = Vec::new();

        for (identifier, record) in &self.shares {
            match record.decode(identifier) {
                Ok(point) => points.push(point),
                Err(fault) => faults.extend(fault.into_share_faults()),
            }
        }

        if faults.is_empty() {
            Ok(points)
        } else {
            Err(RecoverError::MalformedShares(faults))
        }
    }
}
