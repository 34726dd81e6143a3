//! Record identifiers and sharded storage paths.
//!
//! Stored records are identified by a v4 UUID in *canonical* form: 32 lowercase hexadecimal
//! characters with no hyphens, for example `550e8400e29b41d4a716446655440000`. This is the value
//! returned to clients as `_id`.
//!
//! For a canonical id `u`, the file store keeps the record under
//! `collection_dir/<u[0..2]>/<u[2..4]>/<u>/`, which keeps directory fan-out small.

use crate::{StoreError, StoreResult};
use std::path::{Path, PathBuf};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Canonical record identifier.
///
/// Once constructed the inner UUID is guaranteed to render in canonical form, so path derivation
/// is deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordId {
    /// Generates a fresh identifier for a new record.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates an externally supplied identifier.
    ///
    /// Hyphenated, uppercase or otherwise non-canonical strings are rejected rather than
    /// normalised.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidId`] if `input` is not 32 lowercase hex characters.
    pub fn parse(input: &str) -> StoreResult<Self> {
        if !Self::is_canonical(input) {
            return Err(StoreError::InvalidId(format!(
                "expected 32 lowercase hex characters without hyphens, got: '{}'",
                input
            )));
        }
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| StoreError::InvalidId(e.to_string()))
    }

    /// Returns true if `input` is in canonical form.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// Returns `parent_dir/<s1>/<s2>/<id>/` where `s1`/`s2` are the first two pairs of hex
    /// characters of this id.
    pub fn sharded_dir(&self, parent_dir: &Path) -> PathBuf {
        let canonical = self.to_string();
        parent_dir
            .join(&canonical[0..2])
            .join(&canonical[2..4])
            .join(&canonical)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for RecordId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}
