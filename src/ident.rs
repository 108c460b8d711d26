//! Stage identifiers: 24-character lowercase hex, modeled as a distinct
//! value type rather than a bare string.

use crate::error::IdFormatError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated 24-character lowercase hex identifier.
///
/// Construction is only possible through [`StageId::parse`] (which enforces
/// the format) or [`StageId::generate`], so holding a `StageId` is proof of
/// validity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StageId(String);

impl StageId {
    /// Returns a fresh identifier drawn from a cryptographically strong
    /// random source (96 bits of entropy). The generator keeps no state, so
    /// concurrent callers need no coordination.
    pub fn generate() -> Self {
        let bytes: [u8; 12] = rand::rng().random();
        StageId(bytes.iter().map(|b| format!("{:02x}", b)).collect())
    }

    /// Validates and wraps a candidate identifier.
    pub fn parse(candidate: &str) -> Result<Self, IdFormatError> {
        if Self::is_valid_format(candidate) {
            Ok(StageId(candidate.to_string()))
        } else {
            Err(IdFormatError(candidate.to_string()))
        }
    }

    /// True iff `candidate` is exactly 24 characters from `[0-9a-f]`.
    pub fn is_valid_format(candidate: &str) -> bool {
        candidate.len() == 24
            && candidate
                .chars()
                .all(|c| matches!(c, '0'..='9' | 'a'..='f'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for StageId {
    type Error = IdFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StageId::parse(&value)
    }
}

impl From<StageId> for String {
    fn from(id: StageId) -> String {
        id.0
    }
}
