//! Strongly-typed claim identifiers
//!
//! Claim records are keyed by a human-readable number of the form
//! `CLM-YYYY-NNN` (for example `CLM-2024-001`). Wrapping it in a newtype keeps
//! unchecked strings out of the claim store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const PREFIX: &str = "CLM";

/// Errors raised when parsing a claim number
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClaimNumberError {
    #[error("Claim number must start with \"CLM-\": {0}")]
    MissingPrefix(String),

    #[error("Claim number year must be four digits: {0}")]
    InvalidYear(String),

    #[error("Claim number sequence must be three or more digits: {0}")]
    InvalidSequence(String),
}

/// A claim number in `CLM-YYYY-NNN` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimNumber {
    year: u16,
    sequence: u32,
    raw: String,
}

impl ClaimNumber {
    /// Creates a claim number from its parts
    pub fn new(year: u16, sequence: u32) -> Self {
        Self {
            year,
            sequence,
            raw: format!("{}-{:04}-{:03}", PREFIX, year, sequence),
        }
    }

    /// Returns the filing year
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Returns the per-year sequence
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Returns the claim number exactly as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the identifier prefix for display
    pub fn prefix() -> &'static str {
        PREFIX
    }
}

impl fmt::Display for ClaimNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ClaimNumber {
    type Err = ClaimNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(PREFIX)
            .and_then(|r| r.strip_prefix('-'))
            .ok_or_else(|| ClaimNumberError::MissingPrefix(s.to_string()))?;

        let (year, sequence) = rest
            .split_once('-')
            .ok_or_else(|| ClaimNumberError::InvalidSequence(s.to_string()))?;

        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ClaimNumberError::InvalidYear(s.to_string()));
        }
        if sequence.len() < 3 || !sequence.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ClaimNumberError::InvalidSequence(s.to_string()));
        }

        let year = year
            .parse()
            .map_err(|_| ClaimNumberError::InvalidYear(s.to_string()))?;
        let sequence = sequence
            .parse()
            .map_err(|_| ClaimNumberError::InvalidSequence(s.to_string()))?;

        Ok(Self {
            year,
            sequence,
            raw: s.to_string(),
        })
    }
}

impl TryFrom<String> for ClaimNumber {
    type Error = ClaimNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClaimNumber> for String {
    fn from(number: ClaimNumber) -> String {
        number.raw
    }
}

impl AsRef<str> for ClaimNumber {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
