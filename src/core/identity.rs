//! Record identity system using kind-prefixed, zero-padded sequence numbers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Record kind prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    /// Functional requirement
    #[serde(rename = "FR")]
    Functional,
    /// Non-functional requirement
    #[serde(rename = "NFR")]
    NonFunctional,
    /// Edge case / boundary condition
    #[serde(rename = "EC")]
    EdgeCase,
}

impl RecordKind {
    /// Get the string representation of the prefix
    pub const fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Functional => "FR",
            RecordKind::NonFunctional => "NFR",
            RecordKind::EdgeCase => "EC",
        }
    }

    /// Section label used when records are flattened into rows
    pub fn section(&self) -> &'static str {
        match self {
            RecordKind::Functional => "functional",
            RecordKind::NonFunctional => "non_functional",
            RecordKind::EdgeCase => "edge_case",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FR" => Ok(RecordKind::Functional),
            "NFR" => Ok(RecordKind::NonFunctional),
            "EC" => Ok(RecordKind::EdgeCase),
            _ => Err(IdParseError::InvalidPrefix(s.to_string())),
        }
    }
}

/// Number of digits in the sequence part of an id
const SEQUENCE_WIDTH: usize = 3;

/// A record identifier such as `FR002` or `NFR001`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId {
    kind: RecordKind,
    number: u16,
}

impl RecordId {
    /// Create a RecordId from a kind and sequence number (0..=999)
    pub const fn new(kind: RecordKind, number: u16) -> Self {
        Self { kind, number }
    }

    /// Get the record kind
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Get the sequence number
    pub fn number(&self) -> u16 {
        self.number
    }

    /// Parse a RecordId from a string
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:0width$}",
            self.kind,
            self.number,
            width = SEQUENCE_WIDTH
        )
    }
}

impl FromStr for RecordId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| IdParseError::MissingNumber(s.to_string()))?;
        let (prefix_str, digits) = s.split_at(split);

        let kind = prefix_str.parse()?;
        if digits.len() != SEQUENCE_WIDTH || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdParseError::InvalidNumber(digits.to_string()));
        }
        let number = digits
            .parse()
            .map_err(|_| IdParseError::InvalidNumber(digits.to_string()))?;

        Ok(Self { kind, number })
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing record IDs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdParseError {
    #[error("invalid record prefix: '{0}' (valid: FR, NFR, EC)")]
    InvalidPrefix(String),

    #[error("missing sequence number in record ID: '{0}'")]
    MissingNumber(String),

    #[error("invalid sequence number '{0}': expected exactly 3 digits")]
    InvalidNumber(String),
}
