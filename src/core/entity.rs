//! Record trait and the rating enums shared by requirement records

use serde::{de::DeserializeOwned, Serialize};

use crate::core::identity::{RecordId, RecordKind};

/// Common trait for every identified record an analysis produces
pub trait Record: Serialize + DeserializeOwned {
    /// The kind of record (determines the id prefix)
    const KIND: RecordKind;

    /// Get the record's identifier
    fn id(&self) -> &RecordId;

    /// Get the record's description
    fn description(&self) -> &str;
}

/// Priority of a functional requirement
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

/// Estimated effort to write tests for a requirement
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum TestComplexity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for TestComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestComplexity::Low => write!(f, "Low"),
            TestComplexity::Medium => write!(f, "Medium"),
            TestComplexity::High => write!(f, "High"),
        }
    }
}

/// Quality attribute a non-functional requirement constrains
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum QualityAttribute {
    Reliability,
    Performance,
    Security,
    Usability,
    Scalability,
    Maintainability,
}

impl std::fmt::Display for QualityAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityAttribute::Reliability => write!(f, "Reliability"),
            QualityAttribute::Performance => write!(f, "Performance"),
            QualityAttribute::Security => write!(f, "Security"),
            QualityAttribute::Usability => write!(f, "Usability"),
            QualityAttribute::Scalability => write!(f, "Scalability"),
            QualityAttribute::Maintainability => write!(f, "Maintainability"),
        }
    }
}
