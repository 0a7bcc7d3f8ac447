//! Functional requirement record

use serde::{Deserialize, Serialize};

use crate::core::entity::{Priority, Record, TestComplexity};
use crate::core::identity::{RecordId, RecordKind};

/// A behavior the system under analysis must perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionalRequirement {
    /// Stable identifier (`FRnnn`)
    pub id: RecordId,

    /// What the system must do
    pub description: String,

    /// Business priority
    pub priority: Priority,

    /// Estimated effort to verify
    pub test_complexity: TestComplexity,

    /// Free-form grouping label
    pub category: String,

    /// Whether the requirement can be verified by a test
    pub testable: bool,

    /// Where the requirement came from
    pub source: String,
}

impl Record for FunctionalRequirement {
    const KIND: RecordKind = RecordKind::Functional;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }
}
