//! Non-functional requirement record

use serde::{Deserialize, Serialize};

use crate::core::entity::{QualityAttribute, Record, TestComplexity};
use crate::core::identity::{RecordId, RecordKind};

/// A quality attribute constraint (performance, reliability, security)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonFunctionalRequirement {
    /// Stable identifier (`NFRnnn`)
    pub id: RecordId,

    pub description: String,

    /// Quality attribute being constrained
    #[serde(rename = "type")]
    pub nfr_type: QualityAttribute,

    /// Whether the constraint has an objective measure
    pub measurable: bool,

    pub test_complexity: TestComplexity,

    pub source: String,
}

impl Record for NonFunctionalRequirement {
    const KIND: RecordKind = RecordKind::NonFunctional;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }
}
