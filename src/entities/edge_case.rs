//! Edge case record

use serde::{Deserialize, Serialize};

use crate::core::entity::Record;
use crate::core::identity::{RecordId, RecordKind};

/// A boundary or exceptional input scenario worth testing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCase {
    /// Stable identifier (`ECnnn`)
    pub id: RecordId,
    pub description: String,
    /// Short name of the triggering condition
    pub scenario: String,
}

impl Record for EdgeCase {
    const KIND: RecordKind = RecordKind::EdgeCase;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }
}
