//! Analysis result aggregate and the error object returned for invalid input

use serde::{Deserialize, Serialize};

use crate::core::input::{InvalidInput, INVALID_INPUT_MESSAGE};
use crate::entities::{EdgeCase, FunctionalRequirement, NonFunctionalRequirement};

/// Requirements derived from one user story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The story exactly as supplied (not lower-cased)
    pub user_story: String,

    pub functional_requirements: Vec<FunctionalRequirement>,

    pub non_functional_requirements: Vec<NonFunctionalRequirement>,

    pub edge_cases: Vec<EdgeCase>,

    /// Aspects of the story left unspecified
    pub gaps_identified: Vec<String>,
}

impl AnalysisResult {
    /// Borrow every section at once
    pub fn sections(&self) -> Sections<'_> {
        Sections {
            functional: &self.functional_requirements,
            non_functional: &self.non_functional_requirements,
            edge_cases: &self.edge_cases,
            gaps: &self.gaps_identified,
        }
    }

    /// Number of records in each section
    pub fn counts(&self) -> SectionCounts {
        self.sections().counts()
    }
}

/// Borrowed view over the four record sections
#[derive(Debug, Clone, Copy, Default)]
pub struct Sections<'a> {
    pub functional: &'a [FunctionalRequirement],
    pub non_functional: &'a [NonFunctionalRequirement],
    pub edge_cases: &'a [EdgeCase],
    pub gaps: &'a [String],
}

impl Sections<'_> {
    pub fn counts(&self) -> SectionCounts {
        SectionCounts {
            functional: self.functional.len(),
            non_functional: self.non_functional.len(),
            edge_cases: self.edge_cases.len(),
            gaps: self.gaps.len(),
        }
    }
}

/// Record counts per section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionCounts {
    pub functional: usize,
    pub non_functional: usize,
    pub edge_cases: usize,
    pub gaps: usize,
}

impl std::fmt::Display for SectionCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} functional, {} non-functional, {} edge case(s), {} gap(s)",
            self.functional, self.non_functional, self.edge_cases, self.gaps
        )
    }
}

/// Structured error returned in place of a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    /// The error object for rejected user story input
    pub fn invalid_input() -> Self {
        Self {
            error: INVALID_INPUT_MESSAGE.to_string(),
        }
    }
}

impl From<&InvalidInput> for ErrorResult {
    fn from(err: &InvalidInput) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Either a full analysis or the error object
///
/// Serialized untagged so each variant has exactly its own document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Analysis(AnalysisResult),
    Error(ErrorResult),
}

impl AnalysisOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, AnalysisOutcome::Error(_))
    }

    /// Get the analysis, if the input was valid
    pub fn as_analysis(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisOutcome::Analysis(result) => Some(result),
            AnalysisOutcome::Error(_) => None,
        }
    }

    /// Get the error, if the input was rejected
    pub fn as_error(&self) -> Option<&ErrorResult> {
        match self {
            AnalysisOutcome::Analysis(_) => None,
            AnalysisOutcome::Error(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_result_shape() {
        let outcome = AnalysisOutcome::Error(ErrorResult::invalid_input());
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            value,
            json!({"error": "Invalid or missing user story input. Please provide a valid user story text."})
        );
    }

    #[test]
    fn test_empty_result_shape() {
        let result = AnalysisResult {
            user_story: "checkout".to_string(),
            functional_requirements: Vec::new(),
            non_functional_requirements: Vec::new(),
            edge_cases: Vec::new(),
            gaps_identified: vec!["gap".to_string()],
        };
        let value = serde_json::to_value(AnalysisOutcome::Analysis(result)).unwrap();
        assert_eq!(
            value,
            json!({
                "user_story": "checkout",
                "functional_requirements": [],
                "non_functional_requirements": [],
                "edge_cases": [],
                "gaps_identified": ["gap"]
            })
        );
    }

    #[test]
    fn test_outcome_deserializes_error_variant() {
        let outcome: AnalysisOutcome =
            serde_json::from_str(r#"{"error": "something went wrong"}"#).unwrap();
        assert!(outcome.is_error());
        assert_eq!(outcome.as_error().unwrap().error, "something went wrong");
    }

    #[test]
    fn test_counts_display() {
        let counts = SectionCounts {
            functional: 10,
            non_functional: 3,
            edge_cases: 4,
            gaps: 4,
        };
        assert_eq!(
            counts.to_string(),
            "10 functional, 3 non-functional, 4 edge case(s), 4 gap(s)"
        );
    }
}
