//! Record type definitions
//!
//! An analysis produces the following records:
//!
//! - [`FunctionalRequirement`] - behaviors the system must perform
//! - [`NonFunctionalRequirement`] - quality attribute constraints
//! - [`EdgeCase`] - boundary and exceptional scenarios
//! - [`AnalysisResult`] - the aggregate, plus plain-text gaps
//!
//! [`AnalysisOutcome`] is either an [`AnalysisResult`] or an [`ErrorResult`].

pub mod analysis;
pub mod edge_case;
pub mod functional;
pub mod non_functional;

pub use analysis::{AnalysisOutcome, AnalysisResult, ErrorResult, SectionCounts, Sections};
pub use edge_case::EdgeCase;
pub use functional::FunctionalRequirement;
pub use non_functional::NonFunctionalRequirement;
