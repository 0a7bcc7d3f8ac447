//! storyreq: user story requirements analyzer
//!
//! Derives functional requirements, non-functional requirements, edge cases
//! and gaps from shopping-cart user stories using a fixed catalog.

pub mod analyzer;
pub mod cli;
pub mod core;
pub mod entities;
pub mod schema;

pub use analyzer::{analyze, analyze_story};
pub use entities::{AnalysisOutcome, AnalysisResult, ErrorResult};
