//! CLI command implementations

pub mod analyze;
pub mod catalog;
pub mod completions;
pub mod schema;
pub mod validate;
