//! Core module - fundamental types and utilities

pub mod config;
pub mod entity;
pub mod identity;
pub mod input;
pub mod loader;

pub use config::Config;
pub use entity::{Priority, QualityAttribute, Record, TestComplexity};
pub use identity::{IdParseError, RecordId, RecordKind};
pub use input::{InvalidInput, InvalidReason, StoryInput, UserStory, INVALID_INPUT_MESSAGE};
pub use loader::LoadError;
