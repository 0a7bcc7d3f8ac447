//! Embedded JSON schemas for analysis output documents

use rust_embed::Embed;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::core::input::USER_STORY_FIELD;

#[derive(Embed)]
#[folder = "schemas/"]
struct EmbeddedSchemas;

/// The two document shapes an analysis can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// A full analysis result
    Analysis,
    /// The error object for invalid input
    Error,
}

impl SchemaKind {
    /// File name of the embedded schema
    pub fn file_name(&self) -> &'static str {
        match self {
            SchemaKind::Analysis => "analysis.schema.json",
            SchemaKind::Error => "error.schema.json",
        }
    }

    pub fn all() -> &'static [SchemaKind] {
        &[SchemaKind::Analysis, SchemaKind::Error]
    }

    /// Pick the schema a document claims to follow
    ///
    /// Objects carrying `error` and no `user_story` are error documents;
    /// everything else is checked as an analysis.
    pub fn detect(document: &JsonValue) -> Self {
        let has_error = document.get("error").is_some();
        let has_story = document.get(USER_STORY_FIELD).is_some();
        if has_error && !has_story {
            SchemaKind::Error
        } else {
            SchemaKind::Analysis
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaKind::Analysis => write!(f, "analysis"),
            SchemaKind::Error => write!(f, "error"),
        }
    }
}

/// Registry of schema sources by kind
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<SchemaKind, String>,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        let mut schemas = HashMap::new();
        for kind in SchemaKind::all() {
            if let Some(file) = EmbeddedSchemas::get(kind.file_name()) {
                if let Ok(source) = std::str::from_utf8(&file.data) {
                    schemas.insert(*kind, source.to_string());
                }
            }
        }
        Self { schemas }
    }
}

impl SchemaRegistry {
    /// Get the schema source for a kind
    pub fn get(&self, kind: SchemaKind) -> Option<&str> {
        self.schemas.get(&kind).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_schemas_embedded() {
        let registry = SchemaRegistry::default();
        for kind in SchemaKind::all() {
            let source = registry.get(*kind).unwrap();
            let parsed: JsonValue = serde_json::from_str(source).unwrap();
            assert_eq!(parsed["type"], "object");
        }
    }

    #[test]
    fn test_detect() {
        assert_eq!(
            SchemaKind::detect(&json!({"error": "bad input"})),
            SchemaKind::Error
        );
        assert_eq!(
            SchemaKind::detect(&json!({"user_story": "x", "gaps_identified": []})),
            SchemaKind::Analysis
        );
        assert_eq!(
            SchemaKind::detect(&json!({"user_story": "x", "error": "both"})),
            SchemaKind::Analysis
        );
    }
}
