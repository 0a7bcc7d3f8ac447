//! Schema validation with detailed error reporting

use jsonschema::{
    error::ValidationErrorKind, validator_for, ValidationError as JsonSchemaError,
    Validator as JsonValidator,
};
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use thiserror::Error;

use crate::core::loader::line_col_to_offset;
use crate::schema::registry::{SchemaKind, SchemaRegistry};

/// Validation error with source location information
#[derive(Debug, Error, Diagnostic)]
#[error("Schema validation failed: {summary}")]
#[diagnostic(code(storyreq::schema::validation_error))]
pub struct SchemaValidationError {
    summary: String,

    #[source_code]
    src: NamedSource<String>,

    #[related]
    violations: Vec<SchemaViolation>,
}

impl SchemaValidationError {
    pub fn new(filename: &str, source: &str, violations: Vec<SchemaViolation>) -> Self {
        let count = violations.len();
        let summary = if count == 1 {
            "1 error".to_string()
        } else {
            format!("{} errors", count)
        };
        Self {
            summary,
            src: NamedSource::new(filename, source.to_string()),
            violations,
        }
    }

    /// Get the number of violations
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Messages of every violation, in report order
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }
}

/// A single schema violation
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct SchemaViolation {
    #[label("{}", self.hint)]
    span: SourceSpan,

    message: String,
    hint: String,

    #[help]
    help: Option<String>,
}

impl SchemaViolation {
    pub fn new(message: String, hint: String, span: SourceSpan, help: Option<String>) -> Self {
        Self {
            span,
            message,
            hint,
            help,
        }
    }
}

/// Embedded schemas could not be compiled
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("embedded schema '{0}' is missing")]
    Missing(&'static str),

    #[error("embedded schema '{name}' is invalid: {message}")]
    Invalid { name: &'static str, message: String },
}

/// Validator for analysis output documents
pub struct SchemaValidator {
    compiled: HashMap<SchemaKind, JsonValidator>,
}

impl SchemaValidator {
    /// Compile every schema in the registry
    pub fn new(registry: &SchemaRegistry) -> Result<Self, SchemaError> {
        let mut compiled = HashMap::new();

        for kind in SchemaKind::all() {
            let name = kind.file_name();
            let source = registry.get(*kind).ok_or(SchemaError::Missing(name))?;
            let schema: JsonValue =
                serde_json::from_str(source).map_err(|e| SchemaError::Invalid {
                    name,
                    message: e.to_string(),
                })?;
            let validator = validator_for(&schema).map_err(|e| SchemaError::Invalid {
                name,
                message: e.to_string(),
            })?;
            compiled.insert(*kind, validator);
        }

        Ok(Self { compiled })
    }

    /// Validate JSON text, reporting violations against the source
    ///
    /// Returns the kind of document that was validated.
    pub fn validate_str(
        &self,
        content: &str,
        filename: &str,
    ) -> Result<SchemaKind, SchemaValidationError> {
        let document: JsonValue = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(e) => {
                let offset = line_col_to_offset(content, e.line(), e.column());
                let violation = SchemaViolation::new(
                    format!("JSON parse error: {}", e),
                    "invalid JSON".to_string(),
                    (offset, 0).into(),
                    Some("Check JSON syntax - commas, quotes, and brackets".to_string()),
                );
                return Err(SchemaValidationError::new(
                    filename,
                    content,
                    vec![violation],
                ));
            }
        };

        let kind = SchemaKind::detect(&document);
        let schema = match self.compiled.get(&kind) {
            Some(s) => s,
            None => return Ok(kind),
        };

        let violations: Vec<SchemaViolation> = schema
            .iter_errors(&document)
            .map(|e| error_to_violation(content, &e))
            .collect();

        if violations.is_empty() {
            Ok(kind)
        } else {
            Err(SchemaValidationError::new(filename, content, violations))
        }
    }
}

/// Convert a JSON Schema validation error to our violation format
fn error_to_violation(content: &str, error: &JsonSchemaError) -> SchemaViolation {
    let path = error.instance_path.to_string();
    let message = format_schema_error(error);
    let hint = format_error_hint(error);
    let span = find_path_span(content, &path);

    SchemaViolation::new(message, hint, span, generate_help_message(error))
}

/// Format a JSON Schema error into a user-friendly message
fn format_schema_error(error: &JsonSchemaError) -> String {
    let path = if error.instance_path.as_str().is_empty() {
        "document root".to_string()
    } else {
        format!("'{}'", error.instance_path)
    };

    match &error.kind {
        ValidationErrorKind::Required { property } => {
            let prop_str = property
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_else(|| property.to_string());
            format!("Missing required field: {} at {}", prop_str, path)
        }
        ValidationErrorKind::Enum { options } => {
            format!(
                "Invalid value at {}: must be one of: {}",
                path,
                format_enum_options(options)
            )
        }
        ValidationErrorKind::Pattern { pattern } => {
            format!("Value at {} doesn't match pattern: {}", path, pattern)
        }
        ValidationErrorKind::AdditionalProperties { unexpected } => {
            format!("Unknown field(s) at {}: {}", path, unexpected.join(", "))
        }
        _ => format!("Validation error at {}: {}", path, error),
    }
}

fn format_error_hint(error: &JsonSchemaError) -> String {
    match &error.kind {
        ValidationErrorKind::Required { .. } => "missing field".to_string(),
        ValidationErrorKind::Enum { .. } => "invalid value".to_string(),
        ValidationErrorKind::Pattern { .. } => "bad format".to_string(),
        ValidationErrorKind::AdditionalProperties { .. } => "unknown field".to_string(),
        ValidationErrorKind::Type { .. } => "wrong type".to_string(),
        _ => "here".to_string(),
    }
}

fn generate_help_message(error: &JsonSchemaError) -> Option<String> {
    match &error.kind {
        ValidationErrorKind::Pattern { .. } => Some(
            "Record ids are a prefix (FR, NFR or EC) followed by exactly 3 digits, e.g. FR001"
                .to_string(),
        ),
        ValidationErrorKind::Enum { options } => Some(format!(
            "Use one of: {}",
            format_enum_options(options)
        )),
        ValidationErrorKind::AdditionalProperties { .. } => {
            Some("Output documents only carry the fields the analyzer emits".to_string())
        }
        _ => None,
    }
}

fn format_enum_options(options: &JsonValue) -> String {
    options
        .as_array()
        .map(|values| {
            values
                .iter()
                .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| options.to_string())
}

/// Find the span of the value a JSON pointer refers to
///
/// Walks the pointer segment by segment. An array index followed by a key
/// skips that many earlier occurrences of the key, which is exact for arrays
/// of flat objects such as the record lists.
fn find_path_span(content: &str, json_path: &str) -> SourceSpan {
    let parts: Vec<&str> = json_path.split('/').filter(|s| !s.is_empty()).collect();
    let fallback: SourceSpan = (0, content.find('\n').unwrap_or(content.len()).max(1)).into();

    let mut cursor = 0;
    let mut last_span = None;
    let mut skip = 0;

    for part in parts {
        if let Ok(index) = part.parse::<usize>() {
            skip = index;
            continue;
        }

        let needle = format!("\"{}\"", part);
        let mut found = None;
        let mut from = cursor;
        for _ in 0..=skip {
            match content[from..].find(&needle) {
                Some(pos) => {
                    found = Some(from + pos);
                    from = from + pos + needle.len();
                }
                None => {
                    found = None;
                    break;
                }
            }
        }
        skip = 0;

        match found {
            Some(start) => {
                cursor = start + needle.len();
                last_span = Some(SourceSpan::from((start, needle.len())));
            }
            None => break,
        }
    }

    last_span.unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::core::loader::to_json_pretty;
    use serde_json::json;

    fn validator() -> SchemaValidator {
        SchemaValidator::new(&SchemaRegistry::default()).unwrap()
    }

    fn reject(doc: &JsonValue) -> SchemaValidationError {
        let json = to_json_pretty(doc).unwrap();
        validator().validate_str(&json, "out.json").unwrap_err()
    }

    #[test]
    fn test_analysis_output_is_valid() {
        let validator = validator();
        for story in ["add to cart and modify quantity", "add to cart", "checkout"] {
            let json = to_json_pretty(&analyze(story)).unwrap();
            assert_eq!(
                validator.validate_str(&json, "out.json").unwrap(),
                SchemaKind::Analysis
            );
        }
    }

    #[test]
    fn test_error_output_is_valid() {
        let json = to_json_pretty(&analyze("")).unwrap();
        assert_eq!(
            validator().validate_str(&json, "out.json").unwrap(),
            SchemaKind::Error
        );
    }

    #[test]
    fn test_bad_id_rejected() {
        let mut doc = serde_json::to_value(analyze("add to cart")).unwrap();
        doc["functional_requirements"][0]["id"] = json!("REQ-1");
        let err = reject(&doc);
        let messages = err.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("pattern"));
    }

    #[test]
    fn test_bad_priority_rejected() {
        let mut doc = serde_json::to_value(analyze("add to cart")).unwrap();
        doc["functional_requirements"][2]["priority"] = json!("Critical");
        let err = reject(&doc);
        let messages = err.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Low, Medium, High"));
    }

    #[test]
    fn test_missing_section_rejected() {
        let doc = json!({"user_story": "x", "functional_requirements": []});
        let err = reject(&doc);
        let messages = err.messages();
        assert_eq!(messages.len(), 3);
        assert!(messages.iter().all(|m| m.starts_with("Missing required field")));
    }

    #[test]
    fn test_invalid_json_reports_violation() {
        let err = validator().validate_str("{\"error\": ", "out.json").unwrap_err();
        assert_eq!(err.violation_count(), 1);
        assert!(err.messages()[0].starts_with("JSON parse error"));
    }

    #[test]
    fn test_find_path_span_skips_to_indexed_item() {
        let content = r#"{"items": [{"id": "a"}, {"id": "b"}]}"#;
        let span = find_path_span(content, "/items/1/id");
        let second = content.rfind("\"id\"").unwrap();
        assert_eq!(span.offset(), second);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_find_path_span_root() {
        let span = find_path_span("{}", "");
        assert_eq!(span.offset(), 0);
    }
}
