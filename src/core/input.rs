//! User story input boundary
//!
//! Input arrives loosely typed (usually the `user_story` field of a JSON
//! document). [`StoryInput`] captures every shape it can take, and
//! [`StoryInput::validate`] is the only way to obtain a [`UserStory`], so the
//! analyzer never sees missing, empty, or non-text input.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use thiserror::Error;

/// Message reported for every rejected input
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid or missing user story input. Please provide a valid user story text.";

/// Field name holding the story text in input documents
pub const USER_STORY_FIELD: &str = "user_story";

/// Raw user story input, before validation
#[derive(Debug, Clone, PartialEq)]
pub enum StoryInput {
    /// A text value (possibly empty)
    Text(String),
    /// No value supplied (absent field or JSON null)
    Missing,
    /// A value of some other JSON type
    NotText(JsonValue),
}

impl StoryInput {
    /// Classify an optional JSON value
    pub fn from_json(value: Option<&JsonValue>) -> Self {
        match value {
            None | Some(JsonValue::Null) => StoryInput::Missing,
            Some(JsonValue::String(s)) => StoryInput::Text(s.clone()),
            Some(other) => StoryInput::NotText(other.clone()),
        }
    }

    /// Extract the `user_story` field from an input document
    ///
    /// Documents that are not objects have no such field and are treated as
    /// missing input.
    pub fn from_document(document: &JsonValue) -> Self {
        Self::from_json(document.get(USER_STORY_FIELD))
    }

    /// Validate the input, producing a non-empty user story
    pub fn validate(self) -> Result<UserStory, InvalidInput> {
        match self {
            StoryInput::Text(text) if !text.is_empty() => Ok(UserStory(text)),
            StoryInput::Text(_) => Err(InvalidInput::new(InvalidReason::Empty)),
            StoryInput::Missing => Err(InvalidInput::new(InvalidReason::Missing)),
            StoryInput::NotText(value) => Err(InvalidInput::new(InvalidReason::NotText {
                found: json_type_name(&value),
            })),
        }
    }
}

impl From<String> for StoryInput {
    fn from(text: String) -> Self {
        StoryInput::Text(text)
    }
}

impl From<&str> for StoryInput {
    fn from(text: &str) -> Self {
        StoryInput::Text(text.to_string())
    }
}

impl From<Option<String>> for StoryInput {
    fn from(text: Option<String>) -> Self {
        text.map_or(StoryInput::Missing, StoryInput::Text)
    }
}

impl From<JsonValue> for StoryInput {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => StoryInput::Missing,
            JsonValue::String(s) => StoryInput::Text(s),
            other => StoryInput::NotText(other),
        }
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// A validated, non-empty user story
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserStory(String);

impl UserStory {
    /// Create a user story, rejecting empty text
    pub fn new(text: impl Into<String>) -> Result<Self, InvalidInput> {
        StoryInput::Text(text.into()).validate()
    }

    /// Borrow the original text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the original text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserStory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserStory {
    type Error = InvalidInput;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        UserStory::new(text)
    }
}

impl From<UserStory> for String {
    fn from(story: UserStory) -> Self {
        story.0
    }
}

/// Why an input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Missing,
    Empty,
    NotText { found: &'static str },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Missing => write!(f, "no user story was supplied"),
            InvalidReason::Empty => write!(f, "the user story is empty"),
            InvalidReason::NotText { found } => {
                write!(f, "expected text but found a {} value", found)
            }
        }
    }
}

/// The user story input was missing, empty, or not text
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{}", INVALID_INPUT_MESSAGE)]
#[diagnostic(
    code(storyreq::input::invalid),
    help("supply a JSON document like {{\"user_story\": \"As a user, I want ...\"}}")
)]
pub struct InvalidInput {
    reason: InvalidReason,
}

impl InvalidInput {
    pub fn new(reason: InvalidReason) -> Self {
        Self { reason }
    }

    /// Get the underlying reason
    pub fn reason(&self) -> InvalidReason {
        self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_validates() {
        let story = StoryInput::from("add to cart").validate().unwrap();
        assert_eq!(story.as_str(), "add to cart");
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        assert!(StoryInput::from("   ").validate().is_ok());
    }

    #[test]
    fn test_empty_text_rejected() {
        let err = StoryInput::from("").validate().unwrap_err();
        assert_eq!(err.reason(), InvalidReason::Empty);
        assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_number_rejected() {
        let err = StoryInput::from(json!(42)).validate().unwrap_err();
        assert_eq!(err.reason(), InvalidReason::NotText { found: "number" });
    }

    #[test]
    fn test_null_and_none_are_missing() {
        assert_eq!(StoryInput::from(JsonValue::Null), StoryInput::Missing);
        assert_eq!(StoryInput::from(None::<String>), StoryInput::Missing);
    }

    #[test]
    fn test_from_document() {
        let doc = json!({"user_story": "As a shopper"});
        assert_eq!(
            StoryInput::from_document(&doc),
            StoryInput::Text("As a shopper".to_string())
        );

        let doc = json!({"story": "wrong field"});
        assert_eq!(StoryInput::from_document(&doc), StoryInput::Missing);

        let doc = json!({"user_story": ["a", "list"]});
        assert!(matches!(
            StoryInput::from_document(&doc),
            StoryInput::NotText(_)
        ));
    }

    #[test]
    fn test_user_story_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<UserStory>("\"\"").is_err());
        let story: UserStory = serde_json::from_str("\"cart\"").unwrap();
        assert_eq!(story.into_inner(), "cart");
    }
}
