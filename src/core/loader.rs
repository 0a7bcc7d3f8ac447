//! Story document loading and analysis output writing
//!
//! Input documents are JSON objects with a `user_story` field. Output is the
//! serialized [`AnalysisOutcome`], pretty-printed with four-space indentation.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::input::StoryInput;
use crate::entities::AnalysisOutcome;

/// Input file used when none is given on the command line
pub const DEFAULT_INPUT: &str = "sample_input.json";

/// Errors reading story documents or writing analysis output
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(storyreq::load::io))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{name} is not valid JSON")]
    #[diagnostic(
        code(storyreq::load::json),
        help("input must look like {{\"user_story\": \"As a user, I want ...\"}}")
    )]
    Json {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("{name} must contain a JSON object")]
    #[diagnostic(
        code(storyreq::load::shape),
        help("wrap the story in an object: {{\"user_story\": \"...\"}}")
    )]
    Shape { name: String },

    #[error("failed to encode analysis output")]
    #[diagnostic(code(storyreq::load::encode))]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}", path.display())]
    #[diagnostic(code(storyreq::load::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a story document
///
/// A well-formed object without a usable `user_story` field is not an error
/// here; it becomes [`StoryInput::Missing`] or [`StoryInput::NotText`] and is
/// rejected by the analyzer.
pub fn parse_request(content: &str, name: &str) -> Result<StoryInput, LoadError> {
    let document: JsonValue = serde_json::from_str(content).map_err(|e| {
        let offset = line_col_to_offset(content, e.line(), e.column());
        LoadError::Json {
            name: name.to_string(),
            src: NamedSource::new(name, content.to_string()),
            span: SourceSpan::from(offset..offset),
            message: e.to_string(),
        }
    })?;

    if !document.is_object() {
        return Err(LoadError::Shape {
            name: name.to_string(),
        });
    }

    Ok(StoryInput::from_document(&document))
}

/// Read a story document from a file
pub fn read_request(path: &Path) -> Result<StoryInput, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "read story document");
    parse_request(&content, &path.display().to_string())
}

/// Read a story document from any reader (typically stdin)
pub fn read_request_from(mut reader: impl Read, name: &str) -> Result<StoryInput, LoadError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| LoadError::Read {
            path: PathBuf::from(name),
            source,
        })?;
    parse_request(&content, name)
}

/// Serialize a value as JSON with four-space indentation
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, LoadError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|source| LoadError::Encode { source })?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write an analysis outcome to a file
pub fn write_outcome(path: &Path, outcome: &AnalysisOutcome) -> Result<(), LoadError> {
    let json = to_json_pretty(outcome)?;
    fs::write(path, json).map_err(|source| LoadError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote analysis output");
    Ok(())
}

/// Convert a 1-based line/column position to a byte offset
pub(crate) fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let mut offset = (line_start + column.saturating_sub(1)).min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
