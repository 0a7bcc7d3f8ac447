//! Schema system - validation of analysis output documents

pub mod registry;
pub mod validator;

pub use registry::{SchemaKind, SchemaRegistry};
pub use validator::{SchemaError, SchemaValidationError, SchemaValidator};
