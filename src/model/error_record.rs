//! The error-record model.
//!
//! This module provides [`ErrorRecord`], a validated record carrying a single
//! required error message, with schema metadata for documentation tooling.

use std::fmt::{self, Display};

use serde_json::{json, Map, Value};

use crate::schema::{FieldSpec, FieldType, RecordSchema};

use super::traits::Model;

/// A well-formed error message as a typed, validated value.
///
/// `ErrorRecord` has exactly one field, `message`, which is required and must
/// be a string. The field is private, so a record is immutable once
/// constructed: no record lacking a message can exist, and no message can be
/// reassigned.
///
/// Typed callers construct records infallibly with [`new`](ErrorRecord::new);
/// untyped payloads go through [`Model::from_value`], which rejects a missing
/// or non-string `message` with accumulated validation errors.
///
/// # Example
///
/// ```rust
/// use mishap::{ErrorRecord, Model};
/// use serde_json::json;
///
/// let record = ErrorRecord::new("unexpected token");
/// assert_eq!(record.message(), "unexpected token");
///
/// let result = ErrorRecord::from_value(&json!({"message": 123}));
/// assert!(result.is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    message: String,
}

impl ErrorRecord {
    /// Creates a record from an in-process message.
    ///
    /// Presence and type are statically guaranteed here, so this constructor
    /// cannot fail. Empty messages are allowed; no length constraint exists.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message carried by this record.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Serializes this record back to a payload.
    ///
    /// The produced value validates against [`Model::schema`].
    pub fn to_value(&self) -> Value {
        json!({"message": self.message})
    }
}

impl Model for ErrorRecord {
    fn schema() -> RecordSchema {
        RecordSchema::new()
            .field(
                "message",
                FieldSpec::required(FieldType::String)
                    .with_title("Message")
                    .with_description("Error message"),
            )
            .example(json!({"message": "Error message"}))
    }

    fn from_validated(mut fields: Map<String, Value>) -> Self {
        // The schema guarantees a string is present under "message".
        let message = match fields.remove("message") {
            Some(Value::String(s)) => s,
            _ => String::new(),
        };
        Self { message }
    }
}

impl Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
