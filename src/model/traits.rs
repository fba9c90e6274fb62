//! The contract between record types and their schemas.

use serde_json::{Map, Value};

use crate::schema::RecordSchema;
use crate::ValidationResult;

/// A record type backed by a declarative schema.
///
/// Implementers declare their shape once, in [`schema`](Model::schema), and
/// build themselves from fields that already passed validation in
/// [`from_validated`](Model::from_validated). The provided methods derive the
/// untyped-construction and schema-description surfaces from those two, so
/// the validator and the description can never disagree.
///
/// # Example
///
/// ```rust
/// use mishap::{ErrorRecord, Model};
/// use serde_json::json;
///
/// let record = ErrorRecord::from_value(&json!({"message": "boom"}))
///     .into_result()
///     .unwrap();
/// assert_eq!(record.message(), "boom");
/// ```
pub trait Model: Sized {
    /// The declarative schema for this record type.
    fn schema() -> RecordSchema;

    /// Builds the record from fields that passed [`schema`](Model::schema)
    /// validation.
    ///
    /// Callers must only pass maps produced by `Self::schema().validate`;
    /// use [`from_value`](Model::from_value) for untyped input.
    fn from_validated(fields: Map<String, Value>) -> Self;

    /// Validates an untyped payload and builds the record from it.
    ///
    /// Construction is all-or-nothing: a payload that fails validation
    /// yields the accumulated errors and no record.
    fn from_value(value: &Value) -> ValidationResult<Self> {
        Self::schema().validate(value).map(Self::from_validated)
    }

    /// The machine-readable description of this record's schema.
    fn describe_schema() -> Value {
        Self::schema().describe()
    }
}
