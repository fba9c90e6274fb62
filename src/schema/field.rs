//! Field-level schema metadata.
//!
//! This module provides [`FieldType`] for the scalar types the contract
//! validates and [`FieldSpec`] for per-field metadata (required-ness, title,
//! description).

use serde_json::Value;

/// The scalar JSON types a field can declare.
///
/// Validation at this layer is presence and type only; there are no range or
/// pattern constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A JSON string.
    String,
    /// A JSON integer (floats are rejected).
    Integer,
    /// A JSON boolean.
    Boolean,
}

impl FieldType {
    /// The wire/diagnostic name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
        }
    }

    /// Returns true if the value has this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Boolean => value.is_boolean(),
        }
    }
}

/// Metadata for a single field of a record schema.
///
/// A `FieldSpec` declares the field's type and required-ness, plus the
/// human-readable title and description consumed by schema-introspection
/// tooling. Title and description are documentation only; they are never
/// enforced at validation time.
///
/// # Example
///
/// ```rust
/// use mishap::{FieldSpec, FieldType};
///
/// let spec = FieldSpec::required(FieldType::String)
///     .with_title("Message")
///     .with_description("Error message");
///
/// assert!(spec.is_required());
/// assert_eq!(spec.title(), Some("Message"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    field_type: FieldType,
    required: bool,
    title: Option<String>,
    description: Option<String>,
}

impl FieldSpec {
    /// Creates a spec for a required field of the given type.
    pub fn required(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: true,
            title: None,
            description: None,
        }
    }

    /// Creates a spec for an optional field of the given type.
    pub fn optional(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            title: None,
            description: None,
        }
    }

    /// Sets the human-readable title and returns self for chaining.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the human-readable description and returns self for chaining.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The declared type of this field.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Returns true if the field must be present in a payload.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The title, if one was set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The description, if one was set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Returns the JSON type name for a value.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::String.name(), "string");
        assert_eq!(FieldType::Integer.name(), "integer");
        assert_eq!(FieldType::Boolean.name(), "boolean");
    }

    #[test]
    fn test_string_matches() {
        assert!(FieldType::String.matches(&json!("hello")));
        assert!(FieldType::String.matches(&json!("")));
        assert!(!FieldType::String.matches(&json!(42)));
        assert!(!FieldType::String.matches(&json!(null)));
        assert!(!FieldType::String.matches(&json!(["a"])));
    }

    #[test]
    fn test_integer_matches() {
        assert!(FieldType::Integer.matches(&json!(42)));
        assert!(FieldType::Integer.matches(&json!(-1)));
        assert!(!FieldType::Integer.matches(&json!(1.5)));
        assert!(!FieldType::Integer.matches(&json!("42")));
    }

    #[test]
    fn test_boolean_matches() {
        assert!(FieldType::Boolean.matches(&json!(true)));
        assert!(!FieldType::Boolean.matches(&json!(0)));
        assert!(!FieldType::Boolean.matches(&json!("true")));
    }

    #[test]
    fn test_spec_builder() {
        let spec = FieldSpec::required(FieldType::String)
            .with_title("Message")
            .with_description("Error message");

        assert_eq!(spec.field_type(), FieldType::String);
        assert!(spec.is_required());
        assert_eq!(spec.title(), Some("Message"));
        assert_eq!(spec.description(), Some("Error message"));
    }

    #[test]
    fn test_optional_spec() {
        let spec = FieldSpec::optional(FieldType::Boolean);

        assert!(!spec.is_required());
        assert!(spec.title().is_none());
        assert!(spec.description().is_none());
    }

    #[test]
    fn test_value_type_names() {
        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!(true)), "boolean");
        assert_eq!(value_type_name(&json!(1)), "number");
        assert_eq!(value_type_name(&json!("s")), "string");
        assert_eq!(value_type_name(&json!([])), "array");
        assert_eq!(value_type_name(&json!({})), "object");
    }
}
