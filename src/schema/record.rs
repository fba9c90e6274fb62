//! Record schema validation and description.
//!
//! This module provides [`RecordSchema`], the declarative schema for a record
//! type: an ordered set of fields with metadata, an optional canonical example
//! payload, presence/type validation, and a machine-readable description for
//! documentation tooling.

use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};

use super::field::{value_type_name, FieldSpec};

/// A declarative schema for a record type.
///
/// `RecordSchema` validates that payloads are JSON objects whose declared
/// fields are present (when required) and of the declared type. All field
/// violations are accumulated rather than short-circuiting on the first
/// failure. Fields not declared in the schema are ignored.
///
/// The schema also carries documentation metadata: per-field titles and
/// descriptions, and an optional canonical example payload, all surfaced by
/// [`describe`](RecordSchema::describe).
///
/// # Example
///
/// ```rust
/// use mishap::{FieldSpec, FieldType, RecordSchema};
/// use serde_json::json;
///
/// let schema = RecordSchema::new()
///     .field(
///         "message",
///         FieldSpec::required(FieldType::String)
///             .with_title("Message")
///             .with_description("Error message"),
///     )
///     .example(json!({"message": "Error message"}));
///
/// assert!(schema.validate(&json!({"message": "boom"})).is_success());
/// assert!(schema.validate(&json!({})).is_failure());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordSchema {
    fields: IndexMap<String, FieldSpec>,
    example: Option<Value>,
}

impl RecordSchema {
    /// Creates a new schema with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the schema, preserving declaration order.
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    /// Registers the canonical example payload for this record type.
    ///
    /// The example is documentation metadata, not a runtime default. It must
    /// itself validate against the schema; [`describe`](RecordSchema::describe)
    /// surfaces it verbatim.
    pub fn example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    /// Returns the registered example payload, if any.
    pub fn example_payload(&self) -> Option<&Value> {
        self.example.as_ref()
    }

    /// Returns the spec for the named field, if declared.
    pub fn field_spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Returns an iterator over the declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Validates a payload against this schema.
    ///
    /// Returns `Validation::Success` with the validated fields if the payload
    /// is an object and every declared field passes its presence/type check,
    /// or `Validation::Failure` with all accumulated errors. Construction is
    /// all-or-nothing: an invalid payload yields no fields at all.
    pub fn validate(&self, value: &Value) -> Validation<Map<String, Value>, ValidationErrors> {
        let obj = match value.as_object() {
            Some(o) => o,
            None => {
                return Validation::Failure(ValidationErrors::single(
                    ValidationError::not_a_record(value_type_name(value)),
                ));
            }
        };

        let mut errors = Vec::new();
        let mut validated = Map::new();

        for (name, spec) in &self.fields {
            match obj.get(name) {
                Some(field_value) => {
                    if spec.field_type().matches(field_value) {
                        validated.insert(name.clone(), field_value.clone());
                    } else {
                        errors.push(ValidationError::wrong_type(
                            name,
                            spec.field_type().name(),
                            value_type_name(field_value),
                        ));
                    }
                }
                None if spec.is_required() => {
                    errors.push(ValidationError::missing(name));
                }
                None => {}
            }
        }

        if errors.is_empty() {
            Validation::Success(validated)
        } else {
            Validation::Failure(ValidationErrors::from_vec(errors))
        }
    }

    /// Produces the machine-readable description of this schema.
    ///
    /// The description contains a `properties` map (field name to type,
    /// required-ness, title, and description, in declaration order) and a
    /// top-level `example` key when an example payload is registered.
    pub fn describe(&self) -> Value {
        let mut properties = Map::new();
        for (name, spec) in &self.fields {
            let mut prop = Map::new();
            prop.insert("type".to_string(), json!(spec.field_type().name()));
            prop.insert("required".to_string(), json!(spec.is_required()));
            if let Some(title) = spec.title() {
                prop.insert("title".to_string(), json!(title));
            }
            if let Some(description) = spec.description() {
                prop.insert("description".to_string(), json!(description));
            }
            properties.insert(name.clone(), Value::Object(prop));
        }

        let mut description = Map::new();
        description.insert("type".to_string(), json!("object"));
        description.insert("properties".to_string(), Value::Object(properties));
        if let Some(example) = &self.example {
            description.insert("example".to_string(), example.clone());
        }
        Value::Object(description)
    }
}
