//! Declarative record schemas.
//!
//! This module provides the types that describe a record: per-field metadata
//! ([`FieldSpec`]) and the record-level schema ([`RecordSchema`]) that
//! validates payloads and describes itself to external tooling.
//!
//! # Example
//!
//! ```rust
//! use mishap::{FieldSpec, FieldType, RecordSchema};
//! use serde_json::json;
//!
//! let schema = RecordSchema::new()
//!     .field("message", FieldSpec::required(FieldType::String))
//!     .example(json!({"message": "Error message"}));
//!
//! let result = schema.validate(&json!({"message": "boom"}));
//! assert!(result.is_success());
//! ```

mod field;
mod record;

pub use field::{FieldSpec, FieldType};
pub use record::RecordSchema;
