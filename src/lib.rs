//! # Mishap
//!
//! Validated error-record models with declarative schemas and example
//! payloads.
//!
//! ## Overview
//!
//! Mishap represents structured error messages as typed, immutable records.
//! Each record type declares its shape once — fields, types, required-ness,
//! documentation metadata, and a canonical example payload — and that single
//! declaration drives both runtime validation of untyped payloads and the
//! machine-readable schema description consumed by documentation tooling.
//! Validation accumulates every violation rather than short-circuiting on
//! the first, using stillwater's `Validation` type.
//!
//! ## Core Types
//!
//! - [`ErrorRecord`]: a validated record carrying a required error message
//! - [`Model`]: the contract between a record type and its schema
//! - [`RecordSchema`]: a declarative schema with validation and description
//! - [`ValidationError`]/[`ValidationErrors`]: structured validation failures
//!
//! ## Example
//!
//! ```rust
//! use mishap::{ErrorRecord, Model};
//! use serde_json::json;
//!
//! // Untyped payloads are validated before a record exists
//! let result = ErrorRecord::from_value(&json!({"message": "parse failed"}));
//! assert!(result.is_success());
//!
//! // A missing or non-string message yields no record at all
//! let result = ErrorRecord::from_value(&json!({"message": 42}));
//! assert!(result.is_failure());
//!
//! // The schema describes itself to documentation tooling
//! let description = ErrorRecord::describe_schema();
//! assert_eq!(description["example"], json!({"message": "Error message"}));
//! ```

pub mod error;
pub mod model;
pub mod schema;

pub use error::{ValidationError, ValidationErrors, Violation};
pub use model::{ErrorRecord, Model};
pub use schema::{FieldSpec, FieldType, RecordSchema};

/// Type alias for validation results using ValidationErrors
pub type ValidationResult<T> = stillwater::Validation<T, ValidationErrors>;
