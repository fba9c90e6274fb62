//! Validation error types.
//!
//! This module provides [`ValidationError`] for single validation failures and
//! [`ValidationErrors`] for accumulating multiple errors.

use std::fmt::{self, Display};

use stillwater::prelude::*;

/// The ways a field can fail the presence/type contract.
///
/// Record validation performs exactly two checks per field: the field must be
/// present, and its value must have the declared type. Each check has its own
/// variant so callers can distinguish the two programmatically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A required field was absent from the payload.
    #[error("required field is missing")]
    Missing,
    /// A value was present but had the wrong JSON type.
    #[error("expected {expected}, got {got}")]
    WrongType {
        /// The type the schema declares.
        expected: &'static str,
        /// The type the payload actually carried.
        got: &'static str,
    },
}

impl Violation {
    /// Machine-readable code for this violation kind.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::Missing => "required",
            Violation::WrongType { .. } => "invalid_type",
        }
    }
}

/// A single validation failure with full context.
///
/// `ValidationError` identifies the offending field and the nature of the
/// violation. Payload-level failures (the payload is not an object at all)
/// carry no field name.
///
/// # Example
///
/// ```rust
/// use mishap::ValidationError;
///
/// let error = ValidationError::missing("message");
///
/// assert_eq!(error.field.as_deref(), Some("message"));
/// assert_eq!(error.code(), "required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the field that failed, or `None` for payload-level failures.
    pub field: Option<String>,
    /// What went wrong.
    pub violation: Violation,
}

impl ValidationError {
    /// Creates an error for a required field absent from the payload.
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            violation: Violation::Missing,
        }
    }

    /// Creates an error for a field value of the wrong type.
    pub fn wrong_type(
        field: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Self {
            field: Some(field.into()),
            violation: Violation::WrongType { expected, got },
        }
    }

    /// Creates a payload-level error for input that is not a record at all.
    pub fn not_a_record(got: &'static str) -> Self {
        Self {
            field: None,
            violation: Violation::WrongType {
                expected: "object",
                got,
            },
        }
    }

    /// Machine-readable code for this error (`"required"` or `"invalid_type"`).
    pub fn code(&self) -> &'static str {
        self.violation.code()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.violation),
            None => write!(f, "(payload): {}", self.violation),
        }
    }
}

impl std::error::Error for ValidationError {}

// ValidationError is Send + Sync since all fields are owned types.
// Asserted so it stays true if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty collection of validation errors.
///
/// `ValidationErrors` wraps a `NonEmptyVec<ValidationError>` to guarantee that
/// at least one error is present. This is essential for use with
/// `Validation<T, ValidationErrors>` since a failure must have at least one
/// error.
///
/// # Combining Errors
///
/// `ValidationErrors` implements `Semigroup`, allowing errors from multiple
/// fields to be combined:
///
/// ```rust
/// use mishap::{ValidationError, ValidationErrors};
/// use stillwater::prelude::*;
///
/// let errors1 = ValidationErrors::single(ValidationError::missing("message"));
/// let errors2 = ValidationErrors::single(
///     ValidationError::wrong_type("severity", "string", "number"),
/// );
///
/// let combined = errors1.combine(errors2);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a `ValidationErrors` containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `ValidationErrors` from a `Vec<ValidationError>`.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("ValidationErrors requires at least one error"))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    ///
    /// This method exists for API consistency but always returns false.
    pub fn is_empty(&self) -> bool {
        false // NonEmptyVec is never empty
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Returns all errors for the named field.
    pub fn for_field(&self, field: &str) -> Vec<&ValidationError> {
        self.0
            .iter()
            .filter(|e| e.field.as_deref() == Some(field))
            .collect()
    }

    /// Returns all errors with the specified error code.
    pub fn with_code(&self, code: &str) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.code() == code).collect()
    }

    /// Converts this collection into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = Box<dyn Iterator<Item = &'a ValidationError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

// ValidationErrors is Send + Sync since ValidationError is Send + Sync.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationErrors>();
    assert_sync::<ValidationErrors>();
};
