//! Error types for validation failures.
//!
//! This module provides [`ValidationError`] for single failures and
//! [`ValidationErrors`] for accumulating multiple failures.

mod validation_error;

pub use validation_error::{ValidationError, ValidationErrors, Violation};
