//! Validated record models.
//!
//! This module provides the [`Model`] trait — the contract between a record
//! type and its declarative schema — and the concrete record types built on
//! it.

mod error_record;
mod traits;

pub use error_record::ErrorRecord;
pub use traits::Model;
