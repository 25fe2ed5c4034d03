//! # Service Error Taxonomy
//!
//! The three error kinds a caller of the lifecycle operations can see:
//!
//! - [`ServiceError::Validation`] - malformed or out-of-bound request,
//!   user-correctable, carries field-level detail
//! - [`ServiceError::NotFound`] - the referenced sale id does not exist
//! - [`ServiceError::Storage`] - persistence failure, propagated as-is
//!   (never retried, never swallowed)
//!
//! There are no partial-success states: an operation either completed or it
//! returned one of these.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use vendi_core::error::{CoreError, StoreError};
use vendi_core::validation::FieldError;

/// A rejected request with every broken rule listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn new(errors: Vec<FieldError>) -> Self {
        ValidationFailure { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// True if any error is attached to the given field.
    pub fn mentions_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{joined}")
    }
}

/// Errors returned by the sale lifecycle operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request failed validation; field-level detail attached.
    #[error("Validation failed: {0}")]
    Validation(ValidationFailure),

    /// The referenced sale does not exist (get / update / delete).
    #[error("Sale with ID {0} not found")]
    NotFound(i64),

    /// The storage collaborator failed (or the call was cancelled).
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl ServiceError {
    /// Builds a validation error for a single field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ServiceError::Validation(ValidationFailure::new(vec![FieldError {
            field: field.into(),
            message: message.into(),
        }]))
    }
}

/// Business-rule failures raised while pricing or building the aggregate are
/// user-correctable, so they surface as validation errors on `items`.
impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        ServiceError::invalid_field("items", err.to_string())
    }
}

/// Result type for lifecycle operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================
