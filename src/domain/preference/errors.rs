//! Preference-specific error types.
//!
//! A resource that does not exist is never an error here: validation
//! reports it as `Ok(false)`. Errors are reserved for input that cannot be
//! processed and for collaborators that fail.

use thiserror::Error;

use super::{ContextualPreferenceLevel, PreferenceResource};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Preference-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// A lookup or storage collaborator failed or timed out.
    #[error("Dependency unavailable: {0}")]
    DependencyUnavailable(String),

    /// No stored preference with this name for the resource.
    #[error("Preference '{name}' not found for {resource}")]
    NotFound {
        name: String,
        resource: PreferenceResource,
    },

    /// The referenced resource does not exist or no handler owns its level.
    #[error("Preference '{name}' references an unknown resource {resource}")]
    InvalidResource {
        name: String,
        resource: PreferenceResource,
    },

    /// Field validation failed.
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    /// Two handlers were registered for the same level.
    #[error("Handler for level {0} registered more than once")]
    DuplicateLevel(ContextualPreferenceLevel),

    /// Storage returned data that could not be decoded.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl PreferenceError {
    pub fn dependency_unavailable(message: impl Into<String>) -> Self {
        PreferenceError::DependencyUnavailable(message.into())
    }

    pub fn not_found(name: impl Into<String>, resource: PreferenceResource) -> Self {
        PreferenceError::NotFound {
            name: name.into(),
            resource,
        }
    }

    pub fn invalid_resource(name: impl Into<String>, resource: PreferenceResource) -> Self {
        PreferenceError::InvalidResource {
            name: name.into(),
            resource,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PreferenceError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PreferenceError::DependencyUnavailable(_) => ErrorCode::DatabaseError,
            PreferenceError::NotFound { .. } => ErrorCode::PreferenceNotFound,
            PreferenceError::InvalidResource { .. } => ErrorCode::ValidationFailed,
            PreferenceError::Validation { .. } => ErrorCode::ValidationFailed,
            PreferenceError::DuplicateLevel(_) => ErrorCode::InternalError,
            PreferenceError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ValidationError> for PreferenceError {
    fn from(err: ValidationError) -> Self {
        PreferenceError::Validation {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for PreferenceError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DatabaseError | ErrorCode::Timeout => {
                PreferenceError::DependencyUnavailable(err.to_string())
            }
            ErrorCode::ValidationFailed => PreferenceError::Validation {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => PreferenceError::Infrastructure(err.to_string()),
        }
    }
}
