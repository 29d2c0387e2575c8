//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid field values at construction or on update
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violated at call time; nothing was mutated
    #[error("Operation rejected: {0}")]
    Rejected(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>, I: std::fmt::Display>(entity_type: T, id: I) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation<M: Into<String>>(message: M) -> Self {
        Self::Validation(message.into())
    }

    pub fn rejected<M: Into<String>>(message: M) -> Self {
        Self::Rejected(message.into())
    }

    /// Whether this error came from construction-time validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this error is a business-rule rejection
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
