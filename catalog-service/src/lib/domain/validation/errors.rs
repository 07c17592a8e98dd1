use thiserror::Error;

use crate::domain::errors::ErrorKind;
use crate::domain::registry::RegistryError;
use crate::domain::validation::models::ValidationFieldKind;

/// Error for field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The value breaks a rule; the message is meant for the end user.
    #[error("{0}")]
    Rejected(String),

    #[error("Expected {expected} value for {field}, got {actual}")]
    UnexpectedValueType {
        field: ValidationFieldKind,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Validation strategy unavailable: {0}")]
    Registry(#[from] RegistryError),
}

impl ValidationError {
    pub fn rejected(message: impl ToString) -> Self {
        ValidationError::Rejected(message.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Rejected(_) | ValidationError::UnexpectedValueType { .. } => {
                ErrorKind::InvalidInput
            }
            ValidationError::Registry(e) => e.kind(),
        }
    }
}
