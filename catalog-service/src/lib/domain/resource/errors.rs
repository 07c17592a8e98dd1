use thiserror::Error;

use crate::domain::errors::ErrorKind;

/// Error for image resource retrieval and upload
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The uploaded payload is malformed; the message is meant for the client.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid resource name: {0}")]
    PathTraversal(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ResourceError {
    pub fn validation(message: impl ToString) -> Self {
        ResourceError::Validation(message.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ResourceError::NotFound(_) => ErrorKind::NotFound,
            ResourceError::Validation(_) | ResourceError::PathTraversal(_) => {
                ErrorKind::InvalidInput
            }
            ResourceError::Storage(_) => ErrorKind::Internal,
        }
    }
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ResourceError::NotFound(err.to_string()),
            _ => ResourceError::Storage(err.to_string()),
        }
    }
}
