use thiserror::Error;

/// Failure of a single call against one of the managed-service APIs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("{0}")]
    Service(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, ApiError::AlreadyExists(_))
    }
}
