// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Failure reported by a remote service, message kept verbatim.
    #[error("{0}")]
    Backend(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Resource not found")]
    NotFound,

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Text surfaced to the UI for this failure.
    ///
    /// Returns `None` when the backend gave no usable message, so the caller
    /// can substitute its own default.
    pub fn failure_message(&self) -> Option<String> {
        match self {
            AppError::Backend(message) if message.trim().is_empty() => None,
            AppError::Backend(message) => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_verbatim() {
        let error = AppError::Backend("disk full".to_string());
        assert_eq!(error.to_string(), "disk full");
        assert_eq!(error.failure_message().as_deref(), Some("disk full"));
    }

    #[test]
    fn test_blank_backend_message_has_no_failure_message() {
        assert!(AppError::Backend("  ".to_string()).failure_message().is_none());
    }

    #[test]
    fn test_other_errors_use_display() {
        let error = AppError::Config("missing api key".to_string());
        assert_eq!(
            error.failure_message().as_deref(),
            Some("Configuration error: missing api key")
        );
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&AppError::NotFound).unwrap();
        assert_eq!(json, "\"Resource not found\"");
    }
}
