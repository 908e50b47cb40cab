//! Error types for the file upload client.

use crate::transport::TransportError;
use thiserror::Error;

/// Result type alias for file service operations.
pub type FileServiceResult<T> = Result<T, FileServiceError>;

/// Top-level error type for the file upload integration.
#[derive(Error, Debug)]
pub enum FileServiceError {
    /// A caller-supplied parameter violated a precondition. Raised before
    /// any I/O is performed.
    #[error("Invalid argument: {parameter} - {message}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: String,
        /// What was wrong with it.
        message: String,
    },

    /// The transport failed or the service answered with a non-success
    /// status. `status` is `None` for connection-level failures.
    #[error("Request failed{}: {detail}", status.map(|s| format!(" with status {s}")).unwrap_or_default())]
    RequestFailed {
        /// HTTP status code, when a response was received.
        status: Option<u16>,
        /// Opaque failure detail (error body or transport message).
        detail: String,
    },

    /// The response had a success status but its body did not match the
    /// expected JSON shape.
    #[error("Failed to deserialize response: {message}")]
    DeserializationFailed {
        /// What the codec rejected.
        message: String,
    },

    /// The caller cancelled the operation while it was in flight.
    #[error("Operation cancelled")]
    Cancelled,
}

impl FileServiceError {
    /// Build an [`FileServiceError::InvalidArgument`] for the given parameter.
    pub fn invalid_argument(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        FileServiceError::InvalidArgument {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Returns the HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FileServiceError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<TransportError> for FileServiceError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Cancelled => FileServiceError::Cancelled,
            other => FileServiceError::RequestFailed {
                status: None,
                detail: other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for FileServiceError {
    fn from(err: serde_json::Error) -> Self {
        FileServiceError::DeserializationFailed {
            message: err.to_string(),
        }
    }
}
