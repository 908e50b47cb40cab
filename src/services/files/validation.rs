//! Validation functions for file upload operations.

use crate::error::{FileServiceError, FileServiceResult};
use secrecy::{ExposeSecret, SecretString};

/// Validate the caller-supplied upload arguments.
///
/// Both the file name and the MIME type must be non-empty and contain at
/// least one non-whitespace character. Runs before any I/O.
pub fn validate_upload_args(file_name: &str, mime_type: &str) -> FileServiceResult<()> {
    if file_name.trim().is_empty() {
        return Err(FileServiceError::invalid_argument(
            "file_name",
            "file name must not be empty or whitespace",
        ));
    }

    if mime_type.trim().is_empty() {
        return Err(FileServiceError::invalid_argument(
            "mime_type",
            "MIME type must not be empty or whitespace",
        ));
    }

    Ok(())
}

/// Validate that the API key is non-empty and non-whitespace.
pub fn validate_api_key(api_key: &SecretString) -> FileServiceResult<()> {
    if api_key.expose_secret().trim().is_empty() {
        return Err(FileServiceError::invalid_argument(
            "api_key",
            "API key must not be empty or whitespace",
        ));
    }

    Ok(())
}
