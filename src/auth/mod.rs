//! Authentication for the Google AI file upload endpoint.
//!
//! The upload endpoint authenticates with the `x-goog-api-key` request
//! header; the header value is held as a [`SecretString`] until the request
//! is built.

use secrecy::{ExposeSecret, SecretString};

/// Name of the API key request header.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Supplies the authentication header for outgoing requests.
pub trait AuthManager: Send + Sync {
    /// Get the authentication header name and value.
    fn auth_header(&self) -> (String, String);
}

/// API key authentication manager.
pub struct ApiKeyAuthManager {
    api_key: SecretString,
}

impl ApiKeyAuthManager {
    /// Create a new API key auth manager.
    pub fn new(api_key: SecretString) -> Self {
        Self { api_key }
    }
}

impl AuthManager for ApiKeyAuthManager {
    fn auth_header(&self) -> (String, String) {
        (
            API_KEY_HEADER.to_string(),
            self.api_key.expose_secret().to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_auth() {
        let manager = ApiKeyAuthManager::new(SecretString::new("test-key".into()));

        let (name, value) = manager.auth_header();
        assert_eq!(name, "x-goog-api-key");
        assert_eq!(value, "test-key");
    }
}
