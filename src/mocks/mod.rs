//! Mock implementations for testing.
//!
//! Provides mock transport and authentication components so the upload path
//! can be tested in isolation, without a network.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::auth::AuthManager;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Mock HTTP transport for testing.
///
/// Tests enqueue responses and verify recorded requests. A cancelled token
/// fails the send with [`TransportError::Cancelled`] without consuming a
/// queued response, mirroring an aborted in-flight request.
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpTransport {
    /// Create a new mock HTTP transport.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Enqueue a response to be returned by the next request.
    pub fn enqueue_response(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Enqueue a JSON response with the given status code and body.
    pub fn enqueue_json_response(&self, status: u16, body: &str) {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        self.enqueue_response(Ok(HttpResponse {
            status,
            headers,
            body: Bytes::from(body.to_string()),
        }));
    }

    /// Enqueue an error response.
    pub fn enqueue_error(&self, error: TransportError) {
        self.enqueue_response(Err(error));
    }

    /// Get all requests that were made.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the last request that was made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Verify that exactly `expected` requests were made.
    pub fn verify_request_count(&self, expected: usize) {
        let actual = self.requests.lock().unwrap().len();
        assert_eq!(
            actual, expected,
            "Expected {expected} requests, got {actual}"
        );
    }

    /// Verify that a request was made with the expected method and URL.
    pub fn verify_request(&self, index: usize, method: HttpMethod, url_contains: &str) {
        let requests = self.requests.lock().unwrap();
        assert!(index < requests.len(), "No request at index {index}");

        let request = &requests[index];
        assert_eq!(
            request.method, method,
            "Expected method {:?}, got {:?}",
            method, request.method
        );
        assert!(
            request.url.contains(url_contains),
            "Expected URL to contain '{}', got '{}'",
            url_contains,
            request.url
        );
    }

    /// Verify that a request contains a specific header.
    pub fn verify_header(&self, index: usize, header_name: &str, header_value: &str) {
        let requests = self.requests.lock().unwrap();
        assert!(index < requests.len(), "No request at index {index}");

        let request = &requests[index];
        let actual_value = request.headers.get(header_name);
        assert_eq!(
            actual_value,
            Some(&header_value.to_string()),
            "Expected header '{header_name}' to be '{header_value}', got {actual_value:?}"
        );
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(
        &self,
        request: HttpRequest,
        cancel: CancellationToken,
    ) -> Result<HttpResponse, TransportError> {
        if cancel.is_cancelled() {
            return Err(TransportError::Cancelled);
        }

        self.requests.lock().unwrap().push(request);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Connection(
                    "No response configured in MockHttpTransport".into(),
                ))
            })
    }
}

/// Mock authentication manager for testing.
#[derive(Clone)]
pub struct MockAuthManager {
    api_key: String,
}

impl MockAuthManager {
    /// Create a new mock auth manager with the given API key.
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
        }
    }
}

impl AuthManager for MockAuthManager {
    fn auth_header(&self) -> (String, String) {
        ("x-goog-api-key".to_string(), self.api_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_returns_queued_response() {
        let transport = MockHttpTransport::new();
        transport.enqueue_json_response(200, r#"{"status":"ok"}"#);

        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "https://example.com".to_string(),
            headers: HashMap::new(),
            body: None,
        };

        let response = transport
            .send(request, CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        transport.verify_request_count(1);
        transport.verify_request(0, HttpMethod::Get, "example.com");
    }

    #[tokio::test]
    async fn test_mock_transport_without_response_errors() {
        let transport = MockHttpTransport::new();

        let request = HttpRequest {
            method: HttpMethod::Post,
            url: "https://example.com".to_string(),
            headers: HashMap::new(),
            body: None,
        };

        let result = transport.send(request, CancellationToken::new()).await;
        assert!(matches!(result, Err(TransportError::Connection(_))));
    }

    #[tokio::test]
    async fn test_mock_transport_honours_cancellation() {
        let transport = MockHttpTransport::new();
        transport.enqueue_json_response(200, "{}");

        let cancel = CancellationToken::new();
        cancel.cancel();

        let request = HttpRequest {
            method: HttpMethod::Post,
            url: "https://example.com".to_string(),
            headers: HashMap::new(),
            body: None,
        };

        let result = transport.send(request, cancel).await;
        assert!(matches!(result, Err(TransportError::Cancelled)));
        // The queued response is untouched and no request was recorded.
        transport.verify_request_count(0);
    }

    #[test]
    fn test_mock_auth_manager() {
        let auth = MockAuthManager::new("test-api-key");
        let (name, value) = auth.auth_header();
        assert_eq!(name, "x-goog-api-key");
        assert_eq!(value, "test-api-key");
    }
}
