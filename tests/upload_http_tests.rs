//! End-to-end upload tests against a local HTTP server.
//!
//! These exercise the full stack, including the reqwest transport, rather
//! than the mock transport used by the service-level tests.

use integrations_googleai_files::{FileServiceError, GoogleAIFileService};
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> GoogleAIFileService {
    GoogleAIFileService::builder()
        .api_key(SecretString::new("test-key".into()))
        .base_url(&server.uri())
        .unwrap()
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_upload_round_trip() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload/v1beta/files"))
        .and(query_param("uploadType", "multipart"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"name":"files/123","displayName":"file.txt","mimeType":"text/plain","sizeBytes":"4"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);

    // Act
    let file = service
        .upload_file(
            "file.txt",
            "text/plain",
            &b"test"[..],
            CancellationToken::new(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(file.name, "files/123");
    assert_eq!(file.display_name, Some("file.txt".to_string()));
    assert_eq!(file.size_bytes, 4);

    // The multipart body that actually hit the wire carries both parts.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"metadata\""));
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"file.txt\""));
    assert!(body.contains("test"));
}

#[tokio::test]
async fn test_upload_server_error_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(503).set_body_string(r#"{"error":{"message":"try later"}}"#),
        )
        .mount(&server)
        .await;

    let service = service_for(&server);

    let result = service
        .upload_file(
            "file.txt",
            "text/plain",
            &b"test"[..],
            CancellationToken::new(),
        )
        .await;

    match result {
        Err(FileServiceError::RequestFailed { status, detail }) => {
            assert_eq!(status, Some(503));
            assert!(detail.contains("try later"));
        }
        other => panic!("Expected RequestFailed, got {other:?}"),
    }
}
