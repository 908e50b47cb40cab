//! Upload client issuing the multipart request to the file storage endpoint.

use super::validation::validate_upload_args;
use crate::auth::AuthManager;
use crate::config::GoogleAIConfig;
use crate::error::{FileServiceError, FileServiceResult};
use crate::transport::{HttpMethod, HttpRequest, HttpTransport};
use crate::types::GoogleAIFile;
use bytes::Bytes;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_util::sync::CancellationToken;

/// Client performing the single multipart upload operation against the
/// file storage endpoint derived from the configured API version.
pub struct FileUploadClient {
    config: Arc<GoogleAIConfig>,
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
}

impl FileUploadClient {
    /// Create a new upload client.
    pub fn new(
        config: Arc<GoogleAIConfig>,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> Self {
        Self {
            config,
            transport,
            auth_manager,
        }
    }

    /// Build the upload URL.
    fn build_upload_url(&self) -> String {
        format!(
            "{}/upload/{}/files?uploadType=multipart",
            self.config.base_url.as_str().trim_end_matches('/'),
            self.config.api_version.path_segment()
        )
    }

    /// Build headers for the multipart upload.
    fn build_multipart_headers(&self, boundary: &str) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            format!("multipart/form-data; boundary={boundary}"),
        );

        let (name, value) = self.auth_manager.auth_header();
        headers.insert(name, value);

        headers
    }

    /// Assemble the two-part multipart body: a JSON `metadata` part followed
    /// by the raw `file` part.
    fn build_multipart_body(
        &self,
        file_name: &str,
        mime_type: &str,
        file_data: &[u8],
        boundary: &str,
    ) -> Vec<u8> {
        let metadata = json!({
            "file": {
                "displayName": file_name,
                "mimeType": mime_type,
            }
        });

        let mut body = Vec::with_capacity(file_data.len() + 512);

        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"metadata\"\r\n");
        body.extend_from_slice(b"Content-Type: application/json; charset=UTF-8\r\n\r\n");
        body.extend_from_slice(metadata.to_string().as_bytes());
        body.extend_from_slice(b"\r\n");

        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {mime_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(file_data);
        body.extend_from_slice(b"\r\n");

        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

        body
    }

    /// Upload a file to the file storage endpoint.
    ///
    /// Reads `content` to completion, issues exactly one POST request with a
    /// two-part multipart body, and deserializes the JSON response into a
    /// [`GoogleAIFile`]. The cancellation token aborts both the content read
    /// and the in-flight request.
    pub async fn upload_file<C>(
        &self,
        file_name: &str,
        mime_type: &str,
        mut content: C,
        cancel: CancellationToken,
    ) -> FileServiceResult<GoogleAIFile>
    where
        C: AsyncRead + Send + Unpin,
    {
        validate_upload_args(file_name, mime_type)?;

        let mut file_data = Vec::new();
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(FileServiceError::Cancelled),
            read = content.read_to_end(&mut file_data) => {
                read.map_err(|e| FileServiceError::RequestFailed {
                    status: None,
                    detail: format!("failed to read content stream: {e}"),
                })?;
            }
        }

        let boundary = format!("----googleai_boundary_{}", uuid::Uuid::new_v4());
        let url = self.build_upload_url();
        let headers = self.build_multipart_headers(&boundary);
        let body = self.build_multipart_body(file_name, mime_type, &file_data, &boundary);

        tracing::debug!(
            file_name,
            mime_type,
            size = file_data.len(),
            url = %url,
            "uploading file"
        );

        let request = HttpRequest {
            method: HttpMethod::Post,
            url,
            headers,
            body: Some(Bytes::from(body)),
        };

        let response = self.transport.send(request, cancel).await?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "file upload rejected");
            return Err(FileServiceError::RequestFailed {
                status: Some(response.status),
                detail: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let file: GoogleAIFile = serde_json::from_slice(&response.body)?;
        if file.name.is_empty() {
            return Err(FileServiceError::DeserializationFailed {
                message: "response is missing the file name".to_string(),
            });
        }

        tracing::debug!(name = %file.name, size_bytes = file.size_bytes, "file uploaded");
        Ok(file)
    }
}
