//! Public entry point owning client configuration.

use super::client::FileUploadClient;
use crate::auth::ApiKeyAuthManager;
use crate::config::{ApiVersion, GoogleAIConfig, GoogleAIConfigBuilder};
use crate::error::FileServiceResult;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::GoogleAIFile;
use once_cell::sync::OnceCell;
use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncRead;
use tokio_util::sync::CancellationToken;

/// Process-wide transport shared by services that do not inject their own.
/// Built with the first caller's timeouts.
static SHARED_TRANSPORT: OnceCell<Arc<ReqwestTransport>> = OnceCell::new();

fn shared_transport(config: &GoogleAIConfig) -> FileServiceResult<Arc<dyn HttpTransport>> {
    let transport = SHARED_TRANSPORT.get_or_try_init(|| {
        ReqwestTransport::new(config.timeout, config.connect_timeout).map(Arc::new)
    })?;
    Ok(Arc::clone(transport) as Arc<dyn HttpTransport>)
}

/// Service for uploading files to the Google AI file storage endpoint.
///
/// Wraps a [`FileUploadClient`] with configuration: API key, API version,
/// and an optionally injected transport.
///
/// # Example
///
/// ```no_run
/// use integrations_googleai_files::GoogleAIFileService;
/// use secrecy::SecretString;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = GoogleAIFileService::new(SecretString::new("your-api-key".into()))?;
///
/// let file = service
///     .upload_file(
///         "notes.txt",
///         "text/plain",
///         &b"hello"[..],
///         CancellationToken::new(),
///     )
///     .await?;
/// println!("uploaded as {}", file.name);
/// # Ok(())
/// # }
/// ```
pub struct GoogleAIFileService {
    client: FileUploadClient,
}

impl GoogleAIFileService {
    /// Create a service with default configuration.
    ///
    /// Fails with [`crate::FileServiceError::InvalidArgument`] if the API
    /// key is empty or whitespace.
    pub fn new(api_key: SecretString) -> FileServiceResult<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a service builder.
    pub fn builder() -> GoogleAIFileServiceBuilder {
        GoogleAIFileServiceBuilder::new()
    }

    /// Create a service from environment variables (see
    /// [`GoogleAIConfig::from_env`]).
    pub fn from_env() -> FileServiceResult<Self> {
        Self::from_config(GoogleAIConfig::from_env()?)
    }

    /// Create a service from an existing configuration.
    pub fn from_config(config: GoogleAIConfig) -> FileServiceResult<Self> {
        Self::from_parts(config, None)
    }

    fn from_parts(
        config: GoogleAIConfig,
        transport: Option<Arc<dyn HttpTransport>>,
    ) -> FileServiceResult<Self> {
        let transport = match transport {
            Some(transport) => transport,
            None => shared_transport(&config)?,
        };
        let auth_manager = Arc::new(ApiKeyAuthManager::new(config.api_key.clone()));
        let client = FileUploadClient::new(Arc::new(config), transport, auth_manager);
        Ok(Self { client })
    }

    /// Upload a file. Pure delegation to [`FileUploadClient::upload_file`];
    /// the same preconditions and error conditions apply.
    pub async fn upload_file<C>(
        &self,
        file_name: &str,
        mime_type: &str,
        content: C,
        cancel: CancellationToken,
    ) -> FileServiceResult<GoogleAIFile>
    where
        C: AsyncRead + Send + Unpin,
    {
        self.client
            .upload_file(file_name, mime_type, content, cancel)
            .await
    }
}

/// Builder for [`GoogleAIFileService`].
pub struct GoogleAIFileServiceBuilder {
    config: GoogleAIConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl GoogleAIFileServiceBuilder {
    fn new() -> Self {
        Self {
            config: GoogleAIConfig::builder(),
            transport: None,
        }
    }

    /// Set the API key (required).
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.config = self.config.api_key(api_key);
        self
    }

    /// Set the API version.
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.config = self.config.api_version(version);
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: &str) -> FileServiceResult<Self> {
        self.config = self.config.base_url(base_url)?;
        Ok(self)
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.connect_timeout(timeout);
        self
    }

    /// Inject a transport, overriding the shared default client.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the service.
    pub fn build(self) -> FileServiceResult<GoogleAIFileService> {
        let config = self.config.build()?;
        GoogleAIFileService::from_parts(config, self.transport)
    }
}

impl Default for GoogleAIFileServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
