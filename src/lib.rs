//! # Google AI File Upload Client
//!
//! Rust client for uploading files to the Google AI (Gemini) file storage
//! endpoint.
//!
//! ## Features
//!
//! - Single multipart upload operation: JSON metadata part + raw file part
//! - Transport abstraction with an injectable HTTP client for testing
//! - Cooperative cancellation via `tokio_util::sync::CancellationToken`
//! - Secure credential handling with `SecretString`
//! - Type-safe response model accepting `sizeBytes` as string or number
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_googleai_files::GoogleAIFileService;
//! use secrecy::SecretString;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = GoogleAIFileService::new(SecretString::new("your-api-key".into()))?;
//!
//!     let file = tokio::fs::File::open("notes.txt").await?;
//!     let uploaded = service
//!         .upload_file("notes.txt", "text/plain", file, CancellationToken::new())
//!         .await?;
//!
//!     println!("uploaded as {}", uploaded.name);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `config` - Configuration types and builder
//! - `auth` - API key management
//! - `transport` - HTTP transport layer
//! - `error` - Error types and taxonomy
//! - `types` - Wire types (`GoogleAIFile`)
//! - `services` - The file upload service and client

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod auth;
pub mod config;
pub mod error;
pub mod services;
pub mod transport;
pub mod types;

// Development/testing module - always available for integration tests
pub mod mocks;

// Re-exports for convenience
pub use auth::{ApiKeyAuthManager, AuthManager, API_KEY_HEADER};
pub use config::{
    ApiVersion, GoogleAIConfig, GoogleAIConfigBuilder, DEFAULT_BASE_URL,
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
pub use error::{FileServiceError, FileServiceResult};
pub use services::files::{FileUploadClient, GoogleAIFileService, GoogleAIFileServiceBuilder};
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError,
};
pub use types::GoogleAIFile;
