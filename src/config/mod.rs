//! Configuration types for the Google AI file upload client.

use crate::error::{FileServiceError, FileServiceResult};
use secrecy::SecretString;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Default Google AI API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default request timeout (120 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default connect timeout (30 seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Version of the Google AI API.
///
/// Each version maps to a fixed URL path segment. Adding a new version is a
/// single new variant plus its segment in [`ApiVersion::path_segment`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiVersion {
    /// The v1beta API surface (default for the upload endpoint).
    #[default]
    V1Beta,
    /// The stable v1 API surface.
    V1,
}

impl ApiVersion {
    /// The URL path segment for this version.
    pub fn path_segment(self) -> &'static str {
        match self {
            ApiVersion::V1Beta => "v1beta",
            ApiVersion::V1 => "v1",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for ApiVersion {
    type Err = FileServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1beta" => Ok(ApiVersion::V1Beta),
            "v1" => Ok(ApiVersion::V1),
            other => Err(FileServiceError::invalid_argument(
                "api_version",
                format!("unknown API version '{other}'"),
            )),
        }
    }
}

/// Configuration for the file upload client.
#[derive(Clone)]
pub struct GoogleAIConfig {
    /// API key (required).
    pub api_key: SecretString,
    /// Base URL for the API.
    pub base_url: Url,
    /// API version selecting the endpoint path segment.
    pub api_version: ApiVersion,
    /// Request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
}

impl GoogleAIConfig {
    /// Create a new configuration builder.
    pub fn builder() -> GoogleAIConfigBuilder {
        GoogleAIConfigBuilder::default()
    }

    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `GOOGLE_AI_API_KEY` or `GOOGLE_API_KEY` (required)
    /// - `GOOGLE_AI_BASE_URL` (optional)
    /// - `GOOGLE_AI_API_VERSION` (optional)
    /// - `GOOGLE_AI_TIMEOUT_SECS` (optional)
    pub fn from_env() -> FileServiceResult<Self> {
        let api_key = std::env::var("GOOGLE_AI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| {
                FileServiceError::invalid_argument("api_key", "missing API key in environment")
            })?;

        let base_url =
            std::env::var("GOOGLE_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let api_version = match std::env::var("GOOGLE_AI_API_VERSION") {
            Ok(v) => v.parse()?,
            Err(_) => ApiVersion::default(),
        };

        let timeout_secs: u64 = std::env::var("GOOGLE_AI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::builder()
            .api_key(SecretString::new(api_key))
            .base_url(&base_url)?
            .api_version(api_version)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
    }
}

/// Builder for [`GoogleAIConfig`].
#[derive(Default)]
pub struct GoogleAIConfigBuilder {
    api_key: Option<SecretString>,
    base_url: Option<Url>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl GoogleAIConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: &str) -> FileServiceResult<Self> {
        let url = Url::parse(base_url).map_err(|e| {
            FileServiceError::invalid_argument("base_url", format!("invalid base URL: {e}"))
        })?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Set the API version.
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    ///
    /// Fails with [`FileServiceError::InvalidArgument`] if the API key is
    /// missing or blank.
    pub fn build(self) -> FileServiceResult<GoogleAIConfig> {
        let api_key = self
            .api_key
            .ok_or_else(|| FileServiceError::invalid_argument("api_key", "missing API key"))?;
        crate::services::files::validate_api_key(&api_key)?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| {
                FileServiceError::invalid_argument("base_url", format!("invalid base URL: {e}"))
            })?,
        };

        Ok(GoogleAIConfig {
            api_key,
            base_url,
            api_version: self.api_version.unwrap_or_default(),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            connect_timeout: self
                .connect_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GoogleAIConfig::builder()
            .api_key(SecretString::new("test-key".into()))
            .build()
            .unwrap();

        assert_eq!(
            config.base_url.as_str(),
            "https://generativelanguage.googleapis.com/"
        );
        assert_eq!(config.api_version, ApiVersion::V1Beta);
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_custom_config() {
        let config = GoogleAIConfig::builder()
            .api_key(SecretString::new("test-key".into()))
            .api_version(ApiVersion::V1)
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap();

        assert_eq!(config.api_version, ApiVersion::V1);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_missing_api_key() {
        let result = GoogleAIConfig::builder().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let result = GoogleAIConfig::builder()
            .api_key(SecretString::new("   ".into()))
            .build();
        assert!(matches!(
            result,
            Err(FileServiceError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_api_version_segments() {
        assert_eq!(ApiVersion::V1Beta.path_segment(), "v1beta");
        assert_eq!(ApiVersion::V1.path_segment(), "v1");
    }

    #[test]
    fn test_api_version_from_str() {
        assert_eq!("v1beta".parse::<ApiVersion>().unwrap(), ApiVersion::V1Beta);
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert!("v2".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = GoogleAIConfig::builder()
            .api_key(SecretString::new("test-key".into()))
            .base_url("not a url");
        assert!(result.is_err());
    }
}
