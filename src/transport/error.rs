//! Transport layer error types.

/// Transport error.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to establish a connection or the connection dropped.
    #[error("Connection error: {0}")]
    Connection(String),
    /// The request or connect timeout elapsed.
    #[error("Timeout")]
    Timeout,
    /// The request was aborted by the caller's cancellation signal.
    #[error("Cancelled")]
    Cancelled,
    /// The request could not be built or its response could not be read.
    #[error("Request error: {0}")]
    Request(String),
}
