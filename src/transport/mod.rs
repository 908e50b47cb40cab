//! HTTP transport layer for the file upload client.

mod error;
mod http;
mod reqwest;

pub use error::TransportError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use reqwest::ReqwestTransport;
