//! File upload service for the Google AI file storage API.

mod client;
mod service;
mod validation;

pub use client::FileUploadClient;
pub use service::{GoogleAIFileService, GoogleAIFileServiceBuilder};
pub use validation::{validate_api_key, validate_upload_args};
