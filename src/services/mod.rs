//! Service implementations.

pub mod files;

pub use files::{FileUploadClient, GoogleAIFileService};
