//! Wire types for the file upload client.

mod files;

pub use files::GoogleAIFile;
