//! File upload example for the Google AI file storage API.
//!
//! This example demonstrates uploading a local file and printing the
//! returned file reference.
//!
//! # Usage
//!
//! Set your API key as an environment variable:
//! ```bash
//! export GOOGLE_AI_API_KEY="your-api-key-here"
//! ```
//!
//! Then run:
//! ```bash
//! cargo run --example upload_file -- path/to/file.txt text/plain
//! ```

use integrations_googleai_files::GoogleAIFileService;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "README.md".to_string());
    let mime_type = args.next().unwrap_or_else(|| "text/plain".to_string());

    println!("=== Google AI File Upload Example ===\n");

    println!("1. Creating file service from environment...");
    let service = GoogleAIFileService::from_env()?;
    println!("   ✓ Service created successfully\n");

    println!("2. Uploading '{path}' as {mime_type}...");
    let file_name = std::path::Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(&path)
        .to_string();

    let content = tokio::fs::File::open(&path).await?;
    let file = service
        .upload_file(&file_name, &mime_type, content, CancellationToken::new())
        .await?;

    println!("   ✓ Uploaded successfully\n");
    println!("Name:         {}", file.name);
    println!("Display name: {}", file.display_name.as_deref().unwrap_or("-"));
    println!("MIME type:    {}", file.mime_type.as_deref().unwrap_or("-"));
    println!("Size:         {} bytes", file.size_bytes);

    Ok(())
}
