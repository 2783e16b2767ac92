//! Example: List the media files in a directory
//!
//! Usage: `cargo run --example list_media -- [DIR]` (defaults to $HOME).
//! Set `RUST_LOG=mediascan=trace` to see every skipped entry.

use std::sync::Arc;

use mediascan::backend::local::LocalBackend;
use mediascan::{get_directory_for_uri, register_backend, MediaKind, MediaScanner, MimeResolver};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Register local filesystem backend
    register_backend(Arc::new(LocalBackend::new()));

    let dir_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()),
    };

    let dir = get_directory_for_uri(&dir_path)?;
    let scanner = MediaScanner::new();
    let entries = scanner.scan(&*dir, None).await?;

    println!("Media in {}:", dir_path);
    for entry in &entries {
        let tag = match MimeResolver::media_kind_of(&**entry) {
            MediaKind::Image => "IMG",
            MediaKind::Video => "VID",
            MediaKind::Other => "???",
        };
        println!("  [{}] {} ({})", tag, entry.name(), MimeResolver::guess_mime_type(entry.name()));
    }
    println!("{} file(s)", entries.len());

    Ok(())
}
