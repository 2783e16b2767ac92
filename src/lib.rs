//! # mediascan
//!
//! Lists the image and video files sitting directly inside a directory.
//!
//! ## Overview
//!
//! A scan asks a directory host for its children one at a time and keeps the entries that
//! are files with a media extension (`jpg`, `jpeg`, `png`, `gif`, `webp`, `mp4`, `mov`,
//! `webm`, `mkv` by default, compared case-insensitively). Results come back in the order
//! the host produced them, as the host's own entry handles, so they can be opened later.
//! Sub-directories are skipped, never descended into.
//!
//! ## Core Concepts
//!
//! - **Directory**: host capability that enumerates its direct children asynchronously
//! - **Entry**: a child handle with a name and a kind (file or container)
//! - **MediaScanner**: the extension filter over a directory enumeration
//! - **Backend**: pluggable resolvers from URIs to directories (file://, etc.)
//!
//! ## Example
//!
//! ```no_run
//! use mediascan::{get_directory_for_uri, register_backend, scan_directory};
//! use mediascan::backend::local::LocalBackend;
//! use std::sync::Arc;
//!
//! # async fn example() -> mediascan::ScanResult<()> {
//! register_backend(Arc::new(LocalBackend::new()));
//!
//! let dir = get_directory_for_uri("file:///home/user/Pictures")?;
//! for entry in scan_directory(&*dir).await? {
//!     println!("{}", entry.name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A runnable version lives in `demos/list_media.rs` (registered as the `list_media`
//! Cargo example): `cargo run --example list_media -- ~/Pictures`.

pub mod allow_list;
pub mod backend;
pub mod cancellable;
pub mod config;
pub mod directory;
pub mod directory_enumerator;
pub mod entry;
pub mod error;
pub mod iostream;
pub mod metadata;
pub mod scanner;

pub use allow_list::{default_allow_list, extension_of, ExtensionAllowList, DEFAULT_MEDIA_EXTENSIONS};
pub use backend::{get_directory_for_uri, register_backend, Backend, BackendRegistry};
pub use cancellable::Cancellable;
pub use config::ScanConfig;
pub use directory::local::{LocalDirectory, LocalEntry};
pub use directory::memory::{MemoryDirectory, MemoryEntry};
pub use directory::Directory;
pub use directory_enumerator::DirectoryEnumerator;
pub use entry::{Entry, EntryKind};
pub use error::{ErrorKind, ScanError, ScanResult};
pub use iostream::InputStream;
pub use metadata::{MediaKind, MimeResolver};
pub use scanner::{scan_directory, MediaScanner};
