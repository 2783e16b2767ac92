//! Directory abstraction trait
//!
//! The `Directory` trait is the host capability the scanner consumes: something that can
//! list its direct children one at a time. `local` backs it with the filesystem through
//! Tokio, `memory` with a fixed list of children for tests and embedding.

pub mod local;
pub mod memory;

use async_trait::async_trait;

use crate::cancellable::Cancellable;
use crate::directory_enumerator::DirectoryEnumerator;
use crate::error::ScanResult;

#[async_trait]
pub trait Directory: Send + Sync + std::fmt::Debug {
    /// Gets the URI for this directory.
    fn uri(&self) -> String;

    /// Starts enumerating the direct children of this directory.
    async fn enumerate_children(
        &self,
        cancellable: Option<&Cancellable>,
    ) -> ScanResult<Box<dyn DirectoryEnumerator>>;
}
