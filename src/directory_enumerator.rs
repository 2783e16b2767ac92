use async_trait::async_trait;

use crate::cancellable::Cancellable;
use crate::entry::Entry;
use crate::error::ScanResult;

/// Single-pass, forward-only sequence of a directory's direct children.
#[async_trait]
pub trait DirectoryEnumerator: Send + Sync {
    /// Returns the next child in host order.
    /// Returns Ok(None) when iteration is complete.
    async fn next_entry(
        &mut self,
        cancellable: Option<&Cancellable>,
    ) -> ScanResult<Option<Box<dyn Entry>>>;

    /// Closes the enumerator.
    async fn close(&mut self, cancellable: Option<&Cancellable>) -> ScanResult<()>;
}
