//! Directory entries
//!
//! An `Entry` is the handle a directory host yields while enumerating. The scanner never
//! creates entries itself: it forwards the host's handles, so anything it returns can still
//! be opened through `Entry::read`.

use async_trait::async_trait;

use crate::cancellable::Cancellable;
use crate::error::ScanResult;
use crate::iostream::InputStream;

/// Discriminates the two kinds of child a directory can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Container,
}

impl EntryKind {
    pub fn is_file(self) -> bool {
        self == EntryKind::File
    }
}

#[async_trait]
pub trait Entry: Send + Sync + std::fmt::Debug {
    /// The entry's name inside its parent, as the host reports it.
    fn name(&self) -> &str;

    /// Whether the entry is a file or a container.
    fn kind(&self) -> EntryKind;

    /// Gets the URI for this entry.
    fn uri(&self) -> String;

    /// Opens the entry for reading. Containers fail with `ErrorKind::IsDirectory`.
    async fn read(&self, cancellable: Option<&Cancellable>) -> ScanResult<Box<dyn InputStream>>;
}
