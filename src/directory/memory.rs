use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;

use crate::cancellable::{self, Cancellable};
use crate::directory::Directory;
use crate::directory_enumerator::DirectoryEnumerator;
use crate::entry::{Entry, EntryKind};
use crate::error::{ErrorKind, ScanError, ScanResult};
use crate::iostream::InputStream;

/// A directory whose children are fixed up front.
///
/// Children are yielded in insertion order. `fail_at` makes the enumerator break
/// when it reaches a given position, like a host losing its storage mid-listing.
#[derive(Debug, Clone)]
pub struct MemoryDirectory {
    uri: String,
    children: Vec<MemoryEntry>,
    failure: Option<InjectedFailure>,
}

#[derive(Debug, Clone)]
struct InjectedFailure {
    index: usize,
    kind: ErrorKind,
    message: String,
}

impl MemoryDirectory {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            children: Vec::new(),
            failure: None,
        }
    }

    pub fn with_file(mut self, name: &str, contents: &[u8]) -> Self {
        let uri = self.child_uri(name);
        self.children.push(MemoryEntry {
            name: name.to_string(),
            uri,
            kind: EntryKind::File,
            contents: Arc::from(contents),
        });
        self
    }

    /// Adds a child container. Its own contents are never visible through this directory.
    pub fn with_container(mut self, name: &str) -> Self {
        let uri = self.child_uri(name);
        self.children.push(MemoryEntry {
            name: name.to_string(),
            uri,
            kind: EntryKind::Container,
            contents: Arc::from(&b""[..]),
        });
        self
    }

    /// Makes enumeration fail instead of yielding the child at `index`.
    pub fn fail_at(mut self, index: usize, kind: ErrorKind, message: impl Into<String>) -> Self {
        self.failure = Some(InjectedFailure {
            index,
            kind,
            message: message.into(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn child_uri(&self, name: &str) -> String {
        format!("{}/{}", self.uri.trim_end_matches('/'), name)
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    fn uri(&self) -> String {
        self.uri.clone()
    }

    async fn enumerate_children(
        &self,
        cancellable: Option<&Cancellable>,
    ) -> ScanResult<Box<dyn DirectoryEnumerator>> {
        cancellable::check(cancellable)?;
        Ok(Box::new(MemoryDirectoryEnumerator {
            children: self.children.clone().into_iter(),
            position: 0,
            failure: self.failure.clone(),
            closed: false,
        }))
    }
}

/// A child of a `MemoryDirectory`. Clones share the same contents.
#[derive(Debug, Clone)]
pub struct MemoryEntry {
    name: String,
    uri: String,
    kind: EntryKind,
    contents: Arc<[u8]>,
}

#[async_trait]
impl Entry for MemoryEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> EntryKind {
        self.kind
    }

    fn uri(&self) -> String {
        self.uri.clone()
    }

    async fn read(&self, cancellable: Option<&Cancellable>) -> ScanResult<Box<dyn InputStream>> {
        cancellable::check(cancellable)?;
        if self.kind == EntryKind::Container {
            return Err(ScanError::new(
                ErrorKind::IsDirectory,
                format!("{} is a container", self.uri),
            ));
        }
        Ok(Box::new(Cursor::new(self.contents.clone())))
    }
}

struct MemoryDirectoryEnumerator {
    children: std::vec::IntoIter<MemoryEntry>,
    position: usize,
    failure: Option<InjectedFailure>,
    closed: bool,
}

#[async_trait]
impl DirectoryEnumerator for MemoryDirectoryEnumerator {
    async fn next_entry(
        &mut self,
        cancellable: Option<&Cancellable>,
    ) -> ScanResult<Option<Box<dyn Entry>>> {
        cancellable::check(cancellable)?;
        if self.closed {
            return Err(ScanError::new(ErrorKind::Closed, "Enumerator is closed"));
        }

        // Hand control back to the runtime between children, as a real host would.
        tokio::task::yield_now().await;

        if let Some(failure) = &self.failure {
            if failure.index == self.position {
                return Err(ScanError::new(failure.kind, failure.message.clone()));
            }
        }

        match self.children.next() {
            Some(child) => {
                self.position += 1;
                Ok(Some(Box::new(child)))
            }
            None => Ok(None),
        }
    }

    async fn close(&mut self, _cancellable: Option<&Cancellable>) -> ScanResult<()> {
        self.closed = true;
        Ok(())
    }
}
