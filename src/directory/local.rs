use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use percent_encoding::{percent_decode_str, percent_encode, AsciiSet, CONTROLS};
use tokio::fs;

use crate::cancellable::{self, Cancellable};
use crate::directory::Directory;
use crate::directory_enumerator::DirectoryEnumerator;
use crate::entry::{Entry, EntryKind};
use crate::error::{ErrorKind, ScanError, ScanResult};
use crate::iostream::InputStream;

// RFC 3986 path characters that must be escaped; '/' is kept as the separator.
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'[')
    .add(b']')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%');

/// Builds a `file://` URI, percent-encoding the raw path bytes.
pub fn path_to_uri(path: &Path) -> String {
    format!("file://{}", percent_encode(&path_bytes(path), PATH_ENCODE_SET))
}

/// Inverse of `path_to_uri`. Bare paths (no scheme) are taken verbatim.
pub fn uri_to_path(uri: &str) -> ScanResult<PathBuf> {
    let raw = if let Some(rest) = uri.strip_prefix("file://") {
        rest
    } else if uri.contains("://") {
        return Err(ScanError::new(
            ErrorKind::InvalidArg,
            format!("Not a file URI: {}", uri),
        ));
    } else if uri.is_empty() {
        return Err(ScanError::new(ErrorKind::InvalidArg, "Empty path"));
    } else {
        return Ok(PathBuf::from(uri));
    };

    if raw.is_empty() {
        return Err(ScanError::new(ErrorKind::InvalidArg, "Empty path in file URI"));
    }

    let decoded: Vec<u8> = percent_decode_str(raw).collect();
    path_from_bytes(decoded)
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> ScanResult<PathBuf> {
    use std::os::unix::ffi::OsStringExt;
    Ok(PathBuf::from(OsString::from_vec(bytes)))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> ScanResult<PathBuf> {
    String::from_utf8(bytes)
        .map(|s| PathBuf::from(OsString::from(s)))
        .map_err(|e| {
            ScanError::with_source(ErrorKind::InvalidArg, "File URI is not valid UTF-8", Box::new(e))
        })
}

/// A directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalDirectory {
    path: PathBuf,
}

impl LocalDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Directory for LocalDirectory {
    fn uri(&self) -> String {
        path_to_uri(&self.path)
    }

    async fn enumerate_children(
        &self,
        cancellable: Option<&Cancellable>,
    ) -> ScanResult<Box<dyn DirectoryEnumerator>> {
        cancellable::check(cancellable)?;

        let metadata = fs::metadata(&self.path).await?;
        if !metadata.is_dir() {
            return Err(ScanError::new(
                ErrorKind::NotDirectory,
                format!("{} is not a directory", self.path.display()),
            ));
        }

        let read_dir = fs::read_dir(&self.path).await?;
        Ok(Box::new(LocalDirectoryEnumerator { read_dir }))
    }
}

/// A child of a `LocalDirectory`.
#[derive(Debug, Clone)]
pub struct LocalEntry {
    path: PathBuf,
    name: String,
    kind: EntryKind,
}

impl LocalEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Entry for LocalEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> EntryKind {
        self.kind
    }

    fn uri(&self) -> String {
        path_to_uri(&self.path)
    }

    async fn read(&self, cancellable: Option<&Cancellable>) -> ScanResult<Box<dyn InputStream>> {
        cancellable::check(cancellable)?;
        if self.kind == EntryKind::Container {
            return Err(ScanError::new(
                ErrorKind::IsDirectory,
                format!("{} is a directory", self.path.display()),
            ));
        }
        let file = fs::File::open(&self.path).await?;
        Ok(Box::new(file))
    }
}

struct LocalDirectoryEnumerator {
    read_dir: fs::ReadDir,
}

#[async_trait]
impl DirectoryEnumerator for LocalDirectoryEnumerator {
    async fn next_entry(
        &mut self,
        cancellable: Option<&Cancellable>,
    ) -> ScanResult<Option<Box<dyn Entry>>> {
        cancellable::check(cancellable)?;

        let entry = match self.read_dir.next_entry().await? {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let path = entry.path();
        let file_type = entry.file_type().await?;
        let kind = if file_type.is_dir() {
            EntryKind::Container
        } else if file_type.is_symlink() {
            // Links are classified by their target; a dangling link stays a file.
            match fs::metadata(&path).await {
                Ok(target) if target.is_dir() => EntryKind::Container,
                _ => EntryKind::File,
            }
        } else {
            EntryKind::File
        };

        Ok(Some(Box::new(LocalEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            kind,
        })))
    }

    async fn close(&mut self, _cancellable: Option<&Cancellable>) -> ScanResult<()> {
        Ok(())
    }
}
