//! Media scanner
//!
//! Walks the direct children of a `Directory` once, in host order, and keeps the files whose
//! extension is on the allow-list. Containers are skipped without being opened.

use futures::stream::{self, Stream, TryStreamExt};

use crate::allow_list::ExtensionAllowList;
use crate::cancellable::Cancellable;
use crate::config::ScanConfig;
use crate::directory::Directory;
use crate::directory_enumerator::DirectoryEnumerator;
use crate::entry::Entry;
use crate::error::{ErrorKind, ScanError, ScanResult};

#[derive(Debug, Clone, Default)]
pub struct MediaScanner {
    extensions: ExtensionAllowList,
}

impl MediaScanner {
    /// A scanner using the default media extensions.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extensions(extensions: ExtensionAllowList) -> Self {
        Self { extensions }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::with_extensions(config.extensions.clone())
    }

    pub fn extensions(&self) -> &ExtensionAllowList {
        &self.extensions
    }

    /// Whether `entry` belongs in a scan result.
    pub fn accepts(&self, entry: &dyn Entry) -> bool {
        entry.kind().is_file() && self.extensions.matches_name(entry.name())
    }

    /// Lists the media files directly inside `directory`, in host order.
    ///
    /// A host failure aborts the whole scan and is returned as is; entries accepted
    /// before it are dropped.
    pub async fn scan(
        &self,
        directory: &dyn Directory,
        cancellable: Option<&Cancellable>,
    ) -> ScanResult<Vec<Box<dyn Entry>>> {
        tracing::debug!(directory = %directory.uri(), "scanning for media");

        let result: ScanResult<Vec<Box<dyn Entry>>> =
            self.scan_stream(directory, cancellable).try_collect().await;

        match &result {
            Ok(entries) => {
                tracing::debug!(
                    directory = %directory.uri(),
                    found = entries.len(),
                    "scan finished"
                );
            }
            Err(e) if e.kind() == ErrorKind::Cancelled => {
                tracing::debug!(directory = %directory.uri(), "scan cancelled");
            }
            Err(e) => {
                tracing::warn!(directory = %directory.uri(), error = %e, "scan aborted");
            }
        }
        result
    }

    /// Same filter as `scan`, but yields each accepted entry as soon as the host
    /// produces it. The stream ends after the first error.
    ///
    /// The enumerator is closed when the host runs out of children or fails. Dropping
    /// the stream early drops the enumerator without calling `close`.
    pub fn scan_stream<'a>(
        &'a self,
        directory: &'a dyn Directory,
        cancellable: Option<&'a Cancellable>,
    ) -> impl Stream<Item = ScanResult<Box<dyn Entry>>> + Send + 'a {
        stream::try_unfold(
            None::<Box<dyn DirectoryEnumerator>>,
            move |enumerator| async move {
                let mut enumerator = match enumerator {
                    Some(enumerator) => enumerator,
                    None => directory.enumerate_children(cancellable).await?,
                };

                loop {
                    let entry = match enumerator.next_entry(cancellable).await {
                        Ok(Some(entry)) => entry,
                        Ok(None) => break,
                        Err(e) => {
                            // The host error wins over any close failure.
                            if let Err(close_err) = enumerator.close(None).await {
                                tracing::debug!(error = %close_err, "close after failure");
                            }
                            return Err(e);
                        }
                    };
                    if self.accepts(&*entry) {
                        return Ok(Some((entry, Some(enumerator))));
                    }
                    tracing::trace!(name = entry.name(), kind = ?entry.kind(), "skipped");
                }

                enumerator.close(cancellable).await?;
                Ok::<_, ScanError>(None)
            },
        )
    }
}

/// Lists the media files directly inside `directory` using the default extensions.
pub async fn scan_directory(directory: &dyn Directory) -> ScanResult<Vec<Box<dyn Entry>>> {
    MediaScanner::new().scan(directory, None).await
}
