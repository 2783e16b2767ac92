use std::io::Cursor;
use std::sync::Arc;

use tokio::fs;
use tokio::io::AsyncRead;

use crate::cancellable::Cancellable;
use crate::error::ScanResult;

/// Trait representing an input stream (source of bytes).
/// Extends AsyncRead to integrate with Tokio.
pub trait InputStream: AsyncRead + Send + Unpin {
    fn close(&mut self, cancellable: Option<&Cancellable>) -> ScanResult<()>;
}

impl InputStream for Box<dyn InputStream> {
    fn close(&mut self, cancellable: Option<&Cancellable>) -> ScanResult<()> {
        (**self).close(cancellable)
    }
}

impl InputStream for fs::File {
    fn close(&mut self, _cancellable: Option<&Cancellable>) -> ScanResult<()> {
        Ok(())
    }
}

/// In-memory contents shared with the entry that produced them.
pub(crate) type SharedBytes = Cursor<Arc<[u8]>>;

impl InputStream for SharedBytes {
    fn close(&mut self, _cancellable: Option<&Cancellable>) -> ScanResult<()> {
        Ok(())
    }
}
