use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

use crate::error::{ErrorKind, ScanError};

/// Shared cancellation token handed to every host call of a scan.
#[derive(Clone, Debug)]
pub struct Cancellable {
    inner: Arc<CancellableInner>,
}

#[derive(Debug)]
struct CancellableInner {
    cancelled: AtomicBool,
    notify: Notify,
}

impl Cancellable {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(CancellableInner {
                cancelled: AtomicBool::new(false),
                notify: Notify::new(),
            }),
        }
    }

    pub fn cancel(&self) {
        if !self.inner.cancelled.swap(true, Ordering::SeqCst) {
            tracing::debug!("scan cancellation requested");
            self.inner.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    pub fn check(&self) -> Result<(), ScanError> {
        if self.is_cancelled() {
            Err(ScanError::new(ErrorKind::Cancelled, "Operation cancelled"))
        } else {
            Ok(())
        }
    }

    /// Resolves once `cancel` has been called.
    pub async fn cancelled(&self) {
        let notified = self.inner.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

impl Default for Cancellable {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks an optional token, the way every host call starts.
pub(crate) fn check(cancellable: Option<&Cancellable>) -> Result<(), ScanError> {
    match cancellable {
        Some(c) => c.check(),
        None => Ok(()),
    }
}
