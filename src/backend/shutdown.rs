//! Shutdown token shared between the UI, the signal handler, and the worker.
//!
//! Any holder can request shutdown; the request kills the attached scanner
//! process, which closes its stdout and so unblocks the worker's read loop.
//! The worker later reaps the child and uses `is_requested` to distinguish a
//! requested stop from the scanner dying on its own.

use std::process::{Child, ExitStatus};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Inner {
    requested: AtomicBool,
    // The child lives here from attach until reap so that request() can
    // kill it from another thread while the worker blocks on its stdout.
    child: Mutex<Option<Child>>,
}

/// Clonable cancellation token owning the scanner process slot.
#[derive(Debug, Clone, Default)]
pub struct ShutdownHandle {
    inner: Arc<Inner>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand the running scanner to the token.
    pub fn attach(&self, child: Child) {
        let mut slot = self.inner.child.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(child);
    }

    /// Request shutdown: mark the stop as requested and terminate the
    /// scanner. Safe to call from any thread, and more than once.
    pub fn request(&self) {
        if self.inner.requested.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::info!("Shutdown requested, stopping scanner");
        self.terminate_source();
    }

    /// Terminate the scanner without marking the stop as requested.
    pub(crate) fn terminate_source(&self) {
        let mut slot = self.inner.child.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(child) = slot.as_mut() {
            if let Err(e) = child.kill() {
                // Already exited; the worker will reap it.
                tracing::debug!("Scanner already stopped: {}", e);
            }
        }
    }

    pub fn is_requested(&self) -> bool {
        self.inner.requested.load(Ordering::SeqCst)
    }

    /// Wait for the attached scanner to exit and collect its status.
    /// Returns `None` if no scanner was attached.
    pub fn reap(&self) -> Option<std::io::Result<ExitStatus>> {
        let child = {
            let mut slot = self.inner.child.lock().unwrap_or_else(|e| e.into_inner());
            slot.take()
        };
        child.map(|mut child| child.wait())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_sticky() {
        let handle = ShutdownHandle::new();
        assert!(!handle.is_requested());
        handle.request();
        assert!(handle.is_requested());
        handle.request();
        assert!(handle.is_requested());
    }

    #[test]
    fn test_reap_without_attach() {
        let handle = ShutdownHandle::new();
        assert!(handle.reap().is_none());
    }

    #[test]
    fn test_request_without_attached_child() {
        // Must not panic or block when no scanner is running yet.
        let handle = ShutdownHandle::new();
        handle.request();
        assert!(handle.reap().is_none());
    }
}
