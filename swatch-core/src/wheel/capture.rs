//! Pointer capture held for the lifetime of a drag

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tracing::trace;

/// Host hook for global pointer tracking (move and release events outside
/// the control)
pub trait PointerCapture: Send + Sync {
    /// Start routing pointer events to the wheel
    fn acquire(&self);

    /// Stop routing pointer events to the wheel
    fn release(&self);
}

/// Hosts that deliver pointer events to the wheel unconditionally
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn acquire(&self) {}

    fn release(&self) {}
}

/// Capture that only records its state; useful for headless hosts
#[derive(Debug, Default)]
pub struct CaptureFlag {
    active: AtomicBool,
    acquisitions: AtomicUsize,
}

impl CaptureFlag {
    /// Not captured
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer is currently captured
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Number of times capture was taken
    pub fn acquisitions(&self) -> usize {
        self.acquisitions.load(Ordering::SeqCst)
    }
}

impl PointerCapture for CaptureFlag {
    fn acquire(&self) {
        self.active.store(true, Ordering::SeqCst);
        self.acquisitions.fetch_add(1, Ordering::SeqCst);
    }

    fn release(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

/// Holds capture until dropped
pub struct CaptureGuard {
    capture: Arc<dyn PointerCapture>,
}

impl CaptureGuard {
    /// Acquire `capture`
    pub fn acquire(capture: Arc<dyn PointerCapture>) -> Self {
        capture.acquire();
        trace!("pointer captured");
        Self { capture }
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard").finish_non_exhaustive()
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.capture.release();
        trace!("pointer released");
    }
}
