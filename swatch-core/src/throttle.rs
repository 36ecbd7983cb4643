//! Trailing-edge throttle driven by caller-supplied instants
//!
//! The first call in a quiet period runs immediately and opens a window.
//! Calls that land inside the window replace each other; the last one is
//! handed back once, when the host polls after the window closes.

use std::time::{Duration, Instant};

/// Window used for wheel pointer moves
pub const DEFAULT_THROTTLE_WINDOW: Duration = Duration::from_millis(20);

/// Rate limiter holding at most one pending argument set
#[derive(Debug, Clone)]
pub struct Throttle<A> {
    window: Duration,
    window_end: Option<Instant>,
    pending: Option<A>,
}

impl<A> Default for Throttle<A> {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_WINDOW)
    }
}

impl<A> Throttle<A> {
    /// Throttle with the given window length
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            window_end: None,
            pending: None,
        }
    }

    /// Window length
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Offer `args` at `now`.
    ///
    /// Returns them back when they should run right away. Otherwise they
    /// replace any pending arguments and `None` is returned.
    pub fn call(&mut self, now: Instant, args: A) -> Option<A> {
        match self.window_end {
            Some(end) if now < end => {
                self.pending = Some(args);
                None
            }
            _ => {
                self.window_end = Some(now + self.window);
                self.pending = None;
                Some(args)
            }
        }
    }

    /// Pending arguments whose window has expired at `now`.
    ///
    /// The window closes either way, so the next call runs immediately.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        let end = self.window_end?;
        if now < end {
            return None;
        }
        self.window_end = None;
        self.pending.take()
    }

    /// Pending arguments, regardless of the window, closing it
    pub fn flush(&mut self) -> Option<A> {
        self.window_end = None;
        self.pending.take()
    }

    /// Drop pending arguments and close the window
    pub fn cancel(&mut self) {
        self.window_end = None;
        self.pending = None;
    }

    /// When the host should poll next, if anything is pending
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().and(self.window_end)
    }

    /// Whether a trailing call is waiting
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
