//! Progress-signal capability
//!
//! The client toggles a loading indicator around every request through this
//! trait. Implementations are external; a `start` is always matched by exactly
//! one `done`, on the success and the failure path alike.

use std::sync::Arc;

/// Shows and hides a visual "loading" indicator
///
/// Calls may interleave across concurrent requests; coalescing overlapping
/// requests into one visible indicator is the implementation's concern.
/// Implementations must tolerate redundant calls.
pub trait ProgressSignal: Send + Sync {
    /// A request is about to be dispatched
    fn start(&self);

    /// A request has settled, successfully or not
    fn done(&self);
}

/// Progress signal that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressSignal for NoopProgress {
    fn start(&self) {}

    fn done(&self) {}
}

/// Scopes one in-flight request: `start` fires on creation, `done` on drop
///
/// Dropping on every exit path is what guarantees the exactly-once stop.
pub(crate) struct ProgressGuard {
    signal: Arc<dyn ProgressSignal>,
}

impl ProgressGuard {
    pub(crate) fn begin(signal: Arc<dyn ProgressSignal>) -> Self {
        signal.start();
        Self { signal }
    }
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        self.signal.done();
    }
}
