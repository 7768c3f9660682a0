//! Upload attempt tracking.
//!
//! Two hazards come with fire-and-forget uploads: a slow response finishing
//! after a newer attempt has started, and a completion arriving after the
//! owning widget is gone. The ticker numbers attempts and carries a
//! tear-down flag; a completion may only touch state when it holds the
//! newest number and the flag is down.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Shared attempt counter and tear-down flag for one widget instance
#[derive(Clone, Default)]
pub struct UploadTicker {
    inner: Arc<TickerState>,
}

#[derive(Default)]
struct TickerState {
    started: AtomicU64,
    cancelled: AtomicBool,
}

impl UploadTicker {
    /// Fresh ticker with no attempts started
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt and return its sequence number
    pub fn begin(&self) -> u64 {
        self.inner.started.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a completion for attempt `seq` may be applied: it must be
    /// the newest attempt started, and the owner must still be alive.
    pub fn may_apply(&self, seq: u64) -> bool {
        !self.inner.cancelled.load(Ordering::SeqCst)
            && self.inner.started.load(Ordering::SeqCst) == seq
    }

    /// Raise the tear-down flag; all outstanding completions become stale
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether the owner has been torn down
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }
}
