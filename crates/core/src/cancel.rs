//! Cooperative cancellation token.
//!
//! Cancellation is checkpoint-based, not preemptive: the pipeline checks
//! the token at entry (before any tokenizer or store work) and again
//! immediately before the cache-write side effect. A verdict that already
//! came back is still returned after cancellation; only the write is
//! skipped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A cloneable cancellation flag scoped to one invocation.
///
/// Clones share the same flag; cancelling any clone cancels them all.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been signalled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
