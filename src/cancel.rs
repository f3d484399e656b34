//! Cooperative cancellation
//!
//! A scan has no retries and no suspension, so cancellation is a single
//! one-way flag: the scanner and the rules engine check it at safe points
//! and return whatever they have gathered so far. A report produced after
//! cancellation is marked partial and must not be treated as a clean pass.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable, one-way cancellation flag shared by all stages of a scan.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, untripped token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
