//! Process-wide stop flag.
//! Set by the Ctrl-C handler; the walk checks it before every entry and stops
//! with `FlattenError::Interrupted`, leaving the tree consistent (each file is
//! either moved or still in place).
//!
//! Relaxed ordering is enough for a one-way flag.

use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Ask the running walk to stop (idempotent, signal-safe).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}
