// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative stop flag

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A clonable flag for cooperative cancellation
///
/// The coordinator owns the flag and hands clones to its workers; workers
/// check it between iterations. Raising the flag never interrupts a
/// blocked wait — a blocked thread observes the flag only after it is
/// next woken.
#[derive(Clone, Debug, Default)]
pub struct StopFlag {
    raised: Arc<AtomicBool>,
}

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag
    ///
    /// Returns `true` only for the call that performed the transition, so
    /// a stop with several possible sources is reported exactly once.
    pub fn raise(&self) -> bool {
        !self.raised.swap(true, Ordering::SeqCst)
    }

    /// Whether the flag has been raised
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[path = "stop_tests.rs"]
mod tests;
