// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Binary semaphore
//!
//! A counting permit clamped to capacity one, used for mutual-exclusion
//! hand-off between two alternating parties.

use std::sync::{Condvar, Mutex};

/// A capacity-one permit slot
///
/// `acquire` blocks while the permit is absent and takes it atomically;
/// `release` restores it. Release saturates at one permit: releasing a
/// slot that already holds its permit is a no-op, so a double release can
/// never overcommit capacity and break the mutual-exclusion invariant.
pub struct BinarySemaphore {
    permit: Mutex<bool>,
    cond: Condvar,
}

impl BinarySemaphore {
    /// Create a slot, with or without its permit initially available
    pub fn new(available: bool) -> Self {
        Self {
            permit: Mutex::new(available),
            cond: Condvar::new(),
        }
    }

    /// Block until the permit is available, then take it
    pub fn acquire(&self) {
        let mut permit = self.permit.lock().unwrap_or_else(|e| e.into_inner());
        while !*permit {
            permit = self.cond.wait(permit).unwrap_or_else(|e| e.into_inner());
        }
        *permit = false;
    }

    /// Take the permit if it is available, without blocking
    pub fn try_acquire(&self) -> bool {
        let mut permit = self.permit.lock().unwrap_or_else(|e| e.into_inner());
        let acquired = *permit;
        *permit = false;
        acquired
    }

    /// Make the permit available, waking one waiter
    ///
    /// Saturating: a no-op if the permit is already available.
    pub fn release(&self) {
        let mut permit = self.permit.lock().unwrap_or_else(|e| e.into_inner());
        if !*permit {
            *permit = true;
            self.cond.notify_one();
        }
    }
}

#[cfg(test)]
#[path = "semaphore_tests.rs"]
mod tests;
