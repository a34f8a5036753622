// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reusable phase barrier
//!
//! A rendezvous point for a fixed set of participants. The barrier resets
//! itself after each cycle, so the same instance carries a pool of threads
//! through any number of phases.

use std::sync::{Condvar, Mutex};

/// Action invoked by the last arriver of each cycle, with the 0-based
/// cycle number.
type CompletionAction = Box<dyn Fn(usize) + Send + Sync>;

struct BarrierState {
    arrived: usize,
    generation: usize,
}

/// A reusable rendezvous point for `expected` participants
///
/// No thread returns from [`arrive_and_wait`](Self::arrive_and_wait) until
/// all `expected` threads have arrived. The generation counter distinguishes
/// cycles, so a thread that arrives for cycle n+1 while stragglers from
/// cycle n are still waking cannot be released early.
///
/// A participant that never arrives blocks the whole pool indefinitely;
/// there are no timeouts.
pub struct PhaseBarrier {
    expected: usize,
    state: Mutex<BarrierState>,
    cond: Condvar,
    on_complete: Option<CompletionAction>,
}

impl PhaseBarrier {
    /// Create a barrier for `expected` participants (must be at least 1)
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            state: Mutex::new(BarrierState {
                arrived: 0,
                generation: 0,
            }),
            cond: Condvar::new(),
            on_complete: None,
        }
    }

    /// Create a barrier whose completion action runs once per cycle
    ///
    /// The action is invoked by the last arriving thread while the barrier
    /// lock is held, so it is serialized with arrival bookkeeping and runs
    /// strictly between the last arrival of a cycle and any release. The
    /// action must not arrive at this barrier itself.
    pub fn with_completion(expected: usize, action: impl Fn(usize) + Send + Sync + 'static) -> Self {
        Self {
            on_complete: Some(Box::new(action)),
            ..Self::new(expected)
        }
    }

    /// Number of participants required per cycle
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Arrive at the rendezvous and block until all participants have
    ///
    /// The last arriver runs the completion action, resets the arrival
    /// count, and releases every waiter; released threads resume in no
    /// particular order.
    pub fn arrive_and_wait(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let generation = state.generation;
        state.arrived += 1;

        if state.arrived >= self.expected {
            if let Some(action) = &self.on_complete {
                action(generation);
            }
            state.arrived = 0;
            state.generation += 1;
            tracing::debug!(cycle = generation, "barrier cycle complete");
            self.cond.notify_all();
        } else {
            while state.generation == generation {
                state = self.cond.wait(state).unwrap_or_else(|e| e.into_inner());
            }
        }
    }
}

#[cfg(test)]
#[path = "barrier_tests.rs"]
mod tests;
