// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario coordinators
//!
//! Each coordinator is self-contained: it creates its primitives, spawns a
//! fixed pool of workers, and joins every one before returning. Scenarios
//! share nothing with each other except the event sink.

pub mod barrier;
pub mod latch;
pub mod pingpong;
pub mod pool;

pub use barrier::run_barrier_scenario;
pub use latch::run_latch_scenario;
pub use pingpong::run_pingpong_scenario;
pub use pool::WorkerPool;

use rand::Rng;
use std::time::Duration;

/// Bounded random delay simulating work, scaled by the worker's ordinal
pub(crate) fn work_delay(index: usize, max_delay: Duration) -> Duration {
    if max_delay.is_zero() {
        return Duration::ZERO;
    }
    let cap = u64::try_from(max_delay.as_millis().saturating_mul(index as u128))
        .unwrap_or(u64::MAX);
    Duration::from_millis(rand::rng().random_range(0..=cap))
}
