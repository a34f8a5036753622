// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker thread ownership

use crate::error::ScenarioError;
use std::any::Any;
use std::thread::JoinHandle;

/// Owns the join handles of a scenario's worker threads
///
/// The coordinator is the exclusive owner of its pool and must consume it
/// with [`join_all`](Self::join_all) before returning, so no worker thread
/// outlives its scenario.
#[derive(Default)]
pub struct WorkerPool {
    handles: Vec<(usize, JoinHandle<()>)>,
}

impl WorkerPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a worker with the given ordinal index
    pub fn spawn<F>(&mut self, index: usize, work: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.handles.push((index, std::thread::spawn(work)));
    }

    /// Number of workers in the pool
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Join every worker, then report the first panic if any occurred
    ///
    /// All handles are joined even when an early worker panics; the
    /// failure surfaces as [`ScenarioError::WorkerPanicked`] only after
    /// the rest of the pool has been awaited.
    pub fn join_all(self) -> Result<(), ScenarioError> {
        let mut first_failure = None;
        for (index, handle) in self.handles {
            if let Err(payload) = handle.join() {
                let reason = panic_reason(payload.as_ref());
                tracing::error!(worker = index, reason = %reason, "worker panicked");
                if first_failure.is_none() {
                    first_failure = Some(ScenarioError::WorkerPanicked { index, reason });
                }
            }
        }
        match first_failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
