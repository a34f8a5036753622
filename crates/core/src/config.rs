// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario configuration
//!
//! Worker counts, phase counts, and delay bounds are supplied by the
//! caller; the structs here carry the defaults (5 workers, 3 phases,
//! 1 second delay bound) used by the CLI.

use crate::error::ScenarioError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the phase barrier scenario
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarrierConfig {
    /// Number of worker threads
    pub workers: usize,
    /// Number of work phases before the exit rendezvous
    pub phases: usize,
    /// Upper bound for each worker's simulated work delay
    #[serde(with = "humantime_serde")]
    pub max_delay: Duration,
}

impl BarrierConfig {
    pub fn new(workers: usize, phases: usize) -> Self {
        Self {
            workers,
            phases,
            max_delay: Duration::from_secs(1),
        }
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.workers == 0 {
            return Err(ScenarioError::NoWorkers);
        }
        if self.phases == 0 {
            return Err(ScenarioError::NoPhases);
        }
        Ok(())
    }
}

impl Default for BarrierConfig {
    fn default() -> Self {
        Self::new(5, 3)
    }
}

/// Configuration for the latch gate scenario
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LatchConfig {
    /// Number of worker threads
    pub workers: usize,
    /// Upper bound for each worker's simulated work delay
    #[serde(with = "humantime_serde")]
    pub max_delay: Duration,
}

impl LatchConfig {
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            max_delay: Duration::from_secs(1),
        }
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.workers == 0 {
            return Err(ScenarioError::NoWorkers);
        }
        Ok(())
    }
}

impl Default for LatchConfig {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Configuration for the ping-pong alternation scenario
///
/// A run ends when the caller raises the stop flag, when either side has
/// emitted `max_rounds` events, or when `run_for` elapses — whichever
/// comes first. With no bound configured the run relies entirely on the
/// external stop flag.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PingPongConfig {
    /// Upper bound for the pause between rounds
    #[serde(with = "humantime_serde")]
    pub max_delay: Duration,
    /// Stop after this many rounds per side
    #[serde(default)]
    pub max_rounds: Option<u64>,
    /// Stop after this much wall-clock time
    #[serde(with = "humantime_serde", default)]
    pub run_for: Option<Duration>,
}

impl PingPongConfig {
    pub fn new() -> Self {
        Self {
            max_delay: Duration::from_millis(500),
            max_rounds: None,
            run_for: None,
        }
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn with_max_rounds(mut self, rounds: u64) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn with_run_for(mut self, run_for: Duration) -> Self {
        self.run_for = Some(run_for);
        self
    }
}

impl Default for PingPongConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
