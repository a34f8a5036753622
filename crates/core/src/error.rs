// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for scenario runs

use thiserror::Error;

/// Errors surfaced by a scenario coordinator
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("worker count must be at least 1")]
    NoWorkers,
    #[error("phase count must be at least 1")]
    NoPhases,
    #[error("worker {index} panicked: {reason}")]
    WorkerPanicked { index: usize, reason: String },
}
