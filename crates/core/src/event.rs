// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events emitted by scenario runs
//!
//! Every observable step of a run is one event; sinks render each event as
//! a single line. Worker indexes are 1-based ordinals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Events emitted by scenario coordinators and their workers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioEvent {
    /// A scenario run began
    ScenarioStarted { scenario: String },

    // Worker lifecycle
    WorkerStarted { index: usize },
    WorkerFinished { index: usize },

    // Barrier scenario
    /// A worker arrived at the rendezvous for a work phase
    PhaseReached { index: usize, phase: usize },
    /// The last arriver completed a work phase for all workers
    PhaseCompleted { phase: usize },

    // Latch scenario
    /// A worker counted down the work gate
    WorkCompleted { index: usize },
    /// The controller opened the exit gate
    ExitSignaled,

    // Ping-pong scenario
    Ping { round: u64 },
    Pong { round: u64 },
    /// The stop flag was raised (emitted once, by whichever source wins)
    StopRequested,
}

impl ScenarioEvent {
    /// Dotted event name, stable across wording changes in `Display`
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioEvent::ScenarioStarted { .. } => "scenario.started",
            ScenarioEvent::WorkerStarted { .. } => "worker.started",
            ScenarioEvent::WorkerFinished { .. } => "worker.finished",
            ScenarioEvent::PhaseReached { .. } => "phase.reached",
            ScenarioEvent::PhaseCompleted { .. } => "phase.completed",
            ScenarioEvent::WorkCompleted { .. } => "work.completed",
            ScenarioEvent::ExitSignaled => "exit.signaled",
            ScenarioEvent::Ping { .. } => "pingpong.ping",
            ScenarioEvent::Pong { .. } => "pingpong.pong",
            ScenarioEvent::StopRequested => "stop.requested",
        }
    }
}

impl fmt::Display for ScenarioEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioEvent::ScenarioStarted { scenario } => {
                write!(f, "performing {scenario} task...")
            }
            ScenarioEvent::WorkerStarted { index } => {
                write!(f, "Thread {index} is starting its work.")
            }
            ScenarioEvent::WorkerFinished { index } => write!(f, "Thread {index} finished."),
            ScenarioEvent::PhaseReached { index, phase } => {
                write!(f, "Thread {index} reached phase {phase}.")
            }
            ScenarioEvent::PhaseCompleted { phase } => {
                write!(f, "All threads finished phase {phase}.")
            }
            ScenarioEvent::WorkCompleted { index } => write!(
                f,
                "Thread {index} completed its work and is waiting for the signal to finish."
            ),
            ScenarioEvent::ExitSignaled => write!(
                f,
                "All threads finished their work. Emitting the signal to finish."
            ),
            ScenarioEvent::Ping { round } => write!(f, "ping ({round})"),
            ScenarioEvent::Pong { round } => write!(f, "pong ({round})"),
            ScenarioEvent::StopRequested => write!(f, "Stop requested."),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
