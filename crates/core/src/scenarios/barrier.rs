// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase barrier scenario
//!
//! N workers execute K sequential phases; all must arrive at the barrier
//! before any proceeds to the next phase. The barrier's completion action
//! fires exactly once per work phase, and every worker performs one final
//! rendezvous before exit.

use crate::config::BarrierConfig;
use crate::coordination::PhaseBarrier;
use crate::error::ScenarioError;
use crate::event::ScenarioEvent;
use crate::scenarios::{work_delay, WorkerPool};
use crate::sink::EventSink;
use std::sync::Arc;
use std::thread;

/// Run the barrier scenario to completion
///
/// Each worker passes K+1 synchronization points: one per work phase and a
/// final exit rendezvous, which completes without a phase event.
pub fn run_barrier_scenario(
    config: &BarrierConfig,
    sink: &Arc<dyn EventSink>,
) -> Result<(), ScenarioError> {
    config.validate()?;
    let workers = config.workers;
    let phases = config.phases;
    tracing::info!(workers, phases, "starting barrier scenario");

    sink.emit(ScenarioEvent::ScenarioStarted {
        scenario: "barrier".to_string(),
    });

    let barrier = {
        let sink = Arc::clone(sink);
        Arc::new(PhaseBarrier::with_completion(workers, move |cycle| {
            // The exit rendezvous is the cycle at index `phases`; it
            // completes silently so a run produces exactly K phase events.
            if cycle < phases {
                sink.emit(ScenarioEvent::PhaseCompleted { phase: cycle + 1 });
            }
        }))
    };

    let mut pool = WorkerPool::new();
    for index in 1..=workers {
        let barrier = Arc::clone(&barrier);
        let sink = Arc::clone(sink);
        let max_delay = config.max_delay;
        pool.spawn(index, move || {
            sink.emit(ScenarioEvent::WorkerStarted { index });
            for phase in 1..=phases {
                thread::sleep(work_delay(index, max_delay));
                sink.emit(ScenarioEvent::PhaseReached { index, phase });
                barrier.arrive_and_wait();
            }
            sink.emit(ScenarioEvent::WorkerFinished { index });
            barrier.arrive_and_wait();
        });
    }

    pool.join_all()
}

#[cfg(test)]
#[path = "barrier_tests.rs"]
mod tests;
