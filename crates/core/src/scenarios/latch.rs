// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Latch gate scenario
//!
//! N workers signal a work-completion gate and block on an exit gate. The
//! controller waits for all N signals, then opens the exit gate once,
//! releasing every worker permanently.

use crate::config::LatchConfig;
use crate::coordination::CountdownLatch;
use crate::error::ScenarioError;
use crate::event::ScenarioEvent;
use crate::scenarios::{work_delay, WorkerPool};
use crate::sink::EventSink;
use std::sync::Arc;
use std::thread;

/// Run the latch scenario to completion
///
/// No worker can observe the exit gate opening before the work gate has
/// reached zero: the controller's blocking wait precedes its decrement.
pub fn run_latch_scenario(
    config: &LatchConfig,
    sink: &Arc<dyn EventSink>,
) -> Result<(), ScenarioError> {
    config.validate()?;
    let workers = config.workers;
    tracing::info!(workers, "starting latch scenario");

    sink.emit(ScenarioEvent::ScenarioStarted {
        scenario: "latch".to_string(),
    });

    let work_gate = Arc::new(CountdownLatch::new(workers));
    let exit_gate = Arc::new(CountdownLatch::new(1));

    let mut pool = WorkerPool::new();
    for index in 1..=workers {
        let work_gate = Arc::clone(&work_gate);
        let exit_gate = Arc::clone(&exit_gate);
        let sink = Arc::clone(sink);
        let max_delay = config.max_delay;
        pool.spawn(index, move || {
            sink.emit(ScenarioEvent::WorkerStarted { index });
            thread::sleep(work_delay(index, max_delay));
            sink.emit(ScenarioEvent::WorkCompleted { index });
            work_gate.count_down();
            exit_gate.wait();
            sink.emit(ScenarioEvent::WorkerFinished { index });
        });
    }

    work_gate.wait();
    sink.emit(ScenarioEvent::ExitSignaled);
    exit_gate.count_down();

    pool.join_all()
}

#[cfg(test)]
#[path = "latch_tests.rs"]
mod tests;
