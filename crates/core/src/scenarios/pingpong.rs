// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ping-pong alternation scenario
//!
//! Two threads strictly alternate through a pair of capacity-one slots:
//! each thread acquires its own slot, emits its event, and releases the
//! peer's slot. The permit-sum invariant (one permit or one in-flight
//! turn in the system at any instant) is what enforces the alternation.

use crate::config::PingPongConfig;
use crate::coordination::{BinarySemaphore, StopFlag};
use crate::error::ScenarioError;
use crate::event::ScenarioEvent;
use crate::scenarios::{work_delay, WorkerPool};
use crate::sink::EventSink;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const STOP_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Run the ping-pong scenario until stopped
///
/// Stop sources: the caller raising `stop`, either side reaching
/// `max_rounds`, or `run_for` elapsing. A thread blocked in `acquire`
/// observes the flag only once it is next woken; the exiting peer hands
/// the turn back one final time, so the blocked thread completes its
/// in-flight round and then exits. Both threads are joined before this
/// function returns.
pub fn run_pingpong_scenario(
    config: &PingPongConfig,
    stop: &StopFlag,
    sink: &Arc<dyn EventSink>,
) -> Result<(), ScenarioError> {
    tracing::info!(
        max_rounds = ?config.max_rounds,
        run_for = ?config.run_for,
        "starting ping-pong scenario"
    );

    sink.emit(ScenarioEvent::ScenarioStarted {
        scenario: "ping-pong".to_string(),
    });

    // Ping holds the opening turn.
    let ping_slot = Arc::new(BinarySemaphore::new(true));
    let pong_slot = Arc::new(BinarySemaphore::new(false));

    let mut pool = WorkerPool::new();

    let ping = {
        let own = Arc::clone(&ping_slot);
        let peer = Arc::clone(&pong_slot);
        let stop = stop.clone();
        let sink = Arc::clone(sink);
        let config = config.clone();
        move || {
            alternation_loop(&own, &peer, &stop, sink.as_ref(), &config, |round| {
                ScenarioEvent::Ping { round }
            });
        }
    };
    pool.spawn(1, ping);

    let pong = {
        let own = Arc::clone(&pong_slot);
        let peer = Arc::clone(&ping_slot);
        let stop = stop.clone();
        let sink = Arc::clone(sink);
        let config = config.clone();
        move || {
            alternation_loop(&own, &peer, &stop, sink.as_ref(), &config, |round| {
                ScenarioEvent::Pong { round }
            });
        }
    };
    pool.spawn(2, pong);

    if let Some(run_for) = config.run_for {
        let deadline = Instant::now() + run_for;
        while !stop.is_raised() && Instant::now() < deadline {
            thread::sleep(STOP_POLL_INTERVAL);
        }
        if stop.raise() {
            sink.emit(ScenarioEvent::StopRequested);
        }
    }

    pool.join_all()
}

fn alternation_loop(
    own: &BinarySemaphore,
    peer: &BinarySemaphore,
    stop: &StopFlag,
    sink: &dyn EventSink,
    config: &PingPongConfig,
    make_event: impl Fn(u64) -> ScenarioEvent,
) {
    let mut round: u64 = 0;
    loop {
        if stop.is_raised() {
            break;
        }
        own.acquire();
        round += 1;
        sink.emit(make_event(round));
        peer.release();
        if config.max_rounds.is_some_and(|max| round >= max) {
            if stop.raise() {
                sink.emit(ScenarioEvent::StopRequested);
            }
            break;
        }
        thread::sleep(work_delay(1, config.max_delay));
    }
    // Hand the turn back so a peer blocked in acquire wakes, completes its
    // in-flight round, and observes the flag. Saturates if nobody waits.
    peer.release();
}

#[cfg(test)]
#[path = "pingpong_tests.rs"]
mod tests;
