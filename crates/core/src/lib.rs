//! tandem-core: Core library for the tandem coordination demos
//!
//! This crate provides:
//! - Blocking coordination primitives (phase barrier, countdown latch,
//!   binary semaphore, stop flag)
//! - Scenario coordinators that drive fixed pools of worker threads
//! - An event model with pluggable sinks for observing runs

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod config;
pub mod coordination;
pub mod error;
pub mod event;
pub mod scenarios;
pub mod sink;

// Re-exports
pub use config::{BarrierConfig, LatchConfig, PingPongConfig};
pub use coordination::{BinarySemaphore, CountdownLatch, PhaseBarrier, StopFlag};
pub use error::ScenarioError;
pub use event::ScenarioEvent;
pub use scenarios::{run_barrier_scenario, run_latch_scenario, run_pingpong_scenario};
pub use sink::{ConsoleSink, EventSink, JsonSink, MemorySink};
