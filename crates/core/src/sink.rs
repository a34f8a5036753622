// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event sinks
//!
//! The sink is the only resource shared across worker threads, so every
//! implementation must emit a whole event atomically: concurrent workers'
//! lines may interleave with each other, but never within a line.

use crate::event::ScenarioEvent;
use std::io::Write;
use std::sync::Mutex;

/// A destination for scenario events
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ScenarioEvent);
}

/// Writes one display line per event to stdout
///
/// The line is assembled first and written under a single lock of the
/// stdout handle, so it reaches the console in one piece.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for ConsoleSink {
    fn emit(&self, event: ScenarioEvent) {
        let line = event.to_string();
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }
}

/// Writes one JSON object per event to stdout
#[derive(Debug, Default)]
pub struct JsonSink;

impl JsonSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for JsonSink {
    fn emit(&self, event: ScenarioEvent) {
        if let Ok(line) = serde_json::to_string(&event) {
            let mut out = std::io::stdout().lock();
            let _ = writeln!(out, "{line}");
        }
    }
}

/// Records events in memory for inspection
///
/// The recording order doubles as a logical clock: an event that
/// happens-before another is recorded before it, because `emit` runs
/// inside the emitting thread at the program point of the event.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<ScenarioEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all recorded events, in emission order
    pub fn events(&self) -> Vec<ScenarioEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Dotted names of all recorded events, in emission order
    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(ScenarioEvent::name).collect()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: ScenarioEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
