use super::*;
use std::sync::Arc;
use std::thread;

#[test]
fn memory_sink_records_in_emission_order() {
    let sink = MemorySink::new();
    sink.emit(ScenarioEvent::WorkerStarted { index: 1 });
    sink.emit(ScenarioEvent::WorkerFinished { index: 1 });

    assert_eq!(sink.names(), vec!["worker.started", "worker.finished"]);
}

#[test]
fn memory_sink_keeps_every_concurrent_emission() {
    let sink = Arc::new(MemorySink::new());

    let handles: Vec<_> = (1..=8)
        .map(|index| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                for _ in 0..100 {
                    sink.emit(ScenarioEvent::WorkerStarted { index });
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(sink.events().len(), 800);
}
