//! Latch scenario specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn exit_signal_comes_after_all_work_signals() {
    let assert = tandem()
        .args(["latch", "--workers", "3", "--max-delay", "0s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("performing latch task..."));

    let lines = stdout_lines(&assert.get_output().stdout);
    let signal = lines
        .iter()
        .position(|line| line.starts_with("All threads finished their work"))
        .unwrap();

    let work_signals: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter_map(|(position, line)| line.contains("completed its work").then_some(position))
        .collect();
    assert_eq!(work_signals.len(), 3);
    assert!(work_signals.iter().all(|&position| position < signal));

    let finishes: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter_map(|(position, line)| line.ends_with("finished.").then_some(position))
        .collect();
    assert_eq!(finishes.len(), 3);
    assert!(finishes.iter().all(|&position| position > signal));
}

#[test]
fn rejects_zero_workers() {
    tandem()
        .args(["latch", "--workers", "0", "--max-delay", "0s"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("worker count must be at least 1"));
}
