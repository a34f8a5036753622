//! Barrier scenario specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn runs_to_completion_with_one_banner_per_phase() {
    let assert = tandem()
        .args(["barrier", "--workers", "3", "--phases", "2", "--max-delay", "0s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("performing barrier task..."))
        .stdout(predicate::str::contains("All threads finished phase 1."))
        .stdout(predicate::str::contains("All threads finished phase 2."));

    let lines = stdout_lines(&assert.get_output().stdout);
    let completions = lines
        .iter()
        .filter(|line| line.starts_with("All threads finished phase"))
        .count();
    assert_eq!(completions, 2);
}

#[test]
fn every_worker_reports_finishing() {
    let assert = tandem()
        .args(["barrier", "--workers", "4", "--phases", "1", "--max-delay", "0s"])
        .assert()
        .success();

    let lines = stdout_lines(&assert.get_output().stdout);
    for index in 1..=4 {
        assert!(lines.contains(&format!("Thread {index} finished.")));
    }
}

#[test]
fn rejects_zero_workers() {
    tandem()
        .args(["barrier", "--workers", "0", "--max-delay", "0s"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("worker count must be at least 1"));
}

#[test]
fn rejects_zero_phases() {
    tandem()
        .args(["barrier", "--phases", "0", "--max-delay", "0s"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("phase count must be at least 1"));
}
