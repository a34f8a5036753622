//! Ping-pong scenario specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn bounded_run_alternates_strictly() {
    let assert = tandem()
        .args(["ping-pong", "--rounds", "4", "--max-delay", "0s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("performing ping-pong task..."));

    let lines = stdout_lines(&assert.get_output().stdout);
    let rounds: Vec<&str> = lines
        .iter()
        .filter_map(|line| {
            if line.starts_with("ping") {
                Some("ping")
            } else if line.starts_with("pong") {
                Some("pong")
            } else {
                None
            }
        })
        .collect();

    // 4 pings, and 3 or 4 pongs depending on when the flag is observed.
    assert!(rounds.len() == 7 || rounds.len() == 8);
    for (position, side) in rounds.iter().enumerate() {
        let expected = if position % 2 == 0 { "ping" } else { "pong" };
        assert_eq!(*side, expected);
    }

    let stops = lines
        .iter()
        .filter(|line| line.contains("Stop requested"))
        .count();
    assert_eq!(stops, 1);
}

#[test]
fn run_for_deadline_terminates_the_command() {
    tandem()
        .args(["ping-pong", "--run-for", "100ms", "--max-delay", "1ms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stop requested."));
}
