//! CLI surface specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn json_format_emits_one_parseable_value_per_line() {
    let assert = tandem()
        .args(["--format", "json", "latch", "--workers", "2", "--max-delay", "0s"])
        .assert()
        .success();

    let lines = stdout_lines(&assert.get_output().stdout);
    assert!(!lines.is_empty());
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        // Struct variants serialize as objects, unit variants as strings.
        assert!(value.is_object() || value.is_string());
    }
}

#[test]
fn all_runs_every_scenario_in_sequence() {
    let assert = tandem()
        .args([
            "all",
            "--workers",
            "2",
            "--phases",
            "1",
            "--rounds",
            "2",
            "--max-delay",
            "0s",
        ])
        .assert()
        .success();

    let lines = stdout_lines(&assert.get_output().stdout);
    let banners: Vec<&String> = lines
        .iter()
        .filter(|line| line.starts_with("performing"))
        .collect();
    assert_eq!(
        banners,
        vec![
            "performing barrier task...",
            "performing latch task...",
            "performing ping-pong task...",
        ]
    );
}

#[test]
fn help_describes_the_scenarios() {
    tandem()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("barrier"))
        .stdout(predicate::str::contains("latch"))
        .stdout(predicate::str::contains("ping-pong"));
}
