//! Shared helpers for CLI specs

use assert_cmd::Command;
use std::time::Duration;

/// Command for the tandem binary, with a timeout so a synchronization bug
/// fails the spec instead of hanging the suite
pub fn tandem() -> Command {
    let mut command = Command::cargo_bin("tandem").unwrap();
    command.timeout(Duration::from_secs(30));
    command
}

/// Split captured stdout into owned lines
pub fn stdout_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
