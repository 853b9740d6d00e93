#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use assert_cmd::{assert::Assert, Command};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Fresh data directory standing in for `~/.idikhar`.
pub fn test_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Runs the shell in script mode over `lines`.
pub fn run_script(home: &PathBuf, lines: &[&str]) -> Assert {
    let mut input = lines.join("\n");
    input.push('\n');
    Command::cargo_bin("idikhar_cli")
        .expect("binary built")
        .env("IDIKHAR_CLI_SCRIPT", "1")
        .env("IDIKHAR_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .write_stdin(input)
        .assert()
}
