//! Shared integration-test harness for running the `tenframes` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Environment variables the binary reads; cleared so the host cannot
/// change test outcomes.
const TENFRAMES_ENV: &[&str] = &[
    "TENFRAMES_CONFIG",
    "TENFRAMES_PAGES",
    "TENFRAMES_SEED",
    "TENFRAMES_RENDERER",
    "TENFRAMES_OUTPUT_DIR",
    "TENFRAMES_COLOR",
    "TENFRAMES_LOG_FORMAT",
    "TENFRAMES_LOG_LEVEL",
    "TENFRAMES_MAX_CONFIG_SIZE",
];

/// Runs `tenframes` with `args` and waits for it to exit.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_command(args: &[&str]) -> Output {
    command(args).output().expect("failed to run tenframes")
}

/// Builds a `tenframes` invocation with a clean environment.
pub fn command(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tenframes"));
    for var in TENFRAMES_ENV {
        cmd.env_remove(var);
    }
    cmd.args(args);
    cmd
}

/// Path to a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Stdout as UTF-8.
#[allow(clippy::missing_panics_doc)]
pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}
