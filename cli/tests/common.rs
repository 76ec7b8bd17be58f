//! # FDL CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command
//! built here runs inside a scratch directory with an explicit configuration
//! file, so user or project configuration on the machine running the tests
//! cannot change the results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// # Get FDL Command (`fdl_cmd`)
///
/// An `assert_cmd::Command` for the compiled `fdl` binary.
///
/// ## Panics
/// Panics if the `fdl` binary cannot be found via `Command::cargo_bin`.
pub fn fdl_cmd() -> Command {
    Command::cargo_bin("fdl").expect("Failed to find fdl binary for testing")
}

/// # Sandboxed Command (`fdl_in`)
///
/// Writes `config_toml` to `<dir>/fdl-test.toml` and returns a command that
/// runs in `dir` with `FDL_CONFIG` pointing at that file.
pub fn fdl_in(dir: &Path, config_toml: &str) -> Command {
    let config_path = dir.join("fdl-test.toml");
    fs::write(&config_path, config_toml).expect("Failed to write test config");
    let mut cmd = fdl_cmd();
    cmd.current_dir(dir)
        .env("FDL_CONFIG", &config_path)
        .env_remove("RUST_LOG");
    cmd
}
