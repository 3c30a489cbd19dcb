//! Exit codes and error messages.
//!
//! - 0: Success
//! - 1: Semantic failure
//! - 4: Invalid arguments
//! - 5: I/O error
//! - 6: Other library errors
//! - 7: Configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["--style", "posix", "normalize", "a/b"])
        .assert()
        .code(0);
}

#[test]
fn test_unknown_config_field() {
    let env = TestEnv::new();
    env.write_config("search_path: [/typo]\n");

    env.command()
        .args(["resolve", "x"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_explicit_config_missing() {
    let env = TestEnv::new();
    env.command()
        .args(["--config", "does-not-exist.yaml", "resolve", "x"])
        .assert()
        .code(7);
}

#[test]
fn test_config_rejects_blank_search_path() {
    let env = TestEnv::new();
    env.write_config("search_paths: ['  ']\n");

    env.command()
        .args(["resolve", "x"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("search_paths[0]"));
}

#[test]
fn test_invalid_env_value() {
    let env = TestEnv::new();
    env.command()
        .env("FSPATH_INCLUDE_CWD", "sometimes")
        .args(["resolve", "x"])
        .assert()
        .code(7);
}

#[test]
fn test_empty_search_path_flag() {
    let env = TestEnv::new();
    env.command()
        .args(["resolve", "x", "--search-path", ""])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("--search-path"));
}

#[test]
fn test_errors_are_prefixed() {
    let env = TestEnv::new();
    env.command()
        .args(["stat", "missing-entry"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "));
}
