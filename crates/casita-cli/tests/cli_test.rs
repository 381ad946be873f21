//! Integration tests for the `casita` binary.
//!
//! These validate argument parsing, help output, shell completions, and
//! config handling — all without a running Casita server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `casita` binary with env isolation.
///
/// Points config directories at a nonexistent path and clears `CASITA_*`
/// env vars so tests never touch the user's real configuration.
fn casita_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("casita");
    cmd.env("HOME", "/tmp/casita-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/casita-cli-test-nonexistent")
        .env_remove("CASITA_HOST")
        .env_remove("CASITA_PORT");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = casita_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_lists_commands() {
    casita_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("status")
            .and(predicate::str::contains("list"))
            .and(predicate::str::contains("toggle"))
            .and(predicate::str::contains("brightness"))
            .and(predicate::str::contains("scene")),
    );
}

#[test]
fn test_version_flag() {
    casita_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("casita"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    casita_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    casita_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = casita_cmd().arg("frobnicate").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("invalid") || text.contains("frobnicate"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_info_requires_target() {
    casita_cmd().arg("info").assert().failure().code(2);
}

#[test]
fn test_brightness_requires_value_and_target() {
    casita_cmd().args(["brightness", "50"]).assert().failure().code(2);
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_defaults() {
    // No config file exists, so the defaults render.
    casita_cmd().args(["config", "show"]).assert().success().stdout(
        predicate::str::contains("localhost")
            .and(predicate::str::contains("8423"))
            .and(predicate::str::contains("http://localhost:8423")),
    );
}

#[test]
fn test_config_show_json() {
    casita_cmd()
        .args(["--json", "config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"host\": \"localhost\"")
                .and(predicate::str::contains("\"port\": 8423")),
        );
}

#[test]
fn test_config_set_requires_a_flag() {
    casita_cmd().args(["config", "set"]).assert().failure().code(2);
}

#[test]
fn test_config_path_prints_toml_path() {
    casita_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
