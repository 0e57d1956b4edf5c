//! Integration tests for the `gridflow` CLI binary.
//!
//! These tests validate argument parsing, help output, and error handling
//! without requiring platform access.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `gridflow` binary with env isolation.
///
/// Clears all `GRIDFLOW_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration
/// or stored token.
fn gridflow_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("gridflow");
    cmd.env("HOME", "/tmp/gridflow-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/gridflow-cli-test-nonexistent")
        .env_remove("GRIDFLOW_API_URL")
        .env_remove("GRIDFLOW_API_VERSION")
        .env_remove("GRIDFLOW_AUTH_DOMAIN")
        .env_remove("GRIDFLOW_TOKEN_PATH")
        .env_remove("GRIDFLOW_OUTPUT")
        .env_remove("GRIDFLOW_HEADERS")
        .env_remove("GRIDFLOW_TIMEOUT_SECS");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = gridflow_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    gridflow_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("energy systems")
            .and(predicate::str::contains("nodes"))
            .and(predicate::str::contains("models"))
            .and(predicate::str::contains("runs")),
    );
}

#[test]
fn test_version_flag() {
    gridflow_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gridflow"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = gridflow_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = gridflow_cmd()
        .args(["--output", "invalid", "nodes", "get", "DEU"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_request_without_login_fails_with_auth_exit_code() {
    // No stored token, so the request fails before any network traffic.
    let output = gridflow_cmd().args(["nodes", "get", "DEU"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("auth login") || text.contains("Not logged in"),
        "Expected login hint in output:\n{text}"
    );
}

#[test]
fn test_destructive_command_requires_yes_when_non_interactive() {
    let output = gridflow_cmd()
        .args(["models", "delete", "alice:global-power"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("--yes") || text.contains("confirmation"),
        "Expected confirmation hint in output:\n{text}"
    );
}

#[test]
fn test_malformed_compound_id_is_a_validation_error() {
    let output = gridflow_cmd()
        .args(["runs", "get", "not-enough-parts"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("part") || text.contains("Invalid"),
        "Expected slug arity error in output:\n{text}"
    );
}

#[test]
fn test_malformed_timestamp_is_a_validation_error() {
    let output = gridflow_cmd()
        .args(["records", "search", "--start", "yesterday"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("RFC 3339") || text.contains("timestamp"),
        "Expected timestamp error in output:\n{text}"
    );
}

// ── Auth commands (no platform access needed) ───────────────────────

#[test]
fn test_auth_status_without_token() {
    gridflow_cmd()
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_auth_logout_is_idempotent() {
    // Clearing an absent token succeeds.
    gridflow_cmd().args(["auth", "logout"]).assert().success();
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_nodes_subcommands_exist() {
    gridflow_cmd()
        .args(["nodes", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("get").and(predicate::str::contains("search")));
}

#[test]
fn test_models_subcommands_exist() {
    gridflow_cmd()
        .args(["models", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("get")
                .and(predicate::str::contains("search"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_auth_subcommands_exist() {
    gridflow_cmd()
        .args(["auth", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("login")
                .and(predicate::str::contains("logout"))
                .and(predicate::str::contains("status")),
        );
}

#[test]
fn test_global_flags_parse() {
    // All flags should parse; the failure should be about auth, not args.
    let output = gridflow_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--api-url",
            "https://staging.example.test",
            "nodes",
            "get",
            "DEU",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
}
