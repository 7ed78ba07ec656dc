use std::process::{Command, Output};

mod common;
use crate::common::utils::{fixture, scratch_dir};

fn run_bin(args: &[&str]) -> Output {
    // Point --config at a missing file so a local field-delegate.yaml cannot leak in
    Command::new(env!("CARGO_BIN_EXE_field-delegate"))
        .arg("--config")
        .arg("nonexistent_field_delegate_config.yaml")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

// ============================================================================
// read
// ============================================================================

#[test]
fn read_valid_field_prints_value() {
    let out = run_bin(&["read", "--field", "image"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "image_100");
}

#[test]
fn read_invalid_field_prints_display_message_and_fails() {
    let out = run_bin(&["read", "--field", "age"]);
    assert_eq!(out.status.code(), Some(1));

    let err = stderr(&out);
    assert!(
        err.contains("Error: invalid delegated field 'age' (expected one of: image, text)"),
        "unexpected stderr: {}",
        err
    );
    assert!(!err.contains("ValidationError {"), "Debug form leaked: {}", err);
    assert!(stdout(&out).is_empty());
}

// ============================================================================
// check / resolve
// ============================================================================

#[test]
fn check_missing_layout_prints_readable_error() {
    let out = run_bin(&["check", "--layout", "no_such_layout_file.yaml"]);
    assert_eq!(out.status.code(), Some(1));

    let err = stderr(&out);
    assert!(
        err.contains("Error: Failed to read layout 'no_such_layout_file.yaml'"),
        "unexpected stderr: {}",
        err
    );
    assert!(!err.contains("Os {"), "Debug form leaked: {}", err);
}

#[test]
fn check_passing_layout_exits_zero() {
    let out = run_bin(&["check", "--layout", &fixture("layouts/home.yaml")]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("ok    home_screen"));
}

#[test]
fn resolve_with_rejected_layout_exits_one() {
    let dir = scratch_dir("bin_resolve");
    let report = dir.join("report.txt");

    let out = run_bin(&[
        "resolve",
        "--layout",
        &fixture("layouts"),
        "-o",
        report.to_str().unwrap(),
    ]);
    assert_eq!(out.status.code(), Some(1));

    let text = std::fs::read_to_string(&report).unwrap();
    assert!(text.contains("2 resolved, 1 failed (3 total)"));
}
