//! Configuration layering tests.
//!
//! Verifies that settings resolve in the right order: built-in
//! defaults, then config files, then CLI flags.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    deprecated
)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use focus_sense_core::Recording;
use focus_sense_test_support::SyntheticFaceBuilder;
use serde_json::Value;

fn write_recording(dir: &Path, name: &str, recording: &Recording) {
    fs::write(dir.join(name), SyntheticFaceBuilder::to_jsonl(recording)).unwrap();
}

/// A command running inside `dir` with config lookup isolated to it.
fn cmd_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("focus-sense").unwrap();
    cmd.current_dir(dir);
    cmd.env("XDG_CONFIG_HOME", dir.join("xdg"));
    cmd.env("HOME", dir);
    cmd
}

#[test]
fn test_project_config_sets_output_format() {
    let temp_dir = tempfile::tempdir().unwrap();
    let calm = SyntheticFaceBuilder::steady_recording("calm", 5);
    write_recording(temp_dir.path(), "calm.jsonl", &calm);
    fs::write(
        temp_dir.path().join(".focus-sense.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let mut cmd = cmd_in(temp_dir.path());
    cmd.arg("--quiet").arg("calm.jsonl");

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.trim_start().starts_with('['),
        "config should switch output to a JSON array: {stdout}"
    );
}

#[test]
fn test_cli_flag_overrides_project_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let calm = SyntheticFaceBuilder::steady_recording("calm", 5);
    write_recording(temp_dir.path(), "calm.jsonl", &calm);
    fs::write(
        temp_dir.path().join(".focus-sense.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let mut cmd = cmd_in(temp_dir.path());
    cmd.arg("--quiet").arg("--format").arg("jsonl").arg("calm.jsonl");

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.trim_start().starts_with('{'),
        "flag should win over config: {stdout}"
    );
}

#[test]
fn test_config_file_in_parent_directory_is_found() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join(".focus-sense.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();
    let nested = temp_dir.path().join("sessions");
    fs::create_dir(&nested).unwrap();
    let calm = SyntheticFaceBuilder::steady_recording("calm", 5);
    write_recording(&nested, "calm.jsonl", &calm);

    let mut cmd = cmd_in(temp_dir.path());
    cmd.current_dir(&nested);
    cmd.arg("--quiet").arg("calm.jsonl");

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_start().starts_with('['));
}

#[test]
fn test_config_classifier_thresholds_change_classification() {
    let temp_dir = tempfile::tempdir().unwrap();
    let calm = SyntheticFaceBuilder::steady_recording("calm", 10);
    write_recording(temp_dir.path(), "calm.jsonl", &calm);

    // Without config the open-eyed session is focus-dominant.
    let mut cmd = cmd_in(temp_dir.path());
    cmd.arg("--quiet").arg("calm.jsonl");
    let output = cmd.output().unwrap();
    let result: Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).lines().next().unwrap())
            .unwrap();
    assert_eq!(result["summary"]["dominant_state"], "focused");

    // A drowsy floor above the open-eye EAR pushes every frame neutral.
    fs::write(
        temp_dir.path().join(".focus-sense.toml"),
        "[classifier]\ndrowsy_threshold = 0.35\n",
    )
    .unwrap();

    let mut cmd = cmd_in(temp_dir.path());
    cmd.arg("--quiet").arg("calm.jsonl");
    let output = cmd.output().unwrap();
    let result: Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).lines().next().unwrap())
            .unwrap();
    assert_eq!(result["summary"]["dominant_state"], "neutral");
}

#[test]
fn test_config_general_recursive() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    let calm = SyntheticFaceBuilder::steady_recording("deep", 5);
    write_recording(&nested, "deep.jsonl", &calm);
    fs::write(
        temp_dir.path().join(".focus-sense.toml"),
        "[general]\nrecursive = true\n",
    )
    .unwrap();

    let mut cmd = cmd_in(temp_dir.path());
    cmd.arg("--quiet").arg(".");

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"frames_total\":5"), "stdout: {stdout}");
}

#[test]
fn test_invalid_config_is_ignored_with_warning() {
    let temp_dir = tempfile::tempdir().unwrap();
    let calm = SyntheticFaceBuilder::steady_recording("calm", 5);
    write_recording(temp_dir.path(), "calm.jsonl", &calm);
    fs::write(temp_dir.path().join(".focus-sense.toml"), "not = [valid").unwrap();

    let mut cmd = cmd_in(temp_dir.path());
    cmd.arg("--quiet").arg("calm.jsonl");

    // The run still succeeds on defaults.
    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_start().starts_with('{'));
}
