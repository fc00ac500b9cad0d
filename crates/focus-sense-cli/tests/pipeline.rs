//! Pipeline integration tests using synthetic recordings.
//!
//! Tests the full analysis pipeline with programmatically generated
//! landmark recordings.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    deprecated
)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use focus_sense_core::Recording;
use focus_sense_test_support::SyntheticFaceBuilder;
use serde_json::Value;

/// Writes a recording's JSONL wire form into a directory.
fn write_recording(dir: &Path, name: &str, recording: &Recording) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, SyntheticFaceBuilder::to_jsonl(recording)).unwrap();
    path
}

fn parse_jsonl(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

// === Calm Session Tests ===

#[test]
fn test_steady_session_is_focus_dominant() {
    let temp_dir = tempfile::tempdir().unwrap();
    let calm = SyntheticFaceBuilder::steady_recording("calm", 20);
    let path = write_recording(temp_dir.path(), "calm.jsonl", &calm);

    let mut cmd = Command::cargo_bin("focus-sense").unwrap();
    cmd.arg("--quiet").arg(&path);

    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let results = parse_jsonl(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["summary"]["dominant_state"], "focused");
    assert_eq!(results[0]["frames_total"], 20);
    assert_eq!(results[0]["summary"]["focused"], 20);
}

// === Stressed Session Tests ===

#[test]
fn test_rapid_blinking_session_exits_nonzero() {
    let temp_dir = tempfile::tempdir().unwrap();
    let stressed = SyntheticFaceBuilder::rapid_blink_recording("stressed", 120);
    let path = write_recording(temp_dir.path(), "stressed.jsonl", &stressed);

    let mut cmd = Command::cargo_bin("focus-sense").unwrap();
    cmd.arg("--quiet").arg(&path);

    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(1), "stress-dominant exits 1");

    let results = parse_jsonl(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(results[0]["summary"]["dominant_state"], "stressed");
    assert!(results[0]["summary"]["blinks"].as_u64().unwrap() > 10);
}

// === Face Routing Tests ===

#[test]
fn test_faceless_session_has_no_dominant_state() {
    let temp_dir = tempfile::tempdir().unwrap();
    let empty = SyntheticFaceBuilder::faceless_recording("away", 6);
    let path = write_recording(temp_dir.path(), "away.jsonl", &empty);

    let mut cmd = Command::cargo_bin("focus-sense").unwrap();
    cmd.arg("--quiet").arg(&path);

    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let results = parse_jsonl(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(results[0]["summary"]["no_face"], 6);
    assert!(results[0]["summary"].get("dominant_state").is_none());
}

#[test]
fn test_per_frame_records_with_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut recording = SyntheticFaceBuilder::steady_recording("mixed", 2);
    recording.frames.push(SyntheticFaceBuilder::faceless_frame());
    recording.frames.push(SyntheticFaceBuilder::crowd_frame());
    let path = write_recording(temp_dir.path(), "mixed.jsonl", &recording);

    let mut cmd = Command::cargo_bin("focus-sense").unwrap();
    cmd.arg("--quiet").arg("--frames").arg(&path);

    let output = cmd.output().unwrap();
    let results = parse_jsonl(&String::from_utf8_lossy(&output.stdout));

    let frames = results[0]["frames"].as_array().unwrap();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0]["status"], "analyzed");
    assert!(frames[0]["reading"].is_object());
    assert_eq!(frames[2]["status"], "no_face");
    assert!(frames[2].get("reading").is_none());
    assert_eq!(frames[3]["status"], "multiple_faces");
}

#[test]
fn test_frames_omitted_by_default() {
    let temp_dir = tempfile::tempdir().unwrap();
    let calm = SyntheticFaceBuilder::steady_recording("lean", 3);
    let path = write_recording(temp_dir.path(), "lean.jsonl", &calm);

    let mut cmd = Command::cargo_bin("focus-sense").unwrap();
    cmd.arg("--quiet").arg(&path);

    let output = cmd.output().unwrap();
    let results = parse_jsonl(&String::from_utf8_lossy(&output.stdout));
    assert!(results[0].get("frames").is_none());
}

// === Error Handling Tests ===

#[test]
fn test_malformed_recording_is_skipped() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("broken.jsonl"), "{not json\n").unwrap();
    let calm = SyntheticFaceBuilder::steady_recording("ok", 10);
    write_recording(temp_dir.path(), "ok.jsonl", &calm);

    let mut cmd = Command::cargo_bin("focus-sense").unwrap();
    cmd.arg(temp_dir.path());

    let output = cmd.output().unwrap();
    // The good recording still processes; the bad one is skipped.
    assert_eq!(output.status.code(), Some(0));

    let results = parse_jsonl(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(results.len(), 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skipping"), "stderr: {stderr}");
}

#[test]
fn test_multiple_recordings_batch() {
    let temp_dir = tempfile::tempdir().unwrap();
    for name in ["a", "b", "c"] {
        let rec = SyntheticFaceBuilder::steady_recording(name, 5);
        write_recording(temp_dir.path(), &format!("{name}.jsonl"), &rec);
    }

    let mut cmd = Command::cargo_bin("focus-sense").unwrap();
    cmd.arg("--quiet").arg(temp_dir.path());

    let output = cmd.output().unwrap();
    let results = parse_jsonl(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(results.len(), 3);
}

// === Threshold Override Tests ===

#[test]
fn test_drowsy_threshold_flag_changes_classification() {
    let temp_dir = tempfile::tempdir().unwrap();
    let calm = SyntheticFaceBuilder::steady_recording("calm", 20);
    let path = write_recording(temp_dir.path(), "calm.jsonl", &calm);

    // Raise the drowsy floor above the open-eye EAR (0.3): every
    // frame now reads too-closed and the session goes neutral.
    let mut cmd = Command::cargo_bin("focus-sense").unwrap();
    cmd.arg("--quiet")
        .arg("--drowsy-threshold")
        .arg("0.35")
        .arg(&path);

    let output = cmd.output().unwrap();
    let results = parse_jsonl(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(results[0]["summary"]["dominant_state"], "neutral");
    assert_eq!(results[0]["summary"]["neutral"], 20);
}
