// ABOUTME: End-to-end tests for the pierre-strength binary
// ABOUTME: Runs analyze, suggest, and adapt against a temporary history file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io::Write;
use std::process::{Command, Output};

use common::{straight_history, BENCH};
use serde_json::Value;
use tempfile::NamedTempFile;

const AS_OF: &str = "2025-06-01T12:00:00Z";

fn history_file() -> NamedTempFile {
    let history = straight_history(3, &[100.0, 105.0, 110.0, 115.0, 120.0], &[8; 5], 3);
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&history).unwrap().as_bytes())
        .unwrap();
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pierre-strength"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_analyze_reports_pattern() {
    let file = history_file();
    let path = file.path().to_str().unwrap();

    let output = run(&[
        "analyze", "--history", path, "--exercise", BENCH, "--compound", "--as-of", AS_OF,
    ]);
    let json = stdout_json(&output);

    assert_eq!(json["pattern"], "progressive_overload");
    assert_eq!(json["sessions_analyzed"], 5);
    assert_eq!(json["set_arrangement"], "straight_across");
}

#[test]
fn test_suggest_prints_planned_sets() {
    let file = history_file();
    let path = file.path().to_str().unwrap();

    let output = run(&[
        "suggest",
        "--history",
        path,
        "--exercise",
        "bench press",
        "--compound",
        "--as-of",
        AS_OF,
        "--sets",
        "2",
        "--equipment",
        "barbell",
    ]);
    let json = stdout_json(&output);

    let sets = json["sets"].as_array().unwrap();
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0]["weight"], 125.0);
    assert_eq!(sets[0]["reps"], 8);
    assert_eq!(sets[0]["completed"], false);
}

#[test]
fn test_adapt_prints_next_target() {
    let output = run(&[
        "adapt",
        "--suggested-weight",
        "100",
        "--suggested-reps",
        "8",
        "--actual-weight",
        "100",
        "--actual-reps",
        "11",
        "--equipment",
        "barbell",
        "--compound",
    ]);
    let json = stdout_json(&output);

    assert_eq!(json["weight"], 105.0);
    assert_eq!(json["reps"], 8);
    assert_eq!(json["adjustment"], "increase");
}

#[test]
fn test_missing_history_file_fails() {
    let output = run(&[
        "analyze",
        "--history",
        "/nonexistent/pierre-history.json",
        "--exercise",
        BENCH,
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read history file"));
}
