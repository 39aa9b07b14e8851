//! CLI wiring integration tests
//!
//! Tests end-to-end CLI behavior through the real binary:
//! - Mode dispatch (table, recommend, wizard, demo, config)
//! - Exit codes
//! - Output formats
//!
//! Every test points `--config` at a temp directory so no user
//! configuration leaks in.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn referee_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_model-referee"))
}

fn run(config_dir: &TempDir, args: &[&str], stdin: Option<&str>) -> Output {
    let config_path = config_dir.path().join("config.toml");
    let mut child = Command::new(referee_binary())
        .args(args)
        .arg("--config")
        .arg(&config_path)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn model-referee");

    {
        let mut child_stdin = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            child_stdin.write_all(input.as_bytes()).unwrap();
        }
    }

    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_table_mode_prints_fixed_table() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["table"], None);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("FAKE NEWS DETECTION MODEL COMPARISON"));
    for label in [
        "Accuracy (%)",
        "Speed (ms)",
        "Training (min)",
        "Memory (MB)",
        "Interpretability",
        "Hardware",
        "Complexity",
    ] {
        assert!(stdout.contains(label), "missing row {label}");
    }
}

#[test]
fn test_recommend_json_mode() {
    let dir = TempDir::new().unwrap();
    let output = run(
        &dir,
        &[
            "recommend",
            "--dataset-size",
            "small",
            "--priority",
            "accuracy",
            "--hardware",
            "gpu",
            "--json",
        ],
        None,
    );
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["recommendation"]["model"], "Logistic Regression");
    assert_eq!(
        value["recommendation"]["reason"],
        "Good accuracy without needing large dataset"
    );
}

#[test]
fn test_wizard_mode_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["wizard"], Some("b\nc\nb\n"));
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("RECOMMENDATION: Naive Bayes"));
    assert!(stdout.contains("Easiest to implement and debug"));
}

#[test]
fn test_wizard_mode_with_closed_stdin_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["wizard"], None);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("RECOMMENDATION: Logistic Regression"));
}

#[test]
fn test_demo_fast_mode() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["demo", "--fast"], None);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("DEMO 4/4"));
    assert!(stdout.contains("🏆 RECOMMENDATION: BERT"));
}

#[test]
fn test_config_write_creates_file() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir, &["config", "--write"], None);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("port = 5000"));
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_invalid_config_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[settings]\nlog_level = \"shouting\"\n",
    )
    .unwrap();

    let output = run(&dir, &["table"], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("log level"));
}
