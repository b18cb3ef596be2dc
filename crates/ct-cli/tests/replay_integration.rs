//! Integration tests for the `ct` binary.
//!
//! Drives `ct replay` and `ct path` as a subprocess with an isolated
//! environment and checks the timings file they leave behind.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use regex::Regex;
use tempfile::TempDir;

const TS: &str = r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z";

fn ct(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ct"));
    cmd.current_dir(cwd)
        .env("HOME", cwd)
        .env_remove("ANSIBLE_CSV_PATH")
        .env_remove("RUST_LOG");
    cmd
}

fn replay_stdin(mut cmd: Command, events: &str) -> Output {
    let mut child = cmd
        .arg("replay")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn ct replay");

    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(events.as_bytes()).unwrap();
    }

    child.wait_with_output().expect("failed to wait for ct replay")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "ct failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

const TWO_TASKS: &str = r#"{"event":"task_started","task":"A","host":"web-01"}
{"event":"task_started","task":"B","host":"web-01"}
{"event":"task_finished","task":"A","outcome":"ok"}
{"event":"task_finished","task":"B","outcome":"failed"}
{"event":"run_finished"}
"#;

#[test]
fn test_replay_writes_configured_path() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("reports").join("times.csv");

    let mut cmd = ct(temp.path());
    cmd.env("ANSIBLE_CSV_PATH", &out);
    let output = replay_stdin(cmd, TWO_TASKS);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        format!("CSV timing written to {}", out.display())
    );

    let content = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "task,start,end");
    assert!(Regex::new(&format!("^A,{TS},{TS}$")).unwrap().is_match(lines[1]));
    assert!(Regex::new(&format!("^B,{TS},{TS}$")).unwrap().is_match(lines[2]));
}

#[test]
fn test_replay_defaults_to_task_times_in_cwd() {
    let temp = TempDir::new().unwrap();

    let output = replay_stdin(ct(temp.path()), r#"{"event":"run_finished"}"#);
    assert_success(&output);

    let content = std::fs::read_to_string(temp.path().join("task_times.csv")).unwrap();
    assert_eq!(content, "task,start,end\n");
}

#[test]
fn test_replay_expands_home_in_configured_path() {
    let temp = TempDir::new().unwrap();

    let mut cmd = ct(temp.path());
    cmd.env("ANSIBLE_CSV_PATH", "~/timings/run.csv");
    let output = replay_stdin(
        cmd,
        r#"{"event":"task_finished","task":"X","outcome":"skipped"}
{"event":"run_finished"}
"#,
    );
    assert_success(&output);

    let content = std::fs::read_to_string(temp.path().join("timings").join("run.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(Regex::new(&format!("^X,,{TS}$")).unwrap().is_match(lines[1]));
}

#[test]
fn test_replay_from_file_argument() {
    let temp = TempDir::new().unwrap();
    let events = temp.path().join("events.jsonl");
    std::fs::write(&events, TWO_TASKS).unwrap();

    let output = ct(temp.path())
        .arg("replay")
        .arg(&events)
        .output()
        .expect("failed to run ct replay");
    assert_success(&output);

    let content = std::fs::read_to_string(temp.path().join("task_times.csv")).unwrap();
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_aborted_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    let output = replay_stdin(
        ct(temp.path()),
        r#"{"event":"task_started","task":"A"}
{"event":"task_finished","task":"A"}
"#,
    );
    assert_success(&output);

    assert!(output.stdout.is_empty());
    assert!(!temp.path().join("task_times.csv").exists());
}

#[test]
fn test_unwritable_output_fails() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("occupied");
    std::fs::write(&blocker, "").unwrap();

    let mut cmd = ct(temp.path());
    cmd.env("ANSIBLE_CSV_PATH", blocker.join("times.csv"));
    let output = replay_stdin(cmd, r#"{"event":"run_finished"}"#);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to write task timings"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_missing_event_file_fails() {
    let temp = TempDir::new().unwrap();

    let output = ct(temp.path())
        .arg("replay")
        .arg("missing.jsonl")
        .output()
        .expect("failed to run ct replay");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open missing.jsonl"), "{stderr}");
}

#[test]
fn test_path_command_reports_resolved_path() {
    let temp = TempDir::new().unwrap();

    let output = ct(temp.path())
        .env("ANSIBLE_CSV_PATH", "~/out.csv")
        .arg("path")
        .output()
        .expect("failed to run ct path");
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        temp.path().join("out.csv").display().to_string()
    );
}
