//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    run_cli_with_stdin(data_dir, args, None)
}

fn run_cli_with_stdin(data_dir: &Path, args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_taskrank"))
        .args(args)
        .env("TASKRANK_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    if let Some(input) = stdin {
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
    } else {
        drop(child.stdin.take());
    }

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI command failed {:?}: {}", args, stderr);
    stdout
}

fn add_task(dir: &Path, title: &str, due: &str, hours: &str, importance: &str) {
    run_cli_success(
        dir,
        &["task", "add", title, "--due", due, "--hours", hours, "--importance", importance],
    );
}

#[test]
fn test_task_add_and_list_json() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        dir.path(),
        &["task", "add", "Write tests", "--due", "2025-03-12", "--hours", "4", "--importance", "9"],
    );
    assert!(out.contains("Task added: #1"));

    let out = run_cli_success(dir.path(), &["task", "list", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(tasks.as_array().unwrap().len(), 1);
    assert_eq!(tasks[0]["title"], "Write tests");
    assert_eq!(tasks[0]["importance"], 9);
}

#[test]
fn test_task_add_rejects_out_of_range_importance() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(
        dir.path(),
        &["task", "add", "Bad", "--due", "2025-03-12", "--hours", "1", "--importance", "11"],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("importance"));
}

#[test]
fn test_analyze_json_matches_worked_example() {
    let dir = tempfile::tempdir().unwrap();
    add_task(dir.path(), "Fix login", "2025-03-12", "4", "9");

    let out = run_cli_success(dir.path(), &["analyze", "--date", "2025-03-10", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["strategy_used"], "smart_balance");
    assert_eq!(json["total_tasks"], 1);
    assert_eq!(json["tasks"][0]["priority_score"], 0.68);
    assert_eq!(json["tasks"][0]["component_scores"]["urgency"], 0.6);
    assert_eq!(json["suggested_tasks"][0]["rank"], 1);
}

#[test]
fn test_analyze_empty_list_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["analyze"]);
    assert!(out.contains("No tasks analyzed yet"));

    let out = run_cli_success(dir.path(), &["suggest", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["suggested_tasks"].as_array().unwrap().len(), 0);
}

#[test]
fn test_import_from_stdin_and_suggest() {
    let dir = tempfile::tempdir().unwrap();
    let payload = r#"{"strategy": "fastest_wins", "tasks": [
        {"title": "Long", "due_date": "2025-04-30", "estimated_hours": 12, "importance": 8},
        {"title": "Quick", "due_date": "2025-04-30", "estimated_hours": 0.5, "importance": 4}
    ]}"#;
    let (out, stderr, code) = run_cli_with_stdin(dir.path(), &["task", "import", "-"], Some(payload));
    assert_eq!(code, 0, "import failed: {stderr}");
    assert!(out.contains("Loaded 2 tasks from JSON"));

    let out = run_cli_success(dir.path(), &["strategy", "show"]);
    assert!(out.contains("fastest_wins"));

    let out = run_cli_success(dir.path(), &["suggest", "--date", "2025-04-01", "-n", "1", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["suggested_tasks"].as_array().unwrap().len(), 1);
    assert_eq!(json["suggested_tasks"][0]["title"], "Quick");
}

#[test]
fn test_import_rejects_incomplete_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, r#"[{"title": "No date", "estimated_hours": 1, "importance": 3}]"#).unwrap();

    let (_, stderr, code) = run_cli(dir.path(), &["task", "import", path.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Task 1 is missing required fields"));
}

#[test]
fn test_analyze_refuses_circular_dependencies() {
    let dir = tempfile::tempdir().unwrap();
    let payload = r#"[
        {"title": "A", "due_date": "2025-04-30", "estimated_hours": 1, "importance": 5, "dependencies": [2]},
        {"title": "B", "due_date": "2025-04-30", "estimated_hours": 1, "importance": 5, "dependencies": [1]}
    ]"#;
    run_cli_with_stdin(dir.path(), &["task", "import", "-"], Some(payload));

    let (_, stderr, code) = run_cli(dir.path(), &["analyze"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Circular dependencies detected"));
}

#[test]
fn test_unknown_strategy_flag_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["task", "sample", "--date", "2025-03-10"]);

    let fallback = run_cli_success(
        dir.path(),
        &["analyze", "--date", "2025-03-10", "--strategy", "mystery", "--json"],
    );
    let smart = run_cli_success(
        dir.path(),
        &["analyze", "--date", "2025-03-10", "--strategy", "smart_balance", "--json"],
    );
    let fallback: serde_json::Value = serde_json::from_str(&fallback).unwrap();
    let smart: serde_json::Value = serde_json::from_str(&smart).unwrap();
    assert_eq!(fallback["tasks"], smart["tasks"]);
}

#[test]
fn test_strategy_flag_does_not_change_session_strategy() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["task", "sample", "--date", "2025-03-10"]);
    run_cli_success(dir.path(), &["strategy", "set", "high_impact"]);

    let out = run_cli_success(
        dir.path(),
        &["analyze", "--date", "2025-03-10", "--strategy", "mystry", "--json"],
    );
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["strategy_used"], "smart_balance");

    run_cli_success(
        dir.path(),
        &["analyze", "--date", "2025-03-10", "--strategy", "fastest_wins"],
    );
    let out = run_cli_success(dir.path(), &["strategy", "show"]);
    assert!(out.contains("high_impact"), "strategy changed: {out}");
}

#[test]
fn test_strategy_set_rejects_unknown_name() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["strategy", "set", "mystery"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown strategy"));

    run_cli_success(dir.path(), &["strategy", "set", "high_impact"]);
    let out = run_cli_success(dir.path(), &["strategy", "show"]);
    assert!(out.contains("High Impact"));
}

#[test]
fn test_config_get_set_list() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["config", "get", "analysis.suggestion_count"]);
    assert_eq!(out.trim(), "3");

    run_cli_success(dir.path(), &["config", "set", "analysis.suggestion_count", "5"]);
    let out = run_cli_success(dir.path(), &["config", "get", "analysis.suggestion_count"]);
    assert_eq!(out.trim(), "5");

    let out = run_cli_success(dir.path(), &["config", "list"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["analysis"]["suggestion_count"], 5);

    let (_, _, code) = run_cli(dir.path(), &["config", "get", "analysis.nope"]);
    assert_ne!(code, 0);
}

#[test]
fn test_task_clear() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["task", "sample"]);
    run_cli_success(dir.path(), &["task", "clear"]);
    let out = run_cli_success(dir.path(), &["task", "list"]);
    assert!(out.contains("No tasks yet"));
}
