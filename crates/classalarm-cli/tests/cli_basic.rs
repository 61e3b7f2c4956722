//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. `--at` pins the
//! current time so countdowns are deterministic.

use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "classalarm-cli", "--"])
        .args(args)
        .env("CLASSALARM_ENV", "dev")
        .env("CLASSALARM_LOG", "off")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_cr_list() {
    let (code, stdout, _) = run_cli(&["cr", "list"]);
    assert_eq!(code, 0, "cr list failed");
    assert!(stdout.contains("Submitted Classes"));
    assert!(stdout.contains("Algorithms"));
}

#[test]
fn test_cr_list_json() {
    let (code, stdout, _) = run_cli(&["cr", "list", "--json"]);
    assert_eq!(code, 0, "cr list --json failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["submitted"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["form"]["subject"], "");
}

#[test]
fn test_cr_submit() {
    let (code, stdout, _) = run_cli(&[
        "cr",
        "submit",
        "--subject",
        "Compilers",
        "--venue",
        "Room 9",
        "--date",
        "2024-03-04",
        "--time",
        "13:15",
    ]);
    assert_eq!(code, 0, "cr submit failed");
    assert!(stdout.contains("Class submitted! (This is just a prototype)"));
    assert!(!stdout.contains("Compilers"));
}

#[test]
fn test_cr_submit_json_keeps_list() {
    let (code, stdout, _) = run_cli(&[
        "--json",
        "cr",
        "submit",
        "--subject",
        "Compilers",
        "--venue",
        "Room 9",
        "--date",
        "2024-03-04",
        "--time",
        "13:15",
    ]);
    assert_eq!(code, 0, "cr submit --json failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["submission"]["subject"], "Compilers");
    assert_eq!(parsed["panel"]["submitted"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["panel"]["form"]["time"], "");
}

#[test]
fn test_cr_submit_rejects_bad_time() {
    let (code, _, stderr) = run_cli(&[
        "cr",
        "submit",
        "--subject",
        "Compilers",
        "--venue",
        "Room 9",
        "--date",
        "2024-03-04",
        "--time",
        "1pm",
    ]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid time '1pm'"));
}

#[test]
fn test_student_today() {
    let (code, stdout, _) = run_cli(&["student", "today", "--at", "08:00"]);
    assert_eq!(code, 0, "student today failed");
    assert!(stdout.contains("Current time: 08:00"));
    assert!(stdout.contains("1h 0m until class"));
    assert!(stdout.contains("Alarm at 08:40"));
}

#[test]
fn test_student_today_after_first_class() {
    let (code, stdout, _) = run_cli(&["student", "today", "--at", "09:30"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Class has ended"));
}

#[test]
fn test_student_summary_json() {
    let (code, stdout, _) = run_cli(&["student", "summary", "--at", "10:45", "--json"]);
    assert_eq!(code, 0, "student summary failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["total"], 4);
    assert_eq!(parsed["upcoming"], 3);
}

#[test]
fn test_alarms_check() {
    let (code, stdout, _) = run_cli(&["alarms", "check", "--at", "08:50"]);
    assert_eq!(code, 0, "alarms check failed");
    assert!(stdout.contains("Data Structures"));
}

#[test]
fn test_alarms_watch_bounded() {
    let (code, stdout, _) = run_cli(&[
        "alarms",
        "watch",
        "--at",
        "08:50",
        "--interval",
        "1",
        "--ticks",
        "2",
    ]);
    assert_eq!(code, 0, "alarms watch failed");
    assert_eq!(stdout.matches("Data Structures").count(), 1);
    assert!(stdout.contains("No alarms due"));
}

#[test]
fn test_alarms_watch_json_one_line_per_tick() {
    let (code, stdout, _) = run_cli(&[
        "--json",
        "alarms",
        "watch",
        "--at",
        "08:50",
        "--interval",
        "1",
        "--ticks",
        "2",
    ]);
    assert_eq!(code, 0, "alarms watch --json failed");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(first[0]["subject"], "Data Structures");
    assert_eq!(second.as_array().unwrap().len(), 0);
}

#[test]
fn test_rejects_bad_at() {
    let (code, _, _) = run_cli(&["student", "today", "--at", "25:00"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_get() {
    let (code, _, _) = run_cli(&["config", "get", "logging.level"]);
    assert_eq!(code, 0, "config get failed");
}

#[test]
fn test_config_list() {
    let (code, stdout, _) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("offset_minutes"));
}

#[test]
fn test_config_set_rejects_unlisted_offset() {
    let (code, _, _) = run_cli(&["config", "set", "alarm.offset_minutes", "25"]);
    assert_eq!(code, 1);
}
