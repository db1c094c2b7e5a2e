use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_anvil"))
}

fn run_anvil(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute anvil")
}

fn stdout_of(output: &Output) -> String {
    if !output.status.success() {
        panic!(
            "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
    }
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_vocab(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write vocabulary");
    file
}

#[test]
fn test_solve_positive_target() {
    let stdout = stdout_of(&run_anvil(&["solve", "5"]));
    assert_eq!(
        stdout.trim_end(),
        "Target 5:\nActions (3 hits): [-9, 7, 7]\nNames: [\"heavy hit\", \"bend\", \"bend\"]"
    );
}

#[test]
fn test_solve_defaults_to_zero() {
    let stdout = stdout_of(&run_anvil(&["solve"]));
    assert!(stdout.contains("Target 0:"), "stdout: {stdout}");
    assert!(stdout.contains("Actions (0 hits): []"), "stdout: {stdout}");
}

#[test]
fn test_solve_negative_target() {
    let stdout = stdout_of(&run_anvil(&["solve", "-5"]));
    assert!(stdout.contains("Target -5:"), "stdout: {stdout}");
    assert!(stdout.contains("Actions (3 hits): [-7, 3, 9]"), "stdout: {stdout}");
    assert!(stdout.contains("\"light hit\""), "stdout: {stdout}");
}

#[test]
fn test_solve_json_output() {
    let stdout = stdout_of(&run_anvil(&["--format", "json", "solve", "10"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(value["outcome"], "found");
    assert_eq!(value["count"], 2);
    assert_eq!(value["operations"], serde_json::json!([-3, 13]));
    assert_eq!(value["labels"], serde_json::json!(["light hit", "upset"]));
}

#[test]
fn test_solve_large_target() {
    let stdout = stdout_of(&run_anvil(&["--format", "json", "solve", "200000"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(value["outcome"], "found");
    assert_eq!(value["count"], 12_500);
    assert_eq!(value["operations"].as_array().map(Vec::len), Some(12_500));
}

#[test]
fn test_solve_no_solution_is_not_an_error() {
    let vocab = write_vocab(
        r#"{"operations": [{"delta": 3, "label": "tap"}, {"delta": 5, "label": "strike"}]}"#,
    );
    let path = vocab.path().to_str().unwrap();

    let stdout = stdout_of(&run_anvil(&["--vocab", path, "solve", "1"]));
    assert_eq!(stdout.trim_end(), "Target 1: no solution exists");

    let stdout = stdout_of(&run_anvil(&["--vocab", path, "solve", "8"]));
    assert!(stdout.contains("Actions (2 hits): [3, 5]"), "stdout: {stdout}");
    assert!(stdout.contains("[\"tap\", \"strike\"]"), "stdout: {stdout}");
}

#[test]
fn test_solve_exact_algorithm() {
    let vocab = write_vocab(
        r#"{"operations": [{"delta": 4, "label": "push"}, {"delta": -1, "label": "nudge"}]}"#,
    );
    let path = vocab.path().to_str().unwrap();

    let stdout = stdout_of(&run_anvil(&["--vocab", path, "solve", "1"]));
    assert!(stdout.contains("no solution exists"), "stdout: {stdout}");

    let stdout = stdout_of(&run_anvil(&["--vocab", path, "--algorithm", "exact", "solve", "1"]));
    assert!(stdout.contains("Actions (4 hits): [-1, -1, -1, 4]"), "stdout: {stdout}");
}

#[test]
fn test_solve_stats_go_to_stderr() {
    let output = run_anvil(&["solve", "20", "--stats"]);
    let stdout = stdout_of(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("Search Statistics"));
    assert!(stderr.contains("Search Statistics"), "stderr: {stderr}");
    assert!(stderr.contains("Algorithm: sweep"), "stderr: {stderr}");
    assert!(stderr.contains("Search bound: 37"), "stderr: {stderr}");
}

#[test]
fn test_invalid_vocabulary_fails() {
    let vocab = write_vocab(
        r#"{"operations": [{"delta": 2, "label": "punch"}, {"delta": 2, "label": "tap"}]}"#,
    );
    let output = run_anvil(&["--vocab", vocab.path().to_str().unwrap(), "solve", "4"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid vocabulary"), "stderr: {stderr}");
}

#[test]
fn test_missing_vocabulary_file_fails() {
    let output = run_anvil(&["--vocab", "/nonexistent/anvil-vocab.json", "solve", "4"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("IO error"), "stderr: {stderr}");
}

#[test]
fn test_bound_limit_fails() {
    let output = run_anvil(&["--max-bound", "50", "solve", "100"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exceeds the configured limit"), "stderr: {stderr}");
}
