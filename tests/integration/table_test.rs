use std::path::PathBuf;
use std::process::{Command, Output};

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_anvil"))
}

fn run_anvil(args: &[&str]) -> Output {
    let output = Command::new(get_binary_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute anvil");

    if !output.status.success() {
        panic!(
            "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
    }
    output
}

#[test]
fn test_table_forward_rows() {
    let output = run_anvil(&["table", "--max", "3"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = "0:0 []\n\t[]\n\
                    1:2 [-6, 7]\n\t[\"medium hit\", \"bend\"]\n\
                    2:1 [2]\n\t[\"punch\"]\n\
                    3:3 [-6, 2, 7]\n\t[\"medium hit\", \"punch\", \"bend\"]";
    assert_eq!(stdout.trim_end(), expected);
}

#[test]
fn test_table_mirrored_rows() {
    let output = run_anvil(&["table", "--max", "2", "--mirrored"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-1:2 [-2, 3]"), "stdout: {stdout}");
    assert!(stdout.contains("[\"punch\", \"light hit\"]"), "stdout: {stdout}");
    assert!(stdout.contains("-2:1 [-2]"), "stdout: {stdout}");
}

#[test]
fn test_table_json_has_one_entry_per_value() {
    let output = run_anvil(&["--format", "json", "table", "--max", "30"]);
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let rows = value.as_array().expect("table should be an array");
    assert_eq!(rows.len(), 31);

    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row["target"], index as i64);
        assert_eq!(row["outcome"], "found");
        let total: i64 = row["operations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|delta| delta.as_i64().unwrap())
            .sum();
        assert_eq!(total, index as i64);
    }
}

#[test]
fn test_table_stats() {
    let output = run_anvil(&["--algorithm", "exact", "table", "--max", "10", "--stats"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Algorithm: exact"), "stderr: {stderr}");
    assert!(stderr.contains("Frontier high water"), "stderr: {stderr}");
}

#[test]
fn test_vocab_prints_json() {
    let output = run_anvil(&["vocab"]);
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let operations = value["operations"].as_array().unwrap();
    assert_eq!(operations.len(), 8);
    assert_eq!(operations[0]["delta"], 2);
    assert_eq!(operations[0]["label"], "punch");

    let output = run_anvil(&["vocab", "--mirrored"]);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["operations"][0]["delta"], -2);
    assert_eq!(value["operations"][7]["delta"], 15);
}
