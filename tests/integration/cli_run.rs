#![allow(missing_docs)]

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;

fn stdout_of(args: &[&str]) -> String {
    let output = cargo_bin_cmd!("loopbench")
        .env_remove("LOOPBENCH_RUNS")
        .env_remove("LOOPBENCH_ARR_LENGTH")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("utf8 stdout")
}

#[test]
fn markdown_report_has_four_tables() {
    let stdout = stdout_of(&["3", "10", "--seed", "7"]);
    assert!(stdout.contains("runs=3, arr_length=10"));
    for label in ["Filter", "For Loop", "Reverse For Loop", "Map", "forEach"] {
        assert!(
            stdout.lines().any(|line| line == label),
            "missing progress label {label}"
        );
    }
    assert_eq!(stdout.matches("| Type | Average | Max | Min | Total |").count(), 4);
    for title in ["Integers", "Records", "Reused Integers", "Reused Records"] {
        assert!(stdout.contains(&format!("### {title}")), "missing {title}");
    }
}

#[test]
fn text_format_prints_average_lines() {
    let stdout = stdout_of(&["2", "5", "--format", "text"]);
    let lines = stdout
        .lines()
        .filter(|line| line.starts_with("Average "))
        .count();
    assert_eq!(lines, 7 * 4);
}

#[test]
fn json_format_is_parseable() {
    let stdout = stdout_of(&["--runs", "2", "--arr-length", "8", "--format", "json"]);
    let json: Value = serde_json::from_str(&stdout).expect("valid json");
    let sections = json["sections"].as_array().expect("sections");
    assert_eq!(sections.len(), 4);
    for section in sections {
        let rows = section["rows"].as_array().expect("rows");
        assert_eq!(rows.len(), 7);
        for row in rows {
            assert_eq!(row["samples"], 2);
            assert!(row["min"].as_f64().expect("min") >= 0.0);
        }
    }
}

#[test]
fn unparsable_arguments_fall_back_to_defaults() {
    let stdout = stdout_of(&["--runs", "1", "--arr-length", "nope", "--format", "json"]);
    let json: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json["sections"][0]["rows"][0]["samples"], 1);
}

#[test]
fn env_configures_runs() {
    let output = cargo_bin_cmd!("loopbench")
        .env("LOOPBENCH_RUNS", "3")
        .env("LOOPBENCH_ARR_LENGTH", "4")
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["sections"][2]["rows"][3]["samples"], 3);
}

#[test]
fn env_wins_over_positional_counts() {
    let output = cargo_bin_cmd!("loopbench")
        .env("LOOPBENCH_RUNS", "2")
        .env_remove("LOOPBENCH_ARR_LENGTH")
        .args(["5", "4", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["sections"][0]["rows"][0]["samples"], 2);
}

#[test]
fn invalid_log_filter_fails() {
    cargo_bin_cmd!("loopbench")
        .args(["1", "1", "--log-level", "loopbench=verbose"])
        .assert()
        .failure();
}
