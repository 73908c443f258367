use std::fs;
use std::process::{Command, Output};

fn run_tabq(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tabq"))
        .args(args)
        .env_remove("TABQ_DATA")
        .env_remove("TABQ_SCHEMA")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tabq")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_filters_combine_and_print_keys() {
    let output = run_tabq(&[
        "-f",
        "status:equals:Active",
        "-f",
        "age:greaterThan:30",
        "--format",
        "keys",
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["Emma Thompson"]);
}

#[test]
fn test_incomplete_tags_are_skipped_with_warning() {
    let output = run_tabq(&[
        "-f",
        "age:equals:",
        "-f",
        "age::30",
        "-f",
        "age:lessThan:28",
        "--format",
        "keys",
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["Michael Chen"]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("ignoring incomplete filter"));
}

#[test]
fn test_malformed_tag_exits_2() {
    let output = run_tabq(&["-f", "status:equals"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing value"));
}

#[test]
fn test_no_matching_rows_exits_1() {
    let output = run_tabq(&["-f", "age:greaterThan:99"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_table_output_has_header() {
    let output = run_tabq(&["-f", "name:contains:olivia"]);
    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Name"));
    assert!(lines[1].starts_with("Olivia Kim"));
}

#[test]
fn test_values_sorted_by_field_type() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("people.yaml");
    fs::write(&data, "- {name: a, age: 100}\n- {name: b, age: 5}\n- {name: c, age: 27}\n").unwrap();

    let output = run_tabq(&["--data", data.to_str().unwrap(), "--values", "age"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["5", "27", "100"]);
}

#[test]
fn test_missing_data_file_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.yaml");
    let output = run_tabq(&["--data", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}
