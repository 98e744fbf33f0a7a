//! End-to-end tests for the answer-rules binary.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_answer-rules"))
        .args(["--color", "never"])
        .args(args)
        .env_remove("ANSWER_RULES_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn rule_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn classify_reads_values_in_declared_types() {
    let output = run(&[
        "classify",
        "--interaction",
        "NumericInput",
        "--rule",
        "Equals",
        "--answer",
        "1.000052",
        "--param",
        "x=1.000051",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(stdout(&output), "true");
}

#[test]
fn classify_accepts_tagged_json_and_structured_text() {
    let output = run(&[
        "classify",
        "--interaction",
        "DragAndDropSortInput",
        "--rule",
        "HasElementXAtPositionY",
        "--answer",
        r#"[["a"], ["b", "c"]]"#,
        "-p",
        "x=c",
        "-p",
        r#"y={"type": "NON_NEGATIVE_INT", "value": 2}"#,
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["matched"], serde_json::Value::Bool(true));
}

#[test]
fn classify_negative_fraction_answer() {
    let output = run(&[
        "classify",
        "--interaction",
        "FractionInput",
        "--rule",
        "IsEquivalentTo",
        "--answer",
        "-1 1/2",
        "-p",
        "f=-3/2",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(stdout(&output), "true");
}

#[test]
fn classify_reports_type_mismatch_as_data_error() {
    let output = run(&[
        "classify",
        "--interaction",
        "NumericInput",
        "--rule",
        "Equals",
        "--answer",
        "1.5",
        "-p",
        r#"x={"type": "NORMALIZED_STRING", "value": "test"}"#,
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    let error: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(
        error["error"],
        "Expected input value to be of type REAL not NORMALIZED_STRING"
    );
}

#[test]
fn classify_unknown_rule_is_a_data_error() {
    let output = run(&[
        "classify",
        "--interaction",
        "NumericInput",
        "--rule",
        "Equal",
        "--answer",
        "1.5",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    assert!(output.stdout.is_empty());
}

#[test]
fn rules_lists_the_catalogue_as_json() {
    let output = run(&["rules", "--interaction", "RatioExpressionInput", "--json"]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    let rules: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rules.len(), 4);
    assert_eq!(rules[3]["rule"], "HasSpecificTermEqualTo");
    assert_eq!(rules[3]["answer_type"], "RATIO_EXPRESSION");
    assert_eq!(rules[3]["parameters"][1]["name"], "y");
}

#[test]
fn check_reports_failing_entries() {
    let file = rule_file(
        r#"[
            { "interaction": "NumericInput", "rule": "Equals",
              "inputs": { "x": { "type": "REAL", "value": 1.5 } } },
            { "interaction": "NumericInput", "rule": "IsWithinTolerance",
              "inputs": { "x": { "type": "REAL", "value": 1.5 } } },
            { "interaction": "TextInput", "rule": "Contains",
              "inputs": { "x": { "type": "NORMALIZED_STRING", "value": "leaf" } },
              "answer": { "type": "NORMALIZED_STRING", "value": "Leaves" },
              "expected": false }
        ]"#,
    );
    let path = file.path().to_str().unwrap();
    let output = run(&["check", path, "--json"]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));

    let failures: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0]["index"], 1);
    assert_eq!(
        failures[0]["error"],
        "Expected classifier inputs to contain parameter with name 'tol'"
    );
    assert_eq!(failures[1]["index"], 2);
    assert_eq!(
        failures[1]["error"],
        "expected false for answer \"Leaves\", got true"
    );
}

#[test]
fn check_rejects_fixture_without_answer() {
    let file = rule_file(
        r#"[{ "interaction": "MultipleChoiceInput", "rule": "Equals",
              "inputs": { "x": { "type": "NON_NEGATIVE_INT", "value": 2 } },
              "expected": true }]"#,
    );
    let output = run(&["check", file.path().to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));

    let failures: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(
        failures[0]["error"],
        "fixture has 'expected' but no 'answer'"
    );
}

#[test]
fn check_passes_valid_files() {
    let file = rule_file(
        r#"[{ "interaction": "MultipleChoiceInput", "rule": "Equals",
              "inputs": { "x": { "type": "NON_NEGATIVE_INT", "value": 2 } },
              "answer": { "type": "NON_NEGATIVE_INT", "value": 2 },
              "expected": true }]"#,
    );
    let output = run(&["check", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert!(stdout(&output).contains("checked 1 rules, 0 failed"));
}
