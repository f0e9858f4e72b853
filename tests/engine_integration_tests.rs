#![allow(deprecated)] // cargo_bin deprecation - still works fine

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("corpus-lint").expect("binary should exist")
}

fn input_doc(path: &str, content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    serde_json::to_string(&serde_json::json!({
        "files": [{"path": path, "lines": lines, "content": content}]
    }))
    .unwrap()
}

// ============================================================================
// Process contract
// ============================================================================

#[test]
fn clean_corpus_prints_empty_issue_list() {
    cmd()
        .write_stdin(input_doc("ok.txt", "one\ntwo\nthree\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"issues":[]}"#));
}

#[test]
fn issues_found_still_exits_success() {
    cmd()
        .write_stdin(input_doc("short.txt", "one\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "File has only 1 lines, minimum is 3 lines",
        ));
}

#[test]
fn malformed_input_exits_failure_with_no_output_document() {
    cmd()
        .write_stdin(r#"{"not-files": []}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed input document"));
}

#[test]
fn non_json_input_exits_failure() {
    cmd()
        .write_stdin("FROM ubuntu:latest")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

// ============================================================================
// End-to-end rule behavior
// ============================================================================

#[test]
fn dockerfile_findings_flow_through() {
    let content = "FROM ubuntu:latest\nRUN apt-get update\nCOPY ../secrets /app\n";
    cmd()
        .write_stdin(input_doc("Dockerfile", content))
        .assert()
        .success()
        .stdout(predicate::str::contains("Avoid using ':latest' tag"))
        .stdout(predicate::str::contains("Combine 'apt-get update'"))
        .stdout(predicate::str::contains("Avoid copying from parent"))
        .stdout(predicate::str::contains("No USER instruction found"));
}

#[test]
fn fixme_findings_flow_through() {
    cmd()
        .write_stdin(input_doc("lib.rs", "fn f() {}\n// FIXME: later\nfn g() {}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("FIXME/XXX comment found"));
}

#[test]
fn issue_order_is_stable_across_files() {
    let input = serde_json::to_string(&serde_json::json!({
        "files": [
            {"path": "b.txt", "lines": ["x"], "content": "x"},
            {"path": "a.txt", "lines": ["y"], "content": "y"}
        ]
    }))
    .unwrap();

    let output = cmd().write_stdin(input).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

    let issues = parsed.get("issues").unwrap().as_array().unwrap();
    assert_eq!(issues[0].get("file").unwrap(), "b.txt");
    assert_eq!(issues[1].get("file").unwrap(), "a.txt");
}

#[test]
fn host_extras_are_tolerated() {
    let input = serde_json::to_string(&serde_json::json!({
        "files": [],
        "options": {"anything": true},
        "workspaceRoot": "/work"
    }))
    .unwrap();

    cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"issues":[]}"#));
}
