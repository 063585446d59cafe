//! Tests for the eulex-parser binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const INPUT: &str = "Regulation (EU) 2020/123 of the European Parliament\n\
                     Article 1 Scope\n\
                     1. This applies.\n";

fn bin() -> Command {
    Command::cargo_bin("eulex-parser").unwrap()
}

#[test]
fn test_parse_stdin_to_json() {
    let output = bin()
        .arg("parse")
        .write_stdin(INPUT)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        json["title"],
        "Regulation (EU) 2020/123 of the European Parliament"
    );
    assert_eq!(json["unassignedArticles"][0]["paragraphs"][0]["number"], "1.");
}

#[test]
fn test_parse_file_to_outline() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.txt");
    fs::write(&input, INPUT).unwrap();

    bin()
        .args(["parse", "--format", "outline"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Article 1: Scope"))
        .stdout(predicate::str::contains("  1. This applies."));
}

#[test]
fn test_parse_writes_output_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out").join("doc.yaml");

    bin()
        .args(["parse", "--format", "yaml", "--output"])
        .arg(&output)
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Saved to:"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(content.contains("unassignedArticles:"));
}

#[test]
fn test_parse_reports_dropped_lines() {
    bin()
        .arg("parse")
        .write_stdin("Section 1 Orphan\nArticle 1 Scope\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("malformed_context"))
        .stderr(predicate::str::contains("line 1: section outside of any chapter"));
}

#[test]
fn test_parse_strict_fails_on_warnings() {
    bin()
        .args(["parse", "--strict"])
        .write_stdin("Stray text\nArticle 1 Scope\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict mode"));
}

#[test]
fn test_parse_missing_file_fails() {
    bin()
        .args(["parse", "/nonexistent/eulex/doc.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error"));
}

#[test]
fn test_fetch_invalid_url_fails() {
    bin()
        .args(["fetch", "not-a-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid URL"));
}
