//! Command-line behavior of the `automata-report` binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const NFA_RUN: &str = "\
Pattern: A+C
Datasets: 1 sequence(s)
Automaton Mode: NFA
Sequence #1 (len=6)
  Matches: [0,2) [3,5)
  ACGAAC
  States visited: 15
Runs: 1, Matches: 2, All accepted: yes
";

fn report_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".txt").expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write report");
    file
}

fn cmd() -> Command {
    Command::cargo_bin("automata-report").expect("binary should build")
}

#[test]
fn test_parse_text_output() {
    let file = report_file(NFA_RUN);
    cmd()
        .arg("parse")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Pattern: A+C"))
        .stdout(predicate::str::contains("Automaton mode: NFA"))
        .stdout(predicate::str::contains("All accepted: yes"))
        .stdout(predicate::str::contains("Average coverage: 66.7%"));
}

#[test]
fn test_parse_json_output() {
    let file = report_file(NFA_RUN);
    let output = cmd()
        .args(["parse", "--format", "json"])
        .arg(file.path())
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["pattern"], "A+C");
    assert_eq!(json["total_sequences"], 1);
    assert_eq!(json["all_accepted"], true);
    assert_eq!(json["sequences"][0]["match_count"], 2);
    assert!(json.get("automaton").is_none());
}

#[test]
fn test_parse_json_with_automaton_dump() {
    let file = report_file(NFA_RUN);
    let mut dump = NamedTempFile::with_suffix(".json").expect("Failed to create temp file");
    dump.write_all(br#"{"type":"NFA","states":3}"#).unwrap();

    let output = cmd()
        .args(["parse", "-f", "json"])
        .arg(file.path())
        .arg("--automaton")
        .arg(dump.path())
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["automaton"]["type"], "NFA");
    assert_eq!(json["automaton"]["states"], 3);
}

#[test]
fn test_bad_automaton_dump_still_reports() {
    let file = report_file(NFA_RUN);
    let mut dump = NamedTempFile::with_suffix(".json").unwrap();
    dump.write_all(b"not json").unwrap();

    let output = cmd()
        .args(["parse", "--format", "json"])
        .arg(file.path())
        .arg("--automaton")
        .arg(dump.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json.get("automaton").is_none());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read automaton dump"));
}

#[test]
fn test_parse_from_stdin_tsv() {
    cmd()
        .args(["parse", "-", "--format", "tsv"])
        .write_stdin(NFA_RUN)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("sequence_number\tlength"))
        .stdout(predicate::str::contains("1\t6\tmatch_list\t2\t0.6667\t15\t\tACGAAC"));
}

#[test]
fn test_parse_missing_file_fails() {
    cmd()
        .args(["parse", "/nonexistent/run.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_ranges_command() {
    cmd()
        .args(["ranges", "[0,3)", "garbage", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0,3)\t0\t3\t3"))
        .stdout(predicate::str::contains("garbage\t0\t0\t0"));
}
