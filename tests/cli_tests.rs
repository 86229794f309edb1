//! End-to-end tests for the `reident` binary

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const POLL: &str = "\
Alice Adams,555-0001,01-01-1980,F,N2L6P5
Bob Brown,555-0002,02-02-1980,F,N2L6P5
Carol Diaz,555-0003,03-03-1975,M,N2L7R2
Dana Evans,555-0004,04-04-1990,F,N2J3G1
";

const DISEASE: &str = "\
*,*,*,1980,F,N2L6P5,Flu
*,*,*,1975,M,N2L7R2,AIDS
*,*,*,1990,F,N2J3G1,Asthma
*,*,*,1990,F,N2J3G1,Gout
";

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn reident() -> Command {
    Command::cargo_bin("reident").expect("binary should build")
}

#[test]
fn test_identify_csv_output() {
    let dir = TempDir::new().unwrap();
    let poll = write_fixture(&dir, "poll.csv", POLL);
    let disease = write_fixture(&dir, "disease.csv", DISEASE);

    reident()
        .arg("identify")
        .arg(&poll)
        .arg(&disease)
        .assert()
        .success()
        .stdout("Carol Diaz,555-0003,1975,M,N2L7R2,AIDS\n");
}

#[test]
fn test_identify_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let poll = write_fixture(&dir, "poll.csv", POLL);
    let disease = write_fixture(&dir, "disease.csv", DISEASE);
    let output = dir.path().join("reidentified.csv");

    reident()
        .arg("identify")
        .arg(&poll)
        .arg(&disease)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "Carol Diaz,555-0003,1975,M,N2L7R2,AIDS\n");
}

#[test]
fn test_identify_json_output() {
    let dir = TempDir::new().unwrap();
    let poll = write_fixture(&dir, "poll.csv", POLL);
    let disease = write_fixture(&dir, "disease.csv", DISEASE);

    let output = reident()
        .args(["--format", "json", "identify"])
        .arg(&poll)
        .arg(&disease)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 1);
    assert_eq!(json["matches"][0]["poll_index"], 2);
    assert_eq!(json["matches"][0]["disease_index"], 1);
    assert_eq!(json["matches"][0]["record"]["name"], "Carol Diaz");
    assert!(json["matches"][0]["record"].get("birth_day").is_none());
}

#[test]
fn test_identify_from_stdin() {
    let dir = TempDir::new().unwrap();
    let disease = write_fixture(&dir, "disease.csv", DISEASE);

    reident()
        .arg("identify")
        .arg("-")
        .arg(&disease)
        .write_stdin(POLL)
        .assert()
        .success()
        .stdout(predicate::str::contains("Carol Diaz"));
}

#[test]
fn test_two_stdin_inputs_rejected() {
    reident()
        .args(["identify", "-", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stdin"));
}

#[test]
fn test_malformed_date_fails_fast() {
    let dir = TempDir::new().unwrap();
    let poll = write_fixture(&dir, "poll.csv", "Alice,555,1980,F,N2L6P5\n");
    let disease = write_fixture(&dir, "disease.csv", DISEASE);

    reident()
        .arg("identify")
        .arg(&poll)
        .arg(&disease)
        .assert()
        .failure()
        .stderr(predicate::str::contains("birth date '1980'"));
}

#[test]
fn test_wrong_width_fails_fast() {
    let dir = TempDir::new().unwrap();
    let poll = write_fixture(&dir, "poll.csv", POLL);
    let disease = write_fixture(&dir, "disease.csv", "*,*,1980,F,N2L6P5,Flu\n");

    reident()
        .arg("identify")
        .arg(&poll)
        .arg(&disease)
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs 7 fields, found 6"));
}

#[test]
fn test_duplicate_rows_rejected_on_request() {
    let dir = TempDir::new().unwrap();
    let poll = write_fixture(&dir, "poll.csv", POLL);
    let doubled = format!("{DISEASE}*,*,*,1975,M,N2L7R2,AIDS\n");
    let disease = write_fixture(&dir, "disease.csv", &doubled);

    reident()
        .arg("identify")
        .arg(&poll)
        .arg(&disease)
        .args(["--duplicates", "reject"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("verbatim duplicates"));

    // Default policy warns and still runs; the duplicated key is no longer unique
    reident()
        .arg("identify")
        .arg(&poll)
        .arg(&disease)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_config_file_delimiter() {
    let dir = TempDir::new().unwrap();
    let poll = write_fixture(&dir, "poll.tsv", &POLL.replace(',', "\t"));
    let disease = write_fixture(&dir, "disease.csv", DISEASE);
    let config = write_fixture(
        &dir,
        "reident.json",
        r#"{"poll": {"delimiter": "\t"}}"#,
    );

    reident()
        .arg("identify")
        .arg(&poll)
        .arg(&disease)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("Carol Diaz,555-0003,1975,M,N2L7R2,AIDS\n");
}

#[test]
fn test_unique_subcommand() {
    let dir = TempDir::new().unwrap();
    let poll = write_fixture(&dir, "poll.csv", POLL);

    reident()
        .args(["--format", "text", "unique"])
        .arg(&poll)
        .args(["--source", "poll"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Carol Diaz"))
        .stdout(predicate::str::contains("Dana Evans"))
        .stdout(predicate::str::contains("Alice Adams").not());
}

#[test]
fn test_query_subcommand() {
    let dir = TempDir::new().unwrap();
    let poll = write_fixture(&dir, "poll.csv", POLL);
    let disease = write_fixture(&dir, "disease.csv", DISEASE);
    let queries = write_fixture(
        &dir,
        "queries.csv",
        "Carol Diaz,555-0003,03-03-1975,M,N2L7R2\n\
         Alice Adams,555-0001,01-01-1980,F,N2L6P5\n\
         Dana Evans,555-0004,04-04-1990,F,N2J3G1\n\
         Zoe Young,555-0099,09-09-2001,F,K1A0B1\n",
    );

    reident()
        .arg("query")
        .arg(&poll)
        .arg(&disease)
        .arg(&queries)
        .assert()
        .success()
        .stdout(
            "Carol Diaz,555-0003,identified,AIDS\n\
             Alice Adams,555-0001,ambiguous,Flu\n\
             Dana Evans,555-0004,ambiguous,Asthma|Gout\n\
             Zoe Young,555-0099,unmatched,\n",
        );
}
