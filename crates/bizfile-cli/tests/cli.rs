use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_profile.txt")
}

fn bizfile(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bizfile").unwrap();
    cmd.env("HOME", config_home.path())
        .env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn process_prints_json_record() {
    let home = TempDir::new().unwrap();

    let output = bizfile(&home)
        .arg("process")
        .arg(fixture())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let record: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        record["The Following Are The Brief Particulars of :"]["Registration No."],
        "200601400N"
    );
    assert_eq!(
        record["Officers / Authorised Representative(s)"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
    assert_eq!(record["Shareholder(s)"][0]["Ordinary (Number)"], "200000");
}

#[test]
fn process_document_envelope() {
    let home = TempDir::new().unwrap();

    let output = bizfile(&home)
        .args(["process", "--document"])
        .arg(fixture())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let document: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(document["status"], "done");
    assert_eq!(document["file_name"], "sample_profile.txt");
    assert!(document.get("extracted_text").is_none());
    assert_eq!(
        document["entities"]["Capital"]["Issued Share Capital (AMOUNT)"],
        "200,000"
    );
}

#[test]
fn process_csv_and_text_formats() {
    let home = TempDir::new().unwrap();

    bizfile(&home)
        .args(["process", "-f", "csv"])
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("section,field,value"))
        .stdout(predicate::str::contains("Officer 2,Position Held,Secretary"));

    bizfile(&home)
        .args(["process", "--format", "text"])
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Company: INFOTRUST SINGAPORE PTE. LTD. (200601400N)",
        ))
        .stdout(predicate::str::contains("Officers (2):"));
}

#[test]
fn process_writes_output_file() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("record.json");

    bizfile(&home)
        .args(["process", "--pretty", "-o"])
        .arg(&out)
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("\n  \"Capital\": {"));
}

#[test]
fn process_show_missing_lists_unresolved_fields() {
    let home = TempDir::new().unwrap();

    bizfile(&home)
        .args(["process", "--show-missing"])
        .arg(fixture())
        .assert()
        .success()
        .stderr(predicate::str::contains("Capital / Treasury Currency"));
}

#[test]
fn process_refuses_empty_text() {
    let home = TempDir::new().unwrap();
    let empty = home.path().join("empty.txt");
    fs::write(&empty, "  \n\n").unwrap();

    bizfile(&home)
        .arg("process")
        .arg(&empty)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no extracted text"));
}

#[test]
fn process_missing_file_fails() {
    let home = TempDir::new().unwrap();

    bizfile(&home)
        .args(["process", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let home = TempDir::new().unwrap();
    let input_dir = home.path().join("in");
    let output_dir = home.path().join("out");
    fs::create_dir_all(&input_dir).unwrap();
    fs::copy(fixture(), input_dir.join("alpha.txt")).unwrap();
    fs::write(input_dir.join("blank.txt"), "").unwrap();
    fs::write(input_dir.join("ignored.pdf"), "not text").unwrap();

    let pattern = format!("{}/*", input_dir.display());

    bizfile(&home)
        .args(["batch", &pattern, "--summary", "--continue-on-error", "-o"])
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"));

    assert!(output_dir.join("alpha.json").exists());
    assert!(!output_dir.join("blank.json").exists());

    let summary = fs::read_to_string(output_dir.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("filename,status,registration_no"));
    assert!(lines[1].starts_with("alpha.txt,done,200601400N"));
    assert!(lines[2].starts_with("blank.txt,failed,"));
}

#[test]
fn batch_stops_on_first_failure() {
    let home = TempDir::new().unwrap();
    let input_dir = home.path().join("in");
    fs::create_dir_all(&input_dir).unwrap();
    fs::write(input_dir.join("blank.txt"), "").unwrap();

    let pattern = format!("{}/*.txt", input_dir.display());

    bizfile(&home)
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing failed"));
}

#[test]
fn config_init_set_get() {
    let home = TempDir::new().unwrap();

    bizfile(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    bizfile(&home)
        .args(["config", "set", "extraction.known_entity_fallback", "false"])
        .assert()
        .success();

    bizfile(&home)
        .args(["config", "get", "extraction.known_entity_fallback"])
        .assert()
        .success()
        .stdout(predicate::str::diff("false\n"));

    bizfile(&home)
        .args(["config", "set", "extraction.min_text_length", "\"many\""])
        .assert()
        .failure();

    bizfile(&home)
        .args(["config", "get", "extraction.no_such_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn explicit_config_file_is_used() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bizfile.json");
    fs::write(&config, r#"{"extraction": {"min_text_length": 100000}}"#).unwrap();

    bizfile(&home)
        .args(["process", "-c"])
        .arg(&config)
        .arg(fixture())
        .assert()
        .failure()
        .stderr(predicate::str::contains("too short"));
}

#[test]
fn user_config_file_applies_to_process() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("fallback.txt");
    fs::write(&input, "Shareholder(s)\nINFOTRUST SINGAPORE PTE. LTD.\nunreadable layout\n").unwrap();

    let shareholders = |home: &TempDir| {
        let output = bizfile(home)
            .arg("process")
            .arg(&input)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let record: serde_json::Value = serde_json::from_slice(&output).unwrap();
        record["Shareholder(s)"].as_array().unwrap().len()
    };

    assert_eq!(shareholders(&home), 1);

    bizfile(&home)
        .args(["config", "set", "extraction.known_entity_fallback", "false"])
        .assert()
        .success();

    assert_eq!(shareholders(&home), 0);
}
