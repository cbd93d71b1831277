//! CLI integration tests: document input, output formats and routing
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// 1000 figures with Benford-proportional leading digits
fn benford_document() -> String {
    let counts = [301, 176, 125, 97, 79, 67, 58, 51, 46];
    let mut lines = Vec::new();
    for (i, count) in counts.iter().enumerate() {
        for n in 0..*count {
            lines.push(format!("amount {}{}.{:02}", i + 1, n, n % 100));
        }
    }
    lines.join("\n")
}

/// Ledger where every amount starts with 9
fn fabricated_document() -> String {
    (0..40)
        .map(|n| format!("Payment #A{} {}.00", n, 9000 + n * 7))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--min-sample"));
}

#[test]
fn test_stdin_insufficient_sample() {
    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.write_stdin("there are 2 apples and 3 pears")
        .assert()
        .success()
        .stdout(predicate::str::contains("-: INSUFFICIENT_SAMPLE (n=2)"));
}

#[test]
fn test_file_conforming_and_non_conforming() {
    let tmp_dir = TempDir::new().unwrap();
    let good = tmp_dir.path().join("good.txt");
    let bad = tmp_dir.path().join("bad.txt");
    fs::write(&good, benford_document()).unwrap();
    fs::write(&bad, fabricated_document()).unwrap();

    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.arg(&good)
        .arg(&bad)
        .assert()
        .success()
        .stdout(predicate::str::contains("good.txt: CONFORMING (n=1000"))
        .stdout(predicate::str::contains("bad.txt: NON_CONFORMING (n=40"));
}

#[test]
fn test_suspicion_routing() {
    let tmp_dir = TempDir::new().unwrap();
    let bad = tmp_dir.path().join("bad.txt");
    fs::write(&bad, fabricated_document()).unwrap();

    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.arg("--routing")
        .arg("suspicion")
        .arg("--no-min-sample")
        .arg(&bad)
        .assert()
        .success()
        .stdout(predicate::str::contains("bad.txt: SUSPECT"));
}

#[test]
fn test_legacy_zero_sample() {
    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.args(["--routing", "suspicion", "--no-min-sample", "--legacy-zero-sample"])
        .write_stdin("no figures at all")
        .assert()
        .success()
        .stdout(predicate::str::contains("-: NOT_SUSPECT (n=0)"));
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("benford").unwrap();
    let output = cmd
        .args(["--format", "json"])
        .write_stdin("1 2 3 4 5 6 7 8 9")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["documents"][0]["relationship"], "CONFORMING");
    assert_eq!(value["documents"][0]["sample_size"], 9);
    assert_eq!(value["config"]["min_sample"], 5);
    assert_eq!(value["summary"][0]["documents"], 1);
}

#[test]
fn test_csv_output() {
    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.args(["--format", "csv"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "document,relationship,classification,sample_size,d1",
        ))
        .stdout(predicate::str::contains(
            "-,INSUFFICIENT_SAMPLE,insufficient_sample,0,0,0,0,0,0,0,0,0,0,,",
        ));
}

#[test]
fn test_invalid_alpha_rejected() {
    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.args(["--alpha", "1.5"])
        .write_stdin("1 2 3")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "alpha must be in the open interval (0, 1)",
        ));
}

#[test]
fn test_negative_min_sample_rejected() {
    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.args(["--min-sample", "-4"])
        .write_stdin("1 2 3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_sample must be non-negative"));
}

#[test]
fn test_missing_file() {
    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.arg("/nonexistent/ledger.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read document"));
}

#[test]
fn test_config_file() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("benford.toml");
    fs::write(&config, "alpha = 0.01\nmin_sample = 50\n").unwrap();

    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .write_stdin(fabricated_document())
        .assert()
        .success()
        .stdout(predicate::str::contains("-: INSUFFICIENT_SAMPLE (n=40)"));
}

#[test]
fn test_flags_override_config_file() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("benford.toml");
    fs::write(&config, "min_sample = 50\n").unwrap();

    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .args(["--min-sample", "10"])
        .write_stdin(fabricated_document())
        .assert()
        .success()
        .stdout(predicate::str::contains("-: NON_CONFORMING (n=40"));
}

#[test]
fn test_route_dir_preserves_bytes() {
    let tmp_dir = TempDir::new().unwrap();
    let input = tmp_dir.path().join("ledger.txt");
    let content = fabricated_document();
    fs::write(&input, &content).unwrap();
    let routes = tmp_dir.path().join("routes");

    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.arg("--route-dir")
        .arg(&routes)
        .arg(&input)
        .assert()
        .success();

    let routed = fs::read_to_string(routes.join("NON_CONFORMING").join("ledger.txt")).unwrap();
    assert_eq!(routed, content);
}

#[test]
fn test_route_dir_keeps_documents_with_same_file_name() {
    let tmp_dir = TempDir::new().unwrap();
    let first_dir = tmp_dir.path().join("a");
    let second_dir = tmp_dir.path().join("b");
    fs::create_dir_all(&first_dir).unwrap();
    fs::create_dir_all(&second_dir).unwrap();
    fs::write(first_dir.join("x.txt"), "first 1 2").unwrap();
    fs::write(second_dir.join("x.txt"), "second 3 4").unwrap();
    let routes = tmp_dir.path().join("routes");

    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.arg("--route-dir")
        .arg(&routes)
        .arg(first_dir.join("x.txt"))
        .arg(second_dir.join("x.txt"))
        .assert()
        .success();

    let target = routes.join("INSUFFICIENT_SAMPLE");
    let mut names: Vec<String> = fs::read_dir(&target)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["x-1.txt", "x.txt"]);
    assert_eq!(fs::read_to_string(target.join("x.txt")).unwrap(), "first 1 2");
    assert_eq!(
        fs::read_to_string(target.join("x-1.txt")).unwrap(),
        "second 3 4"
    );
}

#[test]
fn test_route_dir_stdin_named_stdin() {
    let tmp_dir = TempDir::new().unwrap();
    let routes = tmp_dir.path().join("routes");

    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.arg("--route-dir")
        .arg(&routes)
        .arg("-")
        .write_stdin("7 8")
        .assert()
        .success();

    let target = routes.join("INSUFFICIENT_SAMPLE");
    assert_eq!(fs::read_to_string(target.join("stdin")).unwrap(), "7 8");
    assert!(!target.join("-").exists());
}

#[test]
fn test_summary_on_stderr() {
    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.arg("-c")
        .write_stdin("7")
        .assert()
        .success()
        .stderr(predicate::str::contains("INSUFFICIENT_SAMPLE"))
        .stderr(predicate::str::contains("total"));
}

#[test]
fn test_verbose_report() {
    let mut cmd = Command::cargo_bin("benford").unwrap();
    cmd.arg("-v")
        .write_stdin("1 2 3 4 5 6 7 8 9")
        .assert()
        .success()
        .stdout(predicate::str::contains("CONFORMS TO BENFORD'S LAW"))
        .stdout(predicate::str::contains("Chi-squared"));
}
