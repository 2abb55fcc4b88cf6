//! Integration tests for the `size` and `chart` subcommands.
//!
//! These tests use `assert_cmd` to verify CLI behavior against the
//! fixture chart, including text output, JSON output, and exit codes.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

/// Path to the test fixture chart.
fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/tip_chart.json")
}

fn cli() -> Command {
    Command::cargo_bin("tipselect-cli").expect("binary exists")
}

#[test]
fn size_matches_the_reference_reading() {
    cli()
        .args([
            "--chart",
            fixture_path().to_str().unwrap(),
            "size",
            "--pressure",
            "1600",
            "--flow",
            "12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nozzle number: 5.01"))
        .stdout(predicate::str::contains("Matched tip:   5"));
}

#[test]
fn size_accepts_metric_units() {
    cli()
        .args([
            "--chart",
            fixture_path().to_str().unwrap(),
            "size",
            "--pressure",
            "110",
            "--pressure-unit",
            "bar",
            "--flow",
            "12",
            "--flow-unit",
            "lpm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matched tip:   5"));
}

#[test]
fn size_json_output_is_parseable() {
    let output = cli()
        .args([
            "--chart",
            fixture_path().to_str().unwrap(),
            "size",
            "--pressure",
            "1600",
            "--flow",
            "12",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");
    assert_eq!(value["nozzleNumber"], 5.01);
    assert_eq!(value["tipSize"], 5.0);
    assert_eq!(value["injectorSize"], 2.5);
}

#[test]
fn zero_flow_fails_with_a_clear_error() {
    cli()
        .args([
            "--chart",
            fixture_path().to_str().unwrap(),
            "size",
            "--pressure",
            "1600",
            "--flow",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("flow"));
}

#[test]
fn missing_chart_fails_with_a_clear_error() {
    cli()
        .args([
            "--chart",
            "/nonexistent/tip_chart.json",
            "size",
            "--pressure",
            "1600",
            "--flow",
            "12",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tip chart"));
}

#[test]
fn unknown_unit_tag_is_rejected_by_clap() {
    cli()
        .args([
            "--chart",
            fixture_path().to_str().unwrap(),
            "size",
            "--pressure",
            "1600",
            "--pressure-unit",
            "pascal",
            "--flow",
            "12",
        ])
        .assert()
        .failure();
}

#[test]
fn chart_lists_all_rows() {
    cli()
        .args(["--chart", fixture_path().to_str().unwrap(), "chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 rows"))
        .stdout(predicate::str::contains("tip 2.5"))
        .stdout(predicate::str::contains("tip 8"));
}

#[test]
fn empty_chart_is_a_configuration_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("tip_chart.json");
    std::fs::write(&path, "[]").expect("write empty chart");

    cli()
        .args([
            "--chart",
            path.to_str().unwrap(),
            "size",
            "--pressure",
            "1600",
            "--flow",
            "12",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}
