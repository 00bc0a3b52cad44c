//! Integration tests for the timberfire binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("timberfire"))
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("Failed to run binary");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Timber member sizing for standard fire exposure"));
}

#[test]
fn test_beam_reference_selection() {
    let value = json_stdout(cli().args(["beam", "--span", "4", "--line", "2", "--json"]));
    assert_eq!(value["width_mm"], 200.0);
    assert_eq!(value["height_mm"], 200.0);
    let utilization = value["utilization_percent"].as_f64().unwrap();
    assert!((utilization - 52.847).abs() < 0.01);
}

#[test]
fn test_beam_report_output() {
    cli()
        .args(["beam", "--span", "4", "--line", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected: 200 x 200 mm"))
        .stdout(predicate::str::contains("UTILIZATION: 52.8%"));
}

#[test]
fn test_beam_requires_a_load() {
    cli().args(["beam", "--span", "4"]).assert().failure();
    cli()
        .args(["beam", "--span", "4", "--line", "2", "--point", "5"])
        .assert()
        .failure();
}

#[test]
fn test_column_explicit_section_fails() {
    cli()
        .args([
            "column", "--length", "3", "--axial", "50", "--width", "200", "--height", "200", "--sides", "8",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No adequate section"));
}

#[test]
fn test_column_explicit_section_passes() {
    let value = json_stdout(cli().args([
        "column", "--length", "2", "--axial", "50", "--width", "200", "--height", "200", "--sides", "8", "--json",
    ]));
    let utilization = value["utilization_percent"].as_f64().unwrap();
    assert!((utilization - 55.154).abs() < 0.01);
    assert_eq!(value["check"]["type"], "Column");
}

#[test]
fn test_error_json_on_stdout() {
    let output = cli()
        .args(["beam", "--span", "4", "--line", "2", "--strength-class", "C99", "--json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["type"], "UnknownStrengthClass");
}

#[test]
fn test_exposure_code_clamped() {
    // Code 12 behaves exactly like 8
    let clamped = json_stdout(cli().args(["beam", "--span", "3", "--line", "2", "--sides", "12", "--json"]));
    let all = json_stdout(cli().args(["beam", "--span", "3", "--line", "2", "--sides", "8", "--json"]));
    assert_eq!(clamped, all);
}

#[test]
fn test_config_file_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("timberfire.toml");
    fs::write(&config, "[defaults]\nwood_type = \"glulam\"\nstrength_class = \"GL28h\"\n").unwrap();

    let value = json_stdout(cli().args(["beam", "--span", "4", "--line", "2", "--json", "--config"]).arg(&config));
    // First entries of the glulam grid are 65 or 90 mm wide
    let width = value["width_mm"].as_f64().unwrap();
    assert!([65.0, 90.0, 115.0, 140.0, 160.0, 185.0].contains(&width));
}

#[test]
fn test_bad_config_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[defaults\n").unwrap();

    cli()
        .args(["beam", "--span", "4", "--line", "2", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_batch_reports_every_member() {
    let dir = TempDir::new().unwrap();
    let problem = dir.path().join("problem.json");
    fs::write(
        &problem,
        r#"{
            "basis": { "strength_class": "C24", "wood_type": "sawn" },
            "members": [
                { "label": "B-1", "length_m": 4.0,
                  "load": { "type": "Beam", "load": { "type": "line", "kn_per_m": 2.0 } } },
                { "label": "B-2", "length_m": 20.0,
                  "load": { "type": "Beam", "load": { "type": "line", "kn_per_m": 80.0 } } }
            ]
        }"#,
    )
    .unwrap();

    let value = json_stdout(cli().arg("batch").arg(&problem).arg("--json"));
    assert_eq!(value["sized"], 1);
    assert_eq!(value["failed"], 1);
    assert_eq!(value["results"][0]["status"], "Sized");
    assert_eq!(value["results"][1]["status"], "Failed");
    assert_eq!(value["results"][1]["error"]["type"], "NoAdequateSection");
}

#[test]
fn test_batch_missing_file() {
    cli().args(["batch", "/nonexistent/problem.json"]).assert().failure();
}

#[test]
fn test_screen_modes() {
    let union = json_stdout(cli().args(["screen", "--inertia", "50000000", "--json"]));
    let both = json_stdout(cli().args(["screen", "--inertia", "50000000", "--mode", "intersection", "--json"]));
    let union = union.as_array().unwrap();
    let both = both.as_array().unwrap();
    assert!(both.len() <= union.len());
    assert!(both
        .iter()
        .all(|row| row["strong_axis"] == true && row["weak_axis"] == true));
}
