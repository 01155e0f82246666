//! CLI end-to-end tests
//!
//! Tests for the trackwise command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the trackwise binary
#[allow(deprecated)]
fn trackwise_cmd() -> Command {
    Command::cargo_bin("trackwise").unwrap()
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = trackwise_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = trackwise_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trackwise"));
}

#[test]
fn test_cli_plan_help() {
    let mut cmd = trackwise_cmd();
    cmd.args(["plan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan the remux"));
}

#[test]
fn test_cli_plan_json() {
    let mut cmd = trackwise_cmd();
    let output = cmd
        .args(["plan", "--json"])
        .arg(fixture("dual_english.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["processFile"], true);
    assert_eq!(json["container"], ".mkv");
    assert_eq!(json["FFmpegMode"], true);
    assert_eq!(json["reQueueAfter"], true);
    assert!(json["preset"].as_str().unwrap().contains("-map -0:a:1"));
}

#[test]
fn test_cli_plan_human_output() {
    let mut cmd = trackwise_cmd();
    cmd.arg("plan")
        .arg(fixture("dual_english.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Process file: yes"))
        .stdout(predicate::str::contains("drop"));
}

#[test]
fn test_cli_plan_from_stdin() {
    let json = fs::read_to_string(fixture("single_track.json")).unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("trackwise").unwrap();
    cmd.args(["plan", "-"])
        .write_stdin(json)
        .assert()
        .success()
        .stdout(predicate::str::contains("Process file: no"))
        .stdout(predicate::str::contains("No need to process file"));
}

#[test]
fn test_cli_plan_nonexistent_file() {
    let mut cmd = trackwise_cmd();
    cmd.args(["plan", "/nonexistent/path/probe.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_plan_malformed_probe() {
    let mut cmd = trackwise_cmd();
    cmd.arg("plan")
        .arg(fixture("missing_channels.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("channels"));
}

#[test]
fn test_cli_inspect() {
    let mut cmd = trackwise_cmd();
    cmd.arg("inspect")
        .arg(fixture("dual_english.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("audio streams: 3"))
        .stdout(predicate::str::contains("eng: 6"));
}

#[test]
fn test_cli_plan_with_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");

    fs::write(
        &config_file,
        r#"
[plugin]
audio_language = "eng"
container = ".mp4"
"#,
    )
    .unwrap();

    let mut cmd = trackwise_cmd();
    cmd.args(["plan", "--json", "--config"])
        .arg(&config_file)
        .arg(fixture("dual_english.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\".mp4\""));
}

#[test]
fn test_cli_validate_invalid_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(&config_file, "[tail]\nb_frames = 0\n").unwrap();

    let mut cmd = trackwise_cmd();
    cmd.arg("validate")
        .arg(&config_file)
        .assert()
        .failure();
}

#[test]
fn test_cli_validate_valid_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(&config_file, "[plugin]\ncontainer = \".mkv\"\n").unwrap();

    let mut cmd = trackwise_cmd();
    cmd.arg("validate")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}
