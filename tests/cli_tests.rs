use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

fn ltcwatch() -> Command {
    let mut cmd = Command::cargo_bin("ltcwatch").expect("binary built");
    cmd.env_remove("LTCWATCH_ADDRESS")
        .env_remove("LTCWATCH_WEBHOOK_URL")
        .env_remove("DISCORD_WEBHOOK")
        .env_remove("TELEGRAM_BOT_TOKEN");
    cmd
}

#[test]
fn check_accepts_valid_config() {
    let file = write_temp_config("[wallet]\naddress = \"LTestAddress\"\n");

    ltcwatch()
        .arg("check")
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"))
        .stdout(predicate::str::contains("LTestAddress"))
        .stdout(predicate::str::contains("60s"));
}

#[test]
fn check_reports_missing_webhook() {
    let file = write_temp_config("[wallet]\naddress = \"LTestAddress\"\n");

    ltcwatch()
        .args(["check", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("LTCWATCH_WEBHOOK_URL"));
}

#[test]
fn check_fails_on_invalid_config() {
    let file = write_temp_config("[wallet]\naddress = \"\"\n");

    ltcwatch()
        .args(["check", "--config"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("wallet.address"));
}

#[test]
fn run_fails_without_config_file() {
    ltcwatch()
        .args(["--config", "/nonexistent/ltcwatch.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn json_check_emits_one_object_per_line() {
    let file = write_temp_config("[wallet]\naddress = \"LTestAddress\"\n");

    let output = ltcwatch()
        .args(["--json", "check", "--config"])
        .arg(file.path())
        .output()
        .expect("run ltcwatch");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
        let value: serde_json::Value = serde_json::from_str(line).expect("json line");
        assert!(value.get("type").is_some());
    }
}
