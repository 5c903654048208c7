//! Tests for the `otp-demo` binary's non-interactive paths.

use assert_cmd::Command;
use predicates::prelude::*;

fn demo() -> Command {
    let mut cmd = Command::cargo_bin("otp-demo").unwrap();
    cmd.env_remove("OTP_LENGTH")
        .env_remove("OTP_VALUE")
        .env_remove("OTP_PATTERN")
        .env_remove("OTP_CONFIG");
    cmd
}

#[test]
fn test_help_lists_flags() {
    demo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--length"))
        .stdout(predicate::str::contains("--caret-mode"));
}

#[test]
fn test_markup_output() {
    demo()
        .args(["--length", "3", "--value", "12", "--markup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-qds-otp-root"))
        .stdout(predicate::str::contains(r#"maxlength="3""#))
        .stdout(predicate::str::contains(r#"<div data-qds-otp-item="1">2"#));
}

#[test]
fn test_markup_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("otp.toml");
    std::fs::write(&path, "length = 2\nvalue = \"7\"\n").unwrap();

    demo()
        .arg("--config")
        .arg(&path)
        .arg("--markup")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"maxlength="2""#))
        .stdout(predicate::str::contains(r#"value="7""#));
}

#[test]
fn test_invalid_length_fails() {
    demo()
        .args(["--length", "0", "--markup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid otp configuration"));
}
