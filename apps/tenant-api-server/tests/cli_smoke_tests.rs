#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for tenant-api-server

use std::io::Write;
use std::process::{Command, Stdio};

fn run_server(args: &[&str], env: &[(&str, &str)]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tenant-api-server"));
    cmd.args(args)
        .env_remove("NODE_API_BASE_URL")
        .env_remove("LOGIN_USERNAME")
        .env_remove("LOGIN_PASSWORD")
        .env_remove("PORT")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute tenant-api-server")
}

#[test]
fn help_lists_subcommands() {
    let output = run_server(&["--help"], &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("run"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("provision-tenant"));
}

#[test]
fn check_reads_yaml_and_humantime() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "credentials:\n  base_url: http://orchestrator:3000\n  request_timeout: 3s\ntenant_db:\n  port: 3307"
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_owned();

    let output = run_server(&["--config", &path, "check"], &[]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("http://orchestrator:3000"));
    assert!(stdout.contains("3s"));
    assert!(stdout.contains("3307"));
}

#[test]
fn legacy_env_applies_and_password_stays_hidden() {
    let output = run_server(
        &["--print-config"],
        &[
            ("NODE_API_BASE_URL", "http://node-api:3000"),
            ("LOGIN_USERNAME", "operator"),
            ("LOGIN_PASSWORD", "hunter2"),
        ],
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("http://node-api:3000"));
    assert!(stdout.contains("operator"));
    assert!(!stdout.contains("hunter2"));
}

#[test]
fn unknown_keys_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "login:\n  user: admin").unwrap();
    let path = file.path().to_str().unwrap().to_owned();

    let output = run_server(&["--config", &path, "check"], &[]);

    assert!(!output.status.success());
}

#[test]
fn all_digit_password_is_accepted() {
    let output = run_server(&["check"], &[("LOGIN_PASSWORD", "123456")]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("123456"));
}
