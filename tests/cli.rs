use assert_cmd::Command;
use predicates::{
    prelude::PredicateBooleanExt,
    str::{contains, is_match},
};
use std::fs;
use tempfile::tempdir;

fn acronix_log() -> Command {
    let mut cmd = Command::cargo_bin("acronix-log").expect("acronix-log binary build failed");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn init_creates_log_dir_with_gitignore() {
    let dir = tempdir().unwrap();

    acronix_log()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("created logs"));

    let gitignore = fs::read_to_string(dir.path().join("logs/.gitignore")).unwrap();
    assert_eq!(gitignore, "*.log");
}

#[test]
fn init_twice_is_quiet_and_keeps_gitignore() {
    let dir = tempdir().unwrap();

    acronix_log().current_dir(dir.path()).arg("init").assert().success();
    fs::write(dir.path().join("logs/.gitignore"), "*.log\n*.tmp").unwrap();

    acronix_log()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout("");

    let gitignore = fs::read_to_string(dir.path().join("logs/.gitignore")).unwrap();
    assert_eq!(gitignore, "*.log\n*.tmp");
}

#[test]
fn error_is_printed_and_persisted() {
    let dir = tempdir().unwrap();

    acronix_log()
        .current_dir(dir.path())
        .args(["error", "disk full"])
        .assert()
        .success()
        .stdout(
            is_match(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] error :: disk full\n$")
                .expect("regex compile"),
        );

    let log = fs::read_to_string(dir.path().join("logs/error.log")).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.ends_with("] error :: disk full\n"));
}

#[test]
fn errors_accumulate_across_runs() {
    let dir = tempdir().unwrap();

    for message in ["first", "second"] {
        acronix_log()
            .current_dir(dir.path())
            .args(["error", message])
            .assert()
            .success();
    }

    let log = fs::read_to_string(dir.path().join("logs/error.log")).unwrap();
    let lines: Vec<_> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("error :: first"));
    assert!(lines[1].ends_with("error :: second"));
}

#[test]
fn structured_warn_is_console_only() {
    let dir = tempdir().unwrap();

    acronix_log()
        .current_dir(dir.path())
        .args(["warn", "--json", r#"{ "code": 42 }"#])
        .assert()
        .success()
        .stdout(contains(r#"warn :: {"code":42}"#));

    let log = fs::read_to_string(dir.path().join("logs/error.log")).unwrap();
    assert!(log.is_empty());
}

#[test]
fn custom_log_dir_is_honoured() {
    let dir = tempdir().unwrap();

    acronix_log()
        .current_dir(dir.path())
        .args(["--log-dir", "var/log", "error", "boom"])
        .assert()
        .success();

    assert!(dir.path().join("var/log/error.log").is_file());
    assert!(!dir.path().join("logs").exists());
}

#[test]
fn invalid_json_fails() {
    let dir = tempdir().unwrap();

    acronix_log()
        .current_dir(dir.path())
        .args(["info", "--json", "{not json"])
        .assert()
        .failure()
        .stderr(contains("Failed running command info").and(contains("Caused by")));
}

#[test]
fn help_describes_every_subcommand() {
    acronix_log()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            is_match(r"(?m)^\s+error\s+\S")
                .expect("regex compile")
                .and(is_match(r"(?m)^\s+warn\s+\S").expect("regex compile"))
                .and(is_match(r"(?m)^\s+info\s+\S").expect("regex compile"))
                .and(is_match(r"(?m)^\s+init\s+\S").expect("regex compile")),
        );
}
