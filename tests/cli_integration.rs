//! CLI integration tests
//!
//! Drives the `dsml` binary end to end: compiling scripts to text and
//! JSON, line-numbered diagnostics, and the `run` subcommand.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

use dsml::dsml::testing::TURNSTILE;

fn write_script(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp script");
    file.write_all(content.as_bytes()).expect("write temp script");
    file
}

fn dsml_cmd() -> Command {
    Command::cargo_bin("dsml").expect("binary builds")
}

#[test]
fn compile_prints_the_machine_as_text() {
    let script = write_script(TURNSTILE);

    dsml_cmd()
        .arg("compile")
        .arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("machine: 2 states, 2 inputs, 2 outputs"))
        .stdout(predicate::str::contains("state 0: locked entry"))
        .stdout(predicate::str::contains("coin -> unlocked / unlock"));
}

#[test]
fn compile_emits_json_on_request() {
    let script = write_script(TURNSTILE);

    dsml_cmd()
        .args(["compile", "--format", "json"])
        .arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"entry\": 0"))
        .stdout(predicate::str::contains("\"locked\""));
}

#[test]
fn compile_rejects_unknown_formats() {
    let script = write_script(TURNSTILE);

    dsml_cmd()
        .args(["compile", "--format", "xml"])
        .arg(script.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format 'xml'"));
}

#[test]
fn compile_reports_errors_with_line_numbers() {
    let script = write_script("state entry A\nstate entry B\n");

    dsml_cmd()
        .arg("compile")
        .arg(script.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error at line 2"))
        .stderr(predicate::str::contains("multiple entry states"));
}

#[test]
fn compile_reports_missing_files() {
    dsml_cmd()
        .args(["compile", "no/such/script.dsml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn run_walks_the_machine() {
    let script = write_script(TURNSTILE);

    dsml_cmd()
        .arg("run")
        .arg(script.path())
        .args(["--inputs", "coin push push"])
        .assert()
        .success()
        .stdout(predicate::str::contains("start: locked"))
        .stdout(predicate::str::contains("coin -> unlocked / unlock"))
        .stdout(predicate::str::contains("push -> locked / lock"))
        .stdout(predicate::str::contains("end: locked"));
}

#[test]
fn run_rejects_unknown_input_symbols() {
    let script = write_script(TURNSTILE);

    dsml_cmd()
        .arg("run")
        .arg(script.path())
        .args(["--inputs", "kick"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown input symbol 'kick'"));
}
