use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_casebook")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_mode_renders_markdown() {
    let assert = cmd().write_stdin(fixture("cases.md")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.starts_with("# JavaScript Edge Cases\n"));
    assert!(output.contains("## Index\n"));
    assert!(output.contains("* [Type Coercion](#type-coercion)"));
    assert!(output.contains("* [Floating-Point Arithmetic](#floating-point-arithmetic)"));
    assert!(output.contains("```js\n"));
    assert!(output.contains("// => \"[object Object]\""));
}

#[test]
fn stdin_mode_empty_input() {
    cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn stdin_mode_malformed_fails() {
    cmd()
        .write_stdin(fixture("broken.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no explanation"));
}

// -- title lookup --

#[test]
fn title_renders_single_entry() {
    let assert = cmd()
        .args(["-t", "Variable Hoisting"])
        .write_stdin(fixture("cases.md"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.starts_with("## Variable Hoisting\n"));
    assert!(output.contains("temporal dead zone"));
    assert!(!output.contains("## Type Coercion"));
}

#[test]
fn unknown_title_fails() {
    cmd()
        .args(["-t", "Monads"])
        .write_stdin(fixture("cases.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no entry titled \"Monads\""));
}

// -- title enumeration --

#[test]
fn list_prints_titles_in_document_order() {
    let assert = cmd()
        .arg("--list")
        .write_stdin(fixture("cases.md"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(
        output,
        "Type Coercion\nVariable Hoisting\nClosures in Loops\nFloating-Point Arithmetic\n"
    );
}

#[test]
fn list_works_on_files() {
    cmd()
        .arg("--list")
        .arg(fixture_path("cases.md"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Closures in Loops"));
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("cases.md"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("cases.md")).unwrap();
    assert!(output.contains("## Index"));
    assert!(output.contains("## Closures in Loops"));
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg(fixture_path("cases.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn file_mode_skips_malformed_with_warning() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("cases.md"))
        .arg(fixture_path("broken.md"))
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: skipping"));

    assert!(dir.path().join("cases.md").exists());
    assert!(!dir.path().join("broken.md").exists());
}

// -- output formats --

#[test]
fn file_mode_html_format() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "html"])
        .arg(fixture_path("cases.md"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("cases.html")).unwrap();
    assert!(output.contains("<!DOCTYPE html>"));
    assert!(output.contains("<title>JavaScript Edge Cases</title>"));
    assert!(output.contains("Type Coercion"));
}

#[test]
fn file_mode_json_format() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "json"])
        .arg(fixture_path("cases.md"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("cases.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["title"], "JavaScript Edge Cases");
    assert_eq!(value["entries"][0]["title"], "Type Coercion");
    assert_eq!(
        value["entries"][0]["snippets"][0]["expectations"][0]["text"],
        "\"\""
    );
}

#[test]
fn stdin_json_format() {
    let assert = cmd()
        .args(["-f", "json"])
        .write_stdin(fixture("cases.md"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("\"entries\""));
}

#[test]
fn invalid_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .write_stdin(fixture("cases.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// -- determinism --

#[test]
fn rendering_twice_is_identical() {
    let input = fixture("cases.md");
    let first = cmd().write_stdin(input.clone()).assert().success();
    let second = cmd().write_stdin(input).assert().success();
    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}
