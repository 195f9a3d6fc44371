//! Smoke tests for the domnav CLI
//!
//! These tests run the real binary against a small HTML document.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html><body>
    <h1>Hello</h1>
    <main><h1>Main</h1></main>
    <form action="/action1"><input type="text" name="input-1"></form>
    <form action="/action2">
        <input type="text" name="input-2">
        <input type="radio" name="radio-group-name" value="1">
        <input type="radio" name="radio-group-name" value="2">
        <select><option value="1">one</option><option value="2">two</option></select>
    </form>
</body></html>"#;

/// Get a command for the domnav binary
fn domnav() -> Command {
    let mut cmd = Command::cargo_bin("domnav").expect("domnav binary should exist");
    cmd.env_remove("RUST_LOG").env_remove("DOMNAV_CONFIG");
    cmd
}

fn write_page(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("basic.html");
    fs::write(&path, PAGE).expect("write page");
    path
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    domnav()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.3"));
}

#[test]
fn test_help_flag() {
    domnav()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("find"))
        .stdout(predicate::str::contains("has-one"));
}

#[test]
fn test_no_args_fails() {
    domnav().assert().failure();
}

// ============================================================================
// find / find-one
// ============================================================================

#[test]
fn test_find_radio_group_json() {
    let dir = TempDir::new().unwrap();
    let page = write_page(&dir);
    domnav()
        .args(["--format", "json", "find", "--document"])
        .arg(&page)
        .arg(r#"{"locator":"[name=\"radio-group-name\"]"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind": "radio_group""#))
        .stdout(predicate::str::contains(r#""name": "radio-group-name""#));
}

#[test]
fn test_find_one_scoped_by_xpath_parent() {
    let dir = TempDir::new().unwrap();
    let page = write_page(&dir);
    domnav()
        .args(["find-one", "--format", "json", "-d"])
        .arg(&page)
        .arg(r#"{"locator":"input","position":1,"parent":{"locator":"//form","position":2}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "input-2""#));
}

#[test]
fn test_find_reads_stdin() {
    domnav()
        .args(["find", "-d", "-", "--locator", "h1", "--position", "-1"])
        .write_stdin(PAGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Main"))
        .stdout(predicate::str::contains("Hello").not());
}

#[test]
fn test_find_one_overly_broad_exits_2() {
    domnav()
        .args(["find-one", "-d", "-", "-l", "h1"])
        .write_stdin(PAGE)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r#"Error: Overly broad locator "h1""#));
}

#[test]
fn test_find_unknown_element_exits_2() {
    domnav()
        .args(["find", "-d", "-", "-l", ".does-not-exist"])
        .write_stdin(PAGE)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r#"Unknown element ".does-not-exist""#));
}

// ============================================================================
// has / has-one
// ============================================================================

#[test]
fn test_has_true_exits_0() {
    domnav()
        .args(["has", "-d", "-", "-l", "select option"])
        .write_stdin(PAGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn test_has_unknown_scope_exits_1() {
    domnav()
        .args(["has", "-d", "-"])
        .arg(r#"{"locator":"input","parent":{"locator":".does-not-exist"}}"#)
        .write_stdin(PAGE)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("false"));
}

#[test]
fn test_has_one_many_exits_1() {
    domnav()
        .args(["has-one", "-d", "-", "-l", "h1"])
        .write_stdin(PAGE)
        .assert()
        .code(1);
}

#[test]
fn test_has_invalid_locator_exits_2() {
    domnav()
        .args(["has", "-d", "-", "-l", "h1[["])
        .write_stdin(PAGE)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid CSS selector locator h1[["));
}

// ============================================================================
// Configuration and input errors
// ============================================================================

#[test]
fn test_verbose_flag_logs_to_stderr() {
    domnav()
        .args(["-v", "find", "-d", "-", "-l", "h1"])
        .write_stdin(PAGE)
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_default_verbosity_keeps_stderr_quiet() {
    domnav()
        .args(["find", "-d", "-", "-l", "h1"])
        .write_stdin(PAGE)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_config_file_limits_apply() {
    let dir = TempDir::new().unwrap();
    let page = write_page(&dir);
    let config = dir.path().join("domnav.yaml");
    fs::write(&config, "navigator:\n  max_scope_depth: 0\n").unwrap();
    domnav()
        .arg("--config")
        .arg(&config)
        .args(["find", "-d"])
        .arg(&page)
        .arg(r#"{"locator":"input","parent":{"locator":"form"}}"#)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("limit is 0"));
}

#[test]
fn test_config_file_format() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("domnav.yaml");
    fs::write(&config, "format: json\n").unwrap();
    domnav()
        .arg("--config")
        .arg(&config)
        .args(["has-one", "-d", "-", "-l", "main"])
        .write_stdin(PAGE)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"result":true}"#));
}

#[test]
fn test_missing_document_exits_2() {
    domnav()
        .args(["find", "-d", "/definitely/missing.html", "-l", "h1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Cannot read document"));
}

#[test]
fn test_malformed_identifier_exits_2() {
    domnav()
        .args(["find", "-d", "-", "{not json"])
        .write_stdin(PAGE)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid element identifier JSON"));
}

#[test]
fn test_missing_identifier_exits_2() {
    domnav()
        .args(["find", "-d", "-"])
        .write_stdin(PAGE)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--locator"));
}
