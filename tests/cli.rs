use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("folio-audit").unwrap();
    cmd.env_remove("FOLIO_AUDIT_PALETTE").env_remove("RUST_LOG");
    cmd
}

#[test]
fn ratio_black_white() {
    cmd().args(["ratio", "#000", "#fff"]).assert().success().stdout("21.00\n");
}

#[test]
fn ratio_json() {
    cmd()
        .args(["--json", "ratio", "#ffffff", "#1a1a1a"])
        .assert()
        .success()
        .stdout(contains("\"ratio\":17.4"));
}

#[test]
fn ratio_rejects_malformed_color() {
    cmd()
        .args(["ratio", "invalid", "#fff"])
        .assert()
        .code(2)
        .stderr(contains("expected 3 or 6 hex digits"));
}

#[test]
fn check_large_text() {
    cmd()
        .args(["check", "#888888", "#ffffff", "--large"])
        .assert()
        .success()
        .stdout(contains("WCAG AA  (large text, >= 3:1): PASS"))
        .stdout(contains("WCAG AAA (large text, >= 4.5:1): FAIL"));
}

#[test]
fn check_normal_text() {
    cmd()
        .args(["check", "#888888", "#ffffff"])
        .assert()
        .success()
        .stdout(contains("Contrast ratio: 3.54:1"))
        .stdout(contains("WCAG AA  (normal text, >= 4.5:1): FAIL"));
}

#[test]
fn audit_default_palette() {
    cmd()
        .arg("audit")
        .assert()
        .success()
        .stdout(contains("PASS  Primary text on primary background"))
        .stdout(contains("Passed: 6/12"))
        .stdout(contains("Success rate: 50%"));
}

#[test]
fn audit_strict_fails_on_dark_palette() {
    cmd().args(["audit", "--strict"]).assert().code(1);
}

#[test]
fn audit_palette_from_env() {
    cmd()
        .env("FOLIO_AUDIT_PALETTE", "buttons")
        .arg("audit")
        .assert()
        .success()
        .stdout(contains("Hover state"))
        .stdout(contains("Passed: 1/2"));
}

#[test]
fn audit_json_report() {
    let output = cmd().args(["audit", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["passed"], 6);
    assert_eq!(value["failed"], 6);
    assert_eq!(value["results"].as_array().map(Vec::len), Some(12));
    assert_eq!(value["results"][0]["status"], "PASS");
}

#[test]
fn audit_palette_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("light.json");
    fs::write(
        &path,
        r##"{ "name": "light", "pairs": [ { "name": "Body", "fg": "#1a1a1a", "bg": "#ffffff" } ] }"##,
    )
    .unwrap();

    cmd()
        .args(["audit", "--strict", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("PASS  Body"));
}

#[test]
fn audit_stylesheet_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.css");
    fs::write(
        &path,
        ":root { --color-text-primary: #000000; --color-accent: #ffffff; --color-accent-hover: #eeeeee; }",
    )
    .unwrap();

    cmd()
        .args(["audit", "--palette", "buttons", "--strict", "--css"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Passed: 2/2"));
}

#[test]
fn audit_stylesheet_missing_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.css");
    fs::write(&path, ":root { --color-text-primary: #000; }").unwrap();

    cmd()
        .args(["audit", "--palette", "buttons", "--css"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("undefined token `--color-accent`"));
}

#[test]
fn audit_aaa_level() {
    cmd()
        .args(["audit", "--palette", "buttons", "--level", "aaa"])
        .assert()
        .success()
        .stdout(contains("(WCAG AAA)"))
        .stdout(contains("Passed: 0/2"));
}

#[test]
fn audit_unknown_palette() {
    cmd()
        .args(["audit", "--palette", "sepia"])
        .assert()
        .failure()
        .stderr(contains("unknown palette `sepia`"));
}

#[test]
fn audit_missing_file() {
    cmd()
        .args(["audit", "--file", "/nonexistent/palette.json"])
        .assert()
        .failure()
        .stderr(contains("loading palette"));
}

#[test]
fn palettes_lists_builtins() {
    cmd()
        .arg("palettes")
        .assert()
        .success()
        .stdout(contains("dark").and(contains("buttons")));
}
