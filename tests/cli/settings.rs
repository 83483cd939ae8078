//! Tests for `envsync forge` and `envsync privkey`.

use crate::support::*;
use predicates::prelude::*;
use std::fs;

fn config(t: &Test) -> String {
    fs::read_to_string(t.home.path().join(".envsync/config.toml")).unwrap()
}

#[test]
fn test_forge_is_persisted() {
    let t = Test::new();
    t.cmd()
        .args(["forge", "gitlab.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitlab.com"));

    assert!(config(&t).contains("forge = \"gitlab.com\""));
}

#[test]
fn test_forge_runs_anywhere() {
    let t = Test::new();
    t.cmd_in(t.dir.path())
        .args(["forge", "codeberg.org"])
        .assert()
        .success();
}

#[test]
fn test_privkey_stores_absolute_path() {
    let t = Test::new();
    let output = t.privkey(&t.key_path());
    assert_success(&output);

    let stored = config(&t);
    let canonical = t.key_path().canonicalize().unwrap();
    assert!(stored.contains(&canonical.display().to_string()), "{}", stored);
}

#[test]
fn test_privkey_keeps_forge() {
    let t = Test::new();
    assert_success(&t.cmd().args(["forge", "gitlab.com"]).output().unwrap());
    assert_success(&t.privkey(&t.key_path()));

    assert!(config(&t).contains("gitlab.com"));
}

#[test]
fn test_privkey_missing_file_fails() {
    let t = Test::new();
    let output = t.privkey(&t.home.path().join("nope"));
    assert_failure(&output);
    assert_stderr_contains(&output, "private key not found");
    assert!(!t.home.path().join(".envsync/config.toml").exists());
}
