//! Tests for usage handling and error reporting.

use crate::skip_without_git;
use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_no_command_prints_usage_and_succeeds() {
    let t = Test::new();
    t.cmd_in(&t.project())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_command_fails_naming_it() {
    let t = Test::new();
    t.cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();
    t.cmd_in(&t.project())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("envsync"));
}

#[test]
fn test_project_commands_require_git_root() {
    let t = Test::new();
    let subdir = t.dir.path().join("not-a-checkout");
    std::fs::create_dir_all(&subdir).unwrap();

    for args in [
        vec!["update"],
        vec!["addkeys", BOB_PUBLIC_KEY],
        vec!["commit", ".env"],
        vec!["log", ".env"],
    ] {
        t.cmd_in(&subdir)
            .arg("--yes")
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("not at the root of a git working tree"));
    }
    assert!(!subdir.join(".envsync.recipients").exists());
}

#[test]
fn test_subdirectory_of_checkout_is_rejected() {
    let t = Test::new();
    let nested = t.project().join("src");
    std::fs::create_dir_all(&nested).unwrap();

    t.cmd_in(&nested)
        .args(["addkeys", BOB_PUBLIC_KEY])
        .assert()
        .failure();
}

#[test]
fn test_update_before_init_hints_at_init() {
    skip_without_git!();
    let t = Test::new();
    t.cmd()
        .arg("update")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mirror not initialized"))
        .stderr(predicate::str::contains("envsync init"));
}

#[test]
fn test_commit_missing_file_fails() {
    skip_without_git!();
    let t = Test::new();
    t.cmd()
        .args(["commit", ".env.missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".env.missing"));
}

#[test]
fn test_addkeys_requires_a_token() {
    let t = Test::new();
    t.cmd().arg("addkeys").assert().failure();
}
