//! Tests for `envsync update`.

use crate::skip_without_git;
use crate::support::*;
use predicates::prelude::*;

/// Alice commits `.env.local` for herself and Bob, then Bob clones.
fn shared(contents: &str) -> (Remote, Test, Test) {
    let remote = Remote::new();
    let alice = Test::joined(&remote);
    let bob = Test::new();
    assert_success(&alice.addkeys(&[bob.public_key.as_str()]));

    alice.write(".env.local", contents);
    assert_success(&alice.commit(".env.local"));

    assert_success(&bob.init_cmd(&remote.url()));
    assert_success(&bob.privkey(&bob.key_path()));
    (remote, alice, bob)
}

#[test]
fn test_update_creates_missing_file() {
    skip_without_git!();
    let (_remote, _alice, bob) = shared(SAMPLE_ENV);

    let output = bob.update();
    assert_success(&output);
    assert_stdout_contains(&output, "updated .env.local");
    assert_eq!(bob.read(".env.local"), SAMPLE_ENV);
}

#[test]
fn test_up_alias() {
    skip_without_git!();
    let (_remote, _alice, bob) = shared(SAMPLE_ENV);

    bob.cmd().arg("up").assert().success();
    assert_eq!(bob.read(".env.local"), SAMPLE_ENV);
}

#[test]
fn test_update_skips_locally_newer_file() {
    skip_without_git!();
    let (_remote, _alice, bob) = shared("A=remote\n");
    bob.write(".env.local", "A=mine\n");
    bob.shift_mtime(".env.local", 60);

    let output = bob.update();
    assert_success(&output);
    assert_stdout_contains(&output, "skip .env.local, newer than remote");
    assert_eq!(bob.read(".env.local"), "A=mine\n");
}

#[test]
fn test_force_overrides_locally_newer_file() {
    skip_without_git!();
    let (_remote, _alice, bob) = shared("A=remote\n");
    bob.write(".env.local", "A=mine\n");
    bob.shift_mtime(".env.local", 60);

    bob.cmd()
        .args(["up", "force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated .env.local"));
    assert_eq!(bob.read(".env.local"), "A=remote\n");

    bob.write(".env.local", "A=mine\n");
    bob.shift_mtime(".env.local", 60);
    bob.cmd().args(["update", "--force"]).assert().success();
    assert_eq!(bob.read(".env.local"), "A=remote\n");
}

#[test]
fn test_update_overwrites_older_file_when_confirmed() {
    skip_without_git!();
    let (_remote, _alice, bob) = shared("A=remote\n");
    bob.write(".env.local", "A=stale\n");
    bob.shift_mtime(".env.local", -3600);

    let output = bob.update();
    assert_success(&output);
    assert_stdout_contains(&output, "updated .env.local");
    assert_eq!(bob.read(".env.local"), "A=remote\n");
}

#[test]
fn test_update_identical_file_is_silent() {
    skip_without_git!();
    let (_remote, _alice, bob) = shared(SAMPLE_ENV);
    assert_success(&bob.update());
    bob.shift_mtime(".env.local", -3600);

    bob.cmd_in(&bob.project())
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains(".env.local").not());
}

#[test]
fn test_update_sees_later_commits() {
    skip_without_git!();
    let (_remote, alice, bob) = shared("A=1\n");
    assert_success(&bob.update());
    bob.shift_mtime(".env.local", -3600);

    alice.write(".env.local", "A=2\n");
    alice.shift_mtime(".env.local", 60);
    assert_success(&alice.commit(".env.local"));

    assert_success(&bob.update());
    assert_eq!(bob.read(".env.local"), "A=2\n");
}

#[test]
fn test_update_with_nothing_stored() {
    skip_without_git!();
    let remote = Remote::new();
    let t = Test::joined(&remote);

    let output = t.update();
    assert_success(&output);
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_update_reports_written_files_before_failing() {
    skip_without_git!();
    let (_remote, _alice, bob) = shared(SAMPLE_ENV);
    std::fs::write(bob.mirror().join(PROJECT).join("zz.env.age"), b"garbage").unwrap();

    let output = bob.update();
    assert_failure(&output);
    assert_stdout_contains(&output, "updated .env.local");
    assert_stderr_contains(&output, "decryption failed");
    assert_eq!(bob.read(".env.local"), SAMPLE_ENV);
}
