//! Tests for `envsync addkeys`.

use crate::support::*;
use std::fs;

fn recipients(t: &Test) -> String {
    fs::read_to_string(t.project().join(".envsync.recipients")).unwrap()
}

#[test]
fn test_raw_keys_are_appended_verbatim() {
    let t = Test::new();
    let output = t.addkeys(&[BOB_PUBLIC_KEY, CAROL_SSH_KEY]);
    assert_success(&output);

    let expected = format!("{}\n{}\n", BOB_PUBLIC_KEY, CAROL_SSH_KEY);
    assert_eq!(recipients(&t), expected);
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_append_preserves_existing_lines() {
    let t = Test::new();
    fs::write(
        t.project().join(".envsync.recipients"),
        "# repo=shared-name\n# ops team\n",
    )
    .unwrap();

    assert_success(&t.addkeys(&[BOB_PUBLIC_KEY]));
    assert_success(&t.addkeys(&[BOB_PUBLIC_KEY]));

    assert_eq!(
        recipients(&t),
        format!("# repo=shared-name\n# ops team\n{0}\n{0}\n", BOB_PUBLIC_KEY)
    );
}

#[test]
fn test_adds_newline_to_unterminated_list() {
    let t = Test::new();
    fs::write(t.project().join(".envsync.recipients"), "# team").unwrap();

    assert_success(&t.addkeys(&[BOB_PUBLIC_KEY]));
    assert_eq!(recipients(&t), format!("# team\n{}\n", BOB_PUBLIC_KEY));
}

#[test]
fn test_username_on_unreachable_forge_adds_comment_only() {
    let t = Test::new();
    assert_success(&t.cmd().args(["forge", "forge.invalid"]).output().unwrap());

    let output = t.addkeys(&["alice"]);
    assert_success(&output);
    assert_eq!(recipients(&t), "# https://forge.invalid/alice.keys\n");
}
