//! Command-line surface tests

use assert_cmd::Command;
use linecount::test_utils::TestTree;
use predicates::prelude::*;

fn linecount() -> Command {
    let mut cmd = Command::cargo_bin("linecount").expect("binary built");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    linecount()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--keep-going"))
        .stdout(predicate::str::contains("--ext"));
}

#[test]
fn test_extension_without_dot() {
    let tree = TestTree::new();
    tree.add_lines("r/lib.rs", 3);
    tree.add_lines("r/main.c", 9);

    linecount()
        .current_dir(tree.path())
        .args(["r", "--ext", "rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lib.rs    3"))
        .stdout(predicate::str::contains("main.c").not())
        .stdout(predicate::str::ends_with("Total lines of code: 3\n"));
}

#[test]
fn test_empty_extension_rejected() {
    let tree = TestTree::new();
    tree.add_dir("r");

    linecount()
        .current_dir(tree.path())
        .args(["r", "--ext", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no file suffixes"));
}

#[test]
fn test_quiet_conflicts_with_json() {
    linecount()
        .args(["--quiet", "--json"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_color_always_emits_escapes() {
    let tree = TestTree::new();
    tree.add_lines("r/a.c", 1);

    linecount()
        .current_dir(tree.path())
        .args(["r", "--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}

#[test]
fn test_missing_root_exit_code() {
    let tree = TestTree::new();

    linecount()
        .current_dir(tree.path())
        .arg("absent")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot access 'absent'"));
}
