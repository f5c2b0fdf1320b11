use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::ReleaseWorkspace;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_patch_version"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("patch_version"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn shows_version() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_argument_is_a_silent_success() {
    let ws = ReleaseWorkspace::new();
    let connector = ws.connector();
    let installer = ws.installer();

    bin()
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(ws.connector(), connector);
    assert_eq!(ws.installer(), installer);
}

#[test]
fn unknown_flag_is_a_usage_error() {
    bin().arg("--frobnicate").assert().failure().code(2);
}
