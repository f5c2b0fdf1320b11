use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{CONNECTOR_RB, ReleaseWorkspace, SKETCHUP_ISS};

fn patch_in(ws: &ReleaseWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_patch_version"));
    cmd.current_dir(ws.path());
    cmd
}

#[test]
fn patches_connector_and_installer() {
    let ws = ReleaseWorkspace::new();

    patch_in(&ws)
        .arg("2.14.0")
        .assert()
        .success()
        .stdout(
            "Patching version: 2.14.0\n\
             Patched connector version number in speckle_connector.rb\n\
             Patched installer with connector v2.14.0\n",
        );

    assert_eq!(
        ws.connector(),
        CONNECTOR_RB.replace(
            "    CONNECTOR_VERSION = \"9.9.9\"",
            "    CONNECTOR_VERSION = \"2.14.0\""
        )
    );

    let mut expected: Vec<&str> = SKETCHUP_ISS.lines().collect();
    expected.insert(11, "#define AppVersion \"2.14.0\"");
    let installer = ws.installer();
    assert_eq!(installer.lines().collect::<Vec<_>>(), expected);
    assert!(installer.ends_with('\n'));
}

#[test]
fn second_run_duplicates_installer_define() {
    let ws = ReleaseWorkspace::new();
    patch_in(&ws).arg("1.0.0").assert().success();
    patch_in(&ws).arg("1.0.0").assert().success();

    let installer = ws.installer();
    let defines = installer
        .lines()
        .filter(|l| *l == "#define AppVersion \"1.0.0\"")
        .count();
    assert_eq!(defines, 2);
    assert_eq!(installer.lines().count(), SKETCHUP_ISS.lines().count() + 2);
    assert_eq!(ws.connector().matches("CONNECTOR_VERSION = \"1.0.0\"").count(), 1);
}

#[test]
fn invalid_tag_fails_without_touching_files() {
    for tag in ["v1.2.3", "1..2", ".1", "1.2.3abc", "1.2-beta"] {
        let ws = ReleaseWorkspace::new();
        patch_in(&ws)
            .arg(tag)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(format!("Invalid tag provided: {tag}")))
            .stdout(predicate::str::is_empty());

        assert_eq!(ws.connector(), CONNECTOR_RB);
        assert_eq!(ws.installer(), SKETCHUP_ISS);
    }
}

#[test]
fn short_installer_aborts_both_patches() {
    let ws = ReleaseWorkspace::with_files(CONNECTOR_RB, "[Setup]\nAppName=Speckle\n");

    patch_in(&ws)
        .arg("3.0.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot insert at line 11"));

    assert_eq!(ws.connector(), CONNECTOR_RB);
    assert_eq!(ws.installer(), "[Setup]\nAppName=Speckle\n");
}

#[test]
fn missing_installer_reports_path() {
    let ws = ReleaseWorkspace::new();
    std::fs::remove_file(ws.path().join("speckle-sharp-ci-tools/sketchup.iss")).unwrap();

    patch_in(&ws)
        .arg("1.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sketchup.iss"));

    assert_eq!(ws.connector(), CONNECTOR_RB);
}

#[test]
fn missing_marker_warns_on_stderr() {
    let ws = ReleaseWorkspace::with_files("module X\nend\n", SKETCHUP_ISS);

    patch_in(&ws)
        .arg("1.0")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("Patched connector").not())
        .stdout(predicate::str::contains("Patched installer with connector v1.0"))
        .stderr(predicate::str::contains("CONNECTOR_VERSION"));

    assert_eq!(ws.connector(), "module X\nend\n");
}

#[test]
fn strict_mode_rejects_missing_marker() {
    let ws = ReleaseWorkspace::with_files("module X\nend\n", SKETCHUP_ISS);

    patch_in(&ws)
        .args(["--strict", "1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No line containing 'CONNECTOR_VERSION ='"));

    assert_eq!(ws.installer(), SKETCHUP_ISS);
}

#[test]
fn dry_run_leaves_files_alone() {
    let ws = ReleaseWorkspace::new();

    patch_in(&ws)
        .args(["--dry-run", "4.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would patch connector speckle_connector.rb (replace line 8)"))
        .stdout(predicate::str::contains("(insert at line 12)"))
        .stdout(predicate::str::contains("Dry run: no files were written"));

    assert_eq!(ws.connector(), CONNECTOR_RB);
    assert_eq!(ws.installer(), SKETCHUP_ISS);
}

#[test]
fn root_and_anchor_options() {
    let ws = ReleaseWorkspace::new();
    let elsewhere = tempfile::tempdir().unwrap();

    Command::new(env!("CARGO_BIN_EXE_patch_version"))
        .current_dir(elsewhere.path())
        .arg("-C")
        .arg(ws.path())
        .args(["--installer-anchor", "#define AppName", "5.0.1"])
        .assert()
        .success();

    let installer = ws.installer();
    let lines: Vec<_> = installer.lines().collect();
    assert_eq!(lines[3], "#define AppName \"Speckle for SketchUp\"");
    assert_eq!(lines[4], "#define AppVersion \"5.0.1\"");
    assert!(ws.connector().contains("    CONNECTOR_VERSION = \"5.0.1\"\n"));
}

#[test]
fn same_file_for_both_targets_gets_both_edits() {
    let ws = ReleaseWorkspace::new();
    let mut combined = CONNECTOR_RB.to_string();
    combined.push_str(SKETCHUP_ISS);
    ws.write("release.txt", &combined);

    patch_in(&ws)
        .args(["--connector-file", "release.txt", "--installer-file", "./release.txt", "6.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Patched connector version number in release.txt"));

    let text = ws.read("release.txt");
    assert!(text.contains("    CONNECTOR_VERSION = \"6.0.0\"\n"));
    assert_eq!(text.lines().nth(11), Some("#define AppVersion \"6.0.0\""));
}
