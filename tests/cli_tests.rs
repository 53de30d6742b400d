use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    cargo_bin_cmd!("tintpick")
}

fn missing_palette(dir: &tempfile::TempDir) -> String {
    dir.path().join("none.toml").to_string_lossy().into_owned()
}

#[test]
fn print_defaults_as_table() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .args(["--print", "-f", &missing_palette(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("HEX"))
        .stdout(predicate::str::contains("HSV"))
        .stdout(predicate::str::contains("RGB"))
        // slot 0 of the default hue ladder
        .stdout(predicate::str::contains("#ff5500"))
        .stdout(predicate::str::contains("020 100 100"));
}

#[test]
fn print_hex_lists_every_slot() {
    let dir = tempfile::tempdir().unwrap();
    let output = cmd()
        .args(["-p", "-o", "hex", "-f", &missing_palette(&dir)])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.trim().split(", ").count(), 7);
    assert!(stdout.starts_with("#ff5500"));
}

#[test]
fn print_reads_stored_palette() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stored.toml");
    std::fs::write(&path, "[[color]]\nhex = \"#1a1a2e\"\n").unwrap();

    cmd()
        .args(["-p", "-o", "hex", "-f", &path.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1a1a2e"));
}

#[test]
fn invalid_palette_fails_with_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[[color]]\nrgb = [300, 0, 0]\n").unwrap();

    cmd()
        .args(["-p", "-f", &path.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed RGB"));
}

#[test]
fn missing_definition_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty_slot.toml");
    std::fs::write(&path, "[[color]]\n").unwrap();

    cmd()
        .args(["-p", "-f", &path.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing color definition"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tintpick"));
}
