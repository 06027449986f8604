//! Tests for the `zone-cli` binary.

use std::io::Write;
use std::process::Command;

fn zone_cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_zone-cli"))
}

fn table_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_check_reports_every_validation_error() {
    let file = table_file(
        r#"
        [[zone]]
        id = 0
        patterns = ["AB"]

        [[zone]]
        id = 1
        patterns = ["CD"]
        "#,
    );

    let output = zone_cli().arg("check").arg(file.path()).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 2, "stderr: {}", stderr);
    assert!(stderr.contains("zone #0: id must be a positive integer"));
    assert!(stderr.contains("zone #1: the default zone 1 cannot declare patterns"));
}

#[test]
fn test_check_rejects_malformed_file() {
    let file = table_file("[[zone]]\nid = \"two\"\n");

    let output = zone_cli().arg("check").arg(file.path()).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("Parse error"));
}

#[test]
fn test_check_accepts_valid_file_and_warns_on_shadowing() {
    let file = table_file(
        r#"
        [[zone]]
        id = 4
        patterns = ["AB", "AB1 2"]
        "#,
    );

    let output = zone_cli().arg("check").arg(file.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("ok (1 zones, 2 patterns)"));
    assert!(stdout.contains("warning: 'AB1 2' is shadowed by earlier pattern 'AB'"));
}

#[test]
fn test_classify_builtin_table() {
    let output = zone_cli()
        .args(["classify", "BT1 1AA", "M1 1AA"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "BT1 1AA\t4\nM1 1AA\t1\n"
    );
}
