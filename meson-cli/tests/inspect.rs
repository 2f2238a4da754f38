//! The `values` and `tokens` subcommands.

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn meson_cli_binary() -> &'static str {
    env!("CARGO_BIN_EXE_meson-cli")
}

#[test]
fn prints_values_of_an_identifier() {
    let tmp = tempdir().expect("tempdir");
    fs::write(
        tmp.path().join("meson.build"),
        "project('demo')\nforeach d : ['src', 'tests']\n  subdir(d)\nendforeach\n",
    )
    .expect("write build file");

    let output = Command::new(meson_cli_binary())
        .current_dir(tmp.path())
        .args(["values", "meson.build", "3", "d"])
        .output()
        .expect("run values");

    assert!(output.status.success(), "values should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "src\ntests\n");
}

#[test]
fn values_for_unknown_identifier_fail() {
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join("meson.build"), "project('demo')\n").expect("write build file");

    let output = Command::new(meson_cli_binary())
        .current_dir(tmp.path())
        .args(["values", "meson.build", "1", "nothing"])
        .output()
        .expect("run values");

    assert!(!output.status.success(), "nothing to print");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no values found for `nothing` at line 1"),
        "got: {stderr}"
    );
}

#[test]
fn dumps_tokens() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("meson.build");
    fs::write(&path, "x = 'a'\n").expect("write build file");

    let output = Command::new(meson_cli_binary())
        .arg("tokens")
        .arg(&path)
        .output()
        .expect("run tokens");

    assert!(output.status.success(), "clean input should lex");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "identifier, =, string, eol and eof: {stdout}");
    assert!(lines[0].starts_with("1:1-1:1 "), "got: {}", lines[0]);
    assert!(lines[0].ends_with("\"x\""), "got: {}", lines[0]);
    assert!(lines[2].starts_with("1:5-1:7 "), "got: {}", lines[2]);
}

#[test]
fn token_errors_fail() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("meson.build");
    fs::write(&path, "x = $\n").expect("write build file");

    let output = Command::new(meson_cli_binary())
        .arg("tokens")
        .arg(&path)
        .output()
        .expect("run tokens");

    assert!(!output.status.success(), "lexer errors should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error: 1:5: Unexpected character: '$'"),
        "got: {stderr}"
    );
}
