use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn meson_cli_binary() -> &'static str {
    env!("CARGO_BIN_EXE_meson-cli")
}

#[test]
fn reports_diagnostics_with_span() {
    let tmp = tempdir().expect("tempdir");
    fs::write(
        tmp.path().join("meson.build"),
        "project('demo')\nx = 1 + 'a'\nmessage(x)\n",
    )
    .expect("write build file");

    let output = Command::new(meson_cli_binary())
        .current_dir(tmp.path())
        .args(["check", "."])
        .output()
        .expect("run check");

    assert!(
        !output.status.success(),
        "expected non-zero exit when errors are found"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error: Unable to apply operator + to types int and str"),
        "expected operator error, got: {stderr}"
    );
    assert!(
        stderr.contains("--> meson.build:2:5"),
        "expected span reference in diagnostics: {stderr}"
    );
    assert!(
        stderr.contains("x = 1 + 'a'"),
        "expected source line in diagnostics: {stderr}"
    );
    assert!(
        stderr.contains("checked 1 file(s): 1 error(s), 0 warning(s)"),
        "expected summary line: {stderr}"
    );
}

#[test]
fn clean_project_succeeds() {
    let tmp = tempdir().expect("tempdir");
    fs::write(
        tmp.path().join("meson.build"),
        "project('demo', 'c')\nexecutable('demo', 'main.c', install: get_option('install_app'))\n",
    )
    .expect("write build file");
    fs::write(
        tmp.path().join("meson.options"),
        "option('install_app', type: 'boolean', value: true)\n",
    )
    .expect("write options");

    let output = Command::new(meson_cli_binary())
        .current_dir(tmp.path())
        .args(["check", "."])
        .output()
        .expect("run check");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "expected success, got: {stderr}");
    assert!(
        stderr.contains("checked 2 file(s): 0 error(s), 0 warning(s)"),
        "both files should be checked: {stderr}"
    );
}

#[test]
fn warnings_alone_do_not_fail() {
    let tmp = tempdir().expect("tempdir");
    fs::write(
        tmp.path().join("meson.build"),
        "project('demo')\nlib = static_library('foo', 'foo.c')\n",
    )
    .expect("write build file");

    let output = Command::new(meson_cli_binary())
        .current_dir(tmp.path())
        .args(["check", "meson.build"])
        .output()
        .expect("run check");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "warnings should not fail: {stderr}");
    assert!(stderr.contains("warning: Unused assignment"), "got: {stderr}");
}

#[test]
fn config_file_disables_checks() {
    let tmp = tempdir().expect("tempdir");
    fs::write(
        tmp.path().join("meson.build"),
        "project('demo')\nlib = static_library('foo', 'foo.c')\n",
    )
    .expect("write build file");
    fs::write(
        tmp.path().join("lint.yaml"),
        "disable_unused_variable_check: true\n",
    )
    .expect("write config");

    let output = Command::new(meson_cli_binary())
        .current_dir(tmp.path())
        .args(["--config", "lint.yaml", "check", "meson.build"])
        .output()
        .expect("run check");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "expected success, got: {stderr}");
    assert!(
        !stderr.contains("Unused assignment"),
        "unused check should be disabled: {stderr}"
    );
}

#[test]
fn emits_json_reports() {
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join("meson.build"), "x = 1\n").expect("write build file");

    let output = Command::new(meson_cli_binary())
        .current_dir(tmp.path())
        .args(["check", "--format", "json", "."])
        .output()
        .expect("run check");

    assert!(!output.status.success(), "missing project() is an error");
    let reports: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is json");
    let report = &reports[0];
    assert_eq!(report["path"], "meson.build");
    let messages: Vec<&str> = report["diagnostics"]
        .as_array()
        .expect("diagnostics array")
        .iter()
        .filter_map(|diagnostic| diagnostic["message"].as_str())
        .collect();
    assert!(
        messages.contains(&"Missing project() call at top of file"),
        "unexpected diagnostics: {messages:?}"
    );
    assert_eq!(report["diagnostics"][0]["level"], "error");
}

#[test]
fn missing_path_is_an_error() {
    let tmp = tempdir().expect("tempdir");
    let output = Command::new(meson_cli_binary())
        .current_dir(tmp.path())
        .args(["check", "does-not-exist"])
        .output()
        .expect("run check");

    assert!(!output.status.success(), "expected failure for a missing path");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "got: {stderr}");
}
