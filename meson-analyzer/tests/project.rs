use std::fs;
use std::path::Path;

use meson_analyzer::{load_config, load_source, ProjectError, ProjectFiles};
use tempfile::tempdir;

#[test]
fn discovers_the_option_file_next_to_the_build_file() {
    let dir = tempdir().expect("temp dir");
    let build_file = dir.path().join("meson.build");
    fs::write(&build_file, "project('demo')\n").expect("write build file");
    fs::write(dir.path().join("meson_options.txt"), "").expect("write legacy options");

    let project = ProjectFiles::discover(&build_file).expect("project");
    assert_eq!(project.root, dir.path());
    assert_eq!(
        project.options_file.as_deref(),
        Some(dir.path().join("meson_options.txt").as_path())
    );

    fs::write(dir.path().join("meson.options"), "").expect("write options");
    let project = ProjectFiles::discover(&build_file).expect("project");
    assert_eq!(
        project.options_file.as_deref(),
        Some(dir.path().join("meson.options").as_path()),
        "meson.options wins over meson_options.txt"
    );
}

#[test]
fn project_without_option_file_uses_builtin_options() {
    let dir = tempdir().expect("temp dir");
    let build_file = dir.path().join("meson.build");
    fs::write(&build_file, "project('demo')\n").expect("write build file");

    let project = ProjectFiles::discover(&build_file).expect("project");
    assert!(project.options_file.is_none());
    let registry = project.load_options().expect("options");
    assert!(registry.find_option("buildtype").is_some(), "builtins are loaded");
}

#[test]
fn loads_declared_options() {
    let dir = tempdir().expect("temp dir");
    let build_file = dir.path().join("meson.build");
    fs::write(&build_file, "project('demo')\n").expect("write build file");
    fs::write(
        dir.path().join("meson.options"),
        "option('with_docs', type: 'boolean', value: false)\n",
    )
    .expect("write options");

    let registry = ProjectFiles::discover(&build_file)
        .and_then(|project| project.load_options())
        .expect("options");
    assert!(registry.find_option("with_docs").is_some(), "declared option is loaded");
    assert!(registry.find_option("buildtype").is_some(), "builtins are kept");
}

#[test]
fn missing_build_file_is_reported() {
    let dir = tempdir().expect("temp dir");
    let err = ProjectFiles::discover(&dir.path().join("meson.build")).expect_err("no build file");
    assert!(matches!(err, ProjectError::NotFound { .. }), "unexpected error: {err:?}");
    assert!(err.to_string().ends_with("does not exist"), "message: {err}");

    let err = load_source(&dir.path().join("missing.build")).expect_err("no source");
    assert!(matches!(err, ProjectError::Read { .. }), "unexpected error: {err:?}");
}

#[test]
fn display_paths_are_relative_to_the_root() {
    let dir = tempdir().expect("temp dir");
    let build_file = dir.path().join("meson.build");
    fs::write(&build_file, "project('demo')\n").expect("write build file");
    let project = ProjectFiles::discover(&build_file).expect("project");

    assert_eq!(
        project.display_path(&dir.path().join("src").join("meson.build")),
        Path::new("src").join("meson.build")
    );
    let outside = Path::new("/somewhere/else/meson.build");
    assert_eq!(project.display_path(outside), outside, "outside paths stay absolute");
}

#[test]
fn reads_config_from_json_and_yaml() {
    let dir = tempdir().expect("temp dir");
    let json = dir.path().join("lint.json");
    fs::write(&json, r#"{"disable_name_linting": true}"#).expect("write json");
    let options = load_config(&json).expect("json config");
    assert!(options.disable_name_linting);
    assert!(!options.disable_unused_variable_check, "unset switches default to off");

    let yaml = dir.path().join("lint.yaml");
    fs::write(&yaml, "disable_unused_variable_check: true\ndisable_all_id_linting: true\n")
        .expect("write yaml");
    let options = load_config(&yaml).expect("yaml config");
    assert!(options.disable_unused_variable_check);
    assert!(options.disable_all_id_linting);
    assert!(!options.disable_name_linting);
}

#[test]
fn rejects_bad_configs() {
    let dir = tempdir().expect("temp dir");
    let toml = dir.path().join("lint.toml");
    fs::write(&toml, "disable_name_linting = true\n").expect("write toml");
    let err = load_config(&toml).expect_err("unsupported extension");
    assert!(matches!(err, ProjectError::Config { .. }), "unexpected error: {err:?}");

    let json = dir.path().join("broken.json");
    fs::write(&json, "{ not json").expect("write json");
    let err = load_config(&json).expect_err("invalid json");
    assert!(matches!(err, ProjectError::Config { .. }), "unexpected error: {err:?}");
}
