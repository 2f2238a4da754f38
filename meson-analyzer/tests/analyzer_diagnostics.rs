//! Semantic diagnostics reported by the type analyzer.

use std::path::PathBuf;

use meson_analyzer::{
    analyze_source, Analysis, AnalysisOptions, DiagnosticLevel, DiagnosticTag, OptionRegistry,
    SourceFile, SourceId,
};

fn source(text: &str) -> SourceFile {
    SourceFile::new(SourceId(0), PathBuf::from("meson.build"), text.to_string())
}

fn analyze_with(text: &str, options: &AnalysisOptions) -> Analysis {
    analyze_source(
        &source(text),
        &OptionRegistry::with_builtin_options(),
        options,
    )
}

fn analyze(text: &str) -> Analysis {
    analyze_with(text, &AnalysisOptions::default())
}

fn messages(analysis: &Analysis) -> Vec<String> {
    analysis.diagnostics.messages().map(str::to_string).collect()
}

fn assert_reports(text: &str, expected: &str) {
    let analysis = analyze(text);
    let messages = messages(&analysis);
    assert!(
        messages.iter().any(|message| message == expected),
        "expected {expected:?} for {text:?}, got {messages:?}"
    );
}

fn assert_silent(text: &str, unexpected: &str) {
    let analysis = analyze(text);
    let messages = messages(&analysis);
    assert!(
        !messages.iter().any(|message| message == unexpected),
        "did not expect {unexpected:?} for {text:?}, got {messages:?}"
    );
}

#[test]
fn clean_file_has_no_diagnostics() {
    let analysis = analyze(
        "project('demo', 'c')\nsrcs = ['main.c', 'util.c']\nexe = executable('demo', srcs)\ntest('runs', exe)\n",
    );
    assert!(
        analysis.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        messages(&analysis)
    );
}

#[test]
fn requires_project_call_first() {
    assert_reports("x = 1\n", "Missing project() call at top of file");
    assert_reports("", "Missing project() call at top of file");
    assert_silent("project('demo')\n", "Missing project() call at top of file");
}

#[test]
fn records_declared_meson_version() {
    let analysis = analyze("project('demo', meson_version: '>=0.60.0')\n");
    assert_eq!(analysis.declared_version.as_deref(), Some("0.60.0"));
}

#[test]
fn marks_code_after_error_as_dead() {
    let analysis = analyze("project('demo')\nerror('stop')\nx = 1\ny = 2\n");
    let dead: Vec<_> = analysis
        .diagnostics
        .entries()
        .iter()
        .filter(|diagnostic| diagnostic.message == "Dead code")
        .collect();
    assert_eq!(dead.len(), 1, "dead statements are reported once");
    assert_eq!(dead[0].tag, Some(DiagnosticTag::Unnecessary));
    let span = dead[0].span.expect("dead code span");
    assert_eq!((span.line, span.end_line), (3, 4), "span covers both statements");
}

#[test]
fn flags_statements_without_effect() {
    assert_reports(
        "project('demo')\n'literal'\n",
        "Statement does not have an effect or the result to the call is unused",
    );
    assert_reports(
        "project('demo')\nfiles('a.c')\n",
        "Statement does not have an effect or the result to the call is unused",
    );
    assert_silent(
        "project('demo')\nmessage('hi')\n",
        "Statement does not have an effect or the result to the call is unused",
    );
}

#[test]
fn warns_about_duplicate_dict_keys() {
    let analysis = analyze("project('demo')\nd = {'a': 1, 'a': 2}\nmessage(d)\n");
    let duplicate = analysis
        .diagnostics
        .entries()
        .iter()
        .find(|diagnostic| diagnostic.message == "Duplicate key \"a\"")
        .expect("duplicate key warning");
    assert_eq!(duplicate.level, DiagnosticLevel::Warning);
}

#[test]
fn tracks_unused_assignments_from_calls() {
    assert_reports(
        "project('demo')\nlib = static_library('foo', 'foo.c')\n",
        "Unused assignment",
    );
    assert_silent(
        "project('demo')\nlib = static_library('foo', 'foo.c')\nexecutable('app', 'main.c', link_with: lib)\n",
        "Unused assignment",
    );
    assert_silent(
        "project('demo')\ndep = declare_dependency()\n",
        "Unused assignment",
    );
    assert_silent(
        "project('demo')\nif true\n  lib = static_library('foo', 'foo.c')\nendif\nexecutable('app', 'main.c', link_with: lib)\n",
        "Unused assignment",
    );
}

#[test]
fn unused_check_can_be_disabled() {
    let options = AnalysisOptions {
        disable_unused_variable_check: true,
        ..AnalysisOptions::default()
    };
    let analysis = analyze_with("project('demo')\nlib = static_library('foo', 'foo.c')\n", &options);
    assert!(
        !analysis.diagnostics.messages().any(|message| message == "Unused assignment"),
        "unused check should be off"
    );
}

#[test]
fn reports_unknown_names() {
    assert_reports("project('demo')\nmessage(missing)\n", "Unknown identifier `missing`");
    assert_reports("project('demo')\nfoo_bar()\n", "Unknown function `foo_bar`");
    assert_reports(
        "project('demo')\nx = 'a'.nope()\n",
        "No method `nope` found for types `str`",
    );
}

#[test]
fn is_variable_guards_suppress_unknown_identifiers() {
    assert_silent(
        "project('demo')\nif is_variable('maybe')\n  message(maybe)\nendif\n",
        "Unknown identifier `maybe`",
    );
    assert_reports(
        "project('demo')\nif is_variable('maybe')\nendif\nmessage(maybe)\n",
        "Unknown identifier `maybe`",
    );
}

#[test]
fn set_variable_defines_the_name() {
    assert_silent(
        "project('demo')\nset_variable('answer', 42)\nx = answer + 1\nmessage(x)\n",
        "Unknown identifier `answer`",
    );
}

#[test]
fn checks_call_arguments() {
    assert_reports(
        "project('demo')\nexecutable('app', 'main.c', bogus: true)\n",
        "Unknown key word argument 'bogus'",
    );
    assert_reports(
        "project('demo')\nbuild_target('app', 'main.c')\n",
        "Missing required key word argument 'target_type'",
    );
    assert_reports(
        "project('demo')\nexecutable(install: true, 'app')\n",
        "Unexpected positional argument after a keyword argument",
    );
    assert_reports(
        "project('demo')\nx = join_paths()\n",
        "Expected 1 positional arguments, but got none!",
    );
    assert_reports(
        "project('demo')\nx = 'a'.replace('b')\nmessage(x)\n",
        "Expected at least 2 positional arguments, but got 1!",
    );
    assert_reports(
        "project('demo')\nx = 'a'.startswith('b', 'c')\nmessage(x)\n",
        "Expected maximum 1 positional arguments, but got 2!",
    );
}

#[test]
fn checks_argument_types() {
    assert_reports(
        "project('demo')\nexecutable('app', 'main.c', install: 'yes')\n",
        "Expected bool, got str",
    );
    let options = AnalysisOptions {
        disable_arg_type_checking: true,
        ..AnalysisOptions::default()
    };
    let analysis = analyze_with(
        "project('demo')\nexecutable('app', 'main.c', install: 'yes')\n",
        &options,
    );
    assert!(
        !analysis.diagnostics.messages().any(|message| message == "Expected bool, got str"),
        "type checks should be off"
    );
}

#[test]
fn checks_operators_and_conditions() {
    assert_reports(
        "project('demo')\nx = 1 + 'a'\nmessage(x)\n",
        "Unable to apply operator + to types int and str",
    );
    assert_reports(
        "project('demo')\nif 'yes'\n  message('x')\nendif\n",
        "Condition is not bool: str",
    );
    assert_reports(
        "project('demo')\nx = 1 ? 'a' : 'b'\nmessage(x)\n",
        "Condition is not bool: int",
    );
}

#[test]
fn checks_assignments() {
    assert_reports(
        "project('demo')\nx = message('hi')\n",
        "Can't assign from void",
    );
    assert_reports(
        "project('demo')\nmeson = 1\n",
        "Attempted to re-assign to existing, read-only variable",
    );
    assert_reports("project('demo')\nmyVar = 'x'\nmessage(myVar)\n", "Expected snake case");
    assert_silent("project('demo')\nMY_VAR = 'x'\nmessage(MY_VAR)\n", "Expected snake case");

    let options = AnalysisOptions {
        disable_name_linting: true,
        ..AnalysisOptions::default()
    };
    let analysis = analyze_with("project('demo')\nmyVar = 'x'\nmessage(myVar)\n", &options);
    assert!(
        !analysis.diagnostics.messages().any(|message| message == "Expected snake case"),
        "name linting should be off"
    );
}

#[test]
fn checks_loops() {
    assert_reports(
        "project('demo')\nforeach x : {'a': 1}\n  message(x)\nendforeach\n",
        "Iterating over a dict requires two identifiers",
    );
    assert_reports(
        "project('demo')\nforeach k, v : ['a']\n  message(k, v)\nendforeach\n",
        "Iterating over a list/range requires one identifier",
    );
    assert_reports(
        "project('demo')\nforeach x : 42\n  message(x)\nendforeach\n",
        "Expression yields no iterable result",
    );
    assert_reports("project('demo')\nbreak\n", "break statements are only allowed inside loops");
    assert_silent(
        "project('demo')\nforeach x : ['a']\n  if x == 'a'\n    continue\n  endif\nendforeach\n",
        "continue statements are only allowed inside loops",
    );
}

#[test]
fn checks_format_strings() {
    let analysis = analyze("project('demo')\nx = '@0@ @2@'.format('a', 'b')\nmessage(x)\n");
    let messages = messages(&analysis);
    assert!(
        messages.iter().any(|message| message == "Unused parameter in format() call"),
        "argument 1 is never used: {messages:?}"
    );
    assert!(
        messages.iter().any(|message| message == "Parameters out of bounds: @2@"),
        "@2@ has no argument: {messages:?}"
    );

    assert_reports(
        "project('demo')\nx = 'plain'.format()\nmessage(x)\n",
        "Pointless str.format() call",
    );
    assert_reports(
        "project('demo')\nx = 'v@foo@'\nmessage(x)\n",
        "Found format identifiers in string, but literal is not a format string.",
    );
    assert_silent(
        "project('demo')\nx = '@OUTPUT@'\nmessage(x)\n",
        "Found format identifiers in string, but literal is not a format string.",
    );
}

#[test]
fn lints_identifier_comparisons() {
    assert_reports(
        "project('demo')\ncc = meson.get_compiler('c')\nif cc.get_id() == 'gccc'\n  message('x')\nendif\n",
        "Unknown compiler id",
    );
    assert_silent(
        "project('demo')\ncc = meson.get_compiler('c')\nif cc.get_id() == 'gcc'\n  message('x')\nendif\n",
        "Unknown compiler id",
    );
    assert_reports(
        "project('demo')\nif host_machine.system() == 'linuks'\n  message('x')\nendif\n",
        "Unknown OS family",
    );
    assert_reports(
        "project('demo')\nis_arm = 'armv9' == build_machine.cpu_family()\nmessage(is_arm)\n",
        "Unknown CPU family",
    );

    let options = AnalysisOptions {
        disable_all_id_linting: true,
        ..AnalysisOptions::default()
    };
    let analysis = analyze_with(
        "project('demo')\nif host_machine.system() == 'linuks'\n  message('x')\nendif\n",
        &options,
    );
    assert!(
        !analysis.diagnostics.messages().any(|message| message == "Unknown OS family"),
        "id linting should be off"
    );
}

#[test]
fn reports_unknown_options_and_modules() {
    assert_reports(
        "project('demo')\nx = get_option('nope')\nmessage(x)\n",
        "Unknown option `nope`",
    );
    assert_reports(
        "project('demo')\nm = import('nonexistent')\nmessage(m)\n",
        "Unknown module `nonexistent`",
    );
    assert_silent(
        "project('demo')\nfs = import('fs')\nmessage(fs)\n",
        "Unknown module `fs`",
    );
}

#[test]
fn records_subdirectories_without_entering_them() {
    let analysis = analyze("project('demo')\ndirs = ['src', 'tests']\nforeach d : dirs\n  subdir(d)\nendforeach\n");
    assert_eq!(analysis.subdirs.len(), 1, "one subdir() call");
    assert_eq!(
        analysis.subdirs[0].directories,
        vec!["src".to_string(), "tests".to_string()],
        "directories are guessed from the loop"
    );
}
