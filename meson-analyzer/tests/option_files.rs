use std::path::PathBuf;

use meson_analyzer::{
    check_option_file, extract_options, parse_source, DiagnosticLevel, OptionKind, SourceFile,
    SourceId,
};

fn check(text: &str) -> Vec<(DiagnosticLevel, String)> {
    let source = SourceFile::new(SourceId(0), PathBuf::from("meson.options"), text.to_string());
    let ast = parse_source(&source);
    check_option_file(&ast)
        .entries()
        .iter()
        .map(|diagnostic| (diagnostic.level, diagnostic.message.clone()))
        .collect()
}

fn messages(text: &str) -> Vec<String> {
    check(text).into_iter().map(|(_, message)| message).collect()
}

#[test]
fn inverted_integer_bounds_report_two_warnings() {
    let diagnostics = check("option('testtt', type: 'integer', value: 3, min: 5, max: 2)\n");
    assert_eq!(
        diagnostics,
        vec![
            (
                DiagnosticLevel::Warning,
                "Minimum value is greater than the maximum value".to_string()
            ),
            (
                DiagnosticLevel::Warning,
                "Default value is greater than the maximum value".to_string()
            ),
        ],
        "exactly the bounds and the default should be flagged"
    );
}

#[test]
fn accepts_well_formed_declarations() {
    let text = "option('name', type: 'string', value: 'x')\n\
                option('jobs', type: 'integer', value: 4, min: 1, max: 16)\n\
                option('docs', type: 'boolean', value: false)\n\
                option('tests', type: 'feature', value: 'auto')\n\
                option('backend', type: 'combo', choices: ['a', 'b'], value: 'a')\n\
                option('langs', type: 'array', choices: ['c', 'cpp'], value: ['c'])\n";
    let messages = messages(text);
    assert!(messages.is_empty(), "unexpected diagnostics: {messages:?}");
}

#[test]
fn rejects_other_statements() {
    let messages = messages("message('hi')\n");
    assert_eq!(
        messages,
        vec!["Invalid function call in meson options file: message".to_string()]
    );
}

#[test]
fn flags_duplicate_and_reserved_names() {
    let messages = messages(
        "option('foo', type: 'string')\noption('foo', type: 'string')\noption('buildtype', type: 'string')\n",
    );
    assert!(
        messages.contains(&"Duplicate option: foo".to_string()),
        "duplicate not reported: {messages:?}"
    );
    assert!(
        messages.contains(&"Declaration of reserved option: buildtype".to_string()),
        "reserved name not reported: {messages:?}"
    );
}

#[test]
fn checks_default_values_against_the_type() {
    let cases = [
        (
            "option('b', type: 'boolean', value: 'yes')\n",
            "Expected 'true' or 'false'",
        ),
        (
            "option('f', type: 'feature', value: 'on')\n",
            "Expected one of: 'enabled', 'disabled', 'auto'",
        ),
        (
            "option('c', type: 'combo', choices: ['a'], value: 'b')\n",
            "Default value is not contained in the choices array.",
        ),
        (
            "option('c', type: 'combo', value: 'a')\n",
            "Missing 'choices' kwarg",
        ),
        (
            "option('a', type: 'array', choices: ['x'], value: ['y'])\n",
            "Value is not a valid choice!",
        ),
        (
            "option('i', type: 'integer', value: 'many')\n",
            "Unable to parse as integer",
        ),
        (
            "option('i', type: 'integer', value: 1, min: 5)\n",
            "Default value is lower than the minimum value",
        ),
        ("option('x', type: 'float')\n", "Unknown option type: float"),
        ("option('x')\n", "Missing option type kwarg"),
        (
            "option('bad name', type: 'string')\n",
            "Invalid chars in name: Expected `a-z`, `A-Z`, `0-9`, `-` or `_`",
        ),
    ];
    for (text, expected) in cases {
        let messages = messages(text);
        assert!(
            messages.iter().any(|message| message == expected),
            "expected {expected:?} for {text:?}, got {messages:?}"
        );
    }
}

#[test]
fn deprecated_string_values_are_warnings() {
    let diagnostics = check("option('b', type: 'boolean', value: 'true')\noption('i', type: 'integer', value: '0x10')\n");
    assert_eq!(
        diagnostics,
        vec![
            (
                DiagnosticLevel::Warning,
                "String literals as value for boolean options are deprecated.".to_string()
            ),
            (
                DiagnosticLevel::Warning,
                "String literals as value where integers are expected, are deprecated".to_string()
            ),
        ]
    );
}

#[test]
fn extracts_declared_options() {
    let source = SourceFile::new(
        SourceId(0),
        PathBuf::from("meson.options"),
        "option('backend', type: 'combo', choices: ['x', 'y'], value: 'x', description: 'Backend')\n\
         option('old', type: 'boolean', value: true, deprecated: true)\n\
         option('broken')\n"
            .to_string(),
    );
    let options = extract_options(&parse_source(&source));
    assert_eq!(options.len(), 2, "malformed declarations are skipped");
    assert_eq!(options[0].name, "backend");
    assert_eq!(options[0].description.as_deref(), Some("Backend"));
    assert_eq!(
        options[0].kind,
        OptionKind::Combo {
            values: vec!["x".into(), "y".into()]
        }
    );
    assert!(options[1].deprecated, "deprecated flag is read");
    assert_eq!(options[1].kind, OptionKind::Boolean);
}
