use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

fn escape_single_quotes(input: &str) -> Cow<'_, str> {
    if input.contains('\'') {
        Cow::Owned(input.replace('\'', "\\'"))
    } else {
        Cow::Borrowed(input)
    }
}

fn format_operation_error(
    module: &str,
    operation: &str,
    target: Option<&str>,
    error: impl fmt::Display,
) -> String {
    match target {
        Some(target) => {
            let escaped = escape_single_quotes(target);
            format!("{module}.{operation}('{}') failed: {error}", escaped)
        }
        None => format!("{module}.{operation} failed: {error}"),
    }
}

pub fn fs_error(operation: &str, path: &str, error: impl fmt::Display) -> String {
    format_operation_error("meson.fs", operation, Some(path), error)
}

pub fn config_error(operation: &str, path: &str, error: impl fmt::Display) -> String {
    format_operation_error("meson.config", operation, Some(path), error)
}

pub fn cli_error(operation: &str, error: impl fmt::Display) -> String {
    format_operation_error("meson.cli", operation, None, error)
}

fn is_identifier_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

fn is_identifier_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

/// Returns every `@name@` placeholder in `text`, in order of appearance.
///
/// A placeholder glued to a digit on either side (`1@foo@`, `@foo@2`) is not
/// a placeholder, it is usually part of a version or e-mail address.
pub fn extract_text_between_at_symbols(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut matches = Vec::new();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] != b'@' {
            idx += 1;
            continue;
        }
        let start = idx + 1;
        if start >= bytes.len() || !is_identifier_start(bytes[start]) {
            idx += 1;
            continue;
        }
        let mut end = start + 1;
        while end < bytes.len() && is_identifier_continue(bytes[end]) {
            end += 1;
        }
        if end >= bytes.len() || bytes[end] != b'@' {
            idx = end;
            continue;
        }
        let glued_before = idx > 0 && bytes[idx - 1].is_ascii_digit();
        let glued_after = end + 1 < bytes.len() && bytes[end + 1].is_ascii_digit();
        if !glued_before && !glued_after {
            matches.push(text[start..end].to_string());
        }
        idx = end + 1;
    }
    matches
}

/// Returns the distinct `@N@` indices used by a `str.format()` template.
pub fn extract_integers_between_at_symbols(text: &str) -> BTreeSet<u64> {
    let bytes = text.as_bytes();
    let mut integers = BTreeSet::new();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] != b'@' {
            idx += 1;
            continue;
        }
        let start = idx + 1;
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > start && end < bytes.len() && bytes[end] == b'@' {
            if let Ok(value) = text[start..end].parse::<u64>() {
                integers.insert(value);
            }
            idx = end + 1;
        } else {
            idx = end.max(start);
        }
    }
    integers
}

pub fn is_snake_case(name: &str) -> bool {
    name.bytes()
        .all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'_')
}

pub fn is_shouting_snake_case(name: &str) -> bool {
    name.bytes()
        .all(|byte| byte.is_ascii_uppercase() || byte.is_ascii_digit() || byte == b'_')
}

/// `str.underscorify()`: every byte that is not ASCII alphanumeric becomes `_`.
pub fn underscorify(input: &str) -> String {
    input
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}

/// `str.strip()` without arguments trims ASCII whitespace on both ends.
pub fn strip(input: &str) -> &str {
    input.trim_matches(|ch: char| ch.is_ascii_whitespace())
}

/// `str.split()` without arguments: split on runs of whitespace.
pub fn split_whitespace(input: &str) -> Vec<String> {
    input.split_ascii_whitespace().map(str::to_string).collect()
}

/// Strips the comparison prefix of a `meson_version` constraint, `'>= 0.60'`
/// becomes `0.60`.
pub fn strip_version_operator(constraint: &str) -> &str {
    constraint.trim_start_matches(|ch: char| matches!(ch, '>' | '=' | '<' | ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_placeholders_skipping_digit_neighbours() {
        assert_eq!(
            extract_text_between_at_symbols("@foo@ and @bar_2@"),
            vec!["foo".to_string(), "bar_2".to_string()]
        );
        assert!(extract_text_between_at_symbols("1@foo@").is_empty());
        assert!(extract_text_between_at_symbols("@foo@2").is_empty());
        assert!(extract_text_between_at_symbols("user@example.org").is_empty());
    }

    #[test]
    fn extracts_format_indices() {
        let found = extract_integers_between_at_symbols("@0@-@1@-@0@ @x@ @12@");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![0, 1, 12]);
    }

    #[test]
    fn classifies_identifier_case() {
        assert!(is_snake_case("my_var2"));
        assert!(!is_snake_case("myVar"));
        assert!(is_shouting_snake_case("MY_CONST"));
        assert!(!is_shouting_snake_case("My_Const"));
    }

    #[test]
    fn formats_operation_errors_with_escaped_targets() {
        assert_eq!(
            fs_error("read", "it's.build", "denied"),
            "meson.fs.read('it\\'s.build') failed: denied"
        );
        assert_eq!(cli_error("walk", "boom"), "meson.cli.walk failed: boom");
    }

    #[test]
    fn string_helpers_match_meson_semantics() {
        assert_eq!(underscorify("foo-bar.h"), "foo_bar_h");
        assert_eq!(strip("  x \n"), "x");
        assert_eq!(split_whitespace(" a  b\tc "), vec!["a", "b", "c"]);
        assert_eq!(strip_version_operator(">= 0.60.0"), "0.60.0");
    }
}
