//! Tokenizer behaviour: literal forms, error messages and the ordering of
//! token ranges.

use meson_analyzer::{Keyword, Lexer, TokenKind};
use proptest::prelude::*;

fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::from_str(input)
        .tokenize()
        .tokens
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn error_messages(input: &str) -> Vec<String> {
    Lexer::from_str(input)
        .tokenize()
        .errors
        .into_iter()
        .map(|err| err.message)
        .collect()
}

#[test]
fn lexes_assignment_and_keywords() {
    let kinds = kinds("x += 1\nif not y\n");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("x".into()),
            TokenKind::PlusAssign,
            TokenKind::Number {
                base: 10,
                value: 1,
                text: "1".into()
            },
            TokenKind::Eol,
            TokenKind::Keyword(Keyword::If),
            TokenKind::Keyword(Keyword::Not),
            TokenKind::Identifier("y".into()),
            TokenKind::Eol,
            TokenKind::Eof,
        ],
        "unexpected token stream"
    );
}

#[test]
fn reads_integer_bases() {
    let numbers: Vec<(u32, u64)> = kinds("0 007 0x1F 0b101 0o17")
        .into_iter()
        .filter_map(|kind| match kind {
            TokenKind::Number { base, value, .. } => Some((base, value)),
            _ => None,
        })
        .collect();
    assert_eq!(
        numbers,
        vec![(10, 0), (8, 7), (16, 31), (2, 5), (8, 15)],
        "integer literals should honour their prefixes"
    );
}

#[test]
fn reports_invalid_integer_literal() {
    let errors = error_messages("x = 0x\n");
    assert!(
        errors.iter().any(|message| message == "Invalid integer literal"),
        "expected invalid integer error, got {errors:?}"
    );
}

#[test]
fn flags_format_strings_and_operators() {
    let kinds = kinds("f'@x@' != '?'");
    assert!(
        matches!(&kinds[0], TokenKind::String { is_format: true, value, .. } if value == "@x@"),
        "expected a format string, got {:?}",
        kinds[0]
    );
    assert_eq!(kinds[1], TokenKind::Neq, "expected `!=`");
    assert!(
        matches!(&kinds[2], TokenKind::String { is_format: false, .. }),
        "expected a plain string"
    );
}

#[test]
fn multiline_strings_span_lines() {
    let result = Lexer::from_str("x = '''a\nb'''\n").tokenize();
    assert!(result.success, "unexpected errors: {:?}", result.errors);
    let string = result
        .tokens
        .iter()
        .find(|token| matches!(token.kind, TokenKind::String { .. }))
        .expect("string token");
    assert_eq!(string.line, 1, "string starts on the first line");
    assert_eq!(string.end_line, 2, "string ends on the second line");
}

#[test]
fn reports_lexical_errors() {
    let errors = error_messages("x = 'open\ny = $\nz = )\n");
    assert_eq!(
        errors,
        vec![
            "Unterminated string".to_string(),
            "Unexpected character: '$'".to_string(),
            "Closing ')' without a matching opening '('".to_string(),
        ],
        "unexpected lexer errors"
    );
}

#[test]
fn newlines_inside_brackets_are_skipped() {
    let kinds = kinds("f(a,\n  b)\n");
    let eols = kinds.iter().filter(|kind| **kind == TokenKind::Eol).count();
    assert_eq!(eols, 1, "only the final newline should produce an Eol: {kinds:?}");
}

#[test]
fn empty_input_yields_only_eof() {
    let result = Lexer::from_str("").tokenize();
    assert_eq!(result.tokens.len(), 1, "expected a lone EOF token");
    assert_eq!(result.tokens[0].kind, TokenKind::Eof);
    assert!(result.success, "empty input lexes cleanly");
}

#[test]
fn token_spans_end_on_their_last_character() {
    let tokens = Lexer::from_str("name = 'ab'\n").tokenize().tokens;
    let spans: Vec<(usize, usize, usize, usize)> = tokens
        .iter()
        .map(|token| (token.line, token.column, token.end_line, token.end_column))
        .collect();
    assert_eq!(
        spans[..4],
        [(1, 1, 1, 4), (1, 6, 1, 6), (1, 8, 1, 11), (1, 12, 1, 12)],
        "identifier, '=', string and eol spans: {tokens:?}"
    );
}

fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "foo", "bar_1", "if", "endif", "42", "0x1f", "007", "'str'", "+", "+=", "-", "*", "/",
        "=", "==", "!=", "<=", ">", "(", ")", "[", "]", ",", ":", "?", "\n", "  ", "# note\n",
    ])
}

proptest! {
    #[test]
    fn token_ranges_are_ordered(parts in prop::collection::vec(fragment(), 0..40)) {
        let input = parts.join(" ");
        let tokens = Lexer::from_str(&input).tokenize().tokens;
        prop_assert!(
            matches!(tokens.last().map(|token| &token.kind), Some(TokenKind::Eof)),
            "last token must be EOF for {:?}",
            input
        );
        for token in &tokens {
            prop_assert!(
                (token.end_line, token.end_column) >= (token.line, token.column.saturating_sub(1)),
                "token ends before it starts: {:?}",
                token
            );
        }
        for pair in tokens.windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);
            prop_assert!(
                (next.line, next.column) > (previous.end_line, previous.end_column)
                    || next.kind == TokenKind::Eof,
                "tokens overlap: {:?} then {:?}",
                previous,
                next
            );
        }
    }

    #[test]
    fn relexing_a_lexeme_keeps_its_kind(parts in prop::collection::vec(fragment(), 1..20)) {
        let input = parts.join(" ");
        let tokens = Lexer::from_str(&input).tokenize().tokens;
        for token in tokens.iter().filter(|token| {
            !matches!(token.kind, TokenKind::Eol | TokenKind::Eof | TokenKind::Invalid)
        }) {
            let relexed = Lexer::from_str(&token.lexeme).tokenize().tokens;
            prop_assert!(
                relexed[0].kind.same_kind(&token.kind),
                "{:?} relexed as {:?}",
                token.lexeme,
                relexed[0].kind
            );
        }
    }
}
