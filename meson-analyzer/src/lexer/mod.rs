use std::fmt;

use crate::ast::SourceSpan;
use crate::source::SourceFile;

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Token {
    pub fn span(&self) -> SourceSpan {
        SourceSpan::new(self.line, self.column, self.end_line, self.end_column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Identifier(String),
    Number {
        base: u32,
        value: u64,
        text: String,
    },
    String {
        value: String,
        is_format: bool,
        is_multiline: bool,
    },
    Keyword(Keyword),
    Eol,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LCurl,
    RCurl,
    Dot,
    Comma,
    Colon,
    QuestionMark,
    Plus,
    PlusAssign,
    Minus,
    Star,
    Slash,
    Modulo,
    Assign,
    Eq,
    Neq,
    Gt,
    Geq,
    Lt,
    Leq,
    /// Placeholder left behind by a character the lexer could not make sense of.
    Invalid,
    Eof,
}

impl TokenKind {
    /// Name used in parser messages such as `Expected ')', but got eol`.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Number { .. } => "number",
            TokenKind::String { .. } => "string",
            TokenKind::Keyword(keyword) => keyword.as_str(),
            TokenKind::Eol => "eol",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LCurl => "'{'",
            TokenKind::RCurl => "'}'",
            TokenKind::Dot => "'.'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::QuestionMark => "'?'",
            TokenKind::Plus => "'+'",
            TokenKind::PlusAssign => "'+='",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Modulo => "'%'",
            TokenKind::Assign => "'='",
            TokenKind::Eq => "'=='",
            TokenKind::Neq => "'!='",
            TokenKind::Gt => "'>'",
            TokenKind::Geq => "'>='",
            TokenKind::Lt => "'<'",
            TokenKind::Leq => "'<='",
            TokenKind::Invalid => "<<error>>",
            TokenKind::Eof => "eof",
        }
    }

    /// Compares kinds while ignoring payloads.
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        match (self, other) {
            (TokenKind::Keyword(a), TokenKind::Keyword(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    And,
    Break,
    Continue,
    Elif,
    Else,
    EndForeach,
    EndIf,
    False,
    Foreach,
    If,
    In,
    Not,
    Or,
    True,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::And => "and",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Elif => "elif",
            Keyword::Else => "else",
            Keyword::EndForeach => "endforeach",
            Keyword::EndIf => "endif",
            Keyword::False => "false",
            Keyword::Foreach => "foreach",
            Keyword::If => "if",
            Keyword::In => "in",
            Keyword::Not => "not",
            Keyword::Or => "or",
            Keyword::True => "true",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LexError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone)]
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
    pub success: bool,
}

enum Step {
    Continue,
    Done,
}

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    line_start: usize,
    parens: usize,
    brackets: usize,
    curls: usize,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a SourceFile) -> Self {
        Self::from_str(&source.contents)
    }

    pub fn from_str(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
            line_start: 0,
            parens: 0,
            brackets: 0,
            curls: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn tokenize(&mut self) -> LexResult {
        // The input behaves as if a NUL byte was appended; reaching it yields EOF.
        while self.position <= self.input.len() {
            if let Step::Done = self.tokenize_one() {
                break;
            }
        }

        if !matches!(self.tokens.last(), Some(token) if token.kind == TokenKind::Eof) {
            let (line, column) = (self.line, self.current_column());
            self.tokens.push(Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                line,
                column,
                end_line: line,
                end_column: column,
            });
        }

        LexResult {
            tokens: std::mem::take(&mut self.tokens),
            success: self.errors.is_empty(),
            errors: std::mem::take(&mut self.errors),
        }
    }

    fn tokenize_one(&mut self) -> Step {
        self.skip_trivia();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.current_column();
        let ch = self.peek(0);

        if ch == b'f' && self.peek(1) == b'\'' {
            self.advance();
            let kind = self.lex_string(true);
            self.push(kind, start, start_line, start_column);
            return Step::Continue;
        }
        if ch == b'\'' {
            let kind = self.lex_string(false);
            self.push(kind, start, start_line, start_column);
            return Step::Continue;
        }
        if is_identifier_start(ch) {
            let kind = self.lex_identifier();
            self.push(kind, start, start_line, start_column);
            return Step::Continue;
        }
        if ch.is_ascii_digit() {
            let kind = self.lex_number();
            self.push(kind, start, start_line, start_column);
            return Step::Continue;
        }

        let kind = match ch {
            b'\n' => {
                self.advance();
                if self.parens != 0 || self.brackets != 0 || self.curls != 0 {
                    return Step::Continue;
                }
                self.tokens.push(Token {
                    kind: TokenKind::Eol,
                    lexeme: "\n".to_string(),
                    line: start_line,
                    column: start_column,
                    end_line: start_line,
                    end_column: start_column,
                });
                return Step::Continue;
            }
            b'(' => {
                self.parens += 1;
                self.single(TokenKind::LParen)
            }
            b')' => self.closing(TokenKind::RParen, ')', '('),
            b'[' => {
                self.brackets += 1;
                self.single(TokenKind::LBracket)
            }
            b']' => self.closing(TokenKind::RBracket, ']', '['),
            b'{' => {
                self.curls += 1;
                self.single(TokenKind::LCurl)
            }
            b'}' => self.closing(TokenKind::RCurl, '}', '{'),
            b'.' => self.single(TokenKind::Dot),
            b',' => self.single(TokenKind::Comma),
            b':' => self.single(TokenKind::Colon),
            b'?' => self.single(TokenKind::QuestionMark),
            b'+' => self.with_equals(TokenKind::Plus, TokenKind::PlusAssign),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Star),
            b'/' => self.single(TokenKind::Slash),
            b'%' => self.single(TokenKind::Modulo),
            b'=' => self.with_equals(TokenKind::Assign, TokenKind::Eq),
            b'>' => self.with_equals(TokenKind::Gt, TokenKind::Geq),
            b'<' => self.with_equals(TokenKind::Lt, TokenKind::Leq),
            b'!' => {
                if self.peek(1) == b'=' {
                    self.advance();
                    self.advance();
                    TokenKind::Neq
                } else {
                    self.error("Unexpected character: '!'");
                    self.advance();
                    TokenKind::Invalid
                }
            }
            0 if self.position >= self.input.len() => {
                self.position += 1;
                self.tokens.push(Token {
                    kind: TokenKind::Eof,
                    lexeme: String::new(),
                    line: start_line,
                    column: start_column,
                    end_line: start_line,
                    end_column: start_column,
                });
                return Step::Done;
            }
            0 => {
                self.error("Unexpected null byte");
                self.advance();
                TokenKind::Invalid
            }
            _ => {
                let unexpected = self.input[self.position..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                self.error(format!("Unexpected character: '{unexpected}'"));
                self.position += unexpected.len_utf8();
                TokenKind::Invalid
            }
        };
        self.push(kind, start, start_line, start_column);
        Step::Continue
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek(0) {
                b'\r' | b' ' | b'\t' => self.advance(),
                b'#' => {
                    while self.position < self.input.len() && self.peek(0) != b'\n' {
                        self.advance();
                    }
                }
                b'\\' if self.peek(1) == b'\n' => {
                    self.advance();
                    self.advance();
                }
                _ => return,
            }
        }
    }

    fn lex_identifier(&mut self) -> TokenKind {
        let start = self.position;
        while is_identifier_continue(self.peek(0)) {
            self.advance();
        }
        let name = &self.input[start..self.position];
        match keyword_from_lexeme(name) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier(name.to_string()),
        }
    }

    fn lex_number(&mut self) -> TokenKind {
        let mut base = 10;
        if self.peek(0) == b'0' {
            match self.peek(1) {
                b'x' | b'X' => base = 16,
                b'b' | b'B' => base = 2,
                b'o' | b'O' | b'0' => base = 8,
                _ => {
                    self.advance();
                    return TokenKind::Number {
                        base: 10,
                        value: 0,
                        text: "0".to_string(),
                    };
                }
            }
            self.advance();
            self.advance();
        }

        let start = self.position;
        loop {
            let ch = self.peek(0);
            let accepted = match base {
                2 => matches!(ch, b'0' | b'1'),
                8 => (b'0'..=b'7').contains(&ch),
                16 => ch.is_ascii_hexdigit(),
                _ => ch.is_ascii_digit(),
            };
            if !accepted {
                break;
            }
            self.advance();
        }
        let text = self.input[start..self.position].to_string();
        let value = match u64::from_str_radix(&text, base) {
            Ok(value) => value,
            Err(_) => {
                self.error("Invalid integer literal");
                0
            }
        };
        TokenKind::Number { base, value, text }
    }

    fn lex_string(&mut self, is_format: bool) -> TokenKind {
        let is_multiline = self.input.as_bytes()[self.position..].starts_with(b"'''");
        let opening = if is_multiline { 3 } else { 1 };
        for _ in 0..opening {
            self.advance();
        }

        let mut value = Vec::new();
        loop {
            let ch = self.peek(0);
            match ch {
                b'\n' if is_multiline => {
                    value.push(ch);
                    self.advance();
                }
                b'\n' | 0 => {
                    self.recover_string(is_multiline);
                    break;
                }
                b'\'' if !is_multiline => {
                    self.advance();
                    break;
                }
                b'\'' if self.peek(1) == b'\'' && self.peek(2) == b'\'' => {
                    self.advance();
                    self.advance();
                    self.advance();
                    break;
                }
                b'\\' if self.peek(1) == b'\'' => {
                    value.extend_from_slice(b"\\'");
                    self.advance();
                    self.advance();
                }
                _ => {
                    value.push(ch);
                    self.advance();
                }
            }
        }

        TokenKind::String {
            value: String::from_utf8_lossy(&value).into_owned(),
            is_format,
            is_multiline,
        }
    }

    /// Skips to the closing quote(s) of a broken string, never crossing a
    /// newline for single-line strings.
    fn recover_string(&mut self, is_multiline: bool) {
        let needed = if is_multiline { 3 } else { 1 };
        let mut quotes = 0;
        while self.position < self.input.len() {
            let ch = self.peek(0);
            if ch == 0 || (!is_multiline && ch == b'\n') {
                break;
            }
            self.advance();
            if ch == b'\'' {
                quotes += 1;
                if quotes == needed {
                    return;
                }
            }
        }
        self.error("Unterminated string");
    }

    fn closing(&mut self, kind: TokenKind, closer: char, opener: char) -> TokenKind {
        let depth = match kind {
            TokenKind::RParen => self.parens,
            TokenKind::RBracket => self.brackets,
            _ => self.curls,
        };
        if depth == 0 {
            self.error(format!(
                "Closing '{closer}' without a matching opening '{opener}'"
            ));
            self.advance();
            return TokenKind::Invalid;
        }
        match kind {
            TokenKind::RParen => self.parens -= 1,
            TokenKind::RBracket => self.brackets -= 1,
            _ => self.curls -= 1,
        }
        self.single(kind)
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    fn with_equals(&mut self, plain: TokenKind, with_equals: TokenKind) -> TokenKind {
        self.advance();
        if self.peek(0) == b'=' {
            self.advance();
            with_equals
        } else {
            plain
        }
    }

    fn push(&mut self, kind: TokenKind, start: usize, line: usize, column: usize) {
        let end = self.position.min(self.input.len());
        let lexeme = self.input.get(start..end).unwrap_or_default().to_string();
        self.tokens.push(Token {
            kind,
            lexeme,
            line,
            column,
            end_line: self.line,
            end_column: self.position - self.line_start,
        });
    }

    fn error<S: Into<String>>(&mut self, message: S) {
        self.errors.push(LexError {
            message: message.into(),
            line: self.line,
            column: self.current_column(),
        });
    }

    fn current_column(&self) -> usize {
        self.position - self.line_start + 1
    }

    fn peek(&self, offset: usize) -> u8 {
        self.input
            .as_bytes()
            .get(self.position + offset)
            .copied()
            .unwrap_or(0)
    }

    fn advance(&mut self) {
        if self.position >= self.input.len() {
            return;
        }
        if self.input.as_bytes()[self.position] == b'\n' {
            self.line += 1;
            self.line_start = self.position + 1;
        }
        self.position += 1;
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{} {} {:?}",
            self.line,
            self.column,
            self.end_line,
            self.end_column,
            self.kind.describe(),
            self.lexeme
        )
    }
}

fn is_identifier_start(ch: u8) -> bool {
    ch == b'_' || ch.is_ascii_alphabetic()
}

fn is_identifier_continue(ch: u8) -> bool {
    is_identifier_start(ch) || ch.is_ascii_digit()
}

fn keyword_from_lexeme(lexeme: &str) -> Option<Keyword> {
    match lexeme {
        "and" => Some(Keyword::And),
        "break" => Some(Keyword::Break),
        "continue" => Some(Keyword::Continue),
        "elif" => Some(Keyword::Elif),
        "else" => Some(Keyword::Else),
        "endforeach" => Some(Keyword::EndForeach),
        "endif" => Some(Keyword::EndIf),
        "false" => Some(Keyword::False),
        "foreach" => Some(Keyword::Foreach),
        "if" => Some(Keyword::If),
        "in" => Some(Keyword::In),
        "not" => Some(Keyword::Not),
        "or" => Some(Keyword::Or),
        "true" => Some(Keyword::True),
        _ => None,
    }
}
