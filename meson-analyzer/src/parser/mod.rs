use crate::ast::*;
use crate::lexer::{Keyword, LexError, Lexer, Token, TokenKind};
use crate::source::SourceFile;

/// Lexes and parses a whole file. Never fails; problems end up in
/// [`Ast::errors`] and as error nodes inside the tree.
pub fn parse_source(source: &SourceFile) -> Ast {
    let lexed = Lexer::new(source).tokenize();
    Parser::new(source, lexed.tokens).parse(&lexed.errors)
}

pub struct Parser<'a> {
    _source: &'a SourceFile,
    tokens: Vec<Token>,
    current: usize,
    ast: Ast,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a SourceFile, mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last(), Some(token) if token.kind == TokenKind::Eof) {
            let (line, column) = tokens
                .last()
                .map(|token| (token.end_line, token.end_column + 1))
                .unwrap_or((1, 1));
            tokens.push(Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                line,
                column,
                end_line: line,
                end_column: column,
            });
        }
        Self {
            _source: source,
            tokens,
            current: 0,
            ast: Ast::new(),
            errors: Vec::new(),
        }
    }

    pub fn parse(mut self, lex_errors: &[LexError]) -> Ast {
        let start = self.current_span();
        let mut stmts = self.code_block();
        while !self.check(&TokenKind::Eof) {
            // A stray `endif`/`else`/... at top level: report it and keep going.
            self.expect(&TokenKind::Eof);
            self.advance();
            self.accept(&TokenKind::Eol);
            stmts.extend(self.code_block());
        }
        let span = SourceSpan::union(&start, &self.current_span());
        let root = self.ast.alloc(NodeKind::BuildDefinition { stmts }, span);
        self.ast.set_root(root);
        self.ast.set_parents();

        let mut errors = std::mem::take(&mut self.errors);
        errors.extend(lex_errors.iter().map(|err| ParseError {
            message: err.message.clone(),
            span: SourceSpan::single_point(err.line, err.column),
        }));
        self.ast.errors = errors;
        self.ast
    }

    fn code_block(&mut self) -> Vec<NodeId> {
        let mut stmts = Vec::new();
        loop {
            let opens_block = matches!(
                self.peek_kind(),
                TokenKind::Keyword(Keyword::If) | TokenKind::Keyword(Keyword::Foreach)
            );
            let mark = (!opens_block).then(|| self.ast.len());
            if let Some(line) = self.line() {
                stmts.push(line);
            }
            if let Some(err) = self.seek_over_invalid_tokens() {
                stmts.push(err);
            }
            if self.accept(&TokenKind::Eol) {
                continue;
            }
            if self.at_block_terminator() {
                break;
            }
            // A statement that already holds an error node gets no second one.
            if mark.is_some_and(|mark| self.has_error_since(mark)) {
                self.skip_to_line_end();
            } else if let Some(err) = self.seek_to_line_end() {
                stmts.push(err);
            }
            if !self.accept(&TokenKind::Eol) {
                break;
            }
        }
        stmts
    }

    fn line(&mut self) -> Option<NodeId> {
        let start = self.current_span();
        match self.peek_kind() {
            TokenKind::Eol | TokenKind::Eof => None,
            TokenKind::Keyword(Keyword::If) => {
                self.advance();
                Some(self.if_block(start))
            }
            TokenKind::Keyword(Keyword::Foreach) => {
                self.advance();
                Some(self.foreach_block(start))
            }
            TokenKind::Keyword(Keyword::Continue) => {
                self.advance();
                Some(self.ast.alloc(NodeKind::ContinueNode, start))
            }
            TokenKind::Keyword(Keyword::Break) => {
                self.advance();
                Some(self.ast.alloc(NodeKind::BreakNode, start))
            }
            _ => self.statement(),
        }
    }

    fn if_block(&mut self, start: SourceSpan) -> NodeId {
        let mut conditions = Vec::new();
        let mut blocks = Vec::new();

        let condition = self.statement();
        conditions.push(self.unwrap(condition));
        let first_err = self.seek_over_invalid_tokens();
        self.expect(&TokenKind::Eol);
        let mut block = self.code_block();
        block.extend(first_err);
        blocks.push(block);

        while self.accept(&TokenKind::Keyword(Keyword::Elif)) {
            let condition = self.statement();
            conditions.push(self.unwrap(condition));
            let err = self.seek_over_invalid_tokens();
            self.expect(&TokenKind::Eol);
            let mut block = self.code_block();
            block.extend(err);
            blocks.push(block);
        }

        if self.accept(&TokenKind::Keyword(Keyword::Else)) {
            let err = self.seek_over_invalid_tokens();
            self.expect(&TokenKind::Eol);
            let mut block = self.code_block();
            block.extend(err);
            blocks.push(block);
        }

        if let Some(junk) = self.seek_to(&TokenKind::Keyword(Keyword::EndIf)) {
            if let Some(last) = blocks.last_mut() {
                last.push(junk);
            }
        }
        self.expect(&TokenKind::Keyword(Keyword::EndIf));
        let span = self.span_from(start);
        self.ast
            .alloc(NodeKind::SelectionStatement { conditions, blocks }, span)
    }

    fn foreach_block(&mut self, start: SourceSpan) -> NodeId {
        if self.check(&TokenKind::Eof) {
            return self.error_node("Unexpected EOF");
        }
        let mut ids = Vec::new();
        if let Some(id) = self.loop_identifier() {
            ids.push(id);
        }
        if self.accept(&TokenKind::Comma) {
            if let Some(id) = self.loop_identifier() {
                ids.push(id);
            }
        }

        let mut errs = Vec::new();
        errs.extend(self.seek_to(&TokenKind::Colon));
        self.expect(&TokenKind::Colon);
        let items = self.statement();
        let expression = self.unwrap(items);
        errs.extend(self.seek_to(&TokenKind::Eol));
        self.expect(&TokenKind::Eol);
        let mut stmts = self.code_block();
        errs.extend(self.seek_to(&TokenKind::Keyword(Keyword::EndForeach)));
        stmts.extend(errs);
        self.expect(&TokenKind::Keyword(Keyword::EndForeach));
        let span = self.span_from(start);
        self.ast.alloc(
            NodeKind::IterationStatement {
                ids,
                expression,
                stmts,
            },
            span,
        )
    }

    fn loop_identifier(&mut self) -> Option<NodeId> {
        let token = self.peek().clone();
        if !self.expect(&TokenKind::Identifier(String::new())) {
            return None;
        }
        let span = token.span();
        let TokenKind::Identifier(name) = token.kind else {
            return None;
        };
        Some(self.ast.alloc(NodeKind::IdExpression { name }, span))
    }

    fn statement(&mut self) -> Option<NodeId> {
        self.e1()
    }

    fn e1(&mut self) -> Option<NodeId> {
        let left = self.e2()?;
        if self.accept(&TokenKind::PlusAssign) {
            let value = self.e1();
            let rhs = self.unwrap(value);
            return Some(self.assignment(left, rhs, AssignmentOperator::PlusEquals));
        }
        if self.accept(&TokenKind::Assign) {
            let value = self.e1();
            let rhs = self.unwrap(value);
            return Some(self.assignment(left, rhs, AssignmentOperator::Equals));
        }
        if self.accept(&TokenKind::QuestionMark) {
            let if_true = self.e1();
            let if_true = self.unwrap(if_true);
            self.expect(&TokenKind::Colon);
            let if_false = self.e1();
            let if_false = self.unwrap(if_false);
            let span = SourceSpan::union(&self.ast.span(left), &self.ast.span(if_false));
            return Some(self.ast.alloc(
                NodeKind::ConditionalExpression {
                    condition: left,
                    if_true,
                    if_false,
                },
                span,
            ));
        }
        Some(left)
    }

    fn e2(&mut self) -> Option<NodeId> {
        let mut left = self.e3()?;
        while self.accept(&TokenKind::Keyword(Keyword::Or)) {
            let right = self.e3();
            let right = self.unwrap(right);
            left = self.binary(left, right, BinaryOperator::Or);
        }
        Some(left)
    }

    fn e3(&mut self) -> Option<NodeId> {
        let mut left = self.e4();
        while self.accept(&TokenKind::Keyword(Keyword::And)) {
            let lhs = self.unwrap(left);
            let right = self.e3();
            let rhs = self.unwrap(right);
            left = Some(self.binary(lhs, rhs, BinaryOperator::And));
        }
        left
    }

    fn e4(&mut self) -> Option<NodeId> {
        let left = self.e5();
        let op = match self.peek_kind() {
            TokenKind::Eq => BinaryOperator::EqualsEquals,
            TokenKind::Neq => BinaryOperator::NotEquals,
            TokenKind::Lt => BinaryOperator::Lt,
            TokenKind::Leq => BinaryOperator::Le,
            TokenKind::Gt => BinaryOperator::Gt,
            TokenKind::Geq => BinaryOperator::Ge,
            TokenKind::Keyword(Keyword::In) => BinaryOperator::In,
            TokenKind::Keyword(Keyword::Not)
                if self.peek_kind_at(1) == &TokenKind::Keyword(Keyword::In) =>
            {
                self.advance();
                BinaryOperator::NotIn
            }
            _ => return left,
        };
        self.advance();
        let lhs = self.unwrap(left);
        let right = self.e5();
        let rhs = self.unwrap(right);
        Some(self.binary(lhs, rhs, op))
    }

    fn e5(&mut self) -> Option<NodeId> {
        let mut left = self.e5_mul_div()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinaryOperator::Plus,
                TokenKind::Minus => BinaryOperator::Minus,
                _ => break,
            };
            self.advance();
            let right = self.e5_mul_div();
            let right = self.unwrap(right);
            left = self.binary(left, right, op);
        }
        Some(left)
    }

    fn e5_mul_div(&mut self) -> Option<NodeId> {
        let mut left = self.e6()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Modulo => BinaryOperator::Modulo,
                TokenKind::Star => BinaryOperator::Mul,
                TokenKind::Slash => BinaryOperator::Div,
                _ => break,
            };
            self.advance();
            let right = self.e6();
            let right = self.unwrap(right);
            left = self.binary(left, right, op);
        }
        Some(left)
    }

    fn e6(&mut self) -> Option<NodeId> {
        let start = self.current_span();
        let op = if self.accept(&TokenKind::Keyword(Keyword::Not)) {
            UnaryOperator::Not
        } else if self.accept(&TokenKind::Minus) {
            UnaryOperator::Minus
        } else {
            return self.e7();
        };
        let operand = self.e7();
        let expr = self.unwrap(operand);
        let span = SourceSpan::union(&start, &self.ast.span(expr));
        Some(self.ast.alloc(NodeKind::UnaryExpression { op, expr }, span))
    }

    fn e7(&mut self) -> Option<NodeId> {
        let mut left = self.e8()?;
        if self.accept(&TokenKind::LParen) {
            let args = self.args();
            self.expect(&TokenKind::RParen);
            let span = self.span_from(self.ast.span(left));
            left = self
                .ast
                .alloc(NodeKind::FunctionExpression { id: left, args }, span);
        }
        loop {
            if self.accept(&TokenKind::Dot) {
                left = self.method_call(left);
                continue;
            }
            if self.accept(&TokenKind::LBracket) {
                left = self.index_call(left);
                continue;
            }
            break;
        }
        Some(left)
    }

    fn method_call(&mut self, obj: NodeId) -> NodeId {
        let name = self.e9();
        let id = self.unwrap(name);
        self.expect(&TokenKind::LParen);
        let args = self.args();
        self.expect(&TokenKind::RParen);
        let span = self.span_from(self.ast.span(obj));
        let node = self
            .ast
            .alloc(NodeKind::MethodExpression { obj, id, args }, span);
        if self.accept(&TokenKind::Dot) {
            return self.method_call(node);
        }
        node
    }

    fn index_call(&mut self, outer: NodeId) -> NodeId {
        let index = self.statement();
        let inner = self.unwrap(index);
        self.expect(&TokenKind::RBracket);
        let span = self.span_from(self.ast.span(outer));
        self.ast
            .alloc(NodeKind::SubscriptExpression { outer, inner }, span)
    }

    fn e8(&mut self) -> Option<NodeId> {
        let start = self.current_span();
        if self.accept(&TokenKind::LParen) {
            let inner = self.statement();
            self.expect(&TokenKind::RParen);
            return inner;
        }
        if self.accept(&TokenKind::LBracket) {
            let args = self.array_args();
            self.expect(&TokenKind::RBracket);
            let span = self.span_from(start);
            return Some(self.ast.alloc(NodeKind::ArrayLiteral { args }, span));
        }
        if self.accept(&TokenKind::LCurl) {
            let values = self.key_values();
            self.expect(&TokenKind::RCurl);
            let span = self.span_from(start);
            return Some(
                self.ast
                    .alloc(NodeKind::DictionaryLiteral { values }, span),
            );
        }
        self.e9()
    }

    fn array_args(&mut self) -> Vec<NodeId> {
        let mut items = Vec::new();
        let mut stmt = self.statement();
        while let Some(item) = stmt {
            items.push(item);
            if !self.accept(&TokenKind::Comma) {
                items.extend(self.seek_to(&TokenKind::RBracket));
                return items;
            }
            stmt = self.statement();
        }
        self.accept(&TokenKind::Comma);
        items.extend(self.seek_to(&TokenKind::RBracket));
        items
    }

    fn key_values(&mut self) -> Vec<NodeId> {
        let mut items = Vec::new();
        let mut stmt = self.statement();
        while let Some(key) = stmt {
            if !self.accept(&TokenKind::Colon) {
                self.error("Only key:value pairs are valid in dict construction.");
                items.extend(self.seek_to(&TokenKind::RCurl));
                return items;
            }
            let value = self.statement();
            let value = self.unwrap(value);
            let span = SourceSpan::union(&self.ast.span(key), &self.ast.span(value));
            items.push(self.ast.alloc(NodeKind::KeyValueItem { key, value }, span));
            if !self.accept(&TokenKind::Comma) {
                return items;
            }
            stmt = self.statement();
        }
        self.accept(&TokenKind::Comma);
        items.extend(self.seek_to(&TokenKind::RCurl));
        items
    }

    fn e9(&mut self) -> Option<NodeId> {
        let token = self.peek().clone();
        let span = token.span();
        let kind = match token.kind {
            TokenKind::Keyword(Keyword::True) => NodeKind::BooleanLiteral { value: true },
            TokenKind::Keyword(Keyword::False) => NodeKind::BooleanLiteral { value: false },
            TokenKind::Identifier(name) => NodeKind::IdExpression { name },
            TokenKind::Number { value, text, .. } => NodeKind::IntegerLiteral { value, text },
            TokenKind::String {
                value, is_format, ..
            } => {
                let has_enough_ats = value.matches('@').count() >= 2;
                NodeKind::StringLiteral {
                    value,
                    is_format,
                    has_enough_ats,
                }
            }
            TokenKind::Invalid => NodeKind::ErrorNode {
                message: "Invalid or unexpected token.".to_string(),
            },
            _ => return None,
        };
        self.advance();
        Some(self.ast.alloc(kind, span))
    }

    fn args(&mut self) -> Option<NodeId> {
        let start = self.current_span();
        let mut stmt = Some(self.statement()?);
        let mut items = Vec::new();
        while let Some(item) = stmt {
            if self.accept(&TokenKind::Comma) {
                items.push(item);
            } else if self.accept(&TokenKind::Colon) {
                let value = self.statement();
                let value = self.unwrap(value);
                let span = SourceSpan::union(&self.ast.span(item), &self.ast.span(value));
                items.push(
                    self.ast
                        .alloc(NodeKind::KeywordItem { key: item, value }, span),
                );
                if !self.accept(&TokenKind::Comma) {
                    items.extend(self.seek_to(&TokenKind::RParen));
                    return Some(self.argument_list(start, items));
                }
            } else {
                items.push(item);
                return Some(self.argument_list(start, items));
            }
            stmt = self.statement();
        }
        items.extend(self.seek_to(&TokenKind::RParen));
        Some(self.argument_list(start, items))
    }

    fn argument_list(&mut self, start: SourceSpan, args: Vec<NodeId>) -> NodeId {
        let span = self.span_from(start);
        self.ast.alloc(NodeKind::ArgumentList { args }, span)
    }

    fn assignment(&mut self, lhs: NodeId, rhs: NodeId, op: AssignmentOperator) -> NodeId {
        let span = SourceSpan::union(&self.ast.span(lhs), &self.ast.span(rhs));
        self.ast
            .alloc(NodeKind::AssignmentStatement { lhs, rhs, op }, span)
    }

    fn binary(&mut self, lhs: NodeId, rhs: NodeId, op: BinaryOperator) -> NodeId {
        let span = SourceSpan::union(&self.ast.span(lhs), &self.ast.span(rhs));
        self.ast
            .alloc(NodeKind::BinaryExpression { lhs, rhs, op }, span)
    }

    /// Substitutes a missing operand with an error node at the current token.
    fn unwrap(&mut self, node: Option<NodeId>) -> NodeId {
        match node {
            Some(node) => node,
            None => self.error_node("Expected value"),
        }
    }

    fn error_node(&mut self, message: &str) -> NodeId {
        let span = self.current_span();
        let point = SourceSpan::single_point(span.line, span.column);
        self.ast.alloc(
            NodeKind::ErrorNode {
                message: message.to_string(),
            },
            point,
        )
    }

    fn error(&mut self, message: impl Into<String>) {
        let token = self.peek();
        let span = SourceSpan::single_point(token.end_line, token.end_column);
        self.errors.push(ParseError {
            message: message.into(),
            span,
        });
    }

    fn seek_to(&mut self, kind: &TokenKind) -> Option<NodeId> {
        self.seek_while(|current| !current.same_kind(kind), "Unexpected junk")
    }

    fn seek_to_line_end(&mut self) -> Option<NodeId> {
        self.seek_while(|current| current != &TokenKind::Eol, "Unexpected junk")
    }

    fn skip_to_line_end(&mut self) {
        while !self.check(&TokenKind::Eof) && !self.check(&TokenKind::Eol) {
            self.advance();
        }
    }

    fn has_error_since(&self, mark: usize) -> bool {
        self.ast
            .ids()
            .skip(mark)
            .any(|id| matches!(self.ast.kind(id), NodeKind::ErrorNode { .. }))
    }

    fn seek_over_invalid_tokens(&mut self) -> Option<NodeId> {
        self.seek_while(|current| current == &TokenKind::Invalid, "Unexpected tokens")
    }

    /// Skips tokens (never EOF) while `skip` holds and covers them with one
    /// error node.
    fn seek_while(&mut self, skip: impl Fn(&TokenKind) -> bool, message: &str) -> Option<NodeId> {
        let start = self.current_span();
        let mut skipped = false;
        while !self.check(&TokenKind::Eof) && skip(self.peek_kind()) {
            skipped = true;
            self.advance();
        }
        if !skipped {
            return None;
        }
        let span = self.span_from(start);
        Some(self.ast.alloc(
            NodeKind::ErrorNode {
                message: message.to_string(),
            },
            span,
        ))
    }

    fn at_block_terminator(&self) -> bool {
        matches!(
            self.peek_kind(),
            TokenKind::Eof
                | TokenKind::Keyword(Keyword::Elif)
                | TokenKind::Keyword(Keyword::Else)
                | TokenKind::Keyword(Keyword::EndIf)
                | TokenKind::Keyword(Keyword::EndForeach)
        )
    }

    fn span_from(&self, start: SourceSpan) -> SourceSpan {
        match self.current.checked_sub(1).and_then(|idx| self.tokens.get(idx)) {
            Some(previous) => SourceSpan::union(&start, &previous.span()),
            None => start,
        }
    }

    fn current_span(&self) -> SourceSpan {
        self.peek().span()
    }

    fn peek(&self) -> &Token {
        let idx = self.current.min(self.tokens.len().saturating_sub(1));
        &self.tokens[idx]
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    fn peek_kind_at(&self, offset: usize) -> &TokenKind {
        let idx = (self.current + offset).min(self.tokens.len().saturating_sub(1));
        &self.tokens[idx].kind
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind().same_kind(kind)
    }

    fn accept(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    fn expect(&mut self, kind: &TokenKind) -> bool {
        if self.accept(kind) {
            return true;
        }
        let got = self.peek_kind().describe();
        self.error(format!("Expected {}, but got {}", kind.describe(), got));
        false
    }

    fn advance(&mut self) {
        if self.current + 1 < self.tokens.len() {
            self.current += 1;
        }
    }
}
