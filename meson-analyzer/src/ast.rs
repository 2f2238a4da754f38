use std::fmt;

/// A range of source text. Lines and columns are 1-based and both ends are
/// inclusive: `end_column` is the column of the last character, so a
/// one-character token starts and ends on the same column. Read as 0-based
/// offsets, `end_column` is the exclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl SourceSpan {
    pub fn new(line: usize, column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            line,
            column,
            end_line,
            end_column,
        }
    }

    pub fn single_point(line: usize, column: usize) -> Self {
        Self::new(line, column, line, column)
    }

    pub fn union(a: &Self, b: &Self) -> Self {
        if a.line == 0 {
            return *b;
        }
        if b.line == 0 {
            return *a;
        }

        let (start_line, start_column) =
            if (a.line < b.line) || (a.line == b.line && a.column <= b.column) {
                (a.line, a.column)
            } else {
                (b.line, b.column)
            };

        let (end_line, end_column) = if (a.end_line > b.end_line)
            || (a.end_line == b.end_line && a.end_column >= b.end_column)
        {
            (a.end_line, a.end_column)
        } else {
            (b.end_line, b.end_column)
        };

        Self::new(start_line, start_column, end_line, end_column)
    }

    pub fn contains_line(&self, line: usize) -> bool {
        self.line <= line && line <= self.end_line
    }
}

impl Default for SourceSpan {
    fn default() -> Self {
        Self {
            line: 0,
            column: 0,
            end_line: 0,
            end_column: 0,
        }
    }
}

/// Index of a node inside its [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOperator {
    Equals,
    PlusEquals,
    MinusEquals,
    MulEquals,
    DivEquals,
    ModEquals,
    Other,
}

impl fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AssignmentOperator::Equals => "=",
            AssignmentOperator::PlusEquals => "+=",
            AssignmentOperator::MinusEquals => "-=",
            AssignmentOperator::MulEquals => "*=",
            AssignmentOperator::DivEquals => "/=",
            AssignmentOperator::ModEquals => "%=",
            AssignmentOperator::Other => "<<Unknown>>",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Mul,
    Div,
    Modulo,
    EqualsEquals,
    NotEquals,
    Gt,
    Lt,
    Ge,
    Le,
    In,
    NotIn,
    Or,
    And,
    Other,
}

impl BinaryOperator {
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOperator::EqualsEquals
                | BinaryOperator::NotEquals
                | BinaryOperator::Gt
                | BinaryOperator::Lt
                | BinaryOperator::Ge
                | BinaryOperator::Le
        )
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::EqualsEquals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Lt => "<",
            BinaryOperator::Ge => ">=",
            BinaryOperator::Le => "<=",
            BinaryOperator::In => "in",
            BinaryOperator::NotIn => "not in",
            BinaryOperator::Or => "or",
            BinaryOperator::And => "and",
            BinaryOperator::Other => "<<Unknown>>",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    ExclamationMark,
    Minus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    ArgumentList {
        args: Vec<NodeId>,
    },
    ArrayLiteral {
        args: Vec<NodeId>,
    },
    AssignmentStatement {
        lhs: NodeId,
        rhs: NodeId,
        op: AssignmentOperator,
    },
    BinaryExpression {
        lhs: NodeId,
        rhs: NodeId,
        op: BinaryOperator,
    },
    BooleanLiteral {
        value: bool,
    },
    BuildDefinition {
        stmts: Vec<NodeId>,
    },
    ConditionalExpression {
        condition: NodeId,
        if_true: NodeId,
        if_false: NodeId,
    },
    DictionaryLiteral {
        values: Vec<NodeId>,
    },
    ErrorNode {
        message: String,
    },
    FunctionExpression {
        id: NodeId,
        args: Option<NodeId>,
    },
    IdExpression {
        name: String,
    },
    IntegerLiteral {
        value: u64,
        text: String,
    },
    IterationStatement {
        ids: Vec<NodeId>,
        expression: NodeId,
        stmts: Vec<NodeId>,
    },
    KeyValueItem {
        key: NodeId,
        value: NodeId,
    },
    KeywordItem {
        key: NodeId,
        value: NodeId,
    },
    MethodExpression {
        obj: NodeId,
        id: NodeId,
        args: Option<NodeId>,
    },
    /// `conditions[i]` guards `blocks[i]`; a trailing extra block is the `else`.
    SelectionStatement {
        conditions: Vec<NodeId>,
        blocks: Vec<Vec<NodeId>>,
    },
    StringLiteral {
        value: String,
        is_format: bool,
        has_enough_ats: bool,
    },
    SubscriptExpression {
        outer: NodeId,
        inner: NodeId,
    },
    UnaryExpression {
        op: UnaryOperator,
        expr: NodeId,
    },
    BreakNode,
    ContinueNode,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub span: SourceSpan,
    pub parent: Option<NodeId>,
}

/// Lexer and parser failures, recorded at a single point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: SourceSpan,
}

#[derive(Debug, Clone)]
pub struct Ast {
    nodes: Vec<Node>,
    root: NodeId,
    pub errors: Vec<ParseError>,
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

impl Ast {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: NodeId(0),
            errors: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, kind: NodeKind, span: SourceSpan) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            span,
            parent: None,
        });
        id
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    /// Links every node to its parent. Runs once, after the tree is complete.
    pub(crate) fn set_parents(&mut self) {
        let mut pending = vec![self.root];
        while let Some(id) = pending.pop() {
            for child in self.children(id) {
                self.nodes[child.index()].parent = Some(id);
                pending.push(child);
            }
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    pub fn span(&self, id: NodeId) -> SourceSpan {
        self.nodes[id.index()].span
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Direct children in source order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        match self.kind(id) {
            NodeKind::ArgumentList { args } | NodeKind::ArrayLiteral { args } => args.clone(),
            NodeKind::AssignmentStatement { lhs, rhs, .. }
            | NodeKind::BinaryExpression { lhs, rhs, .. } => vec![*lhs, *rhs],
            NodeKind::BuildDefinition { stmts } => stmts.clone(),
            NodeKind::ConditionalExpression {
                condition,
                if_true,
                if_false,
            } => vec![*condition, *if_true, *if_false],
            NodeKind::DictionaryLiteral { values } => values.clone(),
            NodeKind::FunctionExpression { id, args } => {
                let mut children = vec![*id];
                children.extend(args);
                children
            }
            NodeKind::IterationStatement {
                ids,
                expression,
                stmts,
            } => {
                let mut children = ids.clone();
                children.push(*expression);
                children.extend(stmts);
                children
            }
            NodeKind::KeyValueItem { key, value } | NodeKind::KeywordItem { key, value } => {
                vec![*key, *value]
            }
            NodeKind::MethodExpression { obj, id, args } => {
                let mut children = vec![*obj, *id];
                children.extend(args);
                children
            }
            NodeKind::SelectionStatement { conditions, blocks } => {
                let mut children = Vec::new();
                for (idx, block) in blocks.iter().enumerate() {
                    if let Some(condition) = conditions.get(idx) {
                        children.push(*condition);
                    }
                    children.extend(block);
                }
                children.extend(conditions.iter().skip(blocks.len()));
                children
            }
            NodeKind::SubscriptExpression { outer, inner } => vec![*outer, *inner],
            NodeKind::UnaryExpression { expr, .. } => vec![*expr],
            NodeKind::BooleanLiteral { .. }
            | NodeKind::ErrorNode { .. }
            | NodeKind::IdExpression { .. }
            | NodeKind::IntegerLiteral { .. }
            | NodeKind::StringLiteral { .. }
            | NodeKind::BreakNode
            | NodeKind::ContinueNode => Vec::new(),
        }
    }

    /// Every node below `id` (excluding `id`), depth first in source order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut pending: Vec<NodeId> = self.children(id).into_iter().rev().collect();
        while let Some(next) = pending.pop() {
            out.push(next);
            pending.extend(self.children(next).into_iter().rev());
        }
        out
    }

    pub fn is_statement_container(&self, id: NodeId) -> bool {
        matches!(
            self.kind(id),
            NodeKind::BuildDefinition { .. }
                | NodeKind::IterationStatement { .. }
                | NodeKind::SelectionStatement { .. }
        )
    }

    /// Walks up from `id` to the statement that directly sits inside a
    /// build definition, loop body or branch.
    pub fn enclosing_statement(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            if self.is_statement_container(parent) {
                return current;
            }
            current = parent;
        }
        current
    }

    pub fn identifier(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::IdExpression { name } => Some(name),
            _ => None,
        }
    }

    pub fn string_value(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::StringLiteral { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn function_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::FunctionExpression { id, .. } => self.identifier(*id),
            _ => None,
        }
    }

    pub fn method_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::MethodExpression { id, .. } => self.identifier(*id),
            _ => None,
        }
    }

    /// The argument list of a function or method call.
    pub fn call_arguments(&self, id: NodeId) -> Option<NodeId> {
        match self.kind(id) {
            NodeKind::FunctionExpression { args, .. } | NodeKind::MethodExpression { args, .. } => {
                *args
            }
            NodeKind::ArgumentList { .. } => Some(id),
            _ => None,
        }
    }

    fn argument_items(&self, call: NodeId) -> &[NodeId] {
        let Some(args) = self.call_arguments(call) else {
            return &[];
        };
        match self.kind(args) {
            NodeKind::ArgumentList { args } => args,
            _ => &[],
        }
    }

    pub fn positional_args(&self, call: NodeId) -> Vec<NodeId> {
        self.argument_items(call)
            .iter()
            .copied()
            .filter(|arg| !matches!(self.kind(*arg), NodeKind::KeywordItem { .. }))
            .collect()
    }

    pub fn positional_arg(&self, call: NodeId, idx: usize) -> Option<NodeId> {
        self.positional_args(call).get(idx).copied()
    }

    /// `(name, value)` pairs of the keyword arguments, in source order.
    pub fn keyword_args(&self, call: NodeId) -> Vec<(Option<&str>, NodeId, NodeId)> {
        self.argument_items(call)
            .iter()
            .filter_map(|arg| match self.kind(*arg) {
                NodeKind::KeywordItem { key, value } => Some((self.identifier(*key), *arg, *value)),
                _ => None,
            })
            .collect()
    }

    pub fn kwarg(&self, call: NodeId, name: &str) -> Option<NodeId> {
        self.keyword_args(call)
            .into_iter()
            .find(|(key, _, _)| *key == Some(name))
            .map(|(_, _, value)| value)
    }

    /// Innermost statement covering `line`, descending into branches and loops.
    pub fn statement_at_line(&self, line: usize) -> Option<NodeId> {
        let mut container = self.root;
        let mut found = None;
        loop {
            let stmts: Vec<NodeId> = match self.kind(container) {
                NodeKind::BuildDefinition { stmts } | NodeKind::IterationStatement { stmts, .. } => {
                    stmts.clone()
                }
                NodeKind::SelectionStatement { blocks, .. } => {
                    blocks.iter().flatten().copied().collect()
                }
                _ => return found,
            };
            let hit = stmts
                .into_iter()
                .rev()
                .find(|stmt| self.span(*stmt).contains_line(line));
            match hit {
                Some(stmt) => {
                    found = Some(stmt);
                    container = stmt;
                }
                None => return found,
            }
        }
    }
}
