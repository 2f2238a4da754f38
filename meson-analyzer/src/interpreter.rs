//! Best-effort evaluation of string expressions without running the build.
//!
//! The analyzer needs concrete strings in a few places: the variable name in
//! `set_variable()`/`get_variable()`, the directory of `subdir()`, the
//! option in `get_option()`. [`PartialInterpreter::calculate`] walks the
//! statements that precede an expression and collects every string the
//! expression could evaluate to. Anything it cannot follow yields nothing.

use crate::ast::{AssignmentOperator, Ast, BinaryOperator, NodeId, NodeKind};
use crate::options::{OptionKind, OptionRegistry};
use meson_support::{split_whitespace, strip, underscorify};

/// An intermediate result: a literal in the tree or a value computed while
/// evaluating.
#[derive(Debug, Clone, PartialEq)]
enum Value {
    Node(NodeId),
    Str(String),
    /// Result of `split()`.
    Array(Vec<String>),
}

/// A literal subscript or `get()` index.
enum Key<'a> {
    Index(u64),
    Name(&'a str),
}

/// Outcome of scanning the statements before a use site.
enum Scan {
    /// A plain `=` was reached; nothing earlier can contribute.
    Assigned(Vec<Value>),
    /// Ran out of statements; the enclosing container may contribute more.
    Open(Vec<Value>),
}

const STRING_METHODS: &[&str] = &["underscorify", "to_lower", "to_upper", "strip", "keys", "replace"];

pub struct PartialInterpreter<'a> {
    ast: &'a Ast,
    options: &'a OptionRegistry,
}

impl<'a> PartialInterpreter<'a> {
    pub fn new(ast: &'a Ast, options: &'a OptionRegistry) -> Self {
        Self { ast, options }
    }

    /// Every string `expr` may evaluate to, as seen from `stmt`, the
    /// statement containing it.
    pub fn calculate(&self, stmt: NodeId, expr: NodeId) -> Vec<String> {
        let ast = self.ast;
        match ast.kind(expr) {
            NodeKind::StringLiteral { value, .. } => vec![value.clone()],
            NodeKind::BinaryExpression { lhs, rhs, op } => {
                let separator = separator(*op);
                let lhs = self.calculate(stmt, *lhs);
                let rhs = self.calculate(stmt, *rhs);
                let mut out = Vec::new();
                for left in &lhs {
                    for right in &rhs {
                        out.push(format!("{left}{separator}{right}"));
                    }
                }
                out
            }
            NodeKind::MethodExpression { obj, id, args } => {
                let Some(name) = ast.identifier(*id) else {
                    return Vec::new();
                };
                if STRING_METHODS.contains(&name) {
                    return self
                        .calculate(stmt, *obj)
                        .iter()
                        .filter_map(|value| self.apply_method(value, name, *args))
                        .collect();
                }
                let Some(first) = args.and_then(|_| ast.positional_arg(expr, 0)) else {
                    return Vec::new();
                };
                match (name, ast.identifier(*obj)) {
                    ("format", _) => self.format_strings(stmt, *obj, expr),
                    ("get", Some(variable)) => {
                        let Some(key) = self.literal_key(first) else {
                            return Vec::new();
                        };
                        self.resolve(stmt, variable)
                            .iter()
                            .flat_map(|value| self.project(value, &key))
                            .filter_map(|value| self.string_of(&value))
                            .collect()
                    }
                    _ => Vec::new(),
                }
            }
            NodeKind::IdExpression { name } => self.identifier_strings(stmt, name),
            NodeKind::SubscriptExpression { outer, inner } => self
                .eval_subscript(stmt, *outer, *inner)
                .iter()
                .filter_map(|value| self.string_of(value))
                .collect(),
            NodeKind::FunctionExpression { .. } => match ast.function_name(expr) {
                Some("get_option") => self.option_values(expr),
                Some("join_paths") => self
                    .join_paths(stmt, expr)
                    .iter()
                    .filter_map(|value| self.string_of(value))
                    .collect(),
                _ => Vec::new(),
            },
            NodeKind::ConditionalExpression {
                if_true, if_false, ..
            } => {
                let mut out = self.calculate(stmt, *if_true);
                out.extend(self.calculate(stmt, *if_false));
                out
            }
            _ => Vec::new(),
        }
    }

    /// Candidate values of the first argument of `call`, e.g. the variable
    /// name in `set_variable()` or the directory in `subdir()`.
    pub fn guess_first_argument(&self, call: NodeId) -> Vec<String> {
        let Some(first) = self.argument_items(call).first().copied() else {
            return Vec::new();
        };
        let guesses = self.calculate(self.ast.enclosing_statement(call), first);
        tracing::debug!(?guesses, "guessed first argument");
        guesses
    }

    /// Candidate values of keyword argument `name` of `call`.
    pub fn guess_keyword_argument(&self, call: NodeId, name: &str) -> Vec<String> {
        if self.argument_items(call).is_empty() {
            return Vec::new();
        }
        let Some(value) = self.ast.kwarg(call, name) else {
            return Vec::new();
        };
        let guesses = self.calculate(self.ast.enclosing_statement(call), value);
        tracing::debug!(kwarg = name, ?guesses, "guessed keyword argument");
        guesses
    }

    /// Strings variable `name` may hold at `stmt`. An assignment to `name`
    /// at `stmt` itself counts.
    pub fn values_of(&self, stmt: NodeId, name: &str) -> Vec<String> {
        let ast = self.ast;
        if let NodeKind::AssignmentStatement { lhs, rhs, op } = ast.kind(stmt) {
            if ast.identifier(*lhs) == Some(name) {
                let mut values = self.calculate(stmt, *rhs);
                if *op != AssignmentOperator::Equals {
                    values.extend(self.calculate(stmt, *lhs));
                }
                return values;
            }
        }
        self.identifier_strings(stmt, name)
    }

    /// Strings held by `name`, or by the elements of the array it holds.
    fn identifier_strings(&self, stmt: NodeId, name: &str) -> Vec<String> {
        let ast = self.ast;
        let mut out = Vec::new();
        for value in self.resolve(stmt, name) {
            if let Some(text) = self.string_of(&value) {
                out.push(text);
                continue;
            }
            if let Value::Node(node) = value {
                if let NodeKind::ArrayLiteral { args } = ast.kind(node) {
                    out.extend(
                        args.iter()
                            .filter_map(|arg| ast.string_value(*arg))
                            .map(str::to_string),
                    );
                }
            }
        }
        out
    }

    fn argument_items(&self, call: NodeId) -> &'a [NodeId] {
        let ast = self.ast;
        match ast.call_arguments(call).map(|args| ast.kind(args)) {
            Some(NodeKind::ArgumentList { args }) => args,
            _ => &[],
        }
    }

    /// `template.format(a, b, ...)` for every combination of candidates.
    fn format_strings(&self, stmt: NodeId, obj: NodeId, call: NodeId) -> Vec<String> {
        let mut combinations: Vec<Vec<String>> = vec![Vec::new()];
        for arg in self.ast.positional_args(call) {
            let candidates = self.calculate(stmt, arg);
            let mut extended = Vec::new();
            for combination in &combinations {
                for candidate in &candidates {
                    let mut next = combination.clone();
                    next.push(candidate.clone());
                    extended.push(next);
                }
            }
            combinations = extended;
        }
        let mut out = Vec::new();
        for template in self.calculate(stmt, obj) {
            for arguments in &combinations {
                out.push(substitute_placeholders(&template, arguments));
            }
        }
        out
    }

    fn option_values(&self, call: NodeId) -> Vec<String> {
        let Some(name) = self
            .ast
            .positional_arg(call, 0)
            .and_then(|node| self.ast.string_value(node))
        else {
            return Vec::new();
        };
        match self.options.find_option(name).map(|option| &option.kind) {
            Some(OptionKind::Combo { values }) => values.clone(),
            Some(OptionKind::Array { choices }) => choices.clone(),
            _ => Vec::new(),
        }
    }

    fn join_paths(&self, stmt: NodeId, call: NodeId) -> Vec<Value> {
        let parts = self
            .ast
            .positional_args(call)
            .into_iter()
            .map(|arg| self.abstract_eval(stmt, arg))
            .collect();
        self.path_combinations(parts)
    }

    /// Cartesian product of the string candidates, joined with `/`.
    fn path_combinations(&self, mut parts: Vec<Vec<Value>>) -> Vec<Value> {
        if parts.len() <= 1 {
            return parts.pop().unwrap_or_default();
        }
        let first = parts.remove(0);
        let rest = self.path_combinations(parts);
        let mut out = Vec::new();
        for head in first.iter().filter_map(|value| self.string_of(value)) {
            for tail in rest.iter().filter_map(|value| self.string_of(value)) {
                out.push(Value::Str(format!("{head}/{tail}")));
            }
        }
        out
    }

    fn apply_method(&self, value: &str, name: &str, args: Option<NodeId>) -> Option<String> {
        match name {
            "underscorify" => Some(underscorify(value)),
            "to_lower" => Some(value.to_ascii_lowercase()),
            "to_upper" => Some(value.to_ascii_uppercase()),
            "strip" => Some(strip(value).to_string()),
            "replace" => {
                let Some(NodeKind::ArgumentList { args }) = args.map(|args| self.ast.kind(args)) else {
                    return Some(value.to_string());
                };
                let replaced = match args.as_slice() {
                    [from, to] => self
                        .ast
                        .string_value(*from)
                        .zip(self.ast.string_value(*to))
                        .map(|(from, to)| value.replace(from, to)),
                    _ => None,
                };
                Some(replaced.unwrap_or_else(|| value.to_string()))
            }
            _ => None,
        }
    }

    fn string_of(&self, value: &Value) -> Option<String> {
        match value {
            Value::Node(node) => self.ast.string_value(*node).map(str::to_string),
            Value::Str(text) => Some(text.clone()),
            Value::Array(_) => None,
        }
    }

    fn array_items(&self, value: &Value) -> Option<Vec<Value>> {
        match value {
            Value::Node(node) => match self.ast.kind(*node) {
                NodeKind::ArrayLiteral { args } => Some(args.iter().copied().map(Value::Node).collect()),
                _ => None,
            },
            Value::Array(items) => Some(items.iter().cloned().map(Value::Str).collect()),
            Value::Str(_) => None,
        }
    }

    fn array_strings(&self, value: &Value) -> Vec<String> {
        self.array_items(value)
            .unwrap_or_default()
            .iter()
            .filter_map(|item| self.string_of(item))
            .collect()
    }

    /// `(key, value)` node pairs of a dictionary literal.
    fn dict_entries(&self, value: &Value) -> Option<Vec<(NodeId, NodeId)>> {
        let Value::Node(node) = value else {
            return None;
        };
        let NodeKind::DictionaryLiteral { values } = self.ast.kind(*node) else {
            return None;
        };
        Some(
            values
                .iter()
                .filter_map(|item| match self.ast.kind(*item) {
                    NodeKind::KeyValueItem { key, value } => Some((*key, *value)),
                    _ => None,
                })
                .collect(),
        )
    }

    fn dict_values(&self, value: &Value) -> Vec<Value> {
        self.dict_entries(value)
            .unwrap_or_default()
            .into_iter()
            .filter(|(_, value)| self.ast.string_value(*value).is_some())
            .map(|(_, value)| Value::Node(value))
            .collect()
    }

    fn dict_lookup(&self, value: &Value, name: &str) -> Vec<Value> {
        self.dict_entries(value)
            .unwrap_or_default()
            .into_iter()
            .filter(|(key, value)| {
                self.ast.string_value(*key) == Some(name) && self.ast.string_value(*value).is_some()
            })
            .map(|(_, value)| Value::Node(value))
            .collect()
    }

    fn literal_key(&self, node: NodeId) -> Option<Key<'a>> {
        let ast = self.ast;
        match ast.kind(node) {
            NodeKind::IntegerLiteral { value, .. } => Some(Key::Index(*value)),
            NodeKind::StringLiteral { value, .. } => Some(Key::Name(value)),
            _ => None,
        }
    }

    fn key_of<'v>(&self, value: &'v Value) -> Option<Key<'v>>
    where
        'a: 'v,
    {
        match value {
            Value::Node(node) => self.literal_key(*node),
            Value::Str(text) => Some(Key::Name(text)),
            Value::Array(_) => None,
        }
    }

    /// `container[key]`: an array element (flattening one nested array), a
    /// dictionary entry, or the entry of every dictionary in an array.
    fn project(&self, container: &Value, key: &Key<'_>) -> Vec<Value> {
        match (self.array_items(container), key) {
            (Some(items), Key::Index(idx)) => {
                let Some(item) = usize::try_from(*idx).ok().and_then(|idx| items.get(idx)) else {
                    return Vec::new();
                };
                if self.string_of(item).is_some() {
                    return vec![item.clone()];
                }
                self.array_items(item)
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|nested| self.string_of(nested).is_some())
                    .collect()
            }
            (Some(items), Key::Name(name)) => items
                .iter()
                .flat_map(|item| self.dict_lookup(item, name))
                .collect(),
            (None, Key::Name(name)) => self.dict_lookup(container, name),
            (None, Key::Index(_)) => Vec::new(),
        }
    }

    fn abstract_eval(&self, stmt: NodeId, node: NodeId) -> Vec<Value> {
        let ast = self.ast;
        match ast.kind(node) {
            NodeKind::DictionaryLiteral { .. }
            | NodeKind::ArrayLiteral { .. }
            | NodeKind::StringLiteral { .. }
            | NodeKind::IntegerLiteral { .. } => vec![Value::Node(node)],
            NodeKind::BinaryExpression { lhs, rhs, op } => {
                let separator = separator(*op);
                let rhs = self.abstract_eval(stmt, *rhs);
                let lhs = self.abstract_eval(stmt, *lhs);
                let mut out = Vec::new();
                for left in &lhs {
                    for right in &rhs {
                        out.extend(self.combine(left, right, separator));
                    }
                }
                out
            }
            NodeKind::IdExpression { name } => self.resolve(stmt, name),
            NodeKind::MethodExpression { obj, id, args } => {
                let name = ast.identifier(*id).unwrap_or_default();
                let first = args.and_then(|_| ast.positional_arg(node, 0));
                match (name, first, ast.identifier(*obj)) {
                    ("format", Some(_), _) => self
                        .format_strings(stmt, *obj, node)
                        .into_iter()
                        .map(Value::Str)
                        .collect(),
                    ("get", Some(first), Some(variable)) => {
                        let Some(key) = self.literal_key(first) else {
                            return Vec::new();
                        };
                        self.resolve(stmt, variable)
                            .iter()
                            .flat_map(|value| {
                                if self.string_of(value).is_some() {
                                    vec![value.clone()]
                                } else {
                                    self.project(value, &key)
                                        .into_iter()
                                        .filter(|item| self.string_of(item).is_some())
                                        .collect()
                                }
                            })
                            .collect()
                    }
                    ("split", None, _) if args.is_none() => {
                        let words = self
                            .abstract_eval(stmt, *obj)
                            .iter()
                            .filter_map(|value| self.string_of(value))
                            .flat_map(|text| split_whitespace(&text))
                            .collect();
                        vec![Value::Array(words)]
                    }
                    _ if STRING_METHODS.contains(&name) => self.eval_string_method(stmt, *obj, name, *args),
                    _ => Vec::new(),
                }
            }
            NodeKind::ConditionalExpression {
                if_true, if_false, ..
            } => {
                let mut out = self.abstract_eval(stmt, *if_true);
                out.extend(self.abstract_eval(stmt, *if_false));
                out
            }
            NodeKind::SubscriptExpression { outer, inner } => self.eval_subscript(stmt, *outer, *inner),
            NodeKind::FunctionExpression { .. } => match ast.function_name(node) {
                Some("join_paths") => self.join_paths(stmt, node),
                Some("get_option") => self.option_values(node).into_iter().map(Value::Str).collect(),
                _ => Vec::new(),
            },
            NodeKind::AssignmentStatement { rhs, .. } => self.abstract_eval(stmt, *rhs),
            _ => Vec::new(),
        }
    }

    /// `left <op> right` for strings and arrays of strings.
    fn combine(&self, left: &Value, right: &Value, separator: &str) -> Vec<Value> {
        let joined = |head: &str, tail: &str| Value::Str(format!("{head}{separator}{tail}"));
        match (self.string_of(left), self.string_of(right)) {
            (Some(left), Some(right)) => return vec![joined(&left, &right)],
            (Some(prefix), None) => {
                let Some(items) = self.array_items(right) else {
                    return Vec::new();
                };
                let mut out = Vec::new();
                for item in &items {
                    match self.string_of(item) {
                        Some(text) => out.push(joined(&prefix, &text)),
                        None => out.extend(
                            self.array_strings(item)
                                .iter()
                                .map(|text| joined(&prefix, text)),
                        ),
                    }
                }
                return out;
            }
            (None, Some(suffix)) => {
                let Some(items) = self.array_items(left) else {
                    return Vec::new();
                };
                let mut out = Vec::new();
                for item in &items {
                    match self.string_of(item) {
                        Some(text) => out.push(joined(&text, &suffix)),
                        None => out.extend(
                            self.array_strings(item)
                                .iter()
                                .map(|text| joined(text, &suffix)),
                        ),
                    }
                }
                return out;
            }
            (None, None) => {}
        }
        let both_arrays = self.array_items(left).is_some() && self.array_items(right).is_some();
        let both_dicts = self.dict_entries(left).is_some() && self.dict_entries(right).is_some();
        if both_arrays || both_dicts {
            return vec![left.clone(), right.clone()];
        }
        Vec::new()
    }

    fn eval_string_method(&self, stmt: NodeId, obj: NodeId, name: &str, args: Option<NodeId>) -> Vec<Value> {
        let mut out = Vec::new();
        for value in self.abstract_eval(stmt, obj) {
            if name == "keys" {
                for (key, _) in self.dict_entries(&value).unwrap_or_default() {
                    if self.ast.string_value(key).is_some() {
                        out.push(Value::Node(key));
                    }
                }
                continue;
            }
            let mut strings = self.array_strings(&value);
            strings.extend(self.string_of(&value));
            out.extend(
                strings
                    .iter()
                    .filter_map(|text| self.apply_method(text, name, args))
                    .map(Value::Str),
            );
        }
        out
    }

    fn eval_subscript(&self, stmt: NodeId, outer: NodeId, inner: NodeId) -> Vec<Value> {
        let ast = self.ast;
        if let (Some(key), Some(variable)) = (self.literal_key(inner), ast.identifier(outer)) {
            return self
                .resolve(stmt, variable)
                .iter()
                .flat_map(|value| {
                    let projected = self.project(value, &key);
                    if projected.is_empty() && self.string_of(value).is_some() {
                        vec![value.clone()]
                    } else {
                        projected
                    }
                })
                .collect();
        }
        if let (NodeKind::IntegerLiteral { value: idx, .. }, NodeKind::MethodExpression { obj, id, args }) =
            (ast.kind(inner), ast.kind(outer))
        {
            if ast.identifier(*id) == Some("split") {
                let separator = match args {
                    None => Some(None),
                    Some(_) => ast
                        .positional_arg(outer, 0)
                        .and_then(|arg| ast.string_value(arg))
                        .map(Some),
                };
                if let Some(separator) = separator {
                    return self.split_at_index(stmt, *obj, *idx, separator);
                }
            }
        }
        let containers = self.abstract_eval(stmt, outer);
        let indices = self.abstract_eval(stmt, inner);
        let mut out = Vec::new();
        for container in &containers {
            for index in &indices {
                if let Some(key) = self.key_of(index) {
                    out.extend(self.project(container, &key));
                }
            }
            if indices.is_empty() {
                out.extend(self.dict_values(container));
            }
        }
        out
    }

    /// `obj.split(separator)[idx]`; no separator splits on whitespace.
    fn split_at_index(&self, stmt: NodeId, obj: NodeId, idx: u64, separator: Option<&str>) -> Vec<Value> {
        let Ok(idx) = usize::try_from(idx) else {
            return Vec::new();
        };
        let part = |text: &str| -> Option<Value> {
            let parts: Vec<String> = match separator {
                Some(separator) if !separator.is_empty() => text.split(separator).map(str::to_string).collect(),
                _ => split_whitespace(text),
            };
            parts.into_iter().nth(idx).map(Value::Str)
        };
        let mut out = Vec::new();
        for value in self.abstract_eval(stmt, obj) {
            match self.string_of(&value) {
                Some(text) => out.extend(part(&text)),
                None => out.extend(self.array_strings(&value).iter().filter_map(|text| part(text.as_str()))),
            }
        }
        out
    }

    /// Values `name` may hold right before `stmt`.
    fn resolve(&self, stmt: NodeId, name: &str) -> Vec<Value> {
        let ast = self.ast;
        let Some(container) = ast.parent(stmt) else {
            return Vec::new();
        };
        match ast.kind(container) {
            NodeKind::BuildDefinition { stmts } => match self.scan_before(stmts, stmt, name) {
                Scan::Assigned(values) | Scan::Open(values) => values,
            },
            NodeKind::IterationStatement {
                ids,
                expression,
                stmts,
            } => {
                let pending = match self.scan_before(stmts, stmt, name) {
                    Scan::Assigned(values) => return values,
                    Scan::Open(values) => values,
                };
                let Some(position) = ids.iter().position(|id| ast.identifier(*id) == Some(name)) else {
                    let mut values = self.resolve(container, name);
                    values.extend(pending);
                    return values;
                };
                let mut iterated = self.abstract_eval(container, *expression);
                iterated.extend(pending);
                if ids.len() == 1 {
                    return self.loop_elements(container, iterated);
                }
                let mut out = Vec::new();
                for value in &iterated {
                    for (key, item) in self.dict_entries(value).unwrap_or_default() {
                        let target = if position == 0 { key } else { item };
                        out.extend(self.abstract_eval(container, target));
                    }
                }
                out
            }
            NodeKind::SelectionStatement { blocks, .. } => {
                let block = blocks.iter().find(|block| block.contains(&stmt));
                let pending = match block.map(|block| self.scan_before(block, stmt, name)) {
                    Some(Scan::Assigned(values)) => return values,
                    Some(Scan::Open(values)) => values,
                    None => Vec::new(),
                };
                let mut values = self.resolve(container, name);
                values.extend(pending);
                values
            }
            _ => Vec::new(),
        }
    }

    /// Unwraps `foreach x : [...]` into its elements.
    fn loop_elements(&self, iteration: NodeId, iterated: Vec<Value>) -> Vec<Value> {
        let mut out = Vec::new();
        for value in iterated {
            let Some(items) = self.array_items(&value) else {
                out.push(value);
                continue;
            };
            for item in items {
                match item {
                    Value::Node(node) => out.extend(self.abstract_eval(iteration, node)),
                    other => out.push(other),
                }
            }
        }
        out
    }

    /// Walks `stmts` backwards from `stmt`. `=` ends the walk, `+=` adds
    /// and keeps going, anything else is searched for nested assignments.
    fn scan_before(&self, stmts: &[NodeId], stmt: NodeId, name: &str) -> Scan {
        let Some(position) = stmts.iter().position(|candidate| *candidate == stmt) else {
            return Scan::Open(Vec::new());
        };
        let mut pending = Vec::new();
        for earlier in stmts[..position].iter().rev() {
            match self.assignment_to(*earlier, name) {
                Some((rhs, AssignmentOperator::Equals)) => {
                    let mut values = self.abstract_eval(*earlier, rhs);
                    values.extend(pending);
                    return Scan::Assigned(values);
                }
                Some((rhs, _)) => pending.extend(self.abstract_eval(*earlier, rhs)),
                None => pending.extend(self.nested_assignments(*earlier, name)),
            }
        }
        Scan::Open(pending)
    }

    fn assignment_to(&self, stmt: NodeId, name: &str) -> Option<(NodeId, AssignmentOperator)> {
        match self.ast.kind(stmt) {
            NodeKind::AssignmentStatement { lhs, rhs, op } if self.ast.identifier(*lhs) == Some(name) => {
                Some((*rhs, *op))
            }
            _ => None,
        }
    }

    /// Every value assigned to `name` anywhere inside a loop or branch.
    fn nested_assignments(&self, stmt: NodeId, name: &str) -> Vec<Value> {
        let body: Vec<NodeId> = match self.ast.kind(stmt) {
            NodeKind::IterationStatement { stmts, .. } => stmts.clone(),
            NodeKind::SelectionStatement { blocks, .. } => blocks.iter().flatten().copied().collect(),
            _ => return Vec::new(),
        };
        let mut out = Vec::new();
        for nested in body.into_iter().rev() {
            match self.assignment_to(nested, name) {
                Some((rhs, _)) => out.extend(self.abstract_eval(nested, rhs)),
                None => out.extend(self.nested_assignments(nested, name)),
            }
        }
        out
    }
}

/// Replaces `@N@` with `arguments[N]` in one pass. Out of range
/// placeholders stay as they are.
fn substitute_placeholders(template: &str, arguments: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('@') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let argument = (digits > 0 && after[digits..].starts_with('@'))
            .then(|| after[..digits].parse::<usize>().ok())
            .flatten()
            .and_then(|idx| arguments.get(idx));
        match argument {
            Some(argument) => {
                out.push_str(argument);
                rest = &after[digits + 1..];
            }
            None => {
                out.push('@');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn separator(op: BinaryOperator) -> &'static str {
    if op == BinaryOperator::Div {
        "/"
    } else {
        ""
    }
}
