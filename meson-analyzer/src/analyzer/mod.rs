//! Type inference over a parsed build file.
//!
//! [`TypeAnalyzer`] walks the tree once, in statement order, and gives every
//! expression the set of types it may evaluate to. Along the way it reports
//! semantic problems: unknown identifiers, bad calls, dead code, unused
//! assignments. Nothing here aborts; an expression the analyzer cannot type
//! simply gets an empty set.
//!
//! Branches are handled without forking the scope. While an `if` is open,
//! assignments are also recorded on a per-statement stack, and once every
//! branch has been visited the recorded types are merged back into the
//! scope. The result is an over-approximation: after
//!
//! ```text
//! x = 'foo'
//! if cond
//!   x = 2
//! endif
//! ```
//!
//! `x` is `int|str`.

mod calls;
mod lints;

use std::collections::{BTreeMap, BTreeSet};

use meson_support::{
    extract_text_between_at_symbols, is_shouting_snake_case, is_snake_case,
    strip_version_operator,
};

use crate::analysis::AnalysisOptions;
use crate::ast::{
    AssignmentOperator, Ast, BinaryOperator, NodeId, NodeKind, SourceSpan, UnaryOperator,
};
use crate::diagnostics::{DiagnosticTag, Diagnostics};
use crate::interpreter::PartialInterpreter;
use crate::namespace::{namespace, Callee, Namespace};
use crate::options::OptionRegistry;
use crate::types::{dedup, is_unknown, join_types, Type};

/// Objects every build file starts with. Assigning to them is an error.
const READ_ONLY_VARIABLES: &[&str] = &["meson", "build_machine", "host_machine", "target_machine"];

/// Inferred types per node, plus the builtin each call resolved to.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    types: Vec<Vec<Type>>,
    callees: BTreeMap<NodeId, Callee>,
}

impl TypeTable {
    fn with_len(len: usize) -> Self {
        Self {
            types: vec![Vec::new(); len],
            callees: BTreeMap::new(),
        }
    }

    /// Empty for nodes that have no value, e.g. statements, and for
    /// expressions the analyzer could not type.
    pub fn types(&self, id: NodeId) -> &[Type] {
        self.types.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn callee(&self, id: NodeId) -> Option<Callee> {
        self.callees.get(&id).copied()
    }

    fn set(&mut self, id: NodeId, types: Vec<Type>) {
        if let Some(slot) = self.types.get_mut(id.index()) {
            *slot = types;
        }
    }
}

/// A `subdir()` call and the directories it may name. Subdirectories are
/// recorded, never entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdirCall {
    pub call: NodeId,
    pub directories: Vec<String>,
}

pub(crate) struct TypeAnalysis {
    pub(crate) types: TypeTable,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) subdirs: Vec<SubdirCall>,
    pub(crate) declared_version: Option<String>,
}

pub(crate) struct TypeAnalyzer<'a> {
    ast: &'a Ast,
    options: &'a AnalysisOptions,
    registry: &'a OptionRegistry,
    interpreter: PartialInterpreter<'a>,
    ns: &'static Namespace,
    table: TypeTable,
    diagnostics: Diagnostics,
    scope: BTreeMap<String, Vec<Type>>,
    /// One level per open selection statement: types assigned in its branches.
    stack: Vec<BTreeMap<String, Vec<Type>>>,
    /// One level per open selection statement: types a branch overwrote.
    overridden: Vec<BTreeMap<String, Vec<Type>>>,
    /// One level per open selection statement: old and new types of every
    /// variable changed while it was open.
    selection_changes: Vec<BTreeMap<String, Vec<Type>>>,
    /// Assignments not read yet, one level per file and per open branch.
    needing_use: Vec<Vec<NodeId>>,
    /// Names guarded by an enclosing `if is_variable('name')`.
    ignore_unknown: Vec<String>,
    subdirs: Vec<SubdirCall>,
    declared_version: Option<String>,
}

impl<'a> TypeAnalyzer<'a> {
    pub(crate) fn new(
        ast: &'a Ast,
        registry: &'a OptionRegistry,
        options: &'a AnalysisOptions,
    ) -> Self {
        let scope = READ_ONLY_VARIABLES
            .iter()
            .filter_map(|name| Some((name.to_string(), vec![Type::object(name)?])))
            .collect();
        Self {
            ast,
            options,
            registry,
            interpreter: PartialInterpreter::new(ast, registry),
            ns: namespace(),
            table: TypeTable::with_len(ast.len()),
            diagnostics: Diagnostics::new(),
            scope,
            stack: Vec::new(),
            overridden: Vec::new(),
            selection_changes: Vec::new(),
            needing_use: Vec::new(),
            ignore_unknown: Vec::new(),
            subdirs: Vec::new(),
            declared_version: None,
        }
    }

    pub(crate) fn analyze(mut self) -> TypeAnalysis {
        let root = self.ast.root();
        self.visit(root);
        TypeAnalysis {
            types: self.table,
            diagnostics: self.diagnostics,
            subdirs: self.subdirs,
            declared_version: self.declared_version,
        }
    }

    fn error(&mut self, node: NodeId, message: impl Into<String>) {
        self.diagnostics
            .push_error_with_span(message, Some(self.ast.span(node)));
    }

    fn warning(&mut self, node: NodeId, message: impl Into<String>) {
        self.diagnostics
            .push_warning_with_span(message, Some(self.ast.span(node)));
    }

    fn types_of(&self, id: NodeId) -> Vec<Type> {
        self.table.types(id).to_vec()
    }

    fn visit_all(&mut self, ids: &[NodeId]) {
        for id in ids {
            self.visit(*id);
        }
    }

    fn visit(&mut self, id: NodeId) {
        let ast = self.ast;
        match ast.kind(id) {
            NodeKind::ArgumentList { args } => self.visit_all(args),
            NodeKind::ArrayLiteral { args } => {
                self.visit_all(args);
                let elements: Vec<Type> = args.iter().flat_map(|arg| self.types_of(*arg)).collect();
                self.table.set(id, vec![Type::List(dedup(&elements))]);
            }
            NodeKind::AssignmentStatement { lhs, rhs, op } => self.check_assignment(*lhs, *rhs, *op),
            NodeKind::BinaryExpression { lhs, rhs, op } => self.check_binary(id, *lhs, *rhs, *op),
            NodeKind::BooleanLiteral { .. } => self.table.set(id, vec![Type::Bool]),
            NodeKind::BuildDefinition { stmts } => self.check_build_definition(id, stmts),
            NodeKind::ConditionalExpression {
                condition,
                if_true,
                if_false,
            } => self.check_conditional(id, *condition, *if_true, *if_false),
            NodeKind::DictionaryLiteral { values } => self.check_dictionary(id, values),
            NodeKind::ErrorNode { message } => self.error(id, message.clone()),
            NodeKind::FunctionExpression { .. } => self.check_function_call(id),
            NodeKind::IdExpression { name } => self.check_identifier_use(id, name),
            NodeKind::IntegerLiteral { .. } => self.table.set(id, vec![Type::Int]),
            NodeKind::IterationStatement {
                ids,
                expression,
                stmts,
            } => self.check_iteration(ids, *expression, stmts),
            NodeKind::KeyValueItem { key, value } => {
                self.visit(*key);
                self.visit(*value);
                let types = self.types_of(*value);
                self.table.set(id, types);
            }
            NodeKind::KeywordItem { key, value } => {
                self.visit(*key);
                self.visit(*value);
            }
            NodeKind::MethodExpression { .. } => self.check_method_call(id),
            NodeKind::SelectionStatement { conditions, blocks } => {
                self.check_selection(conditions, blocks)
            }
            NodeKind::StringLiteral {
                value,
                is_format,
                has_enough_ats,
            } => self.check_string_literal(id, value, *is_format, *has_enough_ats),
            NodeKind::SubscriptExpression { outer, inner } => self.check_subscript(id, *outer, *inner),
            NodeKind::UnaryExpression { op, expr } => {
                self.visit(*expr);
                let ty = match op {
                    UnaryOperator::Not | UnaryOperator::ExclamationMark => Type::Bool,
                    UnaryOperator::Minus => Type::Int,
                };
                self.table.set(id, vec![ty]);
            }
            NodeKind::BreakNode => self.check_in_loop(id, "break"),
            NodeKind::ContinueNode => self.check_in_loop(id, "continue"),
        }
    }

    /// Visits a statement list and flags everything after the first
    /// `error()`/`subdir_done()` as dead.
    fn check_statements(&mut self, stmts: &[NodeId]) {
        let mut terminated = false;
        let mut dead: Option<(NodeId, NodeId)> = None;
        for stmt in stmts {
            self.visit(*stmt);
            self.check_no_effect(*stmt);
            if !terminated {
                terminated = lints::is_terminator(self.ast, *stmt);
                continue;
            }
            dead = match dead {
                None => Some((*stmt, *stmt)),
                Some((first, _)) => Some((first, *stmt)),
            };
        }
        if let Some((first, last)) = dead {
            let span = SourceSpan::union(&self.ast.span(first), &self.ast.span(last));
            self.diagnostics
                .push_tagged_warning("Dead code", Some(span), DiagnosticTag::Unnecessary);
        }
    }

    fn check_build_definition(&mut self, root: NodeId, stmts: &[NodeId]) {
        self.needing_use.push(Vec::new());
        self.check_project_call(root, stmts);
        self.check_statements(stmts);
        self.check_unused_variables();
        for error in &self.ast.errors {
            self.diagnostics
                .push_error_with_span(error.message.clone(), Some(error.span));
        }
    }

    fn check_project_call(&mut self, root: NodeId, stmts: &[NodeId]) {
        let ast = self.ast;
        let project = stmts
            .first()
            .copied()
            .filter(|stmt| ast.function_name(*stmt) == Some("project"));
        let Some(project) = project else {
            self.error(root, "Missing project() call at top of file");
            return;
        };
        let Some(constraint) = ast
            .kwarg(project, "meson_version")
            .and_then(|node| ast.string_value(node))
        else {
            return;
        };
        tracing::info!(constraint, "project declares a meson version");
        self.declared_version = Some(strip_version_operator(constraint).to_string());
    }

    /// Flags assignments from function calls whose variable is never read.
    /// Levels of nested branches fold into their parent first; only the
    /// file level reports.
    fn check_unused_variables(&mut self) {
        let Some(unused) = self.needing_use.pop() else {
            return;
        };
        if let Some(parent) = self.needing_use.last_mut() {
            parent.extend(unused);
            return;
        }
        if self.options.disable_unused_variable_check {
            return;
        }
        let ast = self.ast;
        for id in unused {
            let Some(parent) = ast.parent(id) else {
                continue;
            };
            let NodeKind::AssignmentStatement { rhs, .. } = ast.kind(parent) else {
                continue;
            };
            match ast.function_name(*rhs) {
                Some("declare_dependency") | None => continue,
                Some(_) => self.warning(id, "Unused assignment"),
            }
        }
    }

    fn register_need_for_use(&mut self, id: NodeId) {
        if let Some(level) = self.needing_use.last_mut() {
            level.push(id);
        }
    }

    fn register_used(&mut self, name: &str) {
        let ast = self.ast;
        for level in &mut self.needing_use {
            level.retain(|id| ast.identifier(*id) != Some(name));
        }
    }

    /// Remembers, for the innermost open selection statement, what `name`
    /// held before and what it holds now.
    fn record_selection_change(&mut self, name: &str, types: &[Type]) {
        let previous = self.scope.get(name).cloned().unwrap_or_default();
        let Some(changes) = self.selection_changes.last_mut() else {
            return;
        };
        let entry = changes.entry(name.to_string()).or_default();
        entry.extend(previous);
        entry.extend(types.iter().cloned());
    }

    fn apply_to_stack(&mut self, name: &str, types: &[Type]) {
        if self.stack.is_empty() {
            return;
        }
        if let Some(current) = self.scope.get(name) {
            if let Some(level) = self.overridden.last_mut() {
                level
                    .entry(name.to_string())
                    .or_default()
                    .extend(current.iter().cloned());
            }
        }
        if let Some(level) = self.stack.last_mut() {
            level
                .entry(name.to_string())
                .or_default()
                .extend(types.iter().cloned());
        }
    }

    fn assign_variable(&mut self, name: &str, types: Vec<Type>) {
        self.record_selection_change(name, &types);
        self.apply_to_stack(name, &types);
        self.scope.insert(name.to_string(), types);
    }

    /// Types a branch overwrote, across all open selection statements.
    fn eval_stack(&self, name: &str) -> Vec<Type> {
        self.overridden
            .iter()
            .filter_map(|level| level.get(name))
            .flatten()
            .cloned()
            .collect()
    }

    fn check_identifier_name(&mut self, id: NodeId, name: &str) {
        if self.options.disable_name_linting {
            return;
        }
        if is_snake_case(name) || is_shouting_snake_case(name) {
            return;
        }
        self.warning(id, "Expected snake case");
    }

    fn check_assignment(&mut self, lhs: NodeId, rhs: NodeId, op: AssignmentOperator) {
        self.visit(lhs);
        self.visit(rhs);
        let ast = self.ast;
        let Some(name) = ast.identifier(lhs) else {
            self.error(lhs, "Can only assign to variables");
            return;
        };
        if op == AssignmentOperator::Other {
            self.error(lhs, "Unknown assignment operator");
            return;
        }
        let rhs_types = self.types_of(rhs);
        let is_call = matches!(
            ast.kind(rhs),
            NodeKind::FunctionExpression { .. } | NodeKind::MethodExpression { .. }
        );
        if rhs_types.is_empty() && is_call {
            let callee = self.table.callee(rhs).map(|callee| callee.id()).unwrap_or_default();
            if !callee.starts_with("install_") {
                self.error(lhs, "Can't assign from void");
            }
            return;
        }
        if op == AssignmentOperator::Equals {
            if READ_ONLY_VARIABLES.contains(&name) {
                self.error(lhs, "Attempted to re-assign to existing, read-only variable");
                return;
            }
            self.table.set(lhs, rhs_types.clone());
            self.check_identifier_name(lhs, name);
            self.assign_variable(name, rhs_types);
            self.register_need_for_use(lhs);
            return;
        }
        let lhs_types = self.types_of(lhs);
        let mut combined = Vec::new();
        for left in &lhs_types {
            for right in &rhs_types {
                combined.extend(compound_assignment_type(op, left, right));
            }
        }
        let combined = dedup(&combined);
        self.table.set(lhs, combined.clone());
        self.assign_variable(name, combined);
    }

    fn check_binary(&mut self, id: NodeId, lhs: NodeId, rhs: NodeId, op: BinaryOperator) {
        self.visit(lhs);
        self.visit(rhs);
        let lhs_types = self.types_of(lhs);
        let rhs_types = self.types_of(rhs);
        if op == BinaryOperator::Other {
            let mut types = lhs_types;
            types.extend(rhs_types);
            self.table.set(id, types);
            self.error(id, "Unknown operator");
            return;
        }

        let mut failures = 0usize;
        let mut result = Vec::new();
        for left in &lhs_types {
            for right in &rhs_types {
                if *left == Type::Any && *right == Type::Any {
                    failures += 1;
                    continue;
                }
                match binary_result(op, left, right) {
                    Some(ty) => result.push(ty),
                    None => failures += 1,
                }
            }
        }
        let pairs = lhs_types.len() * rhs_types.len();
        if failures == pairs {
            if pairs != 0 && !is_unknown(&lhs_types) && !is_unknown(&rhs_types) {
                self.error(
                    id,
                    format!(
                        "Unable to apply operator {op} to types {} and {}",
                        join_types(&lhs_types),
                        join_types(&rhs_types)
                    ),
                );
            }
            result = lhs_types;
        }
        self.table.set(id, dedup(&result));

        let ast = self.ast;
        let compares_in_statement = ast.parent(id).is_some_and(|parent| {
            matches!(
                ast.kind(parent),
                NodeKind::AssignmentStatement { .. } | NodeKind::SelectionStatement { .. }
            )
        });
        if !compares_in_statement {
            return;
        }
        let is_method = |node: NodeId| matches!(ast.kind(node), NodeKind::MethodExpression { .. });
        let is_literal = |node: NodeId| ast.string_value(node).is_some();
        if is_method(lhs) && is_literal(rhs) {
            self.check_special_comparison(lhs, rhs);
        } else if is_method(rhs) && is_literal(lhs) {
            self.check_special_comparison(rhs, lhs);
        }
    }

    fn check_conditional(&mut self, id: NodeId, condition: NodeId, if_true: NodeId, if_false: NodeId) {
        self.visit(condition);
        self.visit(if_true);
        self.visit(if_false);
        let mut types = self.types_of(if_true);
        types.extend(self.types_of(if_false));
        self.table.set(id, dedup(&types));
        let condition_types = self.types_of(condition);
        if condition_types.iter().any(is_boolish) {
            return;
        }
        self.error(
            id,
            format!("Condition is not bool: {}", join_types(&condition_types)),
        );
    }

    fn check_dictionary(&mut self, id: NodeId, values: &[NodeId]) {
        self.visit_all(values);
        let elements: Vec<Type> = values.iter().flat_map(|value| self.types_of(*value)).collect();
        self.table.set(id, vec![Type::Dict(dedup(&elements))]);

        let ast = self.ast;
        let mut seen = BTreeSet::new();
        for value in values {
            let NodeKind::KeyValueItem { key, .. } = ast.kind(*value) else {
                continue;
            };
            let Some(name) = ast.string_value(*key) else {
                continue;
            };
            if !seen.insert(name) {
                self.warning(*key, format!("Duplicate key \"{name}\""));
            }
        }
    }

    fn check_identifier_use(&mut self, id: NodeId, name: &str) {
        let mut types = self.eval_stack(name);
        if let Some(scoped) = self.scope.get(name) {
            types.extend(scoped.iter().cloned());
        }
        self.table.set(id, dedup(&types));
        self.check_usage(id, name);
        if self.is_ignored_identifier(id, name) {
            return;
        }
        if !self.scope.contains_key(name) {
            self.error(id, format!("Unknown identifier `{name}`"));
        }
    }

    /// Identifiers that name something other than a variable: callee and
    /// keyword names, assignment targets, loop variables.
    fn is_ignored_identifier(&self, id: NodeId, name: &str) -> bool {
        let ast = self.ast;
        if let Some(parent) = ast.parent(id) {
            match ast.kind(parent) {
                NodeKind::MethodExpression { id: method, .. } if *method == id => return true,
                NodeKind::KeywordItem { key, .. } if *key == id => return true,
                NodeKind::AssignmentStatement { lhs, .. } if *lhs == id => return true,
                NodeKind::FunctionExpression { .. } => return true,
                NodeKind::IterationStatement { expression, .. } => return *expression != id,
                _ => {}
            }
        }
        self.ignore_unknown.iter().any(|ignored| ignored == name)
    }

    fn check_usage(&mut self, id: NodeId, name: &str) {
        let ast = self.ast;
        let Some(parent) = ast.parent(id) else {
            self.register_used(name);
            return;
        };
        let used = match ast.kind(parent) {
            NodeKind::AssignmentStatement { rhs, op, .. } => {
                *op != AssignmentOperator::Equals || *rhs == id
            }
            NodeKind::KeywordItem { value, .. } | NodeKind::KeyValueItem { value, .. } => *value == id,
            NodeKind::IterationStatement { expression, .. } => *expression == id,
            NodeKind::MethodExpression { obj, .. } => *obj == id,
            NodeKind::BinaryExpression { .. }
            | NodeKind::UnaryExpression { .. }
            | NodeKind::ArgumentList { .. }
            | NodeKind::ArrayLiteral { .. }
            | NodeKind::ConditionalExpression { .. }
            | NodeKind::SubscriptExpression { .. }
            | NodeKind::SelectionStatement { .. } => true,
            _ => false,
        };
        if used {
            self.register_used(name);
        }
    }

    fn check_iteration(&mut self, ids: &[NodeId], expression: NodeId, stmts: &[NodeId]) {
        self.visit(expression);
        self.visit_all(ids);
        match ids {
            [item] => self.bind_single_loop_variable(*item, expression),
            [key, value] => self.bind_key_value_loop_variables(*key, *value, expression),
            [first, .., last] => {
                let span = SourceSpan::union(&self.ast.span(*first), &self.ast.span(*last));
                self.diagnostics.push_error_with_span(
                    "Iteration statement expects only one or two identifiers",
                    Some(span),
                );
            }
            [] => {}
        }
        self.check_statements(stmts);
    }

    fn bind_single_loop_variable(&mut self, item: NodeId, expression: NodeId) {
        let iterated = self.types_of(expression);
        let mut elements = Vec::new();
        let mut failures = 0usize;
        let mut found_dict = false;
        for ty in &iterated {
            match ty {
                Type::List(inner) => elements.extend(inner.iter().cloned()),
                ty if ty.is_object("range") => elements.push(Type::Int),
                Type::Dict(_) => {
                    found_dict = true;
                    failures += 1;
                }
                _ => failures += 1,
            }
        }
        let types = if failures == iterated.len() {
            let message = if found_dict {
                "Iterating over a dict requires two identifiers"
            } else {
                "Expression yields no iterable result"
            };
            self.error(expression, message);
            Vec::new()
        } else {
            dedup(&elements)
        };
        self.bind_loop_variable(item, types);
    }

    fn bind_key_value_loop_variables(&mut self, key: NodeId, value: NodeId, expression: NodeId) {
        let iterated = self.types_of(expression);
        let values = iterated.iter().find_map(|ty| match ty {
            Type::Dict(inner) => Some(inner.clone()),
            _ => None,
        });
        if values.is_none() {
            let wrong_arity = iterated
                .iter()
                .any(|ty| matches!(ty, Type::List(_)) || ty.is_object("range"));
            let message = if wrong_arity {
                "Iterating over a list/range requires one identifier"
            } else {
                "Expression yields no iterable result"
            };
            self.error(expression, message);
        }
        self.bind_loop_variable(key, vec![Type::Str]);
        self.bind_loop_variable(value, values.unwrap_or_default());
    }

    fn bind_loop_variable(&mut self, id: NodeId, types: Vec<Type>) {
        self.table.set(id, types.clone());
        let Some(name) = self.ast.identifier(id) else {
            return;
        };
        self.assign_variable(name, types);
        self.check_identifier_name(id, name);
    }

    fn check_selection(&mut self, conditions: &[NodeId], blocks: &[Vec<NodeId>]) {
        self.stack.push(BTreeMap::new());
        self.overridden.push(BTreeMap::new());
        self.selection_changes.push(BTreeMap::new());
        let mut leftovers = Vec::new();
        for (idx, block) in blocks.iter().enumerate() {
            let mut guarded = false;
            if let Some(condition) = conditions.get(idx) {
                self.visit(*condition);
                guarded = self.check_condition(*condition);
            }
            self.needing_use.push(Vec::new());
            self.check_statements(block);
            if guarded {
                self.ignore_unknown.pop();
            }
            leftovers.extend(self.needing_use.pop().unwrap_or_default());
        }

        let ast = self.ast;
        if let Some(level) = self.needing_use.last_mut() {
            let mut seen = BTreeSet::new();
            for id in leftovers {
                if ast.identifier(id).is_some_and(|name| seen.insert(name)) {
                    level.push(id);
                }
            }
        }

        let assigned = self.stack.pop().unwrap_or_default();
        let changed = self.selection_changes.pop().unwrap_or_default();
        self.overridden.pop();
        for (name, types) in assigned {
            let mut merged = self.scope.get(&name).cloned().unwrap_or_default();
            merged.extend(types);
            if let Some(previous) = changed.get(&name) {
                merged.extend(previous.iter().cloned());
            }
            let merged = dedup(&merged);
            self.record_selection_change(&name, &merged);
            self.scope.insert(name, merged);
        }
    }

    /// Returns whether the condition is an `is_variable('name')` guard, in
    /// which case `name` is pushed onto the ignore list for the branch.
    fn check_condition(&mut self, condition: NodeId) -> bool {
        let ast = self.ast;
        let mut guarded = false;
        if ast.function_name(condition) == Some("is_variable") {
            if let Some(name) = ast
                .positional_arg(condition, 0)
                .and_then(|arg| ast.string_value(arg))
            {
                self.ignore_unknown.push(name.to_string());
                guarded = true;
            }
        }
        let types = self.types_of(condition);
        if !types.is_empty() && !types.iter().any(is_boolish) {
            self.error(
                condition,
                format!("Condition is not bool: {}", join_types(&types)),
            );
        }
        guarded
    }

    fn check_string_literal(&mut self, id: NodeId, value: &str, is_format: bool, has_enough_ats: bool) {
        self.table.set(id, vec![Type::Str]);
        if !has_enough_ats {
            return;
        }
        let placeholders = extract_text_between_at_symbols(value);
        if !is_format && !placeholders.is_empty() {
            if !placeholders.iter().any(|name| lints::is_template_placeholder(name)) {
                self.warning(
                    id,
                    "Found format identifiers in string, but literal is not a format string.",
                );
            }
            return;
        }
        for name in &placeholders {
            self.register_used(name);
        }
    }

    fn check_subscript(&mut self, id: NodeId, outer: NodeId, inner: NodeId) {
        self.visit(outer);
        self.visit(inner);
        let mut types = Vec::new();
        for ty in self.types_of(outer) {
            match ty {
                Type::Dict(elements) | Type::List(elements) => types.extend(elements),
                Type::Str => types.push(Type::Str),
                ty if ty.is_object("custom_tgt") => types.extend(Type::object("custom_idx")),
                _ => {}
            }
        }
        self.table.set(id, dedup(&types));
    }

    fn check_in_loop(&mut self, id: NodeId, keyword: &str) {
        let ast = self.ast;
        let mut current = ast.parent(id);
        while let Some(parent) = current {
            match ast.kind(parent) {
                NodeKind::IterationStatement { .. } => return,
                NodeKind::BuildDefinition { .. } => break,
                _ => current = ast.parent(parent),
            }
        }
        self.error(id, format!("{keyword} statements are only allowed inside loops"));
    }
}

fn is_boolish(ty: &Type) -> bool {
    matches!(ty, Type::Any | Type::Bool) || ty.is_disabler()
}

fn compound_assignment_type(op: AssignmentOperator, left: &Type, right: &Type) -> Option<Type> {
    match op {
        AssignmentOperator::PlusEquals => match (left, right) {
            (Type::List(elements), Type::List(more)) => {
                let joined: Vec<Type> = elements.iter().chain(more).cloned().collect();
                Some(Type::List(dedup(&joined)))
            }
            (Type::List(elements), other) => {
                let mut joined = elements.clone();
                joined.push(other.clone());
                Some(Type::List(dedup(&joined)))
            }
            (Type::Dict(elements), Type::Dict(more)) => {
                let joined: Vec<Type> = elements.iter().chain(more).cloned().collect();
                Some(Type::Dict(dedup(&joined)))
            }
            (Type::Dict(elements), other) => {
                let mut joined = elements.clone();
                joined.push(other.clone());
                Some(Type::Dict(dedup(&joined)))
            }
            (Type::Str, Type::Str) => Some(Type::Str),
            (Type::Int, Type::Int) => Some(Type::Int),
            _ => None,
        },
        AssignmentOperator::DivEquals => match (left, right) {
            (Type::Int, Type::Int) => Some(Type::Int),
            (Type::Str, Type::Str) => Some(Type::Str),
            _ => None,
        },
        AssignmentOperator::MinusEquals
        | AssignmentOperator::MulEquals
        | AssignmentOperator::ModEquals => {
            matches!((left, right), (Type::Int, Type::Int)).then_some(Type::Int)
        }
        AssignmentOperator::Equals | AssignmentOperator::Other => None,
    }
}

fn binary_result(op: BinaryOperator, left: &Type, right: &Type) -> Option<Type> {
    match op {
        BinaryOperator::Plus => match (left, right) {
            (Type::Str, Type::Str) => Some(Type::Str),
            (Type::Int, Type::Int) => Some(Type::Int),
            (Type::List(elements), Type::List(more)) => {
                Some(Type::List(elements.iter().chain(more).cloned().collect()))
            }
            (Type::List(elements), other) => {
                let mut joined = elements.clone();
                joined.push(other.clone());
                Some(Type::List(joined))
            }
            (Type::Dict(elements), Type::Dict(more)) => {
                Some(Type::Dict(elements.iter().chain(more).cloned().collect()))
            }
            _ => None,
        },
        BinaryOperator::EqualsEquals | BinaryOperator::NotEquals => match (left, right) {
            (Type::Str, Type::Str)
            | (Type::Int, Type::Int)
            | (Type::Bool, Type::Bool)
            | (Type::Dict(_), Type::Dict(_))
            | (Type::List(_), Type::List(_)) => Some(Type::Bool),
            (Type::Object(a), Type::Object(b)) if a == b => Some(Type::Bool),
            _ => None,
        },
        BinaryOperator::And | BinaryOperator::Or => {
            matches!((left, right), (Type::Bool, Type::Bool)).then_some(Type::Bool)
        }
        BinaryOperator::Div => match (left, right) {
            (Type::Int, Type::Int) => Some(Type::Int),
            (Type::Str, Type::Str) => Some(Type::Str),
            _ => None,
        },
        BinaryOperator::Gt | BinaryOperator::Lt | BinaryOperator::Ge | BinaryOperator::Le => {
            matches!((left, right), (Type::Int, Type::Int) | (Type::Str, Type::Str))
                .then_some(Type::Bool)
        }
        BinaryOperator::In | BinaryOperator::NotIn => Some(Type::Bool),
        BinaryOperator::Minus | BinaryOperator::Modulo | BinaryOperator::Mul => {
            matches!((left, right), (Type::Int, Type::Int)).then_some(Type::Int)
        }
        BinaryOperator::Other => None,
    }
}
