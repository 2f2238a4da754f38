use std::collections::BTreeSet;

use crate::ast::{Ast, NodeId, NodeKind, UnaryOperator};
use crate::diagnostics::Diagnostics;

use super::OptionRegistry;

const OPTION_TYPES: &[&str] = &["string", "integer", "boolean", "combo", "array", "feature"];

/// Lints an option file: only `option()` calls are allowed, names must be
/// unique and not shadow builtin options, defaults must match the type.
pub fn check_option_file(ast: &Ast) -> Diagnostics {
    let mut checker = OptionChecker {
        ast,
        reserved: OptionRegistry::with_builtin_options(),
        declared: BTreeSet::new(),
        diagnostics: Diagnostics::new(),
    };
    for node in ast.descendants(ast.root()) {
        match ast.kind(node) {
            NodeKind::FunctionExpression { .. } => checker.check_call(node),
            NodeKind::ErrorNode { message } => checker.error(node, message.clone()),
            _ => {}
        }
    }
    for error in &ast.errors {
        checker
            .diagnostics
            .push_error_with_span(error.message.clone(), Some(error.span));
    }
    checker.diagnostics
}

struct OptionChecker<'a> {
    ast: &'a Ast,
    reserved: OptionRegistry,
    declared: BTreeSet<String>,
    diagnostics: Diagnostics,
}

impl<'a> OptionChecker<'a> {
    fn error(&mut self, node: NodeId, message: impl Into<String>) {
        self.diagnostics
            .push_error_with_span(message, Some(self.ast.span(node)));
    }

    fn warning(&mut self, node: NodeId, message: impl Into<String>) {
        self.diagnostics
            .push_warning_with_span(message, Some(self.ast.span(node)));
    }

    fn check_call(&mut self, call: NodeId) {
        let ast = self.ast;
        let name = ast.function_name(call).unwrap_or_default();
        if name != "option" {
            self.error(
                call,
                format!("Invalid function call in meson options file: {name}"),
            );
            return;
        }
        if ast.call_arguments(call).is_none() {
            self.error(call, "Missing arguments in call to `option`");
            return;
        }
        let Some(name_node) = ast.positional_arg(call, 0) else {
            self.error(call, "Missing option name");
            return;
        };
        let Some(option_name) = ast.string_value(name_node) else {
            self.error(name_node, "Expected string literal");
            return;
        };
        self.check_name(name_node, option_name);

        let Some(type_node) = ast.kwarg(call, "type") else {
            self.error(name_node, "Missing option type kwarg");
            return;
        };
        let Some(option_type) = ast.string_value(type_node) else {
            self.error(name_node, "Expected option type to be a string literal");
            return;
        };
        if !OPTION_TYPES.contains(&option_type) {
            self.error(name_node, format!("Unknown option type: {option_type}"));
        }
        let Some(value) = ast.kwarg(call, "value") else {
            return;
        };
        match option_type {
            "string" => self.check_string(value),
            "integer" => self.check_integer(call, value),
            "boolean" => self.check_boolean(value),
            "feature" => self.check_feature(value),
            "combo" => self.check_combo(call, value),
            "array" => self.check_array(call, value),
            _ => {}
        }
    }

    fn check_name(&mut self, node: NodeId, name: &str) {
        if self.declared.contains(name) {
            self.error(node, format!("Duplicate option: {name}"));
        }
        if self.reserved.find_option(name).is_some() {
            self.error(node, format!("Declaration of reserved option: {name}"));
        }
        self.declared.insert(name.to_string());
        let valid = name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
        if !valid {
            self.error(
                node,
                "Invalid chars in name: Expected `a-z`, `A-Z`, `0-9`, `-` or `_`",
            );
        }
    }

    fn check_string(&mut self, value: NodeId) {
        if self.ast.string_value(value).is_none() {
            self.error(value, "Expected string literal");
        }
    }

    fn check_boolean(&mut self, value: NodeId) {
        if matches!(self.ast.kind(value), NodeKind::BooleanLiteral { .. }) {
            return;
        }
        let Some(text) = self.ast.string_value(value) else {
            self.error(value, "Expected boolean value for boolean option");
            return;
        };
        if text != "true" && text != "false" {
            self.error(value, "Expected 'true' or 'false'");
        }
        self.warning(
            value,
            "String literals as value for boolean options are deprecated.",
        );
    }

    fn check_feature(&mut self, value: NodeId) {
        let Some(text) = self.ast.string_value(value) else {
            self.error(value, "Expected string");
            return;
        };
        if !matches!(text, "enabled" | "disabled" | "auto") {
            self.error(value, "Expected one of: 'enabled', 'disabled', 'auto'");
        }
    }

    fn check_combo(&mut self, call: NodeId, value: NodeId) {
        let ast = self.ast;
        let default = ast.string_value(value);
        if default.is_none() {
            self.error(value, "Expected string literal");
        }
        let Some(choices) = ast.kwarg(call, "choices") else {
            self.error(call, "Missing 'choices' kwarg");
            return;
        };
        let NodeKind::ArrayLiteral { args } = ast.kind(choices) else {
            self.error(choices, "Expected array of strings");
            return;
        };
        let mut found = BTreeSet::new();
        for choice in args {
            let Some(text) = ast.string_value(*choice) else {
                self.error(*choice, "Expected string literal");
                continue;
            };
            if !found.insert(text) {
                self.warning(*choice, format!("Duplicate choice '{text}'"));
            }
        }
        if let Some(default) = default {
            if !found.contains(default) {
                self.error(
                    value,
                    "Default value is not contained in the choices array.",
                );
            }
        }
    }

    /// `None` when the option declares no `choices`, i.e. anything goes.
    fn array_choices(&mut self, call: NodeId) -> Option<BTreeSet<&'a str>> {
        let ast = self.ast;
        let choices = ast.kwarg(call, "choices")?;
        let NodeKind::ArrayLiteral { args } = ast.kind(choices) else {
            self.error(choices, "Expected array literal");
            return None;
        };
        let mut found = BTreeSet::new();
        for choice in args {
            let Some(text) = ast.string_value(*choice) else {
                self.error(*choice, "Expected string literal");
                continue;
            };
            if !found.insert(text) {
                self.warning(*choice, "Duplicate choice");
            }
        }
        Some(found)
    }

    fn check_array(&mut self, call: NodeId, value: NodeId) {
        let ast = self.ast;
        let choices = self.array_choices(call);
        let NodeKind::ArrayLiteral { args } = ast.kind(value) else {
            self.error(value, "Expected array literal");
            return;
        };
        for element in args {
            let Some(text) = ast.string_value(*element) else {
                self.error(*element, "Expected string literal");
                continue;
            };
            if let Some(choices) = &choices {
                if !choices.contains(text) {
                    self.error(*element, "Value is not a valid choice!");
                }
            }
        }
    }

    fn integer_literal(&self, node: NodeId) -> Option<i64> {
        match self.ast.kind(node) {
            NodeKind::IntegerLiteral { value, .. } => i64::try_from(*value).ok(),
            NodeKind::UnaryExpression {
                op: UnaryOperator::Minus,
                expr,
            } => self.integer_literal(*expr).map(|value| -value),
            _ => None,
        }
    }

    /// Integers spelled as strings still work but are deprecated.
    fn integer_from_string(&mut self, node: NodeId) -> Option<i64> {
        let text = self.ast.string_value(node)?;
        if text.is_empty() {
            return None;
        }
        let parsed = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            i64::from_str_radix(hex, 16)
        } else if let Some(bin) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
            i64::from_str_radix(bin, 2)
        } else if let Some(oct) = text.strip_prefix("0o").or_else(|| text.strip_prefix("0O")) {
            i64::from_str_radix(oct, 8)
        } else {
            text.parse::<i64>()
        };
        match parsed {
            Ok(value) => {
                self.warning(
                    node,
                    "String literals as value where integers are expected, are deprecated",
                );
                Some(value)
            }
            Err(_) => {
                self.error(node, "Unable to parse as integer");
                None
            }
        }
    }

    fn integer_kwarg(&mut self, call: NodeId, name: &str) -> Option<(NodeId, i64)> {
        let node = self.ast.kwarg(call, name)?;
        let value = self
            .integer_literal(node)
            .or_else(|| self.integer_from_string(node));
        match value {
            Some(value) => Some((node, value)),
            None => {
                self.error(node, "Unable to parse as integer literal");
                None
            }
        }
    }

    fn check_integer(&mut self, call: NodeId, value: NodeId) {
        let default = self
            .integer_literal(value)
            .or_else(|| self.integer_from_string(value));
        if default.is_none() {
            self.error(value, "Unable to parse as integer literal");
        }
        let min = self.integer_kwarg(call, "min");
        let max = self.integer_kwarg(call, "max");

        if let (Some((min_node, min)), Some((_, max))) = (min, max) {
            if min > max {
                self.warning(min_node, "Minimum value is greater than the maximum value");
            } else if min == max {
                self.warning(min_node, "Minimum value is equals to the maximum value");
            }
        }
        let Some(default) = default else {
            return;
        };
        let above_max = max.is_some_and(|(_, max)| default > max);
        if above_max {
            self.warning(value, "Default value is greater than the maximum value");
        } else if min.is_some_and(|(_, min)| default < min) {
            self.warning(value, "Default value is lower than the minimum value");
        }
    }
}
