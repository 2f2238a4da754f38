use crate::ast::{Ast, NodeKind};

use super::{MesonOption, OptionKind};

/// Collects every well-formed `option()` declaration in `ast`. Malformed
/// calls are skipped; [`super::check_option_file`] reports them.
pub fn extract_options(ast: &Ast) -> Vec<MesonOption> {
    ast.descendants(ast.root())
        .into_iter()
        .filter(|id| ast.function_name(*id) == Some("option"))
        .filter_map(|call| {
            let name = ast
                .positional_arg(call, 0)
                .and_then(|node| ast.string_value(node))?;
            let option_type = ast
                .kwarg(call, "type")
                .and_then(|node| ast.string_value(node))?;
            let description = ast
                .kwarg(call, "description")
                .and_then(|node| ast.string_value(node))
                .map(str::to_string);
            let deprecated = ast
                .kwarg(call, "deprecated")
                .map(|node| matches!(ast.kind(node), NodeKind::BooleanLiteral { value: true }))
                .unwrap_or(false);
            let choices = || -> Vec<String> {
                let Some(node) = ast.kwarg(call, "choices") else {
                    return Vec::new();
                };
                match ast.kind(node) {
                    NodeKind::ArrayLiteral { args } => args
                        .iter()
                        .filter_map(|arg| ast.string_value(*arg))
                        .map(str::to_string)
                        .collect(),
                    _ => Vec::new(),
                }
            };
            let kind = match option_type {
                "string" => OptionKind::String,
                "integer" => OptionKind::Integer,
                "boolean" => OptionKind::Boolean,
                "feature" => OptionKind::Feature,
                "combo" => OptionKind::Combo { values: choices() },
                "array" => OptionKind::Array { choices: choices() },
                other => {
                    tracing::warn!(option = name, kind = other, "unknown option type");
                    return None;
                }
            };
            tracing::info!(option = name, kind = option_type, "found option");
            Some(MesonOption {
                name: name.to_string(),
                description,
                deprecated,
                kind,
            })
        })
        .collect()
}
