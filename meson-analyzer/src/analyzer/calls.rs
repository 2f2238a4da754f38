use meson_support::extract_integers_between_at_symbols;

use crate::ast::{NodeId, NodeKind};
use crate::diagnostics::DiagnosticTag;
use crate::namespace::{find_module, Callee, Method};
use crate::options::OptionKind;
use crate::types::{dedup, is_unknown, join_types, Type};

use super::{SubdirCall, TypeAnalyzer};

/// Object types `build_target()` yields per `target_type`.
const BUILD_TARGET_KINDS: &[(&str, &str)] = &[
    ("executable", "exe"),
    ("shared_library", "lib"),
    ("static_library", "lib"),
    ("library", "lib"),
    ("shared_module", "build_tgt"),
    ("both_libraries", "both_libs"),
    ("jar", "jar"),
];

const ANY_RECEIVER: u8 = 0b001;
const ANY_LIST_RECEIVER: u8 = 0b010;
const ANY_DICT_RECEIVER: u8 = 0b100;

#[derive(Default)]
struct MethodLookup {
    method: Option<&'static Method>,
    types: Vec<Type>,
    /// Receivers whose type carries no information.
    unknown: usize,
    unknown_bits: u8,
}

impl<'a> TypeAnalyzer<'a> {
    fn argument_items(&self, call: NodeId) -> &'a [NodeId] {
        let ast = self.ast;
        let Some(args) = ast.call_arguments(call) else {
            return &[];
        };
        match ast.kind(args) {
            NodeKind::ArgumentList { args } => args,
            _ => &[],
        }
    }

    pub(super) fn check_function_call(&mut self, call: NodeId) {
        let ast = self.ast;
        let NodeKind::FunctionExpression { id, args } = ast.kind(call) else {
            return;
        };
        if let Some(args) = args {
            self.visit(*args);
        }
        let ns = self.ns;
        let name = ast.function_name(call).unwrap_or_default();
        let Some(function) = ns.lookup_function(name) else {
            self.error(*id, format!("Unknown function `{name}`"));
            return;
        };
        let callee = Callee::Function(function);
        self.table.callees.insert(call, callee);

        let returns = &function.signature.return_types;
        let types = match name {
            "get_option" => self.get_option_types(call, returns),
            "import" => self.import_types(call, returns),
            "subproject" => self.subproject_types(call, returns),
            "build_target" => self.build_target_types(call),
            "get_variable" => self.get_variable_types(call, returns),
            _ => returns.clone(),
        };
        self.table.set(call, types);

        let min = function.signature.arity.min;
        if self.argument_items(call).is_empty() && min > 0 {
            self.error(
                call,
                format!("Expected {min} positional arguments, but got none!"),
            );
        } else {
            self.check_call_arguments(call, callee);
            if name == "set_variable" {
                self.check_set_variable(call);
            }
        }
        if name == "subdir" {
            self.record_subdir(call);
        }
    }

    fn get_option_types(&mut self, call: NodeId, returns: &[Type]) -> Vec<Type> {
        let registry = self.registry;
        let names = self.interpreter.guess_first_argument(call);
        let anchor = self.ast.positional_arg(call, 0).unwrap_or(call);
        let single = names.len() == 1;
        let mut types = Vec::new();
        for name in &names {
            let Some(option) = registry.find_option(name) else {
                if single {
                    self.error(anchor, format!("Unknown option `{name}`"));
                }
                continue;
            };
            if option.deprecated && single {
                self.diagnostics.push_tagged_warning(
                    "Deprecated option",
                    Some(self.ast.span(anchor)),
                    DiagnosticTag::Deprecated,
                );
            }
            types.push(match option.kind {
                OptionKind::String | OptionKind::Combo { .. } => Type::Str,
                OptionKind::Boolean => Type::Bool,
                OptionKind::Integer => Type::Int,
                OptionKind::Array { .. } => Type::List(vec![Type::Str]),
                OptionKind::Feature => Type::Object("feature"),
            });
        }
        if types.is_empty() {
            return returns.to_vec();
        }
        dedup(&types)
    }

    fn import_types(&mut self, call: NodeId, returns: &[Type]) -> Vec<Type> {
        let names = self.interpreter.guess_first_argument(call);
        if names.is_empty() {
            return returns.to_vec();
        }
        let mut types = Vec::new();
        for name in &names {
            match find_module(name).and_then(Type::object) {
                Some(module) => types.push(module),
                None => {
                    types.push(Type::Object("module"));
                    self.warning(call, format!("Unknown module `{name}`"));
                }
            }
        }
        dedup(&types)
    }

    fn subproject_types(&mut self, call: NodeId, returns: &[Type]) -> Vec<Type> {
        let mut names = self.interpreter.guess_first_argument(call);
        if names.is_empty() {
            return returns.to_vec();
        }
        names.sort();
        names.dedup();
        tracing::info!(?names, "subproject call");
        vec![Type::Subproject(names)]
    }

    fn build_target_types(&mut self, call: NodeId) -> Vec<Type> {
        let kinds = self.interpreter.guess_keyword_argument(call, "target_type");
        let objects: Vec<&str> = if kinds.is_empty() {
            vec!["exe", "lib", "build_tgt", "both_libs", "jar"]
        } else {
            kinds
                .iter()
                .filter_map(|kind| {
                    BUILD_TARGET_KINDS
                        .iter()
                        .find(|(name, _)| name == kind)
                        .map(|(_, object)| *object)
                })
                .collect()
        };
        let types: Vec<Type> = objects.into_iter().filter_map(Type::object).collect();
        dedup(&types)
    }

    fn get_variable_types(&mut self, call: NodeId, returns: &[Type]) -> Vec<Type> {
        let ast = self.ast;
        let items = self.argument_items(call);
        if ast.call_arguments(call).is_none() {
            return returns.to_vec();
        }
        let mut types = Vec::new();
        if let [_, fallback] = items {
            if !matches!(ast.kind(*fallback), NodeKind::KeywordItem { .. }) {
                types.extend(self.types_of(*fallback));
            }
        }
        let names = self.interpreter.guess_first_argument(call);
        if names.is_empty() {
            types.extend(returns.iter().cloned());
        }
        for name in &names {
            if let Some(scoped) = self.scope.get(name) {
                types.extend(scoped.iter().cloned());
            }
        }
        let types = dedup(&types);
        tracing::info!(?names, types = %join_types(&types), "get_variable call");
        types
    }

    fn check_set_variable(&mut self, call: NodeId) {
        let ast = self.ast;
        let items = self.argument_items(call);
        let Some(value) = items.get(1).copied() else {
            return;
        };
        let types = self.types_of(value);
        if let Some(name) = items.first().and_then(|first| ast.string_value(*first)) {
            tracing::info!(name, types = %join_types(&types), "set_variable call");
            self.assign_variable(name, types);
            return;
        }
        for name in self.interpreter.guess_first_argument(call) {
            self.assign_variable(&name, types.clone());
        }
    }

    fn record_subdir(&mut self, call: NodeId) {
        let mut directories = self.interpreter.guess_first_argument(call);
        directories.sort();
        directories.dedup();
        if directories.is_empty() {
            tracing::warn!("unable to guess the directory of a subdir() call");
        } else {
            tracing::debug!(?directories, "subdir call");
        }
        self.subdirs.push(SubdirCall { call, directories });
    }

    fn check_call_arguments(&mut self, call: NodeId, callee: Callee) {
        let ast = self.ast;
        let signature = callee.signature();
        let checks_types = !self.options.disable_arg_type_checking;
        let mut seen_kwarg = false;
        let mut forwards_kwargs = false;
        let mut positional = 0usize;
        for item in self.argument_items(call) {
            let NodeKind::KeywordItem { key, value } = ast.kind(*item) else {
                if seen_kwarg {
                    self.error(
                        *item,
                        "Unexpected positional argument after a keyword argument",
                    );
                }
                if let Some(arg) = signature.positional(positional).filter(|_| checks_types) {
                    self.check_types(*item, &arg.types);
                }
                positional += 1;
                continue;
            };
            seen_kwarg = true;
            let Some(name) = ast.identifier(*key) else {
                continue;
            };
            if name == "kwargs" {
                forwards_kwargs = true;
                continue;
            }
            let Some(kwarg) = signature.kwargs.get(name) else {
                self.error(*item, format!("Unknown key word argument '{name}'"));
                continue;
            };
            if checks_types {
                self.check_types(*value, &kwarg.types);
            }
        }

        if !forwards_kwargs {
            for name in signature.required_kwargs() {
                if ast.kwarg(call, name).is_none() {
                    self.error(call, format!("Missing required key word argument '{name}'"));
                }
            }
        }

        let arity = signature.arity;
        if positional < arity.min {
            self.error(
                call,
                format!(
                    "Expected at least {} positional arguments, but got {positional}!",
                    arity.min
                ),
            );
        } else if let Some(max) = arity.max.filter(|max| positional > *max) {
            self.error(
                call,
                format!("Expected maximum {max} positional arguments, but got {positional}!"),
            );
        }
    }

    fn check_types(&mut self, node: NodeId, expected: &[Type]) {
        let given = self.types_of(node);
        if given.is_empty() || expected.is_empty() || is_unknown(&given) {
            return;
        }
        if any_compatible(expected, &given) {
            return;
        }
        self.error(
            node,
            format!(
                "Expected {}, got {}",
                join_types(expected),
                join_types(&given)
            ),
        );
    }

    pub(super) fn check_method_call(&mut self, call: NodeId) {
        let ast = self.ast;
        let NodeKind::MethodExpression { obj, args, .. } = ast.kind(call) else {
            return;
        };
        self.visit(*obj);
        if let Some(args) = args {
            self.visit(*args);
        }
        let name = ast.method_name(call).unwrap_or_default();
        let receivers = self.types_of(*obj);
        let mut lookup = self.find_method(call, name, &receivers);

        if lookup.unknown == 3 && lookup.unknown_bits == ANY_RECEIVER | ANY_LIST_RECEIVER | ANY_DICT_RECEIVER {
            return;
        }
        if lookup.method.is_none() && name == "get" {
            self.guess_get(call, &receivers, &mut lookup);
        }
        self.table.set(call, dedup(&lookup.types));

        let all_unknown = lookup.unknown == receivers.len()
            || (lookup.unknown_bits == 0b111 && receivers.len() == 3);
        if lookup.method.is_none() && all_unknown {
            lookup.method = self.guess_method(call, name);
        }
        let Some(method) = lookup.method else {
            if !receivers.is_empty() && receivers.iter().all(Type::is_disabler) {
                tracing::debug!(method = name, "method call on a disabler");
                return;
            }
            self.error(
                call,
                format!(
                    "No method `{name}` found for types `{}`",
                    join_types(&receivers)
                ),
            );
            return;
        };
        let callee = Callee::Method(method);
        self.table.callees.insert(call, callee);
        self.check_call_arguments(call, callee);

        if method.id() == "str.format" && ast.string_value(*obj).is_some() {
            self.check_format(call, *obj);
        }
    }

    fn find_method(&mut self, call: NodeId, name: &str, receivers: &[Type]) -> MethodLookup {
        let ns = self.ns;
        let first_arg = self.ast.positional_arg(call, 0);
        let key_types = first_arg.map(|arg| self.types_of(arg)).unwrap_or_default();
        let fallback = self
            .ast
            .positional_arg(call, 1)
            .map(|arg| self.types_of(arg))
            .unwrap_or_default();
        let mut lookup = MethodLookup::default();
        for receiver in receivers {
            match receiver {
                Type::Any => {
                    lookup.unknown += 1;
                    lookup.unknown_bits |= ANY_RECEIVER;
                    continue;
                }
                Type::List(inner) if inner.as_slice() == [Type::Any] => {
                    lookup.unknown += 1;
                    lookup.unknown_bits |= ANY_LIST_RECEIVER;
                }
                Type::Dict(inner) if inner.as_slice() == [Type::Any] => {
                    lookup.unknown += 1;
                    lookup.unknown_bits |= ANY_DICT_RECEIVER;
                }
                _ => {}
            }
            if name == "get" && !is_get_receiver(receiver, &key_types) {
                continue;
            }
            let Some(method) = ns.lookup_method(name, receiver) else {
                continue;
            };
            lookup.method = Some(method);
            match receiver {
                Type::List(inner) | Type::Dict(inner) if name == "get" && !inner.is_empty() => {
                    lookup.types.extend(inner.iter().cloned());
                    lookup.types.extend(fallback.iter().cloned());
                }
                _ => lookup.types.extend(method.signature.return_types.iter().cloned()),
            }
        }
        lookup
    }

    /// `get` on receivers whose key type did not match: pick by the key.
    fn guess_get(&mut self, call: NodeId, receivers: &[Type], lookup: &mut MethodLookup) {
        let ns = self.ns;
        let key_types = self
            .ast
            .positional_arg(call, 0)
            .map(|arg| self.types_of(arg))
            .unwrap_or_default();
        let receiver = match key_types.first() {
            Some(Type::Int) => Some(Type::List(Vec::new())),
            Some(Type::Str) => Some(Type::Dict(Vec::new())),
            _ => receivers
                .iter()
                .find(|ty| {
                    matches!(ty, Type::List(_) | Type::Dict(_)) || ty.is_object("cfg_data")
                })
                .cloned(),
        };
        let Some(method) = receiver.and_then(|receiver| ns.lookup_method("get", &receiver)) else {
            return;
        };
        lookup.method = Some(method);
        lookup.types.extend(method.signature.return_types.iter().cloned());
    }

    fn guess_method(&self, call: NodeId, name: &str) -> Option<&'static Method> {
        let ns = self.ns;
        if name == "get" {
            let key_types = self
                .ast
                .positional_arg(call, 0)
                .map(|arg| self.types_of(arg))
                .unwrap_or_default();
            let receiver = if key_types.contains(&Type::Int) {
                Some(Type::List(Vec::new()))
            } else if key_types.contains(&Type::Str) {
                Some(Type::Dict(Vec::new()))
            } else {
                None
            };
            if let Some(method) = receiver.and_then(|receiver| ns.lookup_method("get", &receiver)) {
                return Some(method);
            }
        }
        ns.lookup_method_by_name(name)
    }

    /// Matches `@N@` placeholders of a literal `'...'.format(...)` against
    /// the arguments.
    fn check_format(&mut self, call: NodeId, literal: NodeId) {
        let ast = self.ast;
        let Some(text) = ast.string_value(literal) else {
            return;
        };
        let used = extract_integers_between_at_symbols(text);
        let args = self.argument_items(call);
        for (idx, arg) in args.iter().enumerate() {
            if !used.contains(&(idx as u64)) {
                self.warning(*arg, "Unused parameter in format() call");
            }
        }
        let method_node = match ast.kind(call) {
            NodeKind::MethodExpression { id, .. } => *id,
            _ => call,
        };
        if used.is_empty() {
            self.warning(method_node, "Pointless str.format() call");
            return;
        }
        let out_of_bounds: Vec<String> = used
            .iter()
            .filter(|idx| **idx >= args.len() as u64)
            .map(|idx| format!("@{idx}@"))
            .collect();
        if !out_of_bounds.is_empty() {
            self.error(
                call,
                format!("Parameters out of bounds: {}", out_of_bounds.join(",")),
            );
        }
    }
}

/// `list.get` takes an index, `dict.get` and `cfg_data.get` take a key.
fn is_get_receiver(receiver: &Type, key_types: &[Type]) -> bool {
    match receiver {
        Type::List(_) => key_types.contains(&Type::Int),
        Type::Dict(_) => key_types.contains(&Type::Str),
        ty if ty.is_object("cfg_data") => key_types.contains(&Type::Str),
        _ => true,
    }
}

/// Whether a value of type `given` can be passed where `expected` is
/// declared. Objects are accepted where an ancestor is expected, lists are
/// flattened the way calls flatten them.
fn compatible(given: &Type, expected: &Type) -> bool {
    if given == expected {
        return true;
    }
    if given.parent().is_some_and(|parent| compatible(&parent, expected)) {
        return true;
    }
    match (given, expected) {
        (Type::List(given), Type::List(expected)) => any_compatible(expected, given),
        (Type::List(given), expected) => accepts_any_of(expected, given),
        (given, Type::List(expected)) => any_expected_accepts(expected, given),
        (Type::Dict(given), Type::Dict(expected)) => any_compatible(expected, given),
        (Type::Subproject(_), Type::Subproject(_)) => true,
        _ => false,
    }
}

fn accepts_any_of(expected: &Type, given: &[Type]) -> bool {
    if given.is_empty() || *expected == Type::Any || expected.is_disabler() {
        return true;
    }
    given
        .iter()
        .any(|ty| *ty == Type::Any || compatible(ty, expected))
}

fn any_expected_accepts(expected: &[Type], given: &Type) -> bool {
    *given == Type::Any
        || expected
            .iter()
            .any(|ty| *ty == Type::Any || ty.is_disabler() || compatible(given, ty))
}

fn any_compatible(expected: &[Type], given: &[Type]) -> bool {
    given.is_empty()
        || given
            .iter()
            .any(|ty| *ty == Type::Any || ty.is_disabler() || any_expected_accepts(expected, ty))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(name: &str) -> Type {
        Type::object(name).expect("known object type")
    }

    #[test]
    fn subtypes_are_accepted_for_parents() {
        assert!(compatible(&object("exe"), &object("build_tgt")), "exe is a build target");
        assert!(compatible(&object("both_libs"), &object("tgt")), "ancestors are transitive");
        assert!(!compatible(&object("tgt"), &object("exe")), "parents are not children");
    }

    #[test]
    fn lists_flatten_into_scalar_parameters() {
        let strings = Type::List(vec![Type::Str]);
        assert!(compatible(&strings, &Type::Str), "list(str) passes as str");
        assert!(
            compatible(&Type::Str, &Type::List(vec![Type::Str, object("file")])),
            "str passes as list(str|file)"
        );
        assert!(
            !compatible(&Type::List(vec![Type::Int]), &Type::Str),
            "list(int) does not pass as str"
        );
    }

    #[test]
    fn any_and_disabler_are_accepted_everywhere() {
        assert!(any_compatible(&[Type::Str], &[Type::Any]), "any is accepted");
        assert!(any_compatible(&[Type::Str], &[object("disabler")]), "disabler is accepted");
        assert!(any_compatible(&[Type::Str], &[]), "an empty set is accepted");
        assert!(!any_compatible(&[Type::Str], &[Type::Int]), "int is not str");
    }

    #[test]
    fn subprojects_are_mutually_compatible() {
        assert!(
            compatible(
                &Type::Subproject(vec!["foo".into()]),
                &Type::Subproject(Vec::new())
            ),
            "named subprojects pass as subproject"
        );
    }

    #[test]
    fn get_receivers_match_key_type() {
        assert!(is_get_receiver(&Type::List(vec![Type::Str]), &[Type::Int]), "list takes int");
        assert!(!is_get_receiver(&Type::List(vec![Type::Str]), &[Type::Str]), "list rejects str");
        assert!(is_get_receiver(&object("cfg_data"), &[Type::Str]), "cfg_data takes str");
    }
}
