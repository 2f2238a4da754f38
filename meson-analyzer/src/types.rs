use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One possible value type of an expression. Expressions carry a set of
/// these, see [`dedup`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Type {
    Any,
    Bool,
    Int,
    Str,
    List(Vec<Type>),
    Dict(Vec<Type>),
    Subproject(Vec<String>),
    /// A builtin object type from [`OBJECT_TYPES`].
    Object(&'static str),
}

/// A builtin object type and its single parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectType {
    pub name: &'static str,
    pub parent: Option<&'static str>,
}

const fn root(name: &'static str) -> ObjectType {
    ObjectType { name, parent: None }
}

const fn child(name: &'static str, parent: &'static str) -> ObjectType {
    ObjectType {
        name,
        parent: Some(parent),
    }
}

pub static OBJECT_TYPES: &[ObjectType] = &[
    root("meson"),
    root("build_machine"),
    child("host_machine", "build_machine"),
    child("target_machine", "build_machine"),
    root("cfg_data"),
    root("compiler"),
    root("dep"),
    root("disabler"),
    root("env"),
    root("external_program"),
    child("python_installation", "external_program"),
    root("extracted_obj"),
    root("feature"),
    root("file"),
    root("generated_list"),
    root("generator"),
    root("inc"),
    root("range"),
    root("runresult"),
    root("structured_src"),
    root("tgt"),
    child("build_tgt", "tgt"),
    child("exe", "build_tgt"),
    child("lib", "build_tgt"),
    child("both_libs", "lib"),
    child("jar", "build_tgt"),
    child("custom_tgt", "tgt"),
    child("hotdoc_target", "custom_tgt"),
    child("run_tgt", "tgt"),
    child("alias_tgt", "tgt"),
    root("custom_idx"),
    root("sourceset"),
    root("sourcefiles"),
    root("cmake_subproject"),
    root("cmake_subprojectoptions"),
    root("cmake_target"),
    root("external_project"),
    root("module"),
    child("cmake_module", "module"),
    child("cuda_module", "module"),
    child("dlang_module", "module"),
    child("external_project_module", "module"),
    child("fs_module", "module"),
    child("gnome_module", "module"),
    child("hotdoc_module", "module"),
    child("i18n_module", "module"),
    child("icestorm_module", "module"),
    child("java_module", "module"),
    child("keyval_module", "module"),
    child("pkgconfig_module", "module"),
    child("python_module", "module"),
    child("python3_module", "module"),
    child("qt4_module", "module"),
    child("qt5_module", "module"),
    child("qt6_module", "module"),
    child("rust_module", "module"),
    child("simd_module", "module"),
    child("sourceset_module", "module"),
    child("wayland_module", "module"),
    child("windows_module", "module"),
];

pub fn find_object_type(name: &str) -> Option<&'static ObjectType> {
    OBJECT_TYPES.iter().find(|object| object.name == name)
}

/// `name` followed by its parent, grandparent, ... up to the root.
pub fn ancestors(name: &'static str) -> Vec<&'static str> {
    let mut chain = vec![name];
    let mut current = find_object_type(name).and_then(|object| object.parent);
    while let Some(parent) = current {
        chain.push(parent);
        current = find_object_type(parent).and_then(|object| object.parent);
    }
    chain
}

impl Type {
    /// Resolves a builtin object name to its interned `Object` variant.
    pub fn object(name: &str) -> Option<Type> {
        find_object_type(name).map(|object| Type::Object(object.name))
    }

    /// The name methods are registered under.
    pub fn receiver_name(&self) -> Option<&'static str> {
        match self {
            Type::Any => None,
            Type::Bool => Some("bool"),
            Type::Int => Some("int"),
            Type::Str => Some("str"),
            Type::List(_) => Some("list"),
            Type::Dict(_) => Some("dict"),
            Type::Subproject(_) => Some("subproject"),
            Type::Object(name) => Some(*name),
        }
    }

    pub fn is_object(&self, name: &str) -> bool {
        matches!(self, Type::Object(object) if *object == name)
    }

    pub fn is_disabler(&self) -> bool {
        self.is_object("disabler")
    }

    pub fn parent(&self) -> Option<Type> {
        match self {
            Type::Object(name) => find_object_type(name)
                .and_then(|object| object.parent)
                .map(Type::Object),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Any => f.write_str("any"),
            Type::Bool => f.write_str("bool"),
            Type::Int => f.write_str("int"),
            Type::Str => f.write_str("str"),
            Type::List(types) => write!(f, "list({})", join_types(types)),
            Type::Dict(types) => write!(f, "dict({})", join_types(types)),
            Type::Subproject(names) => write!(f, "subproject({})", names.join("|")),
            Type::Object(name) => f.write_str(name),
        }
    }
}

/// Canonical `a|b|c` rendering of a type set, sorted by string form.
pub fn join_types(types: &[Type]) -> String {
    let mut rendered: Vec<String> = types.iter().map(ToString::to_string).collect();
    rendered.sort();
    rendered.join("|")
}

/// Collapses a type union into canonical form.
///
/// Element types of every `list(...)` are merged into a single list, likewise
/// for `dict(...)` and the names of `subproject(...)`. The output order is
/// list, dict, subproject, `any`, `bool`, `int`, `str`, then object types by
/// name. A lone scalar or object type is returned as is.
pub fn dedup(types: &[Type]) -> Vec<Type> {
    match types {
        [] => return Vec::new(),
        [Type::List(_) | Type::Dict(_) | Type::Subproject(_)] => {}
        [_] => return types.to_vec(),
        _ => {}
    }
    let mut list_elements = Vec::new();
    let mut dict_elements = Vec::new();
    let mut subproject_names = BTreeSet::new();
    let mut objects = BTreeMap::new();
    let (mut got_list, mut got_dict, mut got_subproject) = (false, false, false);
    let (mut has_any, mut has_bool, mut has_int, mut has_str) = (false, false, false, false);

    for ty in types {
        match ty {
            Type::Any => has_any = true,
            Type::Bool => has_bool = true,
            Type::Int => has_int = true,
            Type::Str => has_str = true,
            Type::List(elements) => {
                got_list = true;
                list_elements.extend(elements.iter().cloned());
            }
            Type::Dict(elements) => {
                got_dict = true;
                dict_elements.extend(elements.iter().cloned());
            }
            Type::Subproject(names) => {
                got_subproject = true;
                subproject_names.extend(names.iter().cloned());
            }
            Type::Object(name) => {
                objects.insert(*name, ty.clone());
            }
        }
    }

    let mut out = Vec::new();
    if got_list {
        out.push(Type::List(dedup(&list_elements)));
    }
    if got_dict {
        out.push(Type::Dict(dedup(&dict_elements)));
    }
    if got_subproject {
        out.push(Type::Subproject(subproject_names.into_iter().collect()));
    }
    if has_any {
        out.push(Type::Any);
    }
    if has_bool {
        out.push(Type::Bool);
    }
    if has_int {
        out.push(Type::Int);
    }
    if has_str {
        out.push(Type::Str);
    }
    out.extend(objects.into_values());
    out
}

/// `any`, `list(any)` and `dict(any)` together: the analyzer knows nothing.
pub fn is_unknown(types: &[Type]) -> bool {
    types.len() == 3
        && types.iter().any(|ty| *ty == Type::Any)
        && types
            .iter()
            .any(|ty| matches!(ty, Type::List(inner) if inner.as_slice() == [Type::Any]))
        && types
            .iter()
            .any(|ty| matches!(ty, Type::Dict(inner) if inner.as_slice() == [Type::Any]))
}

/// Parses the compact signature notation used by the builtin tables, e.g.
/// `str|file` or `list(list(custom_tgt)|run_tgt)`. `void` yields no types.
/// Unknown names degrade to `any`.
pub fn parse_type_string(text: &str) -> Vec<Type> {
    let text = text.trim();
    if text.is_empty() || text == "void" {
        return Vec::new();
    }
    split_top_level(text)
        .into_iter()
        .map(parse_single_type)
        .collect()
}

fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '|' if depth == 0 => {
                parts.push(text[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(text[start..].trim());
    parts
}

fn parse_single_type(text: &str) -> Type {
    if let Some(inner) = text
        .strip_prefix("list(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return Type::List(parse_type_string(inner));
    }
    if let Some(inner) = text
        .strip_prefix("dict(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return Type::Dict(parse_type_string(inner));
    }
    match text {
        "any" => Type::Any,
        "bool" => Type::Bool,
        "int" => Type::Int,
        "str" => Type::Str,
        "list" => Type::List(vec![Type::Any]),
        "dict" => Type::Dict(vec![Type::Any]),
        "subproject" => Type::Subproject(Vec::new()),
        other => Type::object(other).unwrap_or_else(|| {
            tracing::warn!(name = other, "unknown builtin type name, using any");
            Type::Any
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_types_sorted() {
        let ty = Type::List(vec![Type::Str, Type::Object("file")]);
        assert_eq!(ty.to_string(), "list(file|str)");
        assert_eq!(
            Type::Subproject(vec!["a".into(), "b".into()]).to_string(),
            "subproject(a|b)"
        );
    }

    #[test]
    fn parses_signature_notation() {
        assert_eq!(
            parse_type_string("list(list(custom_tgt)|run_tgt)"),
            vec![Type::List(vec![
                Type::List(vec![Type::Object("custom_tgt")]),
                Type::Object("run_tgt"),
            ])]
        );
        assert!(parse_type_string("void").is_empty());
        assert_eq!(parse_type_string("no_such_type"), vec![Type::Any]);
    }

    #[test]
    fn walks_the_ancestor_chain() {
        assert_eq!(ancestors("both_libs"), vec!["both_libs", "lib", "build_tgt", "tgt"]);
        assert_eq!(Type::Object("exe").parent(), Some(Type::Object("build_tgt")));
    }

    #[test]
    fn recognises_the_unknown_triple() {
        let unknown = vec![
            Type::List(vec![Type::Any]),
            Type::Dict(vec![Type::Any]),
            Type::Any,
        ];
        assert!(is_unknown(&unknown));
        assert!(!is_unknown(&[Type::Any]));
    }
}
