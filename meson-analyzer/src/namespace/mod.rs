//! Builtin functions, methods and modules of the build language.
//!
//! The tables in [`functions`] and [`methods`] are plain `const` data; the
//! first call to [`namespace`] resolves their type strings and computes one
//! method table per receiver type by walking the ancestor chain.

mod functions;
mod methods;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::types::{ancestors, parse_type_string, Type, OBJECT_TYPES};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Required,
    Optional,
    /// Repeats; at least one value must be given.
    Varargs,
    /// Repeats; may be omitted entirely.
    OptionalVarargs,
}

#[derive(Clone, Copy, Debug)]
pub struct Param {
    pub name: &'static str,
    pub types: &'static str,
    pub kind: ParamKind,
}

#[derive(Clone, Copy, Debug)]
pub struct Kwarg {
    pub name: &'static str,
    pub types: &'static str,
    pub required: bool,
}

const fn pos(name: &'static str, types: &'static str) -> Param {
    Param {
        name,
        types,
        kind: ParamKind::Required,
    }
}

const fn opt(name: &'static str, types: &'static str) -> Param {
    Param {
        name,
        types,
        kind: ParamKind::Optional,
    }
}

const fn varargs(name: &'static str, types: &'static str) -> Param {
    Param {
        name,
        types,
        kind: ParamKind::Varargs,
    }
}

const fn varargs_opt(name: &'static str, types: &'static str) -> Param {
    Param {
        name,
        types,
        kind: ParamKind::OptionalVarargs,
    }
}

const fn kw(name: &'static str, types: &'static str) -> Kwarg {
    Kwarg {
        name,
        types,
        required: false,
    }
}

const fn req(name: &'static str, types: &'static str) -> Kwarg {
    Kwarg {
        name,
        types,
        required: true,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub params: &'static [Param],
    pub kwargs: &'static [Kwarg],
    /// A keyword set shared by a family of functions, e.g. all build targets.
    pub shared_kwargs: &'static [Kwarg],
    pub returns: &'static str,
}

impl FunctionSpec {
    const fn with_shared_kwargs(self, shared_kwargs: &'static [Kwarg]) -> Self {
        FunctionSpec {
            shared_kwargs,
            ..self
        }
    }
}

const fn function(
    name: &'static str,
    params: &'static [Param],
    kwargs: &'static [Kwarg],
    returns: &'static str,
) -> FunctionSpec {
    FunctionSpec {
        name,
        params,
        kwargs,
        shared_kwargs: &[],
        returns,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MethodSpec {
    pub name: &'static str,
    pub params: &'static [Param],
    pub kwargs: &'static [Kwarg],
    pub returns: &'static str,
}

const fn method(
    name: &'static str,
    params: &'static [Param],
    kwargs: &'static [Kwarg],
    returns: &'static str,
) -> MethodSpec {
    MethodSpec {
        name,
        params,
        kwargs,
        returns,
    }
}

pub struct MethodTable {
    pub receiver: &'static str,
    pub methods: &'static [MethodSpec],
}

/// `import()` names and the module object they produce.
pub static MODULES: &[(&str, &str)] = &[
    ("cmake", "cmake_module"),
    ("cuda", "cuda_module"),
    ("dlang", "dlang_module"),
    ("external_project", "external_project_module"),
    ("fs", "fs_module"),
    ("gnome", "gnome_module"),
    ("hotdoc", "hotdoc_module"),
    ("i18n", "i18n_module"),
    ("icestorm", "icestorm_module"),
    ("java", "java_module"),
    ("keyval", "keyval_module"),
    ("pkgconfig", "pkgconfig_module"),
    ("python", "python_module"),
    ("python3", "python3_module"),
    ("qt4", "qt4_module"),
    ("qt5", "qt5_module"),
    ("qt6", "qt6_module"),
    ("rust", "rust_module"),
    ("simd", "simd_module"),
    ("sourceset", "sourceset_module"),
    ("unstable-cuda", "cuda_module"),
    ("unstable-external_project", "external_project_module"),
    ("unstable_external_project", "external_project_module"),
    ("unstable-icestorm", "icestorm_module"),
    ("unstable-keyval", "keyval_module"),
    ("unstable-rust", "rust_module"),
    ("unstable-simd", "simd_module"),
    ("unstable-wayland", "wayland_module"),
    ("wayland", "wayland_module"),
    ("windows", "windows_module"),
];

pub fn find_module(name: &str) -> Option<&'static str> {
    MODULES
        .iter()
        .find(|(module, _)| *module == name)
        .map(|(_, object)| *object)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Arity {
    pub min: usize,
    pub max: Option<usize>,
}

impl Arity {
    pub fn allows(self, count: usize) -> bool {
        if count < self.min {
            return false;
        }
        match self.max {
            Some(limit) => count <= limit,
            None => true,
        }
    }

    fn of(params: &[Param]) -> Self {
        let mut min = 0;
        for param in params {
            match param.kind {
                ParamKind::Required | ParamKind::Varargs => min += 1,
                ParamKind::Optional | ParamKind::OptionalVarargs => break,
            }
        }
        let repeats = params
            .iter()
            .any(|param| matches!(param.kind, ParamKind::Varargs | ParamKind::OptionalVarargs));
        Arity {
            min,
            max: if repeats { None } else { Some(params.len()) },
        }
    }
}

#[derive(Clone, Debug)]
pub struct Argument {
    pub name: &'static str,
    pub types: Vec<Type>,
    pub kind: ParamKind,
}

#[derive(Clone, Debug)]
pub struct KeywordArgument {
    pub name: &'static str,
    pub types: Vec<Type>,
    pub required: bool,
}

#[derive(Clone, Debug)]
pub struct Signature {
    pub args: Vec<Argument>,
    pub kwargs: BTreeMap<&'static str, KeywordArgument>,
    pub arity: Arity,
    pub return_types: Vec<Type>,
}

impl Signature {
    fn resolve(params: &[Param], kwarg_groups: &[&[Kwarg]], returns: &str) -> Self {
        let args = params
            .iter()
            .map(|param| Argument {
                name: param.name,
                types: parse_type_string(param.types),
                kind: param.kind,
            })
            .collect();
        let kwargs = kwarg_groups
            .iter()
            .flat_map(|group| group.iter())
            .map(|kwarg| {
                (
                    kwarg.name,
                    KeywordArgument {
                        name: kwarg.name,
                        types: parse_type_string(kwarg.types),
                        required: kwarg.required,
                    },
                )
            })
            .collect();
        Signature {
            args,
            kwargs,
            arity: Arity::of(params),
            return_types: parse_type_string(returns),
        }
    }

    /// The parameter receiving the `idx`-th positional argument. Trailing
    /// varargs absorb every index past the end.
    pub fn positional(&self, idx: usize) -> Option<&Argument> {
        if let Some(arg) = self.args.get(idx) {
            return Some(arg);
        }
        self.args
            .last()
            .filter(|arg| matches!(arg.kind, ParamKind::Varargs | ParamKind::OptionalVarargs))
    }

    pub fn required_kwargs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kwargs
            .values()
            .filter(|kwarg| kwarg.required)
            .map(|kwarg| kwarg.name)
    }
}

#[derive(Clone, Debug)]
pub struct Function {
    pub name: &'static str,
    pub signature: Signature,
}

#[derive(Clone, Debug)]
pub struct Method {
    pub receiver: &'static str,
    pub name: &'static str,
    pub signature: Signature,
}

impl Method {
    /// `receiver.name`, e.g. `compiler.get_id`.
    pub fn id(&self) -> String {
        format!("{}.{}", self.receiver, self.name)
    }
}

/// A resolved callee, as recorded per call node by the analyzer.
#[derive(Clone, Copy, Debug)]
pub enum Callee {
    Function(&'static Function),
    Method(&'static Method),
}

impl Callee {
    pub fn signature(&self) -> &'static Signature {
        match self {
            Callee::Function(function) => &function.signature,
            Callee::Method(method) => &method.signature,
        }
    }

    pub fn id(&self) -> String {
        match self {
            Callee::Function(function) => function.name.to_string(),
            Callee::Method(method) => method.id(),
        }
    }
}

const PRIMITIVE_RECEIVERS: &[&str] = &["bool", "int", "str", "list", "dict", "subproject"];

pub struct Namespace {
    functions: BTreeMap<&'static str, Function>,
    methods: Vec<Method>,
    vtables: BTreeMap<&'static str, BTreeMap<&'static str, usize>>,
}

impl Namespace {
    fn build() -> Self {
        let functions = functions::FUNCTIONS
            .iter()
            .map(|spec| {
                let signature =
                    Signature::resolve(spec.params, &[spec.kwargs, spec.shared_kwargs], spec.returns);
                (
                    spec.name,
                    Function {
                        name: spec.name,
                        signature,
                    },
                )
            })
            .collect();

        let mut methods = Vec::new();
        for table in methods::METHOD_TABLES {
            for spec in table.methods {
                methods.push(Method {
                    receiver: table.receiver,
                    name: spec.name,
                    signature: Signature::resolve(spec.params, &[spec.kwargs], spec.returns),
                });
            }
        }

        let receivers = PRIMITIVE_RECEIVERS
            .iter()
            .copied()
            .chain(OBJECT_TYPES.iter().map(|object| object.name));
        let mut vtables = BTreeMap::new();
        for receiver in receivers {
            let mut vtable = BTreeMap::new();
            // Root first so that a child's own methods shadow inherited ones.
            for ancestor in ancestors(receiver).into_iter().rev() {
                for (idx, method) in methods.iter().enumerate() {
                    if method.receiver == ancestor {
                        vtable.insert(method.name, idx);
                    }
                }
            }
            vtables.insert(receiver, vtable);
        }

        tracing::debug!(
            functions = functions::FUNCTIONS.len(),
            methods = methods.len(),
            "builtin namespace ready"
        );
        Namespace {
            functions,
            methods,
            vtables,
        }
    }

    pub fn lookup_function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.values()
    }

    /// Finds `name` on `receiver` or one of its ancestors.
    pub fn lookup_method(&self, name: &str, receiver: &Type) -> Option<&Method> {
        let receiver = receiver.receiver_name()?;
        let idx = self.vtables.get(receiver)?.get(name)?;
        self.methods.get(*idx)
    }

    /// First method called `name` on any receiver. Used when the receiver's
    /// type is unknown.
    pub fn lookup_method_by_name(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|method| method.name == name)
    }

    /// Every method callable on `receiver`, inherited ones included.
    pub fn methods_of(&self, receiver: &Type) -> Vec<&Method> {
        let Some(vtable) = receiver
            .receiver_name()
            .and_then(|name| self.vtables.get(name))
        else {
            return Vec::new();
        };
        vtable
            .values()
            .filter_map(|idx| self.methods.get(*idx))
            .collect()
    }
}

/// The process-wide builtin namespace, built on first use.
pub fn namespace() -> &'static Namespace {
    static NAMESPACE: OnceLock<Namespace> = OnceLock::new();
    NAMESPACE.get_or_init(Namespace::build)
}
