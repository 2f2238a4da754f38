use meson_analyzer::{find_module, namespace, ParamKind, Type};

#[test]
fn resolves_functions_with_signatures() {
    let ns = namespace();
    let executable = ns.lookup_function("executable").expect("executable is builtin");
    assert_eq!(
        executable.signature.return_types,
        vec![Type::Object("exe")],
        "executable() returns an exe"
    );
    assert_eq!(executable.signature.arity.min, 1, "target name is required");
    assert_eq!(executable.signature.arity.max, None, "sources are varargs");
    assert!(
        executable.signature.kwargs.contains_key("link_with"),
        "shared build target kwargs are merged in"
    );
    assert!(ns.lookup_function("no_such_function").is_none());
}

#[test]
fn varargs_absorb_trailing_positions() {
    let message = namespace().lookup_function("message").expect("message is builtin");
    let last = message.signature.positional(7).expect("varargs parameter");
    assert_eq!(last.kind, ParamKind::OptionalVarargs);
}

#[test]
fn methods_are_inherited_along_the_ancestor_chain() {
    let ns = namespace();
    let exe = Type::Object("exe");
    let full_path = ns.lookup_method("full_path", &exe).expect("inherited method");
    assert_eq!(full_path.id(), "build_tgt.full_path", "defined on build_tgt");

    let host = Type::Object("host_machine");
    let system = ns.lookup_method("system", &host).expect("host_machine.system");
    assert_eq!(system.receiver, "build_machine");
    assert!(ns.lookup_method("full_path", &Type::Str).is_none());
}

#[test]
fn primitive_receivers_have_methods() {
    let ns = namespace();
    let split = ns
        .lookup_method("split", &Type::Str)
        .expect("str.split");
    assert_eq!(split.signature.return_types, vec![Type::List(vec![Type::Str])]);
    assert!(ns.lookup_method("length", &Type::List(vec![Type::Int])).is_some());
    assert!(ns.lookup_method("keys", &Type::Dict(Vec::new())).is_some());
    assert!(!ns.methods_of(&Type::Object("compiler")).is_empty());
}

#[test]
fn maps_module_names_to_objects() {
    assert_eq!(find_module("fs"), Some("fs_module"));
    assert_eq!(find_module("gnome"), Some("gnome_module"));
    assert_eq!(find_module("nonexistent"), None);
}
