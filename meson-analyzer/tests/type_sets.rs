//! Property-based tests for type-set canonicalisation.
//!
//! `dedup` must be idempotent and must not care about input order, no
//! matter how deeply lists and dicts nest.

use std::path::PathBuf;

use meson_analyzer::{
    analyze_source, dedup, join_types, parse_type_string, AnalysisOptions, NodeKind,
    OptionRegistry, SourceFile, SourceId, Type,
};
use proptest::prelude::*;

/// Types inferred for the variable assigned on the last line of `text`.
fn assigned_types(text: &str, name: &str) -> Vec<Type> {
    let source = SourceFile::new(SourceId(0), PathBuf::from("meson.build"), text.to_string());
    let analysis = analyze_source(
        &source,
        &OptionRegistry::with_builtin_options(),
        &AnalysisOptions::default(),
    );
    let ast = &analysis.ast;
    let lhs = ast
        .ids()
        .filter_map(|id| match ast.kind(id) {
            NodeKind::AssignmentStatement { lhs, .. } if ast.identifier(*lhs) == Some(name) => {
                Some(*lhs)
            }
            _ => None,
        })
        .last()
        .expect("assignment to the variable");
    analysis.types.types(lhs).to_vec()
}

fn leaf_type() -> impl Strategy<Value = Type> {
    prop_oneof![
        Just(Type::Any),
        Just(Type::Bool),
        Just(Type::Int),
        Just(Type::Str),
        prop::sample::select(vec!["exe", "lib", "dep", "file", "compiler"]).prop_map(Type::Object),
        prop::collection::vec(prop::sample::select(vec!["zlib", "glib", "fmt"]), 0..3)
            .prop_map(|names| Type::Subproject(names.into_iter().map(String::from).collect())),
    ]
}

fn arb_type() -> impl Strategy<Value = Type> {
    leaf_type().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Type::List),
            prop::collection::vec(inner, 0..4).prop_map(Type::Dict),
        ]
    })
}

fn arb_set() -> impl Strategy<Value = Vec<Type>> {
    prop::collection::vec(arb_type(), 0..8)
}

proptest! {
    #[test]
    fn dedup_is_idempotent(types in arb_set()) {
        let once = dedup(&types);
        let twice = dedup(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn dedup_ignores_order(types in arb_set(), seed in any::<usize>()) {
        let mut shuffled = types.clone();
        if !shuffled.is_empty() {
            let len = shuffled.len();
            shuffled.rotate_left(seed % len);
            shuffled.reverse();
        }
        prop_assert_eq!(dedup(&shuffled), dedup(&types));
    }

    #[test]
    fn dedup_keeps_one_of_each_scalar(types in arb_set()) {
        let deduped = dedup(&types);
        if deduped.len() > 1 {
            for scalar in [Type::Any, Type::Bool, Type::Int, Type::Str] {
                let count = deduped.iter().filter(|ty| **ty == scalar).count();
                prop_assert!(count <= 1, "{:?} appears {} times in {:?}", scalar, count, deduped);
            }
            let lists = deduped.iter().filter(|ty| matches!(ty, Type::List(_))).count();
            prop_assert!(lists <= 1, "lists were not merged: {:?}", deduped);
        }
    }
}

#[test]
fn merges_duplicate_scalars() {
    assert_eq!(
        dedup(&[Type::Int, Type::Int, Type::Str]),
        vec![Type::Int, Type::Str],
        "int and str should each appear once"
    );
}

#[test]
fn orders_containers_before_scalars() {
    let types = vec![
        Type::Object("exe"),
        Type::Str,
        Type::Dict(vec![Type::Int]),
        Type::List(vec![Type::Str]),
        Type::List(vec![Type::Int]),
        Type::Any,
    ];
    assert_eq!(
        dedup(&types),
        vec![
            Type::List(vec![Type::Int, Type::Str]),
            Type::Dict(vec![Type::Int]),
            Type::Any,
            Type::Str,
            Type::Object("exe"),
        ],
        "unexpected canonical order"
    );
}

#[test]
fn joins_subproject_names() {
    let types = vec![
        Type::Subproject(vec!["b".into()]),
        Type::Subproject(vec!["a".into(), "b".into()]),
    ];
    assert_eq!(
        dedup(&types),
        vec![Type::Subproject(vec!["a".into(), "b".into()])],
        "subproject names should be merged and sorted"
    );
}

#[test]
fn renders_type_sets() {
    let types = parse_type_string("str|list(file|str)|int");
    assert_eq!(join_types(&types), "int|list(file|str)|str");
}

#[test]
fn canonicalises_a_lone_container() {
    assert_eq!(
        dedup(&[Type::List(vec![Type::Str, Type::Str])]),
        vec![Type::List(vec![Type::Str])],
        "list elements should be merged even without siblings"
    );
    assert_eq!(
        dedup(&[Type::Dict(vec![Type::Int, Type::Str, Type::Int])]),
        vec![Type::Dict(vec![Type::Int, Type::Str])]
    );
    assert_eq!(dedup(&[Type::Object("exe")]), vec![Type::Object("exe")]);
}

#[test]
fn inferred_types_are_canonical() {
    let concatenated = assigned_types("project('demo')\nx = ['a'] + ['b']\n", "x");
    assert_eq!(concatenated, vec![Type::List(vec![Type::Str])]);
    assert_eq!(join_types(&concatenated), "list(str)");

    let chosen = assigned_types("project('demo')\nx = true ? 'a' : 'b'\n", "x");
    assert_eq!(chosen, vec![Type::Str], "both branches are strings");
}
