//! Error recovery: a broken statement becomes an error node and the rest
//! of the file still parses and types normally.

use std::path::PathBuf;

use meson_analyzer::{
    analyze_source, parse_source, AnalysisOptions, Ast, NodeId, NodeKind, OptionRegistry,
    SourceFile, SourceId, Type,
};

fn source(text: &str) -> SourceFile {
    SourceFile::new(SourceId(0), PathBuf::from("meson.build"), text.to_string())
}

fn error_nodes(ast: &Ast) -> Vec<String> {
    ast.ids()
        .filter_map(|id| match ast.kind(id) {
            NodeKind::ErrorNode { message } => Some(message.clone()),
            _ => None,
        })
        .collect()
}

fn top_level(ast: &Ast) -> Vec<NodeId> {
    match ast.kind(ast.root()) {
        NodeKind::BuildDefinition { stmts } => stmts.clone(),
        other => panic!("root is not a build definition: {other:?}"),
    }
}

#[test]
fn junk_after_expression_becomes_one_error_node() {
    let ast = parse_source(&source("x = 1\ny = 2 3\nz = 'a'\n"));
    assert_eq!(
        error_nodes(&ast),
        vec!["Unexpected junk".to_string()],
        "expected exactly one error node"
    );
    let assignments = top_level(&ast)
        .into_iter()
        .filter(|id| matches!(ast.kind(*id), NodeKind::AssignmentStatement { .. }))
        .count();
    assert_eq!(assignments, 3, "all three assignments should survive");
}

#[test]
fn missing_value_becomes_one_error_node() {
    let ast = parse_source(&source("x = 1\ny = = 2\nz = 3\n"));
    assert_eq!(
        error_nodes(&ast),
        vec!["Expected value".to_string()],
        "the rest of the line should not add a second error node"
    );
    let assignments = top_level(&ast)
        .into_iter()
        .filter(|id| matches!(ast.kind(*id), NodeKind::AssignmentStatement { .. }))
        .count();
    assert_eq!(assignments, 3, "x, y and z should all be assignments");
}

#[test]
fn siblings_of_a_broken_statement_are_typed() {
    let analysis = analyze_source(
        &source("project('demo')\nx = 1\ny = 2 3\nz = 'a'\nmessage(x, z)\n"),
        &OptionRegistry::with_builtin_options(),
        &AnalysisOptions::default(),
    );
    let ast = &analysis.ast;
    let z = top_level(ast)
        .into_iter()
        .find_map(|id| match ast.kind(id) {
            NodeKind::AssignmentStatement { lhs, .. } if ast.identifier(*lhs) == Some("z") => {
                Some(*lhs)
            }
            _ => None,
        })
        .expect("assignment to z");
    assert_eq!(analysis.types.types(z), &[Type::Str], "z should be a string");
    assert!(
        analysis.diagnostics.messages().any(|message| message == "Unexpected junk"),
        "the error node should be reported"
    );
}

#[test]
fn invalid_token_in_expression_is_reported() {
    let ast = parse_source(&source("x = $\n"));
    assert_eq!(
        error_nodes(&ast),
        vec!["Invalid or unexpected token.".to_string()],
        "expected an error node for the invalid token"
    );
    assert!(
        ast.errors
            .iter()
            .any(|error| error.message == "Unexpected character: '$'"),
        "lexer errors should be attached to the tree: {:?}",
        ast.errors
    );
}

#[test]
fn unterminated_blocks_report_expected_token() {
    let ast = parse_source(&source("if true\n  x = 1\n"));
    assert!(
        ast.errors
            .iter()
            .any(|error| error.message.starts_with("Expected endif")),
        "expected a missing endif error, got {:?}",
        ast.errors
    );
}

#[test]
fn parses_nested_control_flow() {
    let ast = parse_source(&source(
        "foreach k, v : {'a': 1}\n  if v > 0\n    continue\n  elif v < 0\n    break\n  else\n    x = k\n  endif\nendforeach\n",
    ));
    assert!(ast.errors.is_empty(), "unexpected errors: {:?}", ast.errors);
    let stmts = top_level(&ast);
    assert_eq!(stmts.len(), 1, "one foreach statement");
    let NodeKind::IterationStatement { ids, stmts, .. } = ast.kind(stmts[0]) else {
        panic!("expected a foreach statement");
    };
    assert_eq!(ids.len(), 2, "key and value identifiers");
    let NodeKind::SelectionStatement { conditions, blocks } = ast.kind(stmts[0]) else {
        panic!("expected an if statement inside the loop");
    };
    assert_eq!(conditions.len(), 2, "if and elif conditions");
    assert_eq!(blocks.len(), 3, "if, elif and else blocks");
}
