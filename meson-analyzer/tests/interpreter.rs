//! Partial evaluation of string values, queried the way an editor would:
//! "what can `name` hold on this line?"

use std::path::PathBuf;

use meson_analyzer::{analyze_source, AnalysisOptions, OptionRegistry, SourceFile, SourceId};

fn values(text: &str, line: usize, name: &str) -> Vec<String> {
    values_with(&OptionRegistry::with_builtin_options(), text, line, name)
}

fn values_with(registry: &OptionRegistry, text: &str, line: usize, name: &str) -> Vec<String> {
    let source = SourceFile::new(SourceId(0), PathBuf::from("meson.build"), text.to_string());
    let analysis = analyze_source(&source, registry, &AnalysisOptions::default());
    analysis.values_at_line(registry, line, name)
}

fn registry_from(options: &str) -> OptionRegistry {
    let source = SourceFile::new(
        SourceId(1),
        PathBuf::from("meson.options"),
        options.to_string(),
    );
    OptionRegistry::from_source(&source)
}

/// Directories guessed for the single `subdir()` call in `text`.
fn subdir_directories(text: &str) -> Vec<String> {
    let source = SourceFile::new(SourceId(0), PathBuf::from("meson.build"), text.to_string());
    let analysis = analyze_source(
        &source,
        &OptionRegistry::with_builtin_options(),
        &AnalysisOptions::default(),
    );
    assert_eq!(analysis.subdirs.len(), 1, "one subdir() call in {text:?}");
    analysis.subdirs[0].directories.clone()
}

#[test]
fn merges_values_from_branches() {
    let text = "x = 'a'\nif get_option('debug')\n  x = 'b'\nendif\nmessage(x)\n";
    assert_eq!(values(text, 5, "x"), vec!["a", "b"], "both branches contribute");
}

#[test]
fn merges_values_from_if_and_else() {
    let text = "if get_option('debug')\n  x = 'a'\nelse\n  x = 'b'\nendif\nmessage(x)\n";
    assert_eq!(values(text, 6, "x"), vec!["a", "b"], "each branch assigns one value");
}

#[test]
fn plain_assignment_hides_earlier_values() {
    let text = "x = 'a'\nx = 'b'\nmessage(x)\n";
    assert_eq!(values(text, 3, "x"), vec!["b"]);
}

#[test]
fn compound_assignment_keeps_earlier_values() {
    let text = "x = ['a']\nx += ['b']\nforeach y : x\n  message(y)\nendforeach\n";
    assert_eq!(values(text, 4, "y"), vec!["a", "b"], "+= appends to the list");
}

#[test]
fn loop_variables_take_every_element() {
    let text = "foreach name : ['a', 'b', 'c']\n  message(name)\nendforeach\n";
    assert_eq!(values(text, 2, "name"), vec!["a", "b", "c"]);
}

#[test]
fn dict_loops_bind_keys_and_values() {
    let text = "foreach key, value : {'k1': 'v1', 'k2': 'v2'}\n  message(key, value)\nendforeach\n";
    assert_eq!(values(text, 2, "key"), vec!["k1", "k2"]);
    assert_eq!(values(text, 2, "value"), vec!["v1", "v2"]);
}

#[test]
fn combo_options_yield_their_choices() {
    let registry = registry_from("option('backend', type: 'combo', choices: ['x', 'y'], value: 'x')\n");
    let text = "backend = get_option('backend')\n";
    assert_eq!(values_with(&registry, text, 1, "backend"), vec!["x", "y"]);
    assert!(
        values(text, 1, "backend").is_empty(),
        "builtin options know nothing about `backend`"
    );
}

#[test]
fn array_options_yield_their_choices() {
    let registry = registry_from(
        "option('languages', type: 'array', choices: ['c', 'cpp', 'rust'], value: ['c'])\n",
    );
    let text = "languages = get_option('languages')\n";
    assert_eq!(values_with(&registry, text, 1, "languages"), vec!["c", "cpp", "rust"]);
}

#[test]
fn concatenates_strings() {
    let text = "x = 'foo'\ny = x + '/' + 'bar'\n";
    assert_eq!(values(text, 2, "y"), vec!["foo/bar"]);
}

#[test]
fn joins_paths() {
    let text = "dir = 'foo'\npath = dir / 'bar'\njoined = join_paths(dir, 'baz')\n";
    assert_eq!(values(text, 2, "path"), vec!["foo/bar"]);
    assert_eq!(values(text, 3, "joined"), vec!["foo/baz"]);
}

#[test]
fn evaluates_string_methods() {
    let text = "name = 'My-Lib'.underscorify().to_lower()\nlabel = '@0@-suffix'.format('lib')\nword = 'a b c'.split()[1]\n";
    assert_eq!(values(text, 1, "name"), vec!["my_lib"]);
    assert_eq!(values(text, 2, "label"), vec!["lib-suffix"]);
    assert_eq!(values(text, 3, "word"), vec!["b"], "split() without a separator uses whitespace");
}

#[test]
fn format_fills_every_placeholder() {
    let text = "path = '@0@/@1@'.format('a', 'b')\n";
    assert_eq!(values(text, 1, "path"), vec!["a/b"]);

    let text = "x = 'a'\nif get_option('debug')\n  x = 'b'\nendif\nlabel = '@0@-@1@'.format(x, 'v')\n";
    assert_eq!(
        values(text, 5, "label"),
        vec!["a-v", "b-v"],
        "every candidate of every argument is combined"
    );

    let text = "label = '@0@@2@'.format('a')\n";
    assert_eq!(values(text, 1, "label"), vec!["a@2@"], "missing arguments stay as placeholders");
}

#[test]
fn splits_on_a_separator_before_indexing() {
    let text = "s = 'a-b'\nx = s.split('-')[1]\n";
    assert_eq!(values(text, 2, "x"), vec!["b"]);
}

#[test]
fn subdir_arguments_are_evaluated() {
    assert_eq!(
        subdir_directories("project('demo')\nsubdir('@0@@1@'.format('a', 'b'))\n"),
        vec!["ab"]
    );
    assert_eq!(
        subdir_directories("project('demo')\nname = 'src-extra'\nsubdir(name.split('-')[0])\n"),
        vec!["src"]
    );
}

#[test]
fn subscripts_with_a_variable_index() {
    let text = "names = ['a', 'b']\nidx = 1\nsecond = names[idx]\n";
    assert_eq!(values(text, 3, "second"), vec!["b"]);
}

#[test]
fn subscripts_index_into_literals() {
    let text = "names = ['a', 'b']\nd = {'key': 'value'}\nsecond = names[1]\nv = d['key']\n";
    assert_eq!(values(text, 3, "second"), vec!["b"]);
    assert_eq!(values(text, 4, "v"), vec!["value"]);
}

#[test]
fn unknown_names_and_lines_yield_nothing() {
    let text = "x = 'a'\n";
    assert!(values(text, 1, "y").is_empty(), "y is never assigned");
    assert!(values(text, 10, "x").is_empty(), "no statement on line 10");
}
