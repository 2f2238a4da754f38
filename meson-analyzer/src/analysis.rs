use serde::Deserialize;

use crate::analyzer::{SubdirCall, TypeAnalyzer, TypeTable};
use crate::ast::Ast;
use crate::diagnostics::Diagnostics;
use crate::interpreter::PartialInterpreter;
use crate::options::OptionRegistry;
use crate::parser::parse_source;
use crate::source::SourceFile;

/// Lint switches. Everything is enabled by default; a config file turns
/// individual checks off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub disable_name_linting: bool,
    /// Turns off every id check below at once.
    pub disable_all_id_linting: bool,
    pub disable_compiler_id_linting: bool,
    pub disable_compiler_argument_id_linting: bool,
    pub disable_linker_id_linting: bool,
    pub disable_cpu_family_linting: bool,
    pub disable_os_family_linting: bool,
    pub disable_unused_variable_check: bool,
    pub disable_arg_type_checking: bool,
}

/// Result of analysing one build file.
#[derive(Debug)]
pub struct Analysis {
    pub ast: Ast,
    pub types: TypeTable,
    pub diagnostics: Diagnostics,
    pub subdirs: Vec<SubdirCall>,
    /// `meson_version` of the `project()` call, without the comparison
    /// operator.
    pub declared_version: Option<String>,
}

impl Analysis {
    /// Strings variable `name` may hold at the statement on `line`, sorted
    /// and without duplicates. Empty when no statement covers the line.
    pub fn values_at_line(&self, registry: &OptionRegistry, line: usize, name: &str) -> Vec<String> {
        let Some(stmt) = self.ast.statement_at_line(line) else {
            return Vec::new();
        };
        let mut values = PartialInterpreter::new(&self.ast, registry).values_of(stmt, name);
        values.sort();
        values.dedup();
        values
    }
}

#[tracing::instrument(skip_all, fields(path = %source.path.display()))]
pub fn analyze_source(
    source: &SourceFile,
    registry: &OptionRegistry,
    options: &AnalysisOptions,
) -> Analysis {
    let ast = parse_source(source);
    let result = TypeAnalyzer::new(&ast, registry, options).analyze();
    tracing::debug!(
        nodes = ast.len(),
        diagnostics = result.diagnostics.len(),
        subdirs = result.subdirs.len(),
        "analysed build file"
    );
    Analysis {
        ast,
        types: result.types,
        diagnostics: result.diagnostics,
        subdirs: result.subdirs,
        declared_version: result.declared_version,
    }
}
