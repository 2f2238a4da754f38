mod analysis;
mod analyzer;
mod ast;
mod diagnostics;
mod interpreter;
mod lexer;
mod namespace;
mod options;
mod parser;
mod project;
mod source;
mod types;

pub use crate::analysis::{analyze_source, Analysis, AnalysisOptions};
pub use crate::analyzer::{SubdirCall, TypeTable};
pub use crate::ast::{
    AssignmentOperator, Ast, BinaryOperator, Node, NodeId, NodeKind, ParseError, SourceSpan,
    UnaryOperator,
};
pub use crate::diagnostics::{Diagnostic, DiagnosticLevel, DiagnosticTag, Diagnostics};
pub use crate::interpreter::PartialInterpreter;
pub use crate::lexer::{Keyword, LexError, LexResult, Lexer, Token, TokenKind};
pub use crate::namespace::{
    find_module, namespace, Argument, Arity, Callee, Function, KeywordArgument, Method, Namespace,
    ParamKind, Signature,
};
pub use crate::options::{
    check_option_file, extract_options, MesonOption, OptionKind, OptionRegistry,
};
pub use crate::parser::{parse_source, Parser};
pub use crate::project::{load_config, load_source, ProjectError, ProjectFiles};
pub use crate::source::{SourceFile, SourceId};
pub use crate::types::{dedup, is_unknown, join_types, parse_type_string, Type};
