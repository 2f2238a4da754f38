//! Build options: the values `get_option()` can return.
//!
//! A registry holds the core and base options plus everything declared in
//! the project's option file. [`check_option_file`] lints that file.

mod builtin;
mod diagnostics;
mod extractor;

use crate::parser::parse_source;
use crate::source::SourceFile;

pub use diagnostics::check_option_file;
pub use extractor::extract_options;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
    Boolean,
    Feature,
    Combo { values: Vec<String> },
    Array { choices: Vec<String> },
}

impl OptionKind {
    /// The `type:` keyword that declares this kind in an option file.
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionKind::String => "string",
            OptionKind::Integer => "integer",
            OptionKind::Boolean => "boolean",
            OptionKind::Feature => "feature",
            OptionKind::Combo { .. } => "combo",
            OptionKind::Array { .. } => "array",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MesonOption {
    pub name: String,
    pub description: Option<String>,
    pub deprecated: bool,
    pub kind: OptionKind,
}

impl MesonOption {
    pub fn new(name: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecated: false,
            kind,
        }
    }
}

/// Options known to one project. An empty registry answers "unknown" for
/// every query.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    options: Vec<MesonOption>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the core and base options, e.g. `buildtype`.
    pub fn with_builtin_options() -> Self {
        Self {
            options: builtin::builtin_options(),
        }
    }

    /// Builtin options plus the `option()` declarations of an option file.
    #[tracing::instrument(skip_all, fields(path = %source.path.display()))]
    pub fn from_source(source: &SourceFile) -> Self {
        let ast = parse_source(source);
        let mut registry = Self::with_builtin_options();
        let declared = extract_options(&ast);
        tracing::debug!(count = declared.len(), "extracted project options");
        registry.extend(declared);
        registry
    }

    pub fn insert(&mut self, option: MesonOption) {
        self.options.push(option);
    }

    pub fn extend(&mut self, options: impl IntoIterator<Item = MesonOption>) {
        self.options.extend(options);
    }

    /// Later declarations shadow earlier ones.
    pub fn find_option(&self, name: &str) -> Option<&MesonOption> {
        self.options.iter().rev().find(|option| option.name == name)
    }

    pub fn options(&self) -> impl Iterator<Item = &MesonOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
