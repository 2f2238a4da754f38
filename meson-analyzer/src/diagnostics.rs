use crate::ast::SourceSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Error,
    Warning,
}

/// Extra rendering hint for editors, e.g. greying out dead code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticTag {
    Unnecessary,
    Deprecated,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub message: String,
    pub level: DiagnosticLevel,
    pub span: Option<SourceSpan>,
    pub tag: Option<DiagnosticTag>,
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push_error_with_span<S: Into<String>>(&mut self, message: S, span: Option<SourceSpan>) {
        self.entries.push(Diagnostic {
            message: message.into(),
            level: DiagnosticLevel::Error,
            span,
            tag: None,
        });
    }

    pub fn push_warning_with_span<S: Into<String>>(
        &mut self,
        message: S,
        span: Option<SourceSpan>,
    ) {
        self.entries.push(Diagnostic {
            message: message.into(),
            level: DiagnosticLevel::Warning,
            span,
            tag: None,
        });
    }

    pub fn push_tagged_warning<S: Into<String>>(
        &mut self,
        message: S,
        span: Option<SourceSpan>,
        tag: DiagnosticTag,
    ) {
        self.entries.push(Diagnostic {
            message: message.into(),
            level: DiagnosticLevel::Warning,
            span,
            tag: Some(tag),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|diagnostic| diagnostic.level == DiagnosticLevel::Error)
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|diagnostic| diagnostic.message.as_str())
    }
}
