//! Content template error types.

/// Kinds of template errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TemplateErrorKind {
    /// No template with the requested id
    #[display("Template not found: {}", _0)]
    NotFound(String),
    /// A template library could not be parsed
    #[display("Template library parse error: {}", _0)]
    Parse(String),
    /// Required variables were not supplied
    #[display("Missing required variables: {}", _0)]
    MissingVariables(String),
}

/// Template error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The kind of error that occurred
    pub kind: TemplateErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new template error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TemplateErrorKind {
        &self.kind
    }
}
