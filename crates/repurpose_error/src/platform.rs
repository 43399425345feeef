//! Platform registry error types.

/// Kinds of platform errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PlatformErrorKind {
    /// No platform is registered under the requested id
    #[display("Platform not found: {}", _0)]
    NotFound(String),
    /// A platform table was rejected while being built
    #[display("Invalid platform configuration: {}", _0)]
    InvalidConfig(String),
}

/// Platform error with location tracking.
///
/// # Examples
///
/// ```
/// use repurpose_error::{PlatformError, PlatformErrorKind};
///
/// let err = PlatformError::new(PlatformErrorKind::NotFound("myspace".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Platform Error: {} at line {} in {}", kind, line, file)]
pub struct PlatformError {
    /// The kind of error that occurred
    pub kind: PlatformErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PlatformError {
    /// Create a new platform error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PlatformErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PlatformErrorKind {
        &self.kind
    }
}

/// Result type for platform operations.
pub type PlatformResult<T> = std::result::Result<T, PlatformError>;
