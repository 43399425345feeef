//! Error types for the repurpose toolkit.
//!
//! Every error records the source location where it was created. Crate-level
//! operations return [`RepurposeResult`], which wraps whichever family of
//! error occurred.

mod config;
mod json;
mod platform;
mod template;

pub use config::ConfigError;
pub use json::JsonError;
pub use platform::{PlatformError, PlatformErrorKind, PlatformResult};
pub use template::{TemplateError, TemplateErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum RepurposeErrorKind {
    /// Platform lookup or registry error
    #[display("{}", _0)]
    Platform(PlatformError),
    /// Settings error
    #[display("{}", _0)]
    Config(ConfigError),
    /// JSON parsing error
    #[display("{}", _0)]
    Json(JsonError),
    /// Content template error
    #[display("{}", _0)]
    Template(TemplateError),
}

/// Repurpose error with kind discrimination.
#[derive(Debug, derive_more::Display)]
#[display("Repurpose Error: {}", _0)]
pub struct RepurposeError(Box<RepurposeErrorKind>);

impl RepurposeError {
    /// Create a new error from a kind.
    pub fn new(kind: RepurposeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RepurposeErrorKind {
        &self.0
    }
}

impl std::error::Error for RepurposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            RepurposeErrorKind::Platform(e) => Some(e),
            RepurposeErrorKind::Config(e) => Some(e),
            RepurposeErrorKind::Json(e) => Some(e),
            RepurposeErrorKind::Template(e) => Some(e),
        }
    }
}

// Generic From implementation for any type that converts to RepurposeErrorKind
impl<T> From<T> for RepurposeError
where
    T: Into<RepurposeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for repurpose operations.
pub type RepurposeResult<T> = std::result::Result<T, RepurposeError>;
