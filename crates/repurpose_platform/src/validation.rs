//! Platform-fit checks producing errors and advisory warnings.

use serde::{Deserialize, Serialize};

/// What a validation issue is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentIssueKind {
    /// Content is longer than the platform allows
    #[display("Content exceeds character limit: {actual} / {limit}")]
    ExceedsCharLimit {
        /// Characters in the content
        actual: usize,
        /// Platform limit
        limit: usize,
    },
    /// More hashtags than the platform cap
    #[display("Too many hashtags: {actual} (recommended at most {limit})")]
    TooManyHashtags {
        /// Hashtags supplied
        actual: usize,
        /// Platform cap
        limit: usize,
    },
    /// Content is one unbroken block
    #[display("Content has no line breaks; split it into paragraphs for readability")]
    MissingParagraphBreaks,
    /// Too few emoji for an expressive platform
    #[display("Only {found} emoji found; use at least {recommended} to draw attention")]
    FewEmoji {
        /// Emoji found
        found: usize,
        /// Recommended minimum
        recommended: usize,
    },
    /// Opening line is too long to work as a hook
    #[display("Opening line is {actual} characters; keep the hook within {limit} to grab attention")]
    HookTooLong {
        /// Characters in the first line
        actual: usize,
        /// Recommended maximum
        limit: usize,
    },
    /// Content is too short to stand as an article
    #[display("Content is too short for an article: {actual} characters (at least {minimum} expected)")]
    ArticleTooShort {
        /// Characters in the content
        actual: usize,
        /// Recommended minimum
        minimum: usize,
    },
}

/// A single validation finding with its rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentIssue {
    /// Type of issue
    pub kind: ContentIssueKind,
    /// Human-readable message
    pub message: String,
}

impl From<ContentIssueKind> for ContentIssue {
    fn from(kind: ContentIssueKind) -> Self {
        Self {
            message: kind.to_string(),
            kind,
        }
    }
}

/// Result of checking content against a platform.
///
/// Only errors affect validity; warnings are guidance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Violations of hard platform constraints
    pub errors: Vec<ContentIssue>,
    /// Platform-fit advice
    pub warnings: Vec<ContentIssue>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no errors were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, kind: ContentIssueKind) {
        self.errors.push(kind.into());
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, kind: ContentIssueKind) {
        self.warnings.push(kind.into());
    }

    /// Error messages in the order they were found.
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Warning messages in the order they were found.
    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|w| w.message.as_str()).collect()
    }

    /// Formats errors and warnings as numbered human-readable lines.
    pub fn format_human(&self) -> String {
        let errors = self
            .errors
            .iter()
            .enumerate()
            .map(|(i, e)| format!("Error {}: {}", i + 1, e.message));
        let warnings = self
            .warnings
            .iter()
            .enumerate()
            .map(|(i, w)| format!("Warning {}: {}", i + 1, w.message));
        errors.chain(warnings).collect::<Vec<_>>().join("\n")
    }
}
