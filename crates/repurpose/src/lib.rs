//! Repurpose: fit generated content to Chinese social media platforms.
//!
//! This crate re-exports the platform adapter, the content helpers and the
//! error types, and adds [`Settings`] plus the command-line interface.
//!
//! # Example
//!
//! ```
//! use repurpose::{Draft, PlatformRegistry, compose_post};
//!
//! let registry = PlatformRegistry::builtin();
//! let adapter = registry.adapter("weibo").unwrap();
//! let draft = Draft::from_response(r#"{"content": "今天天气很好", "hashtags": ["日常"]}"#).unwrap();
//! let formatted = adapter.format_content(draft.content(), draft.hashtags());
//! assert_eq!(compose_post(formatted.content(), formatted.hashtags()), "今天天气很好\n\n#日常");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod settings;

pub use settings::{ENV_PREFIX, Settings};

pub use repurpose_content::{
    ContentTemplate, Draft, TemplateCheck, TemplateLibrary, TemplateVariable, VariableKind,
    compose_post, merge_hashtags, normalize_hashtag, render_hashtags,
};
pub use repurpose_error::{
    ConfigError, JsonError, PlatformError, PlatformErrorKind, PlatformResult, RepurposeError,
    RepurposeErrorKind, RepurposeResult, TemplateError, TemplateErrorKind,
};
pub use repurpose_platform::{
    ContentFormat, ContentIssue, ContentIssueKind, ContentMetadata, PlatformAdapter,
    PlatformConfig, PlatformConventions, PlatformId, PlatformOverride, PlatformRegistry,
    ValidationReport, get_all_platforms, get_platform_adapter, text,
};
