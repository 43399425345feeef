//! Platform content adaptation for short-form social media.
//!
//! This crate fits generated text to the constraints of a target platform:
//! it truncates to the character budget, caps hashtags, derives metadata and
//! reports platform-fit warnings.
//!
//! # Architecture
//!
//! - [`PlatformId`] is the closed set of supported platforms, each with a
//!   [`PlatformConventions`] capability record.
//! - [`PlatformConfig`] holds the numeric limits and rendering capabilities.
//! - [`PlatformRegistry`] is the immutable table of configs, built once and
//!   passed explicitly.
//! - [`PlatformAdapter`] borrows one config and performs
//!   [`format_content`](PlatformAdapter::format_content) and
//!   [`validate_content`](PlatformAdapter::validate_content).
//!
//! # Example
//!
//! ```
//! use repurpose_platform::PlatformRegistry;
//!
//! let registry = PlatformRegistry::builtin();
//! let adapter = registry.adapter("douyin").unwrap();
//! let formatted = adapter.format_content(&"很".repeat(70), &["好物推荐"]);
//! assert!(formatted.content().ends_with("..."));
//! assert!(formatted.content().chars().count() <= 55);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod adapter;
mod config;
mod metadata;
mod platform;
mod registry;
pub mod text;
mod validation;

pub use adapter::{ContentFormat, PlatformAdapter};
pub use config::{PlatformConfig, PlatformConfigBuilder, PlatformConfigBuilderError, PlatformOverride};
pub use metadata::ContentMetadata;
pub use platform::{DEFAULT_MAX_HASHTAGS, PlatformConventions, PlatformId};
pub use registry::{PlatformRegistry, get_all_platforms, get_platform_adapter};
pub use repurpose_error::{PlatformError, PlatformErrorKind, PlatformResult};
pub use validation::{ContentIssue, ContentIssueKind, ValidationReport};
