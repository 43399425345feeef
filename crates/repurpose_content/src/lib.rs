//! Content helpers around platform adaptation.
//!
//! - [`Draft`] reads the JSON drafts a language model returns.
//! - [`merge_hashtags`], [`render_hashtags`] and [`compose_post`] handle
//!   hashtag lists and the final copy/export text.
//! - [`TemplateLibrary`] holds fill-in templates for each platform.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod draft;
mod hashtag;
mod template;

pub use draft::Draft;
pub use hashtag::{compose_post, merge_hashtags, normalize_hashtag, render_hashtags};
pub use template::{ContentTemplate, TemplateCheck, TemplateLibrary, TemplateVariable, VariableKind};
