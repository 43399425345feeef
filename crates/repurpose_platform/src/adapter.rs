//! Binding of generic content to one platform's constraints.

use crate::text::{char_len, count_emoji, first_line, truncate};
use crate::{ContentIssueKind, ContentMetadata, PlatformConfig, ValidationReport};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Content fitted to a platform.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ContentFormat {
    /// Text, truncated to the platform limit when needed.
    content: String,

    /// Hashtags without the leading `#`, capped to the platform limit.
    hashtags: Vec<String>,

    /// Facts derived from the content above.
    metadata: ContentMetadata,
}

impl ContentFormat {
    /// Splits the format into content, hashtags and metadata.
    pub fn into_parts(self) -> (String, Vec<String>, ContentMetadata) {
        (self.content, self.hashtags, self.metadata)
    }
}

/// Stateless transformer for one platform.
///
/// # Examples
///
/// ```
/// use repurpose_platform::PlatformRegistry;
///
/// let registry = PlatformRegistry::builtin();
/// let adapter = registry.adapter("weibo").unwrap();
/// let formatted = adapter.format_content("今天天气很好", &["天气"]);
/// assert_eq!(formatted.hashtags(), &vec!["天气".to_string()]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct PlatformAdapter<'a> {
    config: &'a PlatformConfig,
}

impl<'a> PlatformAdapter<'a> {
    /// Configuration this adapter applies.
    pub fn config(&self) -> &'a PlatformConfig {
        self.config
    }

    /// Maximum number of hashtags kept for this platform.
    pub fn max_hashtags(&self) -> usize {
        *self.config.max_hashtags()
    }

    /// Fits content and hashtags to the platform.
    ///
    /// Content longer than the platform limit is truncated with an ellipsis.
    /// Hashtags are dropped entirely when the platform does not use them,
    /// otherwise the first [`max_hashtags`](Self::max_hashtags) are kept.
    #[instrument(skip_all, fields(platform = %self.config.id(), chars = char_len(content), hashtags = hashtags.len()))]
    pub fn format_content<S: AsRef<str>>(&self, content: &str, hashtags: &[S]) -> ContentFormat {
        let content = truncate(content, *self.config.max_chars()).into_owned();
        let hashtags = self.format_hashtags(hashtags);
        let metadata = ContentMetadata::derive(self.config, &content, hashtags.len());

        ContentFormat {
            content,
            hashtags,
            metadata,
        }
    }

    fn format_hashtags<S: AsRef<str>>(&self, hashtags: &[S]) -> Vec<String> {
        if !*self.config.hashtags() {
            if !hashtags.is_empty() {
                debug!(dropped = hashtags.len(), "Platform does not use hashtags");
            }
            return Vec::new();
        }

        let limit = self.max_hashtags();
        if hashtags.len() > limit {
            debug!(dropped = hashtags.len() - limit, limit, "Capped hashtags");
        }
        hashtags
            .iter()
            .take(limit)
            .map(|tag| tag.as_ref().to_string())
            .collect()
    }

    /// Checks content against the platform's constraints and conventions.
    ///
    /// Exceeding the character limit is an error; everything else is a warning.
    #[instrument(skip_all, fields(platform = %self.config.id(), chars = char_len(content), hashtags = hashtags.len()))]
    pub fn validate_content<S: AsRef<str>>(&self, content: &str, hashtags: &[S]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let chars = char_len(content);
        let max_chars = *self.config.max_chars();

        if chars > max_chars {
            report.add_error(ContentIssueKind::ExceedsCharLimit {
                actual: chars,
                limit: max_chars,
            });
        }

        let max_hashtags = self.max_hashtags();
        if hashtags.len() > max_hashtags {
            report.add_warning(ContentIssueKind::TooManyHashtags {
                actual: hashtags.len(),
                limit: max_hashtags,
            });
        }

        let conventions = self.config.conventions();

        if conventions.expects_line_breaks && !content.contains('\n') {
            report.add_warning(ContentIssueKind::MissingParagraphBreaks);
        }

        if let Some(recommended) = conventions.min_emoji {
            let found = count_emoji(content);
            if found < recommended {
                report.add_warning(ContentIssueKind::FewEmoji { found, recommended });
            }
        }

        if let Some(limit) = conventions.hook_limit {
            let actual = char_len(first_line(content));
            if actual > limit {
                report.add_warning(ContentIssueKind::HookTooLong { actual, limit });
            }
        }

        if let Some(minimum) = conventions.min_chars {
            if chars < minimum {
                report.add_warning(ContentIssueKind::ArticleTooShort {
                    actual: chars,
                    minimum,
                });
            }
        }

        debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "Validated content"
        );
        report
    }
}
