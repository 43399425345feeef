//! Facts derived from formatted content.

use crate::text::{char_len, count_emoji, first_line, paragraph_count, word_count};
use crate::{PlatformConfig, PlatformId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Derived facts about one formatted post.
///
/// Base counts are always present; the optional facts depend on the
/// platform's conventions and are omitted from serialized output when absent.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadata {
    /// Platform the content was formatted for.
    platform: PlatformId,

    /// Characters in the content.
    char_count: usize,

    /// Whitespace-delimited words in the content.
    word_count: usize,

    /// Hashtags kept.
    hashtag_count: usize,

    /// Short first line usable as a note title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    /// Emoji occurrences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    emoji_count: Option<usize>,

    /// Short first line usable as a video hook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hook: Option<String>,

    /// Content has a line break separating a title from the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    has_title: Option<bool>,

    /// Blocks separated by blank lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    paragraph_count: Option<usize>,
}

impl ContentMetadata {
    pub(crate) fn derive(config: &PlatformConfig, content: &str, hashtag_count: usize) -> Self {
        let conventions = config.conventions();

        Self {
            platform: *config.id(),
            char_count: char_len(content),
            word_count: word_count(content),
            hashtag_count,
            title: conventions
                .title_limit
                .and_then(|limit| leading_line(content, limit)),
            emoji_count: conventions.track_emoji.then(|| count_emoji(content)),
            hook: conventions
                .hook_limit
                .and_then(|limit| leading_line(content, limit)),
            has_title: conventions.article_layout.then(|| content.contains('\n')),
            paragraph_count: conventions
                .article_layout
                .then(|| paragraph_count(content)),
        }
    }
}

/// Trimmed first line when it is non-empty and shorter than `limit`.
fn leading_line(content: &str, limit: usize) -> Option<String> {
    let line = first_line(content).trim();
    let len = char_len(line);
    (len > 0 && len < limit).then(|| line.to_string())
}
