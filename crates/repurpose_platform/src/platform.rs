//! Platform identifiers and per-platform writing conventions.

use serde::{Deserialize, Serialize};

/// Hashtag cap applied when a configuration does not name one.
pub const DEFAULT_MAX_HASHTAGS: usize = 5;

/// Target platforms known to the adapter.
///
/// The string form is the stable lowercase id used in settings files and on
/// the command line.
///
/// # Examples
///
/// ```
/// use repurpose_platform::PlatformId;
///
/// let id: PlatformId = "douyin".parse().unwrap();
/// assert_eq!(id, PlatformId::Douyin);
/// assert_eq!(id.to_string(), "douyin");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlatformId {
    /// Weibo microblog posts
    Weibo,
    /// Xiaohongshu lifestyle notes
    Xiaohongshu,
    /// Douyin short-video captions
    Douyin,
    /// WeChat official account articles
    Wechat,
    /// Zhihu answers and articles
    Zhihu,
}

impl PlatformId {
    /// Hashtag cap used by the built-in configuration.
    pub fn default_max_hashtags(self) -> usize {
        match self {
            PlatformId::Weibo => 5,
            PlatformId::Xiaohongshu => 10,
            PlatformId::Douyin => 6,
            PlatformId::Wechat => 0,
            PlatformId::Zhihu => DEFAULT_MAX_HASHTAGS,
        }
    }

    /// Writing conventions that drive metadata extraction and validation.
    pub fn conventions(self) -> PlatformConventions {
        match self {
            PlatformId::Xiaohongshu => PlatformConventions {
                title_limit: Some(50),
                track_emoji: true,
                expects_line_breaks: true,
                min_emoji: Some(2),
                ..PlatformConventions::default()
            },
            PlatformId::Douyin => PlatformConventions {
                hook_limit: Some(30),
                ..PlatformConventions::default()
            },
            PlatformId::Wechat => PlatformConventions {
                article_layout: true,
                min_chars: Some(300),
                ..PlatformConventions::default()
            },
            PlatformId::Weibo | PlatformId::Zhihu => PlatformConventions::default(),
        }
    }
}

/// Capability record describing what a platform's audience expects.
///
/// Limits on first lines are exclusive for extraction (a title must be
/// shorter than `title_limit`) and inclusive for advice (a hook longer than
/// `hook_limit` draws a warning).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlatformConventions {
    /// First lines shorter than this are reported as a title
    pub title_limit: Option<usize>,
    /// First lines shorter than this are reported as a hook
    pub hook_limit: Option<usize>,
    /// Count emoji in metadata
    pub track_emoji: bool,
    /// Report title presence and paragraph count
    pub article_layout: bool,
    /// Warn when content is a single unbroken block
    pub expects_line_breaks: bool,
    /// Warn when fewer emoji than this are used
    pub min_emoji: Option<usize>,
    /// Warn when content is shorter than this many characters
    pub min_chars: Option<usize>,
}
