//! Platform configuration records.

use crate::{DEFAULT_MAX_HASHTAGS, PlatformConventions, PlatformId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Constraints and rendering capabilities of one platform.
///
/// Configurations are immutable once placed in a
/// [`PlatformRegistry`](crate::PlatformRegistry); use
/// [`PlatformOverride`] to derive adjusted copies.
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    /// Stable platform id.
    id: PlatformId,

    /// Display name.
    #[builder(setter(into))]
    name: String,

    /// Display icon.
    #[builder(setter(into), default)]
    #[serde(default)]
    icon: String,

    /// Hard upper bound on content length, in characters.
    max_chars: usize,

    /// Platform has a topic concept distinct from hashtags.
    #[builder(default)]
    #[serde(default)]
    has_tags: bool,

    /// Hashtag suffixes are meaningful on this platform.
    #[builder(default)]
    #[serde(default)]
    hashtags: bool,

    /// Maximum number of hashtags the adapter keeps.
    #[builder(default = "DEFAULT_MAX_HASHTAGS")]
    #[serde(default = "default_max_hashtags")]
    max_hashtags: usize,

    /// Emoji render natively.
    #[builder(default)]
    #[serde(default)]
    supports_emoji: bool,

    /// Markdown renders natively.
    #[builder(default)]
    #[serde(default)]
    supports_markdown: bool,

    /// Posts may carry images.
    #[builder(default)]
    #[serde(default)]
    image_support: bool,

    /// Posts may carry video.
    #[builder(default)]
    #[serde(default)]
    video_support: bool,

    /// Free-text style guidance for writers.
    #[builder(setter(into, strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    special_formatting: Option<String>,
}

fn default_max_hashtags() -> usize {
    DEFAULT_MAX_HASHTAGS
}

impl PlatformConfig {
    /// Returns a builder for a custom configuration.
    pub fn builder() -> PlatformConfigBuilder {
        PlatformConfigBuilder::default()
    }

    /// Built-in configuration for a platform.
    pub fn builtin(id: PlatformId) -> Self {
        let base = Self {
            id,
            name: String::new(),
            icon: String::new(),
            max_chars: 0,
            has_tags: true,
            hashtags: true,
            max_hashtags: id.default_max_hashtags(),
            supports_emoji: true,
            supports_markdown: false,
            image_support: true,
            video_support: true,
            special_formatting: None,
        };

        match id {
            PlatformId::Weibo => Self {
                name: "微博".into(),
                icon: "📱".into(),
                max_chars: 140,
                special_formatting: Some("简洁、快速、话题标签".into()),
                ..base
            },
            PlatformId::Xiaohongshu => Self {
                name: "小红书".into(),
                icon: "📕".into(),
                max_chars: 1000,
                special_formatting: Some("使用emoji、分段、吸引眼球的标题".into()),
                ..base
            },
            PlatformId::Douyin => Self {
                name: "抖音".into(),
                icon: "🎵".into(),
                max_chars: 55,
                image_support: false,
                special_formatting: Some("简洁有力、开头抓住注意力、使用热门音乐提示".into()),
                ..base
            },
            PlatformId::Wechat => Self {
                name: "微信公众号".into(),
                icon: "💬".into(),
                max_chars: 50000,
                has_tags: false,
                hashtags: false,
                supports_markdown: true,
                special_formatting: Some("文章格式、有标题、分段、可使用markdown".into()),
                ..base
            },
            PlatformId::Zhihu => Self {
                name: "知乎".into(),
                icon: "🧠".into(),
                max_chars: 10000,
                hashtags: false,
                supports_emoji: false,
                supports_markdown: true,
                special_formatting: Some("专业、有深度、可使用markdown、结构清晰".into()),
                ..base
            },
        }
    }

    /// Writing conventions for this platform.
    pub fn conventions(&self) -> PlatformConventions {
        self.id.conventions()
    }
}

/// Partial adjustment of a platform configuration, read from settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlatformOverride {
    /// Replacement display name
    #[serde(default)]
    name: Option<String>,
    /// Replacement icon
    #[serde(default)]
    icon: Option<String>,
    /// Replacement character limit
    #[serde(default)]
    max_chars: Option<usize>,
    /// Replacement hashtag cap
    #[serde(default)]
    max_hashtags: Option<usize>,
    /// Enable or disable hashtags
    #[serde(default)]
    hashtags: Option<bool>,
    /// Replacement style guidance
    #[serde(default)]
    special_formatting: Option<String>,
}

impl PlatformOverride {
    /// Sets the character limit.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    /// Sets the hashtag cap.
    pub fn with_max_hashtags(mut self, max_hashtags: usize) -> Self {
        self.max_hashtags = Some(max_hashtags);
        self
    }

    /// Enables or disables hashtags.
    pub fn with_hashtags(mut self, enabled: bool) -> Self {
        self.hashtags = Some(enabled);
        self
    }

    /// Returns a copy of `config` with every present field replaced.
    pub fn apply(&self, config: &PlatformConfig) -> PlatformConfig {
        let mut adjusted = config.clone();
        if let Some(name) = &self.name {
            adjusted.name = name.clone();
        }
        if let Some(icon) = &self.icon {
            adjusted.icon = icon.clone();
        }
        if let Some(max_chars) = self.max_chars {
            adjusted.max_chars = max_chars;
        }
        if let Some(max_hashtags) = self.max_hashtags {
            adjusted.max_hashtags = max_hashtags;
        }
        if let Some(hashtags) = self.hashtags {
            adjusted.hashtags = hashtags;
        }
        if let Some(special) = &self.special_formatting {
            adjusted.special_formatting = Some(special.clone());
        }
        adjusted
    }
}
