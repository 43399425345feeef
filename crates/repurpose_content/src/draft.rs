//! Drafts returned by a language model.

use crate::merge_hashtags;
use derive_getters::Getters;
use regex::Regex;
use repurpose_error::JsonError;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, instrument, warn};

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("fenced block pattern is valid")
});

/// Generated content and its suggested hashtags.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new,
)]
pub struct Draft {
    /// Post text.
    content: String,

    /// Suggested hashtags without the leading `#`.
    #[serde(default)]
    hashtags: Vec<String>,
}

impl Draft {
    /// Parses a model response of the form `{"content": ..., "hashtags": [...]}`.
    ///
    /// The JSON may be wrapped in a Markdown code fence. Hashtags are
    /// normalised and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError`] if the (unfenced) body is not a valid draft.
    ///
    /// # Examples
    ///
    /// ```
    /// use repurpose_content::Draft;
    ///
    /// let response = "Here you go:\n```json\n{\"content\": \"你好\", \"hashtags\": [\"#问候\"]}\n```";
    /// let draft = Draft::from_response(response).unwrap();
    /// assert_eq!(draft.content(), "你好");
    /// assert_eq!(draft.hashtags(), &vec!["问候".to_string()]);
    /// ```
    #[instrument(skip_all, fields(response_len = text.len()))]
    pub fn from_response(text: &str) -> Result<Self, JsonError> {
        let body = match FENCED_BLOCK.captures(text).and_then(|caps| caps.get(1)) {
            Some(inner) => {
                debug!("Extracted fenced response body");
                inner.as_str()
            }
            None => text.trim(),
        };

        let draft: Draft = serde_json::from_str(body)
            .map_err(|e| JsonError::new(format!("Failed to parse draft: {}", e)))?;

        Ok(Self {
            hashtags: merge_hashtags(&[], &draft.hashtags),
            content: draft.content,
        })
    }

    /// Parses a model response, returning `fallback` when it is not a valid draft.
    pub fn from_response_or(text: &str, fallback: Draft) -> Self {
        match Self::from_response(text) {
            Ok(draft) => draft,
            Err(e) => {
                warn!(error = %e, "Model response was not a draft; keeping previous content");
                fallback
            }
        }
    }

    /// Splits the draft into content and hashtags.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.content, self.hashtags)
    }
}
