//! Character-level text helpers shared by formatting and validation.
//!
//! All lengths are counted in Unicode scalar values so that a Chinese
//! character and an ASCII letter each cost one unit of a platform budget.

use std::borrow::Cow;

/// Suffix appended to truncated content.
pub const ELLIPSIS: &str = "...";

/// Characters after which content may be cut cleanly.
const BREAK_MARKERS: [char; 8] = ['。', '！', '？', '.', '!', '?', '\n', ' '];

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Number of whitespace-delimited words; zero for blank text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Text before the first newline, or all of it when there is none.
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

/// Number of blocks separated by a blank line.
///
/// Text without any blank line counts as one paragraph, including empty text.
pub fn paragraph_count(text: &str) -> usize {
    text.split("\n\n").count()
}

/// Number of characters in the common emoji blocks.
pub fn count_emoji(text: &str) -> usize {
    text.chars().filter(|c| is_emoji(*c)).count()
}

fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F600..=0x1F64F // emoticons
            | 0x1F300..=0x1F5FF // symbols & pictographs
            | 0x1F680..=0x1F6FF // transport & map
            | 0x1F1E0..=0x1F1FF // regional indicators
            | 0x2600..=0x26FF // miscellaneous symbols
            | 0x2700..=0x27BF // dingbats
    )
}

/// Leading `count` characters of `text`.
fn prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Shortens `content` to at most `max_len` characters.
///
/// Content that already fits is returned unchanged. Otherwise the text is cut
/// to leave room for [`ELLIPSIS`], preferring the last sentence, line or word
/// boundary when it falls within the final fifth of the kept text. Budgets
/// too small to hold the ellipsis get a bare prefix.
///
/// # Examples
///
/// ```
/// use repurpose_platform::text::truncate;
///
/// assert_eq!(truncate("short", 10), "short");
/// assert_eq!(truncate("abcdefghij", 8), "abcde...");
/// ```
pub fn truncate(content: &str, max_len: usize) -> Cow<'_, str> {
    if char_len(content) <= max_len {
        return Cow::Borrowed(content);
    }

    let ellipsis_len = char_len(ELLIPSIS);
    if max_len < ellipsis_len {
        return Cow::Borrowed(prefix(content, max_len));
    }

    let cut = max_len - ellipsis_len;
    let head = prefix(content, cut);

    let kept = match head.char_indices().rev().find(|(_, c)| BREAK_MARKERS.contains(c)) {
        // Marker position in characters must sit in the last 20% of the cut.
        Some((byte_index, marker)) if char_len(&head[..byte_index]) * 5 >= cut * 4 => {
            &head[..byte_index + marker.len_utf8()]
        }
        _ => head,
    };

    tracing::debug!(
        max_len,
        cut,
        kept_chars = char_len(kept),
        "Truncated content"
    );

    Cow::Owned(format!("{}{}", kept, ELLIPSIS))
}
