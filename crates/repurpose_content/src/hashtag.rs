//! Hashtag normalisation and post composition.

/// Strips surrounding whitespace and leading `#` marks.
///
/// Returns `None` when nothing remains.
///
/// # Examples
///
/// ```
/// use repurpose_content::normalize_hashtag;
///
/// assert_eq!(normalize_hashtag("  #好物推荐 "), Some("好物推荐".to_string()));
/// assert_eq!(normalize_hashtag("#"), None);
/// ```
pub fn normalize_hashtag(raw: &str) -> Option<String> {
    let tag = raw.trim().trim_start_matches('#').trim();
    (!tag.is_empty()).then(|| tag.to_string())
}

/// Appends normalised `additions` to `existing`, skipping blanks and duplicates.
///
/// Order of first appearance is preserved.
pub fn merge_hashtags<I, S>(existing: &[String], additions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged: Vec<String> = Vec::with_capacity(existing.len());
    let candidates = existing
        .iter()
        .map(|tag| normalize_hashtag(tag))
        .chain(additions.into_iter().map(|tag| normalize_hashtag(tag.as_ref())));

    for tag in candidates.flatten() {
        if !merged.contains(&tag) {
            merged.push(tag);
        }
    }
    merged
}

/// Renders hashtags as `#a #b`.
pub fn render_hashtags<S: AsRef<str>>(hashtags: &[S]) -> String {
    hashtags
        .iter()
        .map(|tag| format!("#{}", tag.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text for copying or exporting a post: the content, then a blank line and
/// the rendered hashtags when there are any.
pub fn compose_post<S: AsRef<str>>(content: &str, hashtags: &[S]) -> String {
    if hashtags.is_empty() {
        content.to_string()
    } else {
        format!("{}\n\n{}", content, render_hashtags(hashtags))
    }
}
